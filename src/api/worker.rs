// src/api/worker.rs
//! Background execution of backend calls.
//!
//! The UI thread owns every piece of state; network work runs on one
//! spawned thread per request and comes back as an [`ApiEvent`] over an
//! mpsc channel, drained once per event-loop tick. Events carry the tag
//! their request was issued with so the state machines can discard stale
//! responses (latest request wins).

use std::sync::Arc;
use std::sync::mpsc::Sender;
use std::thread;

use super::client::{ApiError, BackendClient};
use super::types::{AnalysisOptions, AnalysisReport, BrowsePayload, Drive};

/// Monotone per-operation-kind sequence number. A response is applied only
/// when its tag equals the latest issued tag of its kind.
pub type RequestTag = u64;

/// A backend call the state machines want issued. Produced by `App`,
/// consumed by [`ApiWorker::submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendRequest {
    Browse {
        tag: RequestTag,
        path: String,
        /// Probes come from manual path entry: their failure is silent and
        /// their success triggers a fresh navigation instead of writing
        /// listing state.
        probe: bool,
    },
    Drives {
        tag: RequestTag,
    },
    Analyze {
        tag: RequestTag,
        directory: String,
        options: AnalysisOptions,
    },
}

/// A completed backend call, delivered to the UI thread.
#[derive(Debug)]
pub enum ApiEvent {
    Browse {
        tag: RequestTag,
        probe: bool,
        /// Path the request asked for, echoed back for probe handling.
        path: String,
        result: Result<BrowsePayload, ApiError>,
    },
    Drives {
        tag: RequestTag,
        result: Result<Vec<Drive>, ApiError>,
    },
    Analysis {
        tag: RequestTag,
        result: Result<AnalysisReport, ApiError>,
    },
}

pub struct ApiWorker {
    client: Arc<BackendClient>,
    tx: Sender<ApiEvent>,
}

impl ApiWorker {
    pub fn new(client: BackendClient, tx: Sender<ApiEvent>) -> Self {
        Self {
            client: Arc::new(client),
            tx,
        }
    }

    /// Run `request` on its own thread; the result arrives on the channel.
    /// Send failures mean the UI is gone, so they are ignored.
    pub fn submit(&self, request: BackendRequest) {
        let client = self.client.clone();
        let tx = self.tx.clone();

        thread::spawn(move || match request {
            BackendRequest::Browse { tag, path, probe } => {
                let result = client.browse(&path);
                let _ = tx.send(ApiEvent::Browse {
                    tag,
                    probe,
                    path,
                    result,
                });
            }
            BackendRequest::Drives { tag } => {
                let result = client.drives();
                let _ = tx.send(ApiEvent::Drives { tag, result });
            }
            BackendRequest::Analyze {
                tag,
                directory,
                options,
            } => {
                let result = client.analyze(&directory, options);
                let _ = tx.send(ApiEvent::Analysis { tag, result });
            }
        });
    }
}

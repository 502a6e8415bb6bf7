// src/app/browser.rs
//! Directory browser state machine.
//!
//! Drives one "list this path" operation at a time:
//! Idle → Loading → (Loaded | Error). Every navigation is stamped with a
//! monotone tag; a browse response is applied only when its tag is still
//! the latest, so a slow response can never overwrite a newer listing.
//! Probes (manual path entry) share the transport but not the state: they
//! are tagged separately, never touch the panel, and on success ask the
//! caller to run a fresh navigation.

use crate::api::{ApiError, BackendRequest, BrowsePayload, EntryInfo, RequestTag};
use crate::fs::{self, Crumb, FileCategory};

/// One row of the current listing. Rebuilt from scratch on every
/// successful browse; never reused across listings.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub path: String,
    pub name: String,
    pub is_dir: bool,
    /// Synthetic ".." row: navigable but never selectable.
    pub is_parent: bool,
    /// Icon category; `None` for directories and the parent marker.
    pub category: Option<FileCategory>,
}

impl Entry {
    fn from_info(info: EntryInfo) -> Self {
        let category = if info.is_dir {
            None
        } else {
            Some(fs::category_for(&info.name))
        };
        Self {
            path: info.path,
            name: info.name,
            is_dir: info.is_dir,
            is_parent: info.is_parent,
            category,
        }
    }
}

/// The loaded listing the browser panel renders.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectoryListing {
    pub current_path: String,
    /// Non-empty path segments; joined with `/` they reconstruct
    /// `current_path` modulo separator normalization.
    pub segments: Vec<String>,
    /// Display order, parent marker first when present.
    pub entries: Vec<Entry>,
}

impl DirectoryListing {
    pub fn from_payload(payload: BrowsePayload) -> Self {
        let segments = payload
            .path_parts
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect();
        let entries = payload.items.into_iter().map(Entry::from_info).collect();
        Self {
            current_path: payload.current_path,
            segments,
            entries,
        }
    }

    /// The synthetic ".." row, when the listing is not at the root.
    pub fn parent_entry(&self) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.is_parent)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum BrowserState {
    /// Nothing loaded yet.
    #[default]
    Idle,
    Loading { path: String },
    Loaded(DirectoryListing),
    Error(String),
}

/// What applying a browse response meant for the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum BrowseOutcome {
    /// Stale tag or silent probe failure: nothing changed.
    Ignored,
    /// The panel state advanced (new listing or inline error).
    Applied,
    /// A probe succeeded; the caller should navigate to this path.
    ProbeNavigate(String),
}

#[derive(Debug, Default)]
pub struct Browser {
    state: BrowserState,
    /// Breadcrumb trail of the last successful load. Kept outside `state`
    /// so a failed navigation leaves the old trail on screen while the
    /// panel shows the error.
    trail: Vec<Crumb>,
    nav_tag: RequestTag,
    probe_tag: RequestTag,
}

impl Browser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &BrowserState {
        &self.state
    }

    pub fn listing(&self) -> Option<&DirectoryListing> {
        match &self.state {
            BrowserState::Loaded(listing) => Some(listing),
            _ => None,
        }
    }

    pub fn trail(&self) -> &[Crumb] {
        &self.trail
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, BrowserState::Loading { .. })
    }

    /// Start a navigation: the panel switches to its spinner immediately
    /// and the returned request must be submitted by the caller.
    pub fn navigate(&mut self, path: &str) -> BackendRequest {
        self.nav_tag += 1;
        self.state = BrowserState::Loading {
            path: path.to_string(),
        };
        log::debug!("navigate #{} -> {path}", self.nav_tag);
        BackendRequest::Browse {
            tag: self.nav_tag,
            path: path.to_string(),
            probe: false,
        }
    }

    /// Start a manual-path probe. The panel is untouched; the response
    /// decides whether a navigation follows.
    pub fn probe(&mut self, path: &str) -> BackendRequest {
        self.probe_tag += 1;
        log::debug!("probe #{} -> {path}", self.probe_tag);
        BackendRequest::Browse {
            tag: self.probe_tag,
            path: path.to_string(),
            probe: true,
        }
    }

    /// Apply a completed browse in arrival order. Stale tags are dropped.
    pub fn apply(
        &mut self,
        tag: RequestTag,
        probe: bool,
        path: &str,
        result: Result<BrowsePayload, ApiError>,
    ) -> BrowseOutcome {
        if probe {
            return self.apply_probe(tag, path, result);
        }

        if tag != self.nav_tag {
            log::debug!("dropping stale browse #{tag} (latest #{})", self.nav_tag);
            return BrowseOutcome::Ignored;
        }

        match result {
            Ok(payload) => {
                let listing = DirectoryListing::from_payload(payload);
                self.trail = fs::trail(&listing.current_path, &listing.segments);
                self.state = BrowserState::Loaded(listing);
            }
            Err(err) => {
                // Trail and any previously shown crumbs stay as they were;
                // only the listing panel shows the failure.
                self.state = BrowserState::Error(err.to_string());
            }
        }
        BrowseOutcome::Applied
    }

    fn apply_probe(
        &mut self,
        tag: RequestTag,
        path: &str,
        result: Result<BrowsePayload, ApiError>,
    ) -> BrowseOutcome {
        if tag != self.probe_tag {
            return BrowseOutcome::Ignored;
        }
        match result {
            Ok(_) => BrowseOutcome::ProbeNavigate(path.to_string()),
            Err(err) => {
                // A path that does not browse as a directory is still a
                // legitimate analysis target.
                log::debug!("probe of {path} failed, keeping it selectable: {err}");
                BrowseOutcome::Ignored
            }
        }
    }
}

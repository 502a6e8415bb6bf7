// src/app/drives.rs
//! Drives popup: lazy fetch, cached list, cursor.
//!
//! The drive list is fetched the first time the popup opens and then cached
//! for the rest of the session. A fetch that errored does not count as
//! fetched, so reopening the popup retries it.

use crate::api::{ApiError, BackendRequest, Drive, RequestTag};

#[derive(Debug, Clone, Default, PartialEq)]
pub enum DrivesState {
    #[default]
    NotLoaded,
    Loading,
    Loaded(Vec<Drive>),
    Error(String),
}

#[derive(Debug, Default)]
pub struct DrivesPanel {
    visible: bool,
    state: DrivesState,
    cursor: usize,
    tag: RequestTag,
}

impl DrivesPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn state(&self) -> &DrivesState {
        &self.state
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn drives(&self) -> &[Drive] {
        match &self.state {
            DrivesState::Loaded(drives) => drives,
            _ => &[],
        }
    }

    /// Flip popup visibility. Opening it kicks off a fetch when no usable
    /// list exists yet; the caller submits the returned request.
    pub fn toggle(&mut self) -> Option<BackendRequest> {
        self.visible = !self.visible;
        if !self.visible {
            return None;
        }
        match self.state {
            DrivesState::NotLoaded | DrivesState::Error(_) => {
                self.tag += 1;
                self.state = DrivesState::Loading;
                Some(BackendRequest::Drives { tag: self.tag })
            }
            DrivesState::Loading | DrivesState::Loaded(_) => None,
        }
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Apply a completed fetch; stale tags are dropped.
    pub fn apply(&mut self, tag: RequestTag, result: Result<Vec<Drive>, ApiError>) {
        if tag != self.tag {
            return;
        }
        match result {
            Ok(drives) => {
                self.cursor = 0;
                self.state = DrivesState::Loaded(drives);
            }
            Err(err) => self.state = DrivesState::Error(err.to_string()),
        }
    }

    pub fn move_cursor(&mut self, delta: isize) {
        let len = self.drives().len();
        if len == 0 {
            return;
        }
        let last = len - 1;
        self.cursor = if delta < 0 {
            self.cursor.saturating_sub(delta.unsigned_abs())
        } else {
            (self.cursor + delta as usize).min(last)
        };
    }

    pub fn set_cursor(&mut self, index: usize) {
        if index < self.drives().len() {
            self.cursor = index;
        }
    }

    /// Drive under the cursor, if the list is loaded and non-empty.
    pub fn selected(&self) -> Option<&Drive> {
        self.drives().get(self.cursor)
    }
}

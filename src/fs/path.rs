// src/fs/path.rs
//! Canonical-path helpers for the remote filesystem.
//!
//! Paths here are the backend's canonical strings, always separated by `/`
//! regardless of what the service runs on. They are never resolved locally.

/// Separator used in every canonical path the backend returns.
pub const SEPARATOR: char = '/';

/// The browsing root.
pub const ROOT: &str = "/";

/// Split a canonical path into its ordered, non-empty segments.
///
/// Leading, trailing, and duplicate separators are ignored, so joining the
/// result with `/` reconstructs the path modulo separator normalization.
pub fn segments(path: &str) -> Vec<String> {
    path.split(SEPARATOR)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

/// Cumulative sub-path from the root through segment `index`.
///
/// For `["home", "user"]` and index 0 this is `/home`; for index 1,
/// `/home/user`. Indexes past the end clamp to the full path.
pub fn subpath(segments: &[String], index: usize) -> String {
    let end = (index + 1).min(segments.len());
    let mut path = String::new();
    for segment in &segments[..end] {
        path.push(SEPARATOR);
        path.push_str(segment);
    }
    if path.is_empty() {
        ROOT.to_string()
    } else {
        path
    }
}

/// Display name for a path: its final segment, or the path itself when it
/// has none (e.g. `/`). Used when a selection comes from typed text rather
/// than a listing entry.
pub fn display_name(path: &str) -> String {
    path.split(SEPARATOR)
        .filter(|part| !part.is_empty())
        .next_back()
        .unwrap_or(path)
        .to_string()
}

/// One element of the breadcrumb trail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crumb {
    /// Text shown for this element.
    pub label: String,
    /// Navigation target; `None` marks the inert final element.
    pub target: Option<String>,
}

/// Build the breadcrumb trail for a loaded listing.
///
/// An empty canonical path is the root state: the trail is empty and the
/// caller must hide the row entirely rather than render a bare root link.
/// Otherwise the trail is a fixed Root link, one link per non-final segment
/// pointing at its cumulative sub-path, and an inert element for the final
/// segment.
pub fn trail(current_path: &str, segments: &[String]) -> Vec<Crumb> {
    if current_path.is_empty() {
        return Vec::new();
    }

    let mut crumbs = vec![Crumb {
        label: "Root".to_string(),
        target: Some(ROOT.to_string()),
    }];

    for (index, segment) in segments.iter().enumerate() {
        let target = if index + 1 == segments.len() {
            None
        } else {
            Some(subpath(segments, index))
        };
        crumbs.push(Crumb {
            label: segment.clone(),
            target,
        });
    }

    crumbs
}

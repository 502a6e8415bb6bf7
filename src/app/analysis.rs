// src/app/analysis.rs
//! Analysis orchestrator: runs token counts against the selected directory.
//!
//! One logical run at a time from the UI's point of view. Starting a new
//! run while one is in flight simply supersedes it; the old response is
//! dropped by tag when it eventually lands.

use crate::api::{AnalysisOptions, AnalysisReport, ApiError, BackendRequest, RequestTag};

#[derive(Debug, Clone, Default, PartialEq)]
pub enum AnalysisState {
    /// Welcome screen; no run yet.
    #[default]
    Idle,
    Running {
        path: String,
    },
    Success(AnalysisReport),
    Error(String),
}

#[derive(Debug, Default)]
pub struct Analysis {
    state: AnalysisState,
    options: AnalysisOptions,
    tag: RequestTag,
}

impl Analysis {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &AnalysisState {
        &self.state
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, AnalysisState::Running { .. })
    }

    pub fn options(&self) -> AnalysisOptions {
        self.options
    }

    pub fn toggle_exclude_tests(&mut self) {
        self.options.exclude_tests = !self.options.exclude_tests;
    }

    pub fn toggle_exclude_docs(&mut self) {
        self.options.exclude_docs = !self.options.exclude_docs;
    }

    pub fn toggle_exclude_dependencies(&mut self) {
        self.options.exclude_dependencies = !self.options.exclude_dependencies;
    }

    /// Begin a run for `directory` with the current option set. The results
    /// panel flips to its progress view immediately.
    pub fn start(&mut self, directory: &str) -> BackendRequest {
        self.tag += 1;
        self.state = AnalysisState::Running {
            path: directory.to_string(),
        };
        log::info!("analysis #{} of {directory} ({:?})", self.tag, self.options);
        BackendRequest::Analyze {
            tag: self.tag,
            directory: directory.to_string(),
            options: self.options,
        }
    }

    /// Apply a completed run; stale tags are dropped.
    pub fn apply(&mut self, tag: RequestTag, result: Result<AnalysisReport, ApiError>) {
        if tag != self.tag {
            log::debug!("dropping stale analysis #{tag} (latest #{})", self.tag);
            return;
        }
        self.state = match result {
            Ok(report) => AnalysisState::Success(report),
            Err(err) => AnalysisState::Error(err.to_string()),
        };
    }
}

/// Split a model-fit percentage into a bar ratio and its label.
///
/// The bar is capped at full scale for projects bigger than the context
/// window, while the label keeps the real number.
pub fn gauge_parts(percentage: f64) -> (f64, String) {
    let ratio = (percentage / 100.0).clamp(0.0, 1.0);
    (ratio, format!("{percentage}%"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::AnalysisReport;
    use std::collections::HashMap;

    fn report(total: &str) -> AnalysisReport {
        AnalysisReport {
            total_tokens_formatted: total.to_string(),
            extensions: Vec::new(),
            technologies: Vec::new(),
            models: HashMap::new(),
        }
    }

    #[test]
    fn start_moves_to_running_and_carries_options() {
        let mut analysis = Analysis::new();
        analysis.toggle_exclude_tests();
        analysis.toggle_exclude_dependencies();

        let request = analysis.start("/proj");
        assert!(analysis.is_running());
        let BackendRequest::Analyze { tag, directory, options } = request else {
            unreachable!()
        };
        assert_eq!(tag, 1);
        assert_eq!(directory, "/proj");
        assert!(options.exclude_tests);
        assert!(!options.exclude_docs);
        assert!(options.exclude_dependencies);
    }

    #[test]
    fn superseded_run_is_ignored_when_it_finishes_late() {
        let mut analysis = Analysis::new();
        let BackendRequest::Analyze { tag: first, .. } = analysis.start("/a") else {
            unreachable!()
        };
        let BackendRequest::Analyze { tag: second, .. } = analysis.start("/b") else {
            unreachable!()
        };

        analysis.apply(second, Ok(report("1,234")));
        analysis.apply(first, Ok(report("9,999")));

        let AnalysisState::Success(report) = analysis.state() else {
            panic!("expected success, got {:?}", analysis.state());
        };
        assert_eq!(report.total_tokens_formatted, "1,234");
    }

    #[test]
    fn failure_lands_in_the_error_view() {
        let mut analysis = Analysis::new();
        let BackendRequest::Analyze { tag, .. } = analysis.start("/a") else {
            unreachable!()
        };
        analysis.apply(tag, Err(ApiError::Backend("No text files found".into())));
        assert_eq!(
            analysis.state(),
            &AnalysisState::Error("No text files found".to_string())
        );
    }

    #[test]
    fn option_toggles_are_independent() {
        let mut analysis = Analysis::new();
        analysis.toggle_exclude_docs();
        assert!(!analysis.options().exclude_tests);
        assert!(analysis.options().exclude_docs);
        analysis.toggle_exclude_docs();
        assert!(!analysis.options().exclude_docs);
    }

    #[test]
    fn gauge_caps_the_bar_but_not_the_label() {
        let (ratio, label) = gauge_parts(84.3);
        assert!((ratio - 0.843).abs() < 1e-9);
        assert_eq!(label, "84.3%");

        let (ratio, label) = gauge_parts(150.0);
        assert_eq!(ratio, 1.0);
        assert_eq!(label, "150%");

        let (ratio, label) = gauge_parts(0.0);
        assert_eq!(ratio, 0.0);
        assert_eq!(label, "0%");
    }
}

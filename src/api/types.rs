// src/api/types.rs
//! Wire types for the analysis backend.
//!
//! Field names mirror the service: snake_case in response bodies, camelCase
//! for the options object posted with an analyze request.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Successful `browse` payload: one directory listing.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct BrowsePayload {
    pub current_path: String,
    #[serde(default)]
    pub path_parts: Vec<String>,
    #[serde(default)]
    pub items: Vec<EntryInfo>,
}

/// One item of a `browse` listing, including the synthetic parent marker.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct EntryInfo {
    pub name: String,
    pub path: String,
    pub is_dir: bool,
    #[serde(default)]
    pub is_parent: bool,
}

/// One mount point from `get-drives`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Drive {
    pub name: String,
    pub path: String,
    #[serde(default)]
    pub icon: String,
}

/// Exclusion toggles posted with an analyze request. Read from the UI at
/// trigger time; never stored beyond the request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisOptions {
    pub exclude_tests: bool,
    pub exclude_docs: bool,
    pub exclude_dependencies: bool,
}

/// Successful `analyze` payload. Immutable once received; a new report
/// wholly replaces the previous one.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AnalysisReport {
    pub total_tokens_formatted: String,
    #[serde(default)]
    pub extensions: Vec<ExtensionRow>,
    #[serde(default)]
    pub technologies: Vec<TechnologyRow>,
    #[serde(default)]
    pub models: HashMap<String, ModelFit>,
}

/// Per-extension aggregate, already formatted by the backend.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ExtensionRow {
    pub extension: String,
    pub tokens_formatted: String,
    pub files_text: String,
}

/// Per-technology aggregate, already formatted by the backend.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TechnologyRow {
    pub technology: String,
    pub tokens_formatted: String,
    pub files_text: String,
}

/// How a model's context window fits the analyzed tree. `percentage` may
/// exceed 100 when the tree does not fit.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ModelFit {
    pub percentage: f64,
    pub color: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn browse_payload_decodes_a_service_response() {
        let body = serde_json::json!({
            "current_path": "/home/user",
            "path_parts": ["", "home", "user"],
            "items": [
                {"name": "..", "path": "/home", "is_dir": true, "is_parent": true},
                {"name": "docs", "path": "/home/user/docs", "is_dir": true, "is_parent": false},
                {"name": "notes.md", "path": "/home/user/notes.md", "is_dir": false, "is_parent": false}
            ]
        });
        let payload: BrowsePayload = serde_json::from_value(body).unwrap();
        assert_eq!(payload.current_path, "/home/user");
        assert_eq!(payload.items.len(), 3);
        assert!(payload.items[0].is_parent);
        assert!(!payload.items[2].is_dir);
    }

    #[test]
    fn analysis_report_decodes_and_ignores_extra_fields() {
        let body = serde_json::json!({
            "total_tokens": 12345,
            "total_tokens_formatted": "12.3K (12,345)",
            "extensions": [
                {"extension": "rs", "tokens": 9000, "tokens_formatted": "9.0K (9,000)",
                 "files": 3, "files_text": "3 files"}
            ],
            "technologies": [
                {"technology": "Rust", "tokens_formatted": "9.0K (9,000)", "files_text": "3 files"}
            ],
            "models": {
                "GPT-4 (8K)": {"percentage": 150.0, "color": "danger"}
            }
        });
        let report: AnalysisReport = serde_json::from_value(body).unwrap();
        assert_eq!(report.total_tokens_formatted, "12.3K (12,345)");
        assert_eq!(report.extensions[0].files_text, "3 files");
        let fit = &report.models["GPT-4 (8K)"];
        assert_eq!(fit.percentage, 150.0);
        assert_eq!(fit.color, "danger");
    }

    #[test]
    fn analysis_options_serialize_camel_case() {
        let options = AnalysisOptions {
            exclude_tests: true,
            exclude_docs: false,
            exclude_dependencies: true,
        };
        let value = serde_json::to_value(options).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "excludeTests": true,
                "excludeDocs": false,
                "excludeDependencies": true
            })
        );
    }

    #[test]
    fn drives_decode_from_a_bare_array() {
        let body = serde_json::json!([
            {"name": "C: Drive", "path": "/mnt/projects/c", "icon": "hdd-fill"},
            {"name": "Root File System", "path": "/", "icon": "hdd-rack-fill"}
        ]);
        let drives: Vec<Drive> = serde_json::from_value(body).unwrap();
        assert_eq!(drives.len(), 2);
        assert_eq!(drives[1].path, "/");
    }
}

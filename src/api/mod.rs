// src/api/mod.rs
//! Backend access: wire types, blocking client, and background workers.

pub mod client;
pub mod types;
pub mod worker;

// Re-export commonly used types
pub use client::{ApiError, BackendClient};
pub use types::{
    AnalysisOptions, AnalysisReport, BrowsePayload, Drive, EntryInfo, ExtensionRow, ModelFit,
    TechnologyRow,
};
pub use worker::{ApiEvent, ApiWorker, BackendRequest, RequestTag};

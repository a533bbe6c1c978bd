//! Diagnostic taxonomy shared by the startup, config and data loaders.
//!
//! Only the two startup variants are fatal to the process; everything
//! else aborts the current operation and leaves the UI in its last
//! good state.

use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while loading startup files, per-app
/// configs or CSV data.
#[derive(Debug, Error)]
pub enum ViewerError {
    /// `start.json` does not exist or cannot be opened. Fatal.
    #[error("startup file {path:?} is missing or unreadable: {source}")]
    StartupFileMissing {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `start.json` exists but is not valid JSON, or the app list is
    /// empty. Fatal.
    #[error("startup file {path:?} is malformed: {reason}")]
    StartupJsonMalformed { path: PathBuf, reason: String },

    /// A per-app `config.json` cannot be opened.
    #[error("app config {path:?} is unreadable: {source}")]
    ConfigUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A per-app `config.json` is not valid JSON for the expected shape.
    #[error("app config {path:?} is malformed: {source}")]
    ConfigMalformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A referenced CSV file cannot be opened.
    #[error("data file {path:?} is unreadable: {source}")]
    DataUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A referenced CSV file cannot be parsed as a numeric table.
    #[error("data file {path:?} is malformed: {reason}")]
    DataMalformed { path: PathBuf, reason: String },

    /// The table parsed fine but has fewer than the two columns needed
    /// for an X/Y plot.
    #[error("data file {path:?} has {found} column(s), need at least 2")]
    InsufficientColumns { path: PathBuf, found: usize },
}

impl ViewerError {
    /// `true` for the startup variants that must terminate the process.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            ViewerError::StartupFileMissing { .. } | ViewerError::StartupJsonMalformed { .. }
        )
    }
}

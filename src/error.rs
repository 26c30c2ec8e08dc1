use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("trait '{0}' is defined more than once")]
    DuplicateTrait(String),
}

#[derive(Debug, Error)]
pub enum PresetError {
    #[error("preset file {} does not exist", .0.display())]
    Missing(PathBuf),
    #[error("failed to access preset file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("preset file {} is not a JSON list of names: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum ReplayError {
    /// Esc was held or the worker was stopped. Not a failure.
    #[error("replay cancelled")]
    Cancelled,
    #[error("window titled '{0}' could not be found")]
    WindowNotFound(String),
    #[error("input injection failed: {0}")]
    Input(String),
}

#[derive(Debug, Error)]
pub enum OcrError {
    #[error("failed to start OCR binary '{binary}': {source}")]
    Spawn {
        binary: String,
        #[source]
        source: std::io::Error,
    },
    #[error("OCR process timed out after {0:?}")]
    Timeout(Duration),
    #[error("OCR process exited with status {0}")]
    Failed(String),
    #[error("OCR process I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("OCR region has no width/height")]
    NotARectangle,
}

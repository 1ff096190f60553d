use std::path::PathBuf;
use thiserror::Error;

/// A specialized `Result` type for loading and saving search artefacts.
pub type SearchResult<T> = Result<T, SearchError>;

/// Failures of the file-facing collaborators around the matching engine.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Failed to load image {path:?}: {source}")]
    ImageLoad {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Failed to save image {path:?}: {source}")]
    ImageSave {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Failed to write report {path:?}: {source}")]
    ReportWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to encode report: {source}")]
    ReportEncode {
        #[from]
        source: serde_json::Error,
    },
}

//! Error types for sidebar construction

use std::path::PathBuf;

use thiserror::Error;

/// Error raised while loading a table-of-contents manifest.
#[derive(Error, Debug)]
pub enum TocError {
    /// The manifest file could not be read
    #[error("Failed to read manifest {path}: {source}")]
    Read {
        /// Path of the manifest file
        path: PathBuf,

        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The manifest was not valid JSON, or did not match the expected
    /// schema (a top-level array of objects with `label` and `items`)
    #[error("Invalid manifest {path}: {source}")]
    Parse {
        /// Path of the manifest file
        path: PathBuf,

        /// Underlying deserialization error
        #[source]
        source: serde_json::Error,
    },
}

impl TocError {
    /// Path of the manifest the error refers to.
    pub fn path(&self) -> &PathBuf {
        match self {
            TocError::Read { path, .. } => path,
            TocError::Parse { path, .. } => path,
        }
    }
}

/// Error raised while splicing manifest groups into a sidebar.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MergeError {
    /// No topic group in the manifest carries the requested label
    #[error("No topic group labeled {0:?} in the manifest")]
    GroupNotFound(String),

    /// No category in the static sidebar carries the requested label
    #[error("No category labeled {0:?} in the sidebar")]
    CategoryNotFound(String),
}

/// Main error type for Signpost operations
#[derive(Error, Debug)]
pub enum SignpostError {
    /// Manifest loading failed
    #[error(transparent)]
    Toc(#[from] TocError),

    /// Splicing failed
    #[error(transparent)]
    Merge(#[from] MergeError),
}

/// Result type alias for Signpost operations
pub type Result<T> = std::result::Result<T, SignpostError>;

//! Catalog load errors.

use std::path::PathBuf;

/// Error type for catalog loading.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("HTTP error: {status} for {url}")]
    Status { status: u16, url: String },

    #[error("Failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed catalog: {0}")]
    Malformed(String),
}

impl LoadError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::Malformed(reason.into())
    }
}

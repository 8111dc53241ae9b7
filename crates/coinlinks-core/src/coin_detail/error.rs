//! Errors raised while loading a coin detail document.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}

use std::path::PathBuf;

use scryfall::ScryfallError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImportError {
    #[error(transparent)]
    Fetch(#[from] ScryfallError),

    #[error("failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),
}

impl ImportError {
    pub fn is_transient(&self) -> bool {
        matches!(self, ImportError::Fetch(e) if e.is_transient())
    }
}

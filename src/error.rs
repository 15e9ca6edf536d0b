use std::path::PathBuf;
use thiserror::Error;

/// Everything that can stop a summary run.
#[derive(Error, Debug)]
pub enum SummaryError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write summary: {0}")]
    Write(#[from] std::io::Error),
}

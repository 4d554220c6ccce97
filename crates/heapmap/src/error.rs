use std::path::PathBuf;

use heapmap_layout::ConfigError;
use heapmap_runtime::SlotError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, HeapmapError>;

#[derive(Debug, Error)]
pub enum HeapmapError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Slot(#[from] SlotError),

    #[error("invalid snapshot {path}: {source}")]
    Snapshot {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },
}

impl HeapmapError {
    /// Process exit code for this error.
    ///
    /// Rejected snapshots exit with 2 so scripts can tell bad input from
    /// environment failures.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Slot(_) | Self::Snapshot { .. } => 2,
            _ => 1,
        }
    }

    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

impl From<heapmap_core::Error> for HeapmapError {
    fn from(error: heapmap_core::Error) -> Self {
        Self::Slot(SlotError::from(error))
    }
}

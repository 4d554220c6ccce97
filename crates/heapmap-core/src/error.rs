use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// A precondition violation in snapshot data handed to heapmap.
///
/// Every operation in the workspace is pure and deterministic, so none of
/// these are retried: the same input fails the same way every time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid memory range: end {end:#x} precedes start {start:#x}")]
    InvalidRange { start: u64, end: u64 },

    #[error("segment {segment:#x}: committed length {committed} exceeds reserved length {reserved}")]
    CommittedExceedsReserved {
        segment: u64,
        committed: u64,
        reserved: u64,
    },

    #[error("segment {segment:#x}: live object length {live} exceeds committed length {committed}")]
    LiveExceedsCommitted {
        segment: u64,
        live: u64,
        committed: u64,
    },

    #[error("unknown generation code {0}")]
    UnknownGeneration(u8),

    #[error("unknown segment kind code {0}")]
    UnknownSegmentKind(u8),
}

impl Error {
    /// Address of the segment the error refers to, when there is one.
    #[must_use]
    pub fn segment(&self) -> Option<u64> {
        match self {
            Self::CommittedExceedsReserved { segment, .. }
            | Self::LiveExceedsCommitted { segment, .. } => Some(*segment),
            Self::InvalidRange { .. } | Self::UnknownGeneration(_) | Self::UnknownSegmentKind(_) => {
                None
            }
        }
    }
}

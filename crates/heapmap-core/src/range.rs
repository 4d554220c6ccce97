#![forbid(unsafe_code)]

//! Address ranges.

use crate::error::{Error, Result};

/// A half-open address range `[start, end)` inside a managed heap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MemoryRange {
    /// First address (inclusive).
    pub start: u64,
    /// One past the last address (exclusive).
    pub end: u64,
}

impl MemoryRange {
    /// Create a range, rejecting `end < start`.
    pub const fn new(start: u64, end: u64) -> Result<Self> {
        if end < start {
            return Err(Error::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Create a range of `length` bytes beginning at `start`.
    ///
    /// The end saturates at `u64::MAX`.
    #[inline]
    pub const fn sized(start: u64, length: u64) -> Self {
        Self {
            start,
            end: start.saturating_add(length),
        }
    }

    /// An empty range anchored at `start`.
    #[inline]
    pub const fn empty(start: u64) -> Self {
        Self { start, end: start }
    }

    /// Length in bytes. A malformed range reports 0; see [`Self::check`].
    #[inline]
    pub const fn length(&self) -> u64 {
        self.end.saturating_sub(self.start)
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.length() == 0
    }

    /// Verify the range is well formed.
    ///
    /// Ranges built with struct literals or deserialized from a snapshot
    /// bypass [`Self::new`], so segment validation re-checks them here.
    pub const fn check(&self) -> Result<()> {
        match Self::new(self.start, self.end) {
            Ok(_) => Ok(()),
            Err(error) => Err(error),
        }
    }
}

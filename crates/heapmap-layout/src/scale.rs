#![forbid(unsafe_code)]

//! Size & scale policy.
//!
//! Two mutually exclusive modes turn a segment into a horizontal width:
//!
//! - **Real size**: `megabytes(size) * PIXELS_PER_MB`.
//! - **Bucketed**: `SMALL_BUCKET_WIDTH` up to `SMALL_BUCKET_MAX_MB`,
//!   `LARGE_BUCKET_WIDTH` above it. Ephemeral segments are always
//!   `EPHEMERAL_BUCKET_WIDTH` wide in this mode.
//!
//! # Rounding
//!
//! `megabytes` divides by 2^20, rounds to two decimals with
//! round-half-away-from-zero ([`f64::round`]), then truncates toward zero.
//! So 4.004 MB counts as 4 and 4.995 MB counts as 5.

use heapmap_core::{BYTES_PER_MB, Segment, effective_size, layout_size};

use crate::config::ViewConfig;

/// Layout units per whole megabyte in real-size mode.
pub const PIXELS_PER_MB: f64 = 10.0;
/// Largest megabyte count drawn with the small bucket.
pub const SMALL_BUCKET_MAX_MB: u64 = 4;
pub const SMALL_BUCKET_WIDTH: f64 = 40.0;
pub const LARGE_BUCKET_WIDTH: f64 = 80.0;
/// Fixed width of an ephemeral segment in bucketed mode.
pub const EPHEMERAL_BUCKET_WIDTH: f64 = 200.0;
/// Height of every segment rectangle.
pub const SEGMENT_HEIGHT: f64 = 40.0;
/// Gap on each side of a segment rectangle wider than one unit.
pub const SEGMENT_MARGIN: f64 = 1.0;

/// Active scale mode, derived from a [`ViewConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleMode {
    /// Width proportional to whole megabytes.
    RealSize { include_reserved: bool },
    /// Coarse two-tier width.
    Bucketed,
}

impl ScaleMode {
    #[must_use]
    pub const fn from_config(config: &ViewConfig) -> Self {
        if config.real_size {
            Self::RealSize {
                include_reserved: config.show_reserved_memory,
            }
        } else {
            Self::Bucketed
        }
    }

    /// Width of a non-ephemeral segment.
    #[must_use]
    pub fn solid_width(self, segment: &Segment) -> f64 {
        match self {
            Self::RealSize { include_reserved } => {
                real_size_width(effective_size(segment, include_reserved))
            }
            // Buckets always measure the full reservation.
            Self::Bucketed => bucket_width(megabytes(effective_size(segment, true))),
        }
    }

    /// Outer width of an ephemeral segment.
    #[must_use]
    pub fn ephemeral_width(self, segment: &Segment) -> f64 {
        match self {
            Self::RealSize { include_reserved } => {
                real_size_width(layout_size(segment, true, include_reserved))
            }
            Self::Bucketed => EPHEMERAL_BUCKET_WIDTH,
        }
    }
}

/// Whole megabytes in `bytes`, rounded to two decimals then truncated.
#[must_use]
pub fn megabytes(bytes: u64) -> u64 {
    let mb = bytes as f64 / BYTES_PER_MB as f64;
    let rounded = (mb * 100.0).round() / 100.0;
    rounded.trunc() as u64
}

#[inline]
fn real_size_width(bytes: u64) -> f64 {
    megabytes(bytes) as f64 * PIXELS_PER_MB
}

#[inline]
fn bucket_width(mb: u64) -> f64 {
    if mb <= SMALL_BUCKET_MAX_MB {
        SMALL_BUCKET_WIDTH
    } else {
        LARGE_BUCKET_WIDTH
    }
}

/// Margin around a rectangle of `width`.
///
/// Empty segments of either kind get no margin so they leave no visible
/// sliver.
#[must_use]
pub fn margin_for(width: f64) -> f64 {
    if width <= 1.0 {
        0.0
    } else {
        SEGMENT_MARGIN
    }
}

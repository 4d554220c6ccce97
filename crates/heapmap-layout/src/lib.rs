#![forbid(unsafe_code)]

//! Segment-to-visual mapping.
//!
//! Given a validated [`Segment`](heapmap_core::Segment) and a [`ViewConfig`],
//! compute the rectangle a host should draw: width, height, margin, and
//! either a solid color with a live-data fill or three ephemeral
//! sub-generation bars. Everything here is a pure function of its inputs;
//! timing and drawing belong to the host.
//!
//! # Modules
//! - [`scale`]: bytes to layout units under the two scale modes.
//! - [`fill`]: live-data fill ratio for solid segments.
//! - [`ephemeral`]: gen2/gen1/gen0 partition of an ephemeral segment.
//! - [`geometry`]: the combined per-segment result.
//! - [`row`]: left positions of a heap's rectangles.
//! - [`config`]: the two mode switches and how to load them.

pub mod config;
pub mod ephemeral;
pub mod fill;
pub mod geometry;
pub mod row;
pub mod scale;

pub use config::{ConfigError, ViewConfig};
pub use ephemeral::{EphemeralLayout, SubBar};
pub use fill::{fill_ratio, fill_width};
pub use geometry::{SegmentBody, SegmentGeometry};
pub use row::{RowPlacement, place_row};
pub use scale::{
    EPHEMERAL_BUCKET_WIDTH, LARGE_BUCKET_WIDTH, PIXELS_PER_MB, SEGMENT_HEIGHT, SEGMENT_MARGIN,
    SMALL_BUCKET_MAX_MB, SMALL_BUCKET_WIDTH, ScaleMode, megabytes,
};

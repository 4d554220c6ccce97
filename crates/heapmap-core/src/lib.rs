#![forbid(unsafe_code)]

//! Core: segment data model, measurement extraction, and error types.
//!
//! # Role in heapmap
//! `heapmap-core` is the input layer. It owns the read-only snapshot types
//! produced by a runtime inspector (heaps, segments, generations, memory
//! ranges) and the size queries every other layer is built on.
//!
//! # Primary responsibilities
//! - **Segment**: an immutable snapshot of one heap segment.
//! - **Generation / SegmentKind**: exhaustive classification enums.
//! - **Measurement**: effective segment sizes under the two scale modes.
//! - **Error**: precondition violations reported to the caller.
//!
//! # How it fits in the system
//! `heapmap-layout` turns measurements into geometry, `heapmap-style` maps
//! generations to colors, and `heapmap-runtime` diffs successive snapshots
//! into transition descriptors. None of them mutate a [`Segment`].

pub mod error;
pub mod generation;
pub mod logging;
pub mod measure;
pub mod range;
pub mod segment;

pub use error::{Error, Result};
pub use generation::{Generation, SegmentKind, SubGeneration};
pub use measure::{effective_size, layout_size, sub_generation_total};
pub use range::MemoryRange;
pub use segment::{Segment, SegmentFlags, SubHeap};

/// Number of bytes in one megabyte (2^20).
pub const BYTES_PER_MB: u64 = 1 << 20;

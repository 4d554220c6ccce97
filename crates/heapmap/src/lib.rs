#![forbid(unsafe_code)]

//! heapmap public facade crate.
//!
//! Re-exports the stable surface of the layer crates and offers a prelude
//! for hosts that draw a GC heap map. The `heapmap` binary built from this
//! crate renders JSON inspector snapshots into the same plans a host would
//! receive.

pub mod cli;
pub mod error;
pub mod render;

// --- Core re-exports -------------------------------------------------------

pub use heapmap_core::{
    BYTES_PER_MB, Generation, MemoryRange, Segment, SegmentFlags, SegmentKind, SubGeneration,
    SubHeap, effective_size, layout_size, sub_generation_total,
};

// --- Style re-exports ------------------------------------------------------

pub use heapmap_style::{
    ALERT_COLOR, EPHEMERAL_BACKGROUND, Rgb, generation_color, lerp, segment_color,
    sub_generation_color,
};

// --- Layout re-exports -----------------------------------------------------

pub use heapmap_layout::{
    ConfigError, EphemeralLayout, RowPlacement, ScaleMode, SegmentBody, SegmentGeometry, SubBar,
    ViewConfig, place_row,
};

// --- Runtime re-exports ----------------------------------------------------

pub use heapmap_runtime::{
    Attribute, Directive, SegmentPlan, SlotError, SlotEvent, SlotKey, SlotPhase, SlotTable,
    Transition, VisualSlot, diff, plan,
};

// --- Errors ---------------------------------------------------------------

pub use error::{HeapmapError, Result};
pub use render::{EventRecord, RenderOptions, RowRecord, SnapshotReport, render};

/// Lightweight prelude for hosts.
pub mod prelude {
    pub use crate::{
        Directive, Generation, Rgb, Segment, SegmentGeometry, SegmentPlan, SlotEvent, SlotKey,
        SlotTable, SubHeap, Transition, ViewConfig,
    };
}

#![forbid(unsafe_code)]

//! Transition planning and visual slot lifecycle.
//!
//! The layout crate answers "what should this segment look like". This crate
//! answers "what changed since last time" and tracks, per on-screen slot,
//! which animation the host is currently running.
//!
//! # Modules
//! - [`transition`]: pure `(previous?, current) -> plan` descriptors.
//! - [`slot`]: one slot's Appearing / Steady / Updating / Removing phases.
//! - [`table`]: host-side map of slots keyed by heap and address.
//!
//! # Logging
//!
//! Phase changes are emitted at `debug` under the `heapmap.slot` target and
//! every reconcile runs inside a `heapmap.reconcile` span. Rejected
//! snapshots are logged at `warn` before the error is returned.

pub mod error;
pub mod slot;
pub mod table;
pub mod transition;

pub use error::{Result, SlotError};
pub use slot::{SlotPhase, VisualSlot};
pub use table::{SlotEvent, SlotKey, SlotTable};
pub use transition::{Attribute, Directive, SegmentPlan, Transition, diff, plan};

#![forbid(unsafe_code)]

//! Visual slot lifecycle.
//!
//! A [`VisualSlot`] holds the last snapshot applied to one on-screen
//! rectangle and tracks which animation the host is running for it.
//!
//! # State machine
//!
//! ```text
//!            apply                 apply (changes)
//! Absent ──────────▶ Appearing ─────────────────▶ Updating
//!   ▲                   │  complete                  │ complete
//!   │                   ▼                            ▼
//!   │ complete       Steady ◀────────────────────────┘
//!   │                   │ remove (also from Appearing / Updating)
//!   └─── Removing ◀─────┘
//! ```
//!
//! # Invariants
//!
//! - The previous snapshot is replaced exactly once per `apply`.
//! - `remove` while already `Removing` is a no-op returning `None`.
//! - `apply` while `Removing` is rejected; the slot's identity is released
//!   only through `complete`.
//! - A failed `apply` leaves the slot untouched.

use heapmap_core::Segment;
use heapmap_layout::{SegmentGeometry, ViewConfig};

use crate::error::{Result, SlotError};
use crate::transition::{Directive, SegmentPlan, plan};

/// Animation phase of a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SlotPhase {
    /// No snapshot yet, or released after removal.
    #[default]
    Absent,
    /// Appear animation in flight.
    Appearing,
    /// Nothing animating.
    Steady,
    /// Update transitions in flight.
    Updating,
    /// Remove animation in flight.
    Removing,
}

impl SlotPhase {
    /// Check if the host should draw the slot.
    #[inline]
    pub fn is_visible(self) -> bool {
        !matches!(self, Self::Absent)
    }

    /// Check if an animation is in progress.
    #[inline]
    pub fn is_animating(self) -> bool {
        matches!(self, Self::Appearing | Self::Updating | Self::Removing)
    }
}

/// One on-screen rectangle across successive snapshots.
#[derive(Debug, Clone, Default)]
pub struct VisualSlot {
    heap: usize,
    phase: SlotPhase,
    segment: Option<Segment>,
    geometry: Option<SegmentGeometry>,
}

impl VisualSlot {
    /// Create an absent slot labelled with `heap`.
    #[must_use]
    pub fn new(heap: usize) -> Self {
        Self {
            heap,
            ..Self::default()
        }
    }

    #[inline]
    pub fn phase(&self) -> SlotPhase {
        self.phase
    }

    #[inline]
    pub fn heap(&self) -> usize {
        self.heap
    }

    /// Last snapshot applied.
    #[inline]
    pub fn segment(&self) -> Option<&Segment> {
        self.segment.as_ref()
    }

    /// Target geometry of the last snapshot applied.
    #[inline]
    pub fn geometry(&self) -> Option<&SegmentGeometry> {
        self.geometry.as_ref()
    }

    /// Apply a new snapshot and plan the host's work.
    pub fn apply(&mut self, segment: Segment, config: &ViewConfig) -> Result<SegmentPlan> {
        if self.phase == SlotPhase::Removing {
            tracing::warn!(
                target: "heapmap.slot",
                address = segment.start,
                "snapshot rejected: slot is being removed"
            );
            return Err(SlotError::SlotRemoving {
                address: segment.start,
            });
        }

        let previous = match self.phase {
            SlotPhase::Absent => None,
            _ => self.segment.as_ref(),
        };
        let planned = plan(previous, &segment, self.heap, config).inspect_err(|error| {
            tracing::warn!(target: "heapmap.slot", %error, "snapshot rejected");
        })?;

        let next = match (&planned.directive, self.phase) {
            (Directive::Appear { .. }, _) => SlotPhase::Appearing,
            (Directive::Update(transitions), phase) if transitions.is_empty() => phase,
            _ => SlotPhase::Updating,
        };
        self.transition_to(next, segment.start);

        self.geometry = Some(planned.geometry);
        self.segment = Some(segment);
        Ok(planned)
    }

    /// Start removing the slot.
    ///
    /// Returns the shrink directive, or `None` if there is nothing to remove
    /// or a removal is already running.
    pub fn remove(&mut self) -> Option<Directive> {
        match self.phase {
            SlotPhase::Absent => None,
            SlotPhase::Removing => {
                tracing::debug!(target: "heapmap.slot", "removal already in progress");
                None
            }
            SlotPhase::Appearing | SlotPhase::Steady | SlotPhase::Updating => {
                let width = self.geometry.map_or(0.0, |g| g.width);
                self.transition_to(SlotPhase::Removing, self.address());
                Some(Directive::Remove {
                    from: width,
                    to: 0.0,
                })
            }
        }
    }

    /// The host finished the running animation.
    ///
    /// Returns [`Directive::Release`] when a removal completes.
    pub fn complete(&mut self) -> Option<Directive> {
        match self.phase {
            SlotPhase::Appearing | SlotPhase::Updating => {
                self.transition_to(SlotPhase::Steady, self.address());
                None
            }
            SlotPhase::Removing => {
                let address = self.address();
                self.segment = None;
                self.geometry = None;
                self.transition_to(SlotPhase::Absent, address);
                Some(Directive::Release)
            }
            SlotPhase::Absent | SlotPhase::Steady => None,
        }
    }

    fn address(&self) -> u64 {
        self.segment.as_ref().map_or(0, |s| s.start)
    }

    fn transition_to(&mut self, next: SlotPhase, address: u64) {
        if self.phase != next {
            tracing::debug!(
                target: "heapmap.slot",
                heap = self.heap,
                address,
                from = ?self.phase,
                to = ?next,
                "slot phase changed"
            );
            self.phase = next;
        }
    }
}

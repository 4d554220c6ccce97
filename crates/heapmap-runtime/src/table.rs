#![forbid(unsafe_code)]

//! Host-side slot table.
//!
//! The table owns slot identity and the "previous" snapshot of every slot;
//! the planning functions stay pure. Slots are keyed by `(heap, address)`
//! and iterate in that order, which is also the left-to-right drawing order
//! within a heap row.
//!
//! A reconcile never waits on animations. A segment whose slot is still
//! shrinking from an earlier removal is skipped and picked up by the first
//! reconcile after that slot is released.

use std::collections::BTreeMap;

use heapmap_core::{Segment, SubHeap};
use heapmap_layout::{RowPlacement, ViewConfig, place_row};

use crate::error::{Result, SlotError};
use crate::slot::{SlotPhase, VisualSlot};
use crate::transition::{Directive, SegmentPlan};

/// Stable identity of a visual slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlotKey {
    pub heap: usize,
    pub address: u64,
}

impl SlotKey {
    #[must_use]
    pub const fn new(heap: usize, address: u64) -> Self {
        Self { heap, address }
    }
}

/// What a reconcile did to one slot.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SlotEvent {
    /// A snapshot was applied.
    Planned(SegmentPlan),
    /// The slot vanished from the snapshot and started shrinking.
    Removed(Directive),
}

/// Ordered collection of visual slots.
#[derive(Debug, Clone, Default)]
pub struct SlotTable {
    slots: BTreeMap<SlotKey, VisualSlot>,
    config: ViewConfig,
}

impl SlotTable {
    #[must_use]
    pub fn new(config: ViewConfig) -> Self {
        Self {
            slots: BTreeMap::new(),
            config,
        }
    }

    #[inline]
    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    /// Replace the view configuration; takes effect on the next reconcile.
    pub fn set_config(&mut self, config: ViewConfig) {
        self.config = config;
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, key: &SlotKey) -> Option<&VisualSlot> {
        self.slots.get(key)
    }

    /// Slots in `(heap, address)` order.
    pub fn iter(&self) -> impl Iterator<Item = (&SlotKey, &VisualSlot)> {
        self.slots.iter()
    }

    /// Apply a full inspector snapshot, keying slots by segment start.
    pub fn reconcile(&mut self, heaps: &[SubHeap]) -> Result<Vec<(SlotKey, SlotEvent)>> {
        self.reconcile_by(heaps, |_, segment| segment.start)
    }

    /// Apply a full inspector snapshot with caller-chosen slot addresses.
    ///
    /// `address_of` receives the heap index and segment; hosts that track a
    /// custom memory range per slot return its start instead of the
    /// segment's.
    ///
    /// The snapshot is validated up front, so an invalid segment leaves the
    /// table unchanged.
    pub fn reconcile_by(
        &mut self,
        heaps: &[SubHeap],
        address_of: impl Fn(usize, &Segment) -> u64,
    ) -> Result<Vec<(SlotKey, SlotEvent)>> {
        heaps.iter().try_for_each(SubHeap::validate)?;

        let span = tracing::debug_span!(
            "heapmap.reconcile",
            heaps = heaps.len(),
            slots = self.slots.len()
        );
        let _guard = span.enter();

        let mut events = Vec::new();
        let mut seen = Vec::new();

        for heap in heaps {
            for segment in &heap.segments {
                let key = SlotKey::new(heap.index, address_of(heap.index, segment));
                seen.push(key);

                let slot = self
                    .slots
                    .entry(key)
                    .or_insert_with(|| VisualSlot::new(heap.index));
                if slot.phase() == SlotPhase::Removing {
                    tracing::debug!(
                        target: "heapmap.slot",
                        heap = key.heap,
                        address = key.address,
                        "segment deferred until removal completes"
                    );
                    continue;
                }
                let plan = slot.apply(segment.clone(), &self.config)?;
                events.push((key, SlotEvent::Planned(plan)));
            }
        }

        seen.sort_unstable();
        for (key, slot) in &mut self.slots {
            if seen.binary_search(key).is_err()
                && let Some(directive) = slot.remove()
            {
                events.push((*key, SlotEvent::Removed(directive)));
            }
        }

        Ok(events)
    }

    /// Request removal of one slot. Idempotent while the removal runs.
    pub fn remove(&mut self, key: &SlotKey) -> Result<Option<Directive>> {
        let slot = self
            .slots
            .get_mut(key)
            .ok_or(SlotError::UnknownSlot(*key))?;
        Ok(slot.remove())
    }

    /// The host finished animating `key`. Released slots are dropped.
    pub fn complete(&mut self, key: &SlotKey) -> Result<Option<Directive>> {
        let slot = self
            .slots
            .get_mut(key)
            .ok_or(SlotError::UnknownSlot(*key))?;
        let directive = slot.complete();
        if directive == Some(Directive::Release) {
            self.slots.remove(key);
        }
        Ok(directive)
    }

    /// Placement of `heap`'s visible slots, in address order.
    pub fn row(&self, heap: usize) -> (Vec<SlotKey>, RowPlacement) {
        let (keys, geometries): (Vec<_>, Vec<_>) = self
            .slots
            .range(SlotKey::new(heap, 0)..=SlotKey::new(heap, u64::MAX))
            .filter_map(|(key, slot)| slot.geometry().map(|g| (*key, *g)))
            .unzip();
        (keys, place_row(&geometries))
    }

    /// Heap indices with at least one slot, ascending.
    pub fn heaps(&self) -> Vec<usize> {
        let mut heaps: Vec<usize> = self.slots.keys().map(|key| key.heap).collect();
        heaps.dedup();
        heaps
    }
}

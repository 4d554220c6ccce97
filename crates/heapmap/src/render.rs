#![forbid(unsafe_code)]

//! Batch rendering of inspector snapshots into plans.
//!
//! Feeds a sequence of snapshots through one [`SlotTable`] and records what
//! a host would have been told after each one: the slot events and the row
//! placement of every heap.

use heapmap_core::SubHeap;
use heapmap_layout::ViewConfig;
use heapmap_runtime::{SlotEvent, SlotKey, SlotTable};
use serde::Serialize;

use crate::error::Result;

/// One slot event, flattened for output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventRecord {
    pub heap: usize,
    pub address: u64,
    pub event: SlotEvent,
}

/// Row placement of one heap after a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowRecord {
    pub heap: usize,
    pub addresses: Vec<u64>,
    pub positions: Vec<f64>,
    pub extent: f64,
}

/// Everything produced by one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SnapshotReport {
    pub snapshot: usize,
    pub events: Vec<EventRecord>,
    pub rows: Vec<RowRecord>,
}

/// How the renderer treats animations between snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    /// Complete every running animation before the next snapshot, as if
    /// the host had enough time to finish them.
    pub settle: bool,
}

/// Render `snapshots` in order.
pub fn render(
    snapshots: &[Vec<SubHeap>],
    config: ViewConfig,
    options: RenderOptions,
) -> Result<Vec<SnapshotReport>> {
    let mut table = SlotTable::new(config);
    let mut reports = Vec::with_capacity(snapshots.len());

    for (index, heaps) in snapshots.iter().enumerate() {
        let events = table
            .reconcile(heaps)?
            .into_iter()
            .map(|(key, event)| EventRecord {
                heap: key.heap,
                address: key.address,
                event,
            })
            .collect();

        let rows = table
            .heaps()
            .into_iter()
            .map(|heap| {
                let (keys, placement) = table.row(heap);
                RowRecord {
                    heap,
                    addresses: keys.iter().map(|key| key.address).collect(),
                    positions: placement.positions,
                    extent: placement.extent,
                }
            })
            .collect();

        tracing::info!(snapshot = index, slots = table.len(), "snapshot rendered");
        reports.push(SnapshotReport {
            snapshot: index,
            events,
            rows,
        });

        if options.settle {
            settle(&mut table)?;
        }
    }

    Ok(reports)
}

/// Complete every running animation.
fn settle(table: &mut SlotTable) -> Result<()> {
    let keys: Vec<SlotKey> = table
        .iter()
        .filter(|(_, slot)| slot.phase().is_animating())
        .map(|(key, _)| *key)
        .collect();
    for key in &keys {
        table.complete(key)?;
    }
    Ok(())
}

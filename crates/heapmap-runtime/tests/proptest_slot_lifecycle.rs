//! Property-based tests for transition planning and slot lifecycle.
//!
//! 1. Re-applying a snapshot never produces transitions
//! 2. Every emitted length transition actually changes its attribute
//! 3. Color only animates when the generation changes
//! 4. Removal is idempotent under any operation sequence
//! 5. The table never holds a slot in the Absent phase

use heapmap_core::{BYTES_PER_MB, Generation, Segment, SubGeneration, SubHeap};
use heapmap_layout::ViewConfig;
use heapmap_runtime::{
    Attribute, Directive, SlotPhase, SlotTable, Transition, VisualSlot, plan,
};
use proptest::prelude::*;

// ── Strategies ──────────────────────────────────────────────────────────

fn generation_strategy() -> impl Strategy<Value = Generation> {
    prop::sample::select(Generation::ALL.to_vec())
}

fn config_strategy() -> impl Strategy<Value = ViewConfig> {
    (any::<bool>(), any::<bool>()).prop_map(|(real, reserved)| ViewConfig::new(real, reserved))
}

/// Solid segment at a fixed address, sized in whole megabytes.
fn solid_strategy() -> impl Strategy<Value = Segment> {
    (generation_strategy(), 0u64..64, 0u64..=100).prop_map(|(generation, mb, percent)| {
        let size = mb * BYTES_PER_MB;
        Segment::solid(generation, 0x4000_0000)
            .with_reserved(size)
            .with_committed(size)
            .with_live(size * percent / 100)
    })
}

fn ephemeral_strategy() -> impl Strategy<Value = Segment> {
    (0u64..8, 0u64..8, 0u64..8).prop_map(|(g0, g1, g2)| {
        let size = 32 * BYTES_PER_MB;
        Segment::ephemeral(0x4000_0000)
            .with_reserved(size)
            .with_committed(size)
            .with_sub_generation(SubGeneration::Gen0, g0 * BYTES_PER_MB)
            .with_sub_generation(SubGeneration::Gen1, g1 * BYTES_PER_MB)
            .with_sub_generation(SubGeneration::Gen2, g2 * BYTES_PER_MB)
    })
}

fn segment_strategy() -> impl Strategy<Value = Segment> {
    prop_oneof![solid_strategy(), ephemeral_strategy()]
}

#[derive(Debug, Clone)]
enum Op {
    Apply(Segment),
    Complete,
    Remove,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => segment_strategy().prop_map(Op::Apply),
        2 => Just(Op::Complete),
        2 => Just(Op::Remove),
    ]
}

// ═══════════════════════════════════════════════════════════════════════
// 1-3. Transition minimality
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn same_snapshot_is_silent(segment in segment_strategy(), config in config_strategy()) {
        let planned = plan(Some(&segment), &segment, 0, &config).expect("valid");
        prop_assert_eq!(planned.directive, Directive::Update(Vec::new()));
    }

    #[test]
    fn length_transitions_are_real_changes(
        before in segment_strategy(),
        after in segment_strategy(),
        config in config_strategy(),
    ) {
        let planned = plan(Some(&before), &after, 0, &config).expect("valid");
        for transition in planned.directive.transitions() {
            match *transition {
                Transition::Length { from, to, .. } => {
                    prop_assert!(from != to, "no-op transition {:?}", transition);
                    prop_assert!(to >= 0.0);
                }
                Transition::Color { from, to } => prop_assert_ne!(from, to),
            }
        }
    }

    #[test]
    fn color_needs_generation_change(
        before in solid_strategy(),
        after in solid_strategy(),
        config in config_strategy(),
    ) {
        let planned = plan(Some(&before), &after, 0, &config).expect("valid");
        let recolored = planned
            .directive
            .transitions()
            .iter()
            .any(|t| t.attribute() == Attribute::Color);
        if before.generation == after.generation {
            prop_assert!(!recolored);
        }
    }

    #[test]
    fn transition_targets_match_geometry(
        before in solid_strategy(),
        after in solid_strategy(),
        config in config_strategy(),
    ) {
        let planned = plan(Some(&before), &after, 0, &config).expect("valid");
        for transition in planned.directive.transitions() {
            match *transition {
                Transition::Length { attribute: Attribute::Width, to, .. } => {
                    prop_assert_eq!(to, planned.geometry.width);
                }
                Transition::Length { attribute: Attribute::Fill, to, .. } => {
                    prop_assert_eq!(Some(to), planned.geometry.fill_width());
                }
                Transition::Color { to, .. } => prop_assert_eq!(to, planned.geometry.color),
                Transition::Length { .. } => {}
            }
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 4-5. Lifecycle
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn removal_is_idempotent(ops in prop::collection::vec(op_strategy(), 0..32)) {
        let config = ViewConfig::default();
        let mut slot = VisualSlot::new(0);
        for op in ops {
            match op {
                Op::Apply(segment) => {
                    let was_removing = slot.phase() == SlotPhase::Removing;
                    prop_assert_eq!(slot.apply(segment, &config).is_err(), was_removing);
                }
                Op::Complete => {
                    slot.complete();
                }
                Op::Remove => {
                    let before = slot.phase();
                    let directive = slot.remove();
                    match before {
                        SlotPhase::Absent | SlotPhase::Removing => {
                            prop_assert!(directive.is_none());
                        }
                        _ => {
                            let is_remove = matches!(directive, Some(Directive::Remove { .. }));
                            prop_assert!(is_remove, "expected Remove, got {:?}", directive);
                        }
                    }
                    prop_assert!(slot.remove().is_none());
                }
            }
        }
    }

    #[test]
    fn table_holds_only_visible_slots(
        snapshots in prop::collection::vec(
            prop::collection::vec((0u64..6, 1u64..8), 0..6),
            1..8,
        ),
        settle in any::<bool>(),
    ) {
        let mut table = SlotTable::new(ViewConfig::new(true, false));
        for snapshot in snapshots {
            let segments = snapshot
                .iter()
                .map(|&(slot, mb)| {
                    Segment::solid(Generation::Generation2, slot << 32)
                        .with_reserved(mb * BYTES_PER_MB)
                })
                .collect();
            table.reconcile(&[SubHeap::new(0, segments)]).expect("valid");

            if settle {
                let keys: Vec<_> = table.iter().map(|(key, _)| *key).collect();
                for key in keys {
                    table.complete(&key).expect("known");
                }
            }
            prop_assert!(table.iter().all(|(_, slot)| slot.phase().is_visible()));
        }
    }
}

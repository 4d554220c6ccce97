#![forbid(unsafe_code)]

//! Transition descriptors.
//!
//! [`plan`] is a pure function from `(previous snapshot?, current snapshot,
//! view config)` to the target geometry plus a [`Directive`] telling the
//! host what to animate. It never performs timed animation itself; every
//! descriptor only states "attribute A goes from X to Y".
//!
//! # Minimality
//!
//! An attribute whose old and new computed values are equal produces no
//! transition. The color transition is additionally gated on the
//! generation: two solid snapshots of the same generation never animate
//! color, even if the alert flag toggled. Fill and sub-generation splits are
//! evaluated independently of color.

use heapmap_core::{Result, Segment, SubGeneration};
use heapmap_layout::{SegmentBody, SegmentGeometry, ViewConfig};
use heapmap_style::Rgb;

/// A visual attribute the host can animate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Attribute {
    /// Outer rectangle width.
    Width,
    /// Rectangle color.
    Color,
    /// Width of the live-data fill of a solid segment.
    Fill,
    /// Width of one ephemeral sub-generation bar.
    SubWidth(SubGeneration),
    /// Left offset of one ephemeral sub-generation bar. Gen2 is pinned at 0
    /// and never appears here.
    SubOffset(SubGeneration),
}

/// One attribute change for the host to animate.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Transition {
    /// A length in layout units.
    Length {
        attribute: Attribute,
        from: f64,
        to: f64,
    },
    Color { from: Rgb, to: Rgb },
}

impl Transition {
    #[inline]
    pub fn attribute(&self) -> Attribute {
        match self {
            Self::Length { attribute, .. } => *attribute,
            Self::Color { .. } => Attribute::Color,
        }
    }
}

/// Lifecycle instruction for a visual slot.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Directive {
    /// First snapshot: grow width from `from` (0) to `to`. Color and fill are
    /// set directly to their target values.
    Appear { from: f64, to: f64 },
    /// New snapshot for a live slot. May be empty when nothing changed.
    Update(Vec<Transition>),
    /// Shrink width from `from` to `to` (0), then call `complete`.
    Remove { from: f64, to: f64 },
    /// Removal finished; the host may drop the slot.
    Release,
}

impl Directive {
    /// Transitions carried by an update; empty for other directives.
    pub fn transitions(&self) -> &[Transition] {
        match self {
            Self::Update(transitions) => transitions,
            Self::Appear { .. } | Self::Remove { .. } | Self::Release => &[],
        }
    }
}

/// Everything the host needs for one slot on one recompute.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SegmentPlan {
    /// Heap label shown on the rectangle; not part of layout math.
    pub heap: usize,
    /// Target values.
    pub geometry: SegmentGeometry,
    pub directive: Directive,
}

/// Plan the visual update of one slot.
///
/// `previous` is `None` on the slot's first snapshot. The previous snapshot
/// is measured under the current `config`, so toggling a mode switch between
/// snapshots animates the resulting width change.
pub fn plan(
    previous: Option<&Segment>,
    current: &Segment,
    heap: usize,
    config: &ViewConfig,
) -> Result<SegmentPlan> {
    let geometry = SegmentGeometry::compute(current, config)?;
    let directive = match previous {
        None => Directive::Appear {
            from: 0.0,
            to: geometry.width,
        },
        Some(previous) => {
            let before = SegmentGeometry::compute(previous, config)?;
            Directive::Update(diff(&before, &geometry))
        }
    };
    Ok(SegmentPlan {
        heap,
        geometry,
        directive,
    })
}

/// Transitions needed to move from `old` to `new`.
#[must_use]
pub fn diff(old: &SegmentGeometry, new: &SegmentGeometry) -> Vec<Transition> {
    let mut transitions = Vec::new();
    let mut length = |attribute: Attribute, from: f64, to: f64| {
        if from != to {
            transitions.push(Transition::Length {
                attribute,
                from,
                to,
            });
        }
    };

    length(Attribute::Width, old.width, new.width);

    let recolor = match (&old.body, &new.body) {
        (
            SegmentBody::Solid {
                generation: before, ..
            },
            SegmentBody::Solid {
                generation: after, ..
            },
        ) => before != after,
        (SegmentBody::Ephemeral(_), SegmentBody::Ephemeral(_)) => false,
        // Kind changed between snapshots.
        _ => true,
    };

    match (&old.body, &new.body) {
        (
            SegmentBody::Solid {
                fill_ratio: before, ..
            },
            SegmentBody::Solid {
                fill_ratio: after,
                fill_width,
                ..
            },
        ) => {
            if before != after {
                length(Attribute::Fill, new.width * before, *fill_width);
            }
        }
        _ => length(
            Attribute::Fill,
            old.fill_width().unwrap_or(0.0),
            new.fill_width().unwrap_or(0.0),
        ),
    }

    if old.is_ephemeral() || new.is_ephemeral() {
        for sub in SubGeneration::LAYOUT_ORDER {
            let (old_offset, old_width) = bar_of(old, sub);
            let (new_offset, new_width) = bar_of(new, sub);
            length(Attribute::SubWidth(sub), old_width, new_width);
            if sub != SubGeneration::Gen2 {
                length(Attribute::SubOffset(sub), old_offset, new_offset);
            }
        }
    }

    if recolor && old.color != new.color {
        transitions.push(Transition::Color {
            from: old.color,
            to: new.color,
        });
    }

    transitions
}

/// `(offset, width)` of a sub-generation bar, zero for solid segments.
fn bar_of(geometry: &SegmentGeometry, sub: SubGeneration) -> (f64, f64) {
    geometry
        .ephemeral()
        .map(|layout| {
            let bar = layout.bar(sub);
            (bar.offset, bar.width)
        })
        .unwrap_or((0.0, 0.0))
}

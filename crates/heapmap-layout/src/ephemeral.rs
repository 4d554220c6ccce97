#![forbid(unsafe_code)]

//! Ephemeral segment sub-layout.
//!
//! An ephemeral segment co-hosts gen0, gen1, and gen2. They are drawn as
//! three adjacent bars, oldest first:
//!
//! ```text
//! |<------ gen2 ------>|<- gen1 ->|<gen0>|
//! 0                    w2         w2+w1   width
//! ```
//!
//! # Invariants
//!
//! - gen2 starts at 0, gen1 at `w2`, gen0 at `w2 + w1`.
//! - `w2 + w1 + w0 == width` up to floating-point rounding.
//! - A segment whose sub-generation total is 0 yields three zero-width bars
//!   at offset 0; no division is attempted.

use heapmap_core::{Segment, SubGeneration, sub_generation_total};
use heapmap_style::{Rgb, sub_generation_color};

/// One sub-generation bar.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SubBar {
    pub generation: SubGeneration,
    /// Left offset inside the segment rectangle.
    pub offset: f64,
    pub width: f64,
    pub color: Rgb,
}

/// The three bars of an ephemeral segment in layout order (gen2, gen1, gen0).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EphemeralLayout {
    bars: [SubBar; 3],
}

impl EphemeralLayout {
    /// Partition `width` in proportion to the segment's sub-generation bytes.
    #[must_use]
    pub fn compute(segment: &Segment, width: f64) -> Self {
        let total = sub_generation_total(segment);
        let mut offset = 0.0;
        let bars = SubGeneration::LAYOUT_ORDER.map(|generation| {
            let bar_width = if total == 0 {
                0.0
            } else {
                segment.sub_generation_length(generation) as f64 * width / total as f64
            };
            let bar = SubBar {
                generation,
                offset,
                width: bar_width,
                color: sub_generation_color(generation),
            };
            offset += bar_width;
            bar
        });
        Self { bars }
    }

    /// Bars in drawing order.
    #[inline]
    pub fn bars(&self) -> &[SubBar; 3] {
        &self.bars
    }

    #[inline]
    pub fn bar(&self, generation: SubGeneration) -> &SubBar {
        &self.bars[generation.layout_index()]
    }

    /// Sum of the three bar widths.
    pub fn total_width(&self) -> f64 {
        self.bars.iter().map(|bar| bar.width).sum()
    }
}

#![forbid(unsafe_code)]

//! Generation palette.
//!
//! The lookup is a total `match` over [`Generation`]: adding a variant
//! without a color fails to compile. The alert override is applied after
//! the lookup, so a flagged segment is always drawn in [`ALERT_COLOR`].

use heapmap_core::{Generation, Segment, SubGeneration};

use crate::color::Rgb;

/// Color forced onto segments carrying an alert flag.
pub const ALERT_COLOR: Rgb = Rgb::RED;

/// Background of an ephemeral segment behind its three sub-generation bars.
pub const EPHEMERAL_BACKGROUND: Rgb = Rgb::LIGHT_GRAY;

/// Canonical color of a generation.
#[inline]
pub const fn generation_color(generation: Generation) -> Rgb {
    match generation {
        Generation::Generation0 => Rgb::POWDER_BLUE,
        Generation::Generation1 => Rgb::SKY_BLUE,
        Generation::Generation2 => Rgb::CORNFLOWER_BLUE,
        Generation::Large => Rgb::ORANGE,
        Generation::Pinned => Rgb::PINK,
        Generation::Frozen => Rgb::GRAY,
        Generation::Unknown => Rgb::RED,
    }
}

/// Color of one sub-generation bar inside an ephemeral segment.
#[inline]
pub const fn sub_generation_color(sub: SubGeneration) -> Rgb {
    generation_color(sub.generation())
}

/// Resolved fill color of a non-ephemeral segment.
///
/// Exactly one color per call: the generation color, replaced by
/// [`ALERT_COLOR`] when the segment has an alert flag set.
pub fn segment_color(segment: &Segment) -> Rgb {
    let color = generation_color(segment.generation);
    if segment.has_alert_flag() {
        tracing::trace!(
            segment = segment.start,
            generation = %segment.generation,
            "alert flag overrides generation color"
        );
        return ALERT_COLOR;
    }
    color
}

#[cfg(test)]
mod tests {
    use super::*;
    use heapmap_core::SegmentFlags;
    use tracing_test::traced_test;

    #[test]
    fn every_generation_has_a_color() {
        let expected = [
            (Generation::Generation0, Rgb::POWDER_BLUE),
            (Generation::Generation1, Rgb::SKY_BLUE),
            (Generation::Generation2, Rgb::CORNFLOWER_BLUE),
            (Generation::Large, Rgb::ORANGE),
            (Generation::Pinned, Rgb::PINK),
            (Generation::Frozen, Rgb::GRAY),
            (Generation::Unknown, Rgb::RED),
        ];
        for (generation, color) in expected {
            assert_eq!(generation_color(generation), color, "{generation}");
        }
    }

    #[test]
    fn sub_generations_share_generation_colors() {
        assert_eq!(sub_generation_color(SubGeneration::Gen0), Rgb::POWDER_BLUE);
        assert_eq!(sub_generation_color(SubGeneration::Gen1), Rgb::SKY_BLUE);
        assert_eq!(
            sub_generation_color(SubGeneration::Gen2),
            Rgb::CORNFLOWER_BLUE
        );
    }

    #[test]
    fn unflagged_segment_uses_generation_color() {
        let segment = Segment::solid(Generation::Pinned, 0);
        assert_eq!(segment_color(&segment), Rgb::PINK);
    }

    #[traced_test]
    #[test]
    fn alert_flag_wins_over_generation() {
        let segment =
            Segment::solid(Generation::Large, 0x10).with_flags(SegmentFlags::DECOMMITTED);
        assert_eq!(segment_color(&segment), ALERT_COLOR);
        assert!(logs_contain("alert flag overrides generation color"));
    }
}

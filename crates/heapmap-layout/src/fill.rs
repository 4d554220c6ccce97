#![forbid(unsafe_code)]

//! Live-data fill of a solid segment.

use heapmap_core::{Segment, effective_size};

/// Fraction of the segment's effective size holding live objects.
///
/// An empty segment has ratio 0; no division happens.
#[must_use]
pub fn fill_ratio(segment: &Segment, include_reserved: bool) -> f64 {
    let size = effective_size(segment, include_reserved);
    if size == 0 {
        return 0.0;
    }
    segment.live_length() as f64 / size as f64
}

/// Width of the live portion of a rectangle `width` units wide.
#[inline]
#[must_use]
pub fn fill_width(width: f64, ratio: f64) -> f64 {
    width * ratio
}

#[cfg(test)]
mod tests {
    use super::*;
    use heapmap_core::Generation;

    #[test]
    fn ratio_over_committed_or_full_reservation() {
        let segment = Segment::solid(Generation::Generation1, 0)
            .with_reserved(300)
            .with_committed(100)
            .with_live(50);
        assert_eq!(fill_ratio(&segment, false), 0.5);
        assert_eq!(fill_ratio(&segment, true), 0.125);
    }

    #[test]
    fn empty_segment_has_zero_ratio() {
        let segment = Segment::solid(Generation::Frozen, 0);
        assert_eq!(fill_ratio(&segment, false), 0.0);
        assert_eq!(fill_ratio(&segment, true), 0.0);
    }

    #[test]
    fn fill_width_scales_ratio() {
        assert_eq!(fill_width(80.0, 0.25), 20.0);
        assert_eq!(fill_width(0.0, 0.9), 0.0);
    }
}

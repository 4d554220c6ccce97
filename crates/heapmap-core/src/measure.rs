#![forbid(unsafe_code)]

//! Measurement extraction: normalized size queries over a [`Segment`].
//!
//! All functions are pure and total. Sums saturate at `u64::MAX`.

use crate::generation::SubGeneration;
use crate::segment::Segment;

/// Effective size in bytes: committed, plus reserved when `include_reserved`.
#[inline]
pub const fn effective_size(segment: &Segment, include_reserved: bool) -> u64 {
    if include_reserved {
        segment
            .reserved_length()
            .saturating_add(segment.committed_length())
    } else {
        segment.committed_length()
    }
}

/// Sum of the gen0, gen1, and gen2 lengths of an ephemeral segment.
///
/// May be zero for a freshly created or fully collected segment.
#[inline]
pub const fn sub_generation_total(segment: &Segment) -> u64 {
    segment
        .sub_generation_length(SubGeneration::Gen0)
        .saturating_add(segment.sub_generation_length(SubGeneration::Gen1))
        .saturating_add(segment.sub_generation_length(SubGeneration::Gen2))
}

/// Size used for layout under the given scale mode.
///
/// Ephemeral segments in bucketed mode (`real_size == false`) measure their
/// sub-generation total: bucketed mode only needs proportions, so the bytes
/// actually occupied by gen0..gen2 are the denominator. Every other case
/// uses [`effective_size`].
#[inline]
pub const fn layout_size(segment: &Segment, real_size: bool, include_reserved: bool) -> u64 {
    if segment.is_ephemeral() && !real_size {
        sub_generation_total(segment)
    } else {
        effective_size(segment, include_reserved)
    }
}

#![forbid(unsafe_code)]

//! Segment snapshots as returned by a runtime inspector.
//!
//! A [`Segment`] is immutable once produced. Builders exist for tests and
//! adapters; nothing in heapmap mutates a segment after handing it over.
//!
//! # Invariants
//!
//! - `committed.length() <= reserved.length()`
//! - `object_range.length() <= committed.length()`
//! - every range has `end >= start`
//!
//! [`Segment::validate`] checks all three and reports the first violation.

use bitflags::bitflags;

use crate::error::{Error, Result};
use crate::generation::{Generation, SegmentKind, SubGeneration};
use crate::range::MemoryRange;

bitflags! {
    /// Segment flag word, mirroring the runtime's own bit assignments.
    ///
    /// Unknown bits are retained so flags survive a round trip untouched.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct SegmentFlags: u32 {
        const READ_ONLY     = 1;
        const IN_RANGE      = 2;
        const LOH           = 8;
        const SWEPT         = 16;
        /// Pages were handed back to the OS; drawn with the alert color.
        const DECOMMITTED   = 32;
        const MA_COMMITTED  = 64;
        const MA_PCOMMITTED = 128;
        const UOH_DELETE    = 256;
        const POH           = 512;

        const _ = !0;
    }
}

impl SegmentFlags {
    /// Flags that force the alert color regardless of generation.
    pub const ALERT: Self = Self::DECOMMITTED;
}

/// An immutable snapshot of one heap segment.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    /// Base address; the default slot identity.
    pub start: u64,
    pub kind: SegmentKind,
    /// Meaningful only for non-ephemeral kinds.
    pub generation: Generation,
    #[cfg_attr(feature = "serde", serde(default))]
    pub flags: SegmentFlags,
    pub committed: MemoryRange,
    pub reserved: MemoryRange,
    /// Portion of the segment holding live object data.
    pub object_range: MemoryRange,
    #[cfg_attr(feature = "serde", serde(default))]
    pub generation0: MemoryRange,
    #[cfg_attr(feature = "serde", serde(default))]
    pub generation1: MemoryRange,
    #[cfg_attr(feature = "serde", serde(default))]
    pub generation2: MemoryRange,
}

impl Segment {
    /// Create an empty segment at `start`. All ranges are empty.
    #[must_use]
    pub const fn new(kind: SegmentKind, generation: Generation, start: u64) -> Self {
        Self {
            start,
            kind,
            generation,
            flags: SegmentFlags::empty(),
            committed: MemoryRange::empty(start),
            reserved: MemoryRange::empty(start),
            object_range: MemoryRange::empty(start),
            generation0: MemoryRange::empty(start),
            generation1: MemoryRange::empty(start),
            generation2: MemoryRange::empty(start),
        }
    }

    /// Create a non-ephemeral segment whose kind follows its generation.
    #[must_use]
    pub const fn solid(generation: Generation, start: u64) -> Self {
        let kind = match generation {
            Generation::Generation0 => SegmentKind::Generation0,
            Generation::Generation1 => SegmentKind::Generation1,
            Generation::Generation2 => SegmentKind::Generation2,
            Generation::Large => SegmentKind::Large,
            Generation::Pinned => SegmentKind::Pinned,
            Generation::Frozen => SegmentKind::Frozen,
            Generation::Unknown => SegmentKind::Unknown,
        };
        Self::new(kind, generation, start)
    }

    /// Create an ephemeral segment.
    #[must_use]
    pub const fn ephemeral(start: u64) -> Self {
        Self::new(SegmentKind::Ephemeral, Generation::Generation0, start)
    }

    /// Set committed memory to `length` bytes from the segment start.
    #[must_use]
    pub const fn with_committed(mut self, length: u64) -> Self {
        self.committed = MemoryRange::sized(self.start, length);
        self
    }

    /// Set reserved memory to `length` bytes from the segment start.
    #[must_use]
    pub const fn with_reserved(mut self, length: u64) -> Self {
        self.reserved = MemoryRange::sized(self.start, length);
        self
    }

    /// Set the live object range to `length` bytes from the segment start.
    #[must_use]
    pub const fn with_live(mut self, length: u64) -> Self {
        self.object_range = MemoryRange::sized(self.start, length);
        self
    }

    /// Set the byte length of one sub-generation of an ephemeral segment.
    ///
    /// Sub-generation ranges are laid out back to back (gen2, gen1, gen0)
    /// from the segment start, matching how they are drawn.
    #[must_use]
    pub fn with_sub_generation(mut self, sub: SubGeneration, length: u64) -> Self {
        match sub {
            SubGeneration::Gen0 => self.generation0 = MemoryRange::sized(0, length),
            SubGeneration::Gen1 => self.generation1 = MemoryRange::sized(0, length),
            SubGeneration::Gen2 => self.generation2 = MemoryRange::sized(0, length),
        }
        self.relocate_sub_generations();
        self
    }

    #[must_use]
    pub const fn with_flags(mut self, flags: SegmentFlags) -> Self {
        self.flags = flags;
        self
    }

    fn relocate_sub_generations(&mut self) {
        let mut cursor = self.start;
        for sub in SubGeneration::LAYOUT_ORDER {
            let length = self.sub_generation_length(sub);
            let range = MemoryRange::sized(cursor, length);
            cursor = range.end;
            match sub {
                SubGeneration::Gen0 => self.generation0 = range,
                SubGeneration::Gen1 => self.generation1 = range,
                SubGeneration::Gen2 => self.generation2 = range,
            }
        }
    }

    #[inline]
    pub const fn committed_length(&self) -> u64 {
        self.committed.length()
    }

    #[inline]
    pub const fn reserved_length(&self) -> u64 {
        self.reserved.length()
    }

    #[inline]
    pub const fn live_length(&self) -> u64 {
        self.object_range.length()
    }

    /// Byte length of one sub-generation. Only meaningful for ephemeral segments.
    #[inline]
    pub const fn sub_generation_length(&self, sub: SubGeneration) -> u64 {
        match sub {
            SubGeneration::Gen0 => self.generation0.length(),
            SubGeneration::Gen1 => self.generation1.length(),
            SubGeneration::Gen2 => self.generation2.length(),
        }
    }

    #[inline]
    pub const fn is_ephemeral(&self) -> bool {
        self.kind.is_ephemeral()
    }

    /// Whether a flag forcing the alert color is set.
    #[inline]
    pub const fn has_alert_flag(&self) -> bool {
        self.flags.intersects(SegmentFlags::ALERT)
    }

    /// Check the snapshot preconditions.
    ///
    /// Violations are reported, never repaired or clamped.
    pub fn validate(&self) -> Result<()> {
        for range in [
            &self.committed,
            &self.reserved,
            &self.object_range,
            &self.generation0,
            &self.generation1,
            &self.generation2,
        ] {
            range.check()?;
        }

        let committed = self.committed_length();
        let reserved = self.reserved_length();
        if committed > reserved {
            crate::logging::warn!(
                segment = self.start,
                committed,
                reserved,
                "segment rejected: committed exceeds reserved"
            );
            return Err(Error::CommittedExceedsReserved {
                segment: self.start,
                committed,
                reserved,
            });
        }

        let live = self.live_length();
        if live > committed {
            crate::logging::warn!(
                segment = self.start,
                live,
                committed,
                "segment rejected: live range exceeds committed"
            );
            return Err(Error::LiveExceedsCommitted {
                segment: self.start,
                live,
                committed,
            });
        }

        Ok(())
    }
}

/// One heap of the managed runtime and its segments in address order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SubHeap {
    pub index: usize,
    pub segments: Vec<Segment>,
}

impl SubHeap {
    #[must_use]
    pub fn new(index: usize, segments: Vec<Segment>) -> Self {
        Self { index, segments }
    }

    /// Validate every segment, stopping at the first violation.
    pub fn validate(&self) -> Result<()> {
        self.segments.iter().try_for_each(Segment::validate)
    }
}

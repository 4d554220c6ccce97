#![forbid(unsafe_code)]

//! Generation and segment-kind classification.
//!
//! Both enums are closed: every match over them is exhaustive, so a color or
//! layout table that forgets a variant is a compile error rather than a
//! runtime fallthrough. Raw codes coming from an inspector go through the
//! fallible `TryFrom<u8>` conversions, which is the only place an unmapped
//! value can surface.

use std::fmt;

use crate::error::Error;

/// Age-based classification of a non-ephemeral segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Generation {
    Generation0,
    Generation1,
    Generation2,
    Large,
    Pinned,
    Frozen,
    Unknown,
}

impl Generation {
    /// Every generation, in code order.
    pub const ALL: [Generation; 7] = [
        Self::Generation0,
        Self::Generation1,
        Self::Generation2,
        Self::Large,
        Self::Pinned,
        Self::Frozen,
        Self::Unknown,
    ];

    /// Numeric code as reported by the inspector.
    #[inline]
    pub const fn code(self) -> u8 {
        match self {
            Self::Generation0 => 0,
            Self::Generation1 => 1,
            Self::Generation2 => 2,
            Self::Large => 3,
            Self::Pinned => 4,
            Self::Frozen => 5,
            Self::Unknown => 6,
        }
    }

    /// Short display label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Generation0 => "gen0",
            Self::Generation1 => "gen1",
            Self::Generation2 => "gen2",
            Self::Large => "loh",
            Self::Pinned => "poh",
            Self::Frozen => "frozen",
            Self::Unknown => "unknown",
        }
    }
}

impl TryFrom<u8> for Generation {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|g| g.code() == code)
            .ok_or(Error::UnknownGeneration(code))
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Structural kind of a segment.
///
/// `Ephemeral` is the only kind partitioned into sub-generations; every other
/// kind is drawn as a single solid rectangle colored by its [`Generation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SegmentKind {
    Generation0,
    Generation1,
    Generation2,
    Large,
    Pinned,
    Frozen,
    Ephemeral,
    Unknown,
}

impl SegmentKind {
    pub const ALL: [SegmentKind; 8] = [
        Self::Generation0,
        Self::Generation1,
        Self::Generation2,
        Self::Large,
        Self::Pinned,
        Self::Frozen,
        Self::Ephemeral,
        Self::Unknown,
    ];

    #[inline]
    pub const fn code(self) -> u8 {
        match self {
            Self::Generation0 => 0,
            Self::Generation1 => 1,
            Self::Generation2 => 2,
            Self::Large => 3,
            Self::Pinned => 4,
            Self::Frozen => 5,
            Self::Ephemeral => 6,
            Self::Unknown => 7,
        }
    }

    #[inline]
    pub const fn is_ephemeral(self) -> bool {
        matches!(self, Self::Ephemeral)
    }
}

impl TryFrom<u8> for SegmentKind {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|k| k.code() == code)
            .ok_or(Error::UnknownSegmentKind(code))
    }
}

/// One of the three generations co-hosted by an ephemeral segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SubGeneration {
    Gen0,
    Gen1,
    Gen2,
}

impl SubGeneration {
    /// Left-to-right drawing order inside an ephemeral segment (oldest first).
    pub const LAYOUT_ORDER: [SubGeneration; 3] = [Self::Gen2, Self::Gen1, Self::Gen0];

    /// The full generation this sub-generation corresponds to.
    #[inline]
    pub const fn generation(self) -> Generation {
        match self {
            Self::Gen0 => Generation::Generation0,
            Self::Gen1 => Generation::Generation1,
            Self::Gen2 => Generation::Generation2,
        }
    }

    /// Position in [`Self::LAYOUT_ORDER`].
    #[inline]
    pub const fn layout_index(self) -> usize {
        match self {
            Self::Gen2 => 0,
            Self::Gen1 => 1,
            Self::Gen0 => 2,
        }
    }
}

#![forbid(unsafe_code)]

//! Per-segment geometry.

use heapmap_core::{Generation, Result, Segment};
use heapmap_style::{EPHEMERAL_BACKGROUND, Rgb, segment_color};

use crate::config::ViewConfig;
use crate::ephemeral::EphemeralLayout;
use crate::fill::{fill_ratio, fill_width};
use crate::scale::{SEGMENT_HEIGHT, ScaleMode, margin_for};

/// What is drawn inside the segment rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SegmentBody {
    /// A single-generation segment with a live-data fill.
    Solid {
        generation: Generation,
        fill_ratio: f64,
        fill_width: f64,
    },
    /// An ephemeral segment split into gen2/gen1/gen0 bars.
    Ephemeral(EphemeralLayout),
}

/// Target geometry and color of one segment rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SegmentGeometry {
    /// Width in layout units, always >= 0.
    pub width: f64,
    pub height: f64,
    /// Gap on each side of the rectangle.
    pub margin: f64,
    /// Rectangle color: generation color (or alert) for solid segments,
    /// light gray behind ephemeral bars.
    pub color: Rgb,
    pub body: SegmentBody,
}

impl SegmentGeometry {
    /// Compute the geometry of `segment` under `config`.
    ///
    /// Fails only when the segment violates its snapshot preconditions.
    pub fn compute(segment: &Segment, config: &ViewConfig) -> Result<Self> {
        segment.validate()?;
        let mode = ScaleMode::from_config(config);

        if segment.is_ephemeral() {
            let width = mode.ephemeral_width(segment);
            return Ok(Self {
                width,
                height: SEGMENT_HEIGHT,
                margin: margin_for(width),
                color: EPHEMERAL_BACKGROUND,
                body: SegmentBody::Ephemeral(EphemeralLayout::compute(segment, width)),
            });
        }

        let width = mode.solid_width(segment);
        let ratio = fill_ratio(segment, config.show_reserved_memory);
        Ok(Self {
            width,
            height: SEGMENT_HEIGHT,
            margin: margin_for(width),
            color: segment_color(segment),
            body: SegmentBody::Solid {
                generation: segment.generation,
                fill_ratio: ratio,
                fill_width: fill_width(width, ratio),
            },
        })
    }

    #[inline]
    pub fn is_ephemeral(&self) -> bool {
        matches!(self.body, SegmentBody::Ephemeral(_))
    }

    /// Live-data fill ratio; `None` for ephemeral segments.
    pub fn fill_ratio(&self) -> Option<f64> {
        match self.body {
            SegmentBody::Solid { fill_ratio, .. } => Some(fill_ratio),
            SegmentBody::Ephemeral(_) => None,
        }
    }

    /// Live-data fill width; `None` for ephemeral segments.
    pub fn fill_width(&self) -> Option<f64> {
        match self.body {
            SegmentBody::Solid { fill_width, .. } => Some(fill_width),
            SegmentBody::Ephemeral(_) => None,
        }
    }

    /// Sub-generation bars; `None` for solid segments.
    pub fn ephemeral(&self) -> Option<&EphemeralLayout> {
        match &self.body {
            SegmentBody::Ephemeral(layout) => Some(layout),
            SegmentBody::Solid { .. } => None,
        }
    }

    /// Horizontal space taken including both margins.
    #[inline]
    pub fn outer_width(&self) -> f64 {
        self.width + 2.0 * self.margin
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heapmap_core::{BYTES_PER_MB, Error, SegmentFlags, SubGeneration};
    use heapmap_style::ALERT_COLOR;

    const MB: u64 = BYTES_PER_MB;

    #[test]
    fn solid_segment_in_real_size_mode() {
        let segment = Segment::solid(Generation::Large, 0)
            .with_reserved(16 * MB)
            .with_committed(8 * MB)
            .with_live(2 * MB);
        let geometry = SegmentGeometry::compute(&segment, &ViewConfig::new(true, false))
            .expect("valid segment");
        assert_eq!(geometry.width, 80.0);
        assert_eq!(geometry.height, 40.0);
        assert_eq!(geometry.margin, 1.0);
        assert_eq!(geometry.color, Rgb::ORANGE);
        assert_eq!(geometry.fill_ratio(), Some(0.25));
        assert_eq!(geometry.fill_width(), Some(20.0));
        assert_eq!(geometry.outer_width(), 82.0);
    }

    #[test]
    fn fill_follows_show_reserved_in_bucketed_mode() {
        let segment = Segment::solid(Generation::Generation2, 0)
            .with_reserved(3 * MB)
            .with_committed(MB)
            .with_live(MB);
        let committed_only =
            SegmentGeometry::compute(&segment, &ViewConfig::new(false, false)).expect("valid");
        assert_eq!(committed_only.width, 40.0);
        assert_eq!(committed_only.fill_ratio(), Some(1.0));

        let with_reserved =
            SegmentGeometry::compute(&segment, &ViewConfig::new(false, true)).expect("valid");
        assert_eq!(with_reserved.fill_ratio(), Some(0.25));
        assert_eq!(with_reserved.fill_width(), Some(10.0));
    }

    #[test]
    fn alert_flag_overrides_color() {
        let segment = Segment::solid(Generation::Generation0, 0).with_flags(SegmentFlags::DECOMMITTED);
        let geometry = SegmentGeometry::compute(&segment, &ViewConfig::default()).expect("valid");
        assert_eq!(geometry.color, ALERT_COLOR);
    }

    #[test]
    fn empty_solid_segment_in_real_size_mode_has_no_margin() {
        let segment = Segment::solid(Generation::Pinned, 0);
        let geometry = SegmentGeometry::compute(&segment, &ViewConfig::new(true, true)).expect("valid");
        assert_eq!(geometry.width, 0.0);
        assert_eq!(geometry.margin, 0.0);
        assert_eq!(geometry.fill_width(), Some(0.0));
    }

    #[test]
    fn empty_ephemeral_segment_in_real_size_mode_has_no_margin() {
        let segment = Segment::ephemeral(0)
            .with_reserved(256 * 1024)
            .with_committed(256 * 1024);
        let geometry = SegmentGeometry::compute(&segment, &ViewConfig::new(true, false)).expect("valid");
        assert!(geometry.is_ephemeral());
        assert_eq!(geometry.width, 0.0);
        assert_eq!(geometry.margin, 0.0);
        assert_eq!(geometry.outer_width(), 0.0);
    }

    #[test]
    fn ephemeral_bucketed_composition_bar() {
        let segment = Segment::ephemeral(0)
            .with_reserved(256 * MB)
            .with_committed(32 * MB)
            .with_sub_generation(SubGeneration::Gen0, 10)
            .with_sub_generation(SubGeneration::Gen1, 30)
            .with_sub_generation(SubGeneration::Gen2, 60);
        let geometry = SegmentGeometry::compute(&segment, &ViewConfig::default()).expect("valid");
        assert!(geometry.is_ephemeral());
        assert_eq!(geometry.width, 200.0);
        assert_eq!(geometry.margin, 1.0);
        assert_eq!(geometry.color, EPHEMERAL_BACKGROUND);
        assert_eq!(geometry.fill_ratio(), None);

        let layout = geometry.ephemeral().expect("ephemeral body");
        assert_eq!(layout.bar(SubGeneration::Gen2).width, 120.0);
        assert_eq!(layout.bar(SubGeneration::Gen1).offset, 120.0);
        assert_eq!(layout.bar(SubGeneration::Gen0).offset, 180.0);
    }

    #[test]
    fn ephemeral_real_size_partitions_megabyte_width() {
        let segment = Segment::ephemeral(0)
            .with_reserved(10 * MB)
            .with_committed(10 * MB)
            .with_sub_generation(SubGeneration::Gen0, MB)
            .with_sub_generation(SubGeneration::Gen2, 3 * MB);
        let geometry = SegmentGeometry::compute(&segment, &ViewConfig::new(true, false)).expect("valid");
        assert_eq!(geometry.width, 100.0);
        let layout = geometry.ephemeral().expect("ephemeral body");
        assert_eq!(layout.bar(SubGeneration::Gen2).width, 75.0);
        assert_eq!(layout.bar(SubGeneration::Gen0).width, 25.0);
        assert_eq!(layout.bar(SubGeneration::Gen0).offset, 75.0);
    }

    #[test]
    fn precondition_violation_propagates() {
        let segment = Segment::solid(Generation::Large, 0x77).with_committed(MB);
        assert!(matches!(
            SegmentGeometry::compute(&segment, &ViewConfig::default()),
            Err(Error::CommittedExceedsReserved { segment: 0x77, .. })
        ));
    }
}

#![forbid(unsafe_code)]

//! Horizontal placement of one heap's segment rectangles.
//!
//! Rectangles sit left to right in address order, each surrounded by its own
//! margin. Margins do not collapse: two neighbours with margin 1 are 2 units
//! apart.

use crate::geometry::SegmentGeometry;

/// Left edges of a row of rectangles and the row's total extent.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RowPlacement {
    /// Left edge of each rectangle, parallel to the input slice.
    pub positions: Vec<f64>,
    /// Width from the row origin to the right margin of the last rectangle.
    pub extent: f64,
}

/// Place `geometries` left to right starting at 0.
#[must_use]
pub fn place_row<'a>(geometries: impl IntoIterator<Item = &'a SegmentGeometry>) -> RowPlacement {
    let mut cursor = 0.0;
    let positions = geometries
        .into_iter()
        .map(|geometry| {
            let x = cursor + geometry.margin;
            cursor += geometry.outer_width();
            x
        })
        .collect();
    RowPlacement {
        positions,
        extent: cursor,
    }
}

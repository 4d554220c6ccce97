#![forbid(unsafe_code)]

//! Color vocabulary for heapmap.
//!
//! # Role in heapmap
//! `heapmap-style` maps generations to their canonical colors and provides
//! the small RGB type the rest of the workspace speaks. It has no notion of
//! geometry or of any drawing toolkit.
//!
//! # This crate provides
//! - [`Rgb`] with the named colors used by the heap map.
//! - [`generation_color`] and [`segment_color`] for the palette lookup with
//!   alert-flag override.
//! - [`lerp`] so hosts can interpolate color transitions.

/// RGB color type and named colors.
pub mod color;
/// Generation palette and alert override.
pub mod palette;

pub use color::{Rgb, lerp};
pub use palette::{
    ALERT_COLOR, EPHEMERAL_BACKGROUND, generation_color, segment_color, sub_generation_color,
};

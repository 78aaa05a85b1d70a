//! Slider geometry and the index ↔ thumb projection.
//!
//! The host owns the actual slider element. This layer only measures it
//! through [`SliderSurface`] and computes where the thumb belongs.
//!
//! # Modules
//!
//! - [`slider`]: Geometry, surface trait and the pure mapping functions

pub mod slider;

pub use slider::{
    accessible_value, index_to_offset, offset_to_index, pointer_offset, FixedSurface,
    SliderGeometry, SliderSurface,
};

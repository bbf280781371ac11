//! Color model shared by rasterizers, shaders, and surfaces.
//!
//! Scope:
//! - 8-bit RGBA color with byte and normalized-float construction
//! - channel-wise interpolation for procedural shading
//!
//! Geometry types remain in `coords`.

mod color;

pub use color::Color;

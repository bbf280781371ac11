//! Tiamat engine crate.
//!
//! CPU-only 2D rasterization and geometry: triangles and glyph outlines in,
//! pixels out through caller-supplied sinks, plus the oriented/axis-aligned
//! bounding geometry used for hit-testing and overlays. Windowing, scene
//! ownership, and asset loading live in higher layers.

pub mod coords;
pub mod logging;
pub mod paint;
pub mod primitive;
pub mod raster;
pub mod shade;
pub mod surface;
pub mod text;
pub mod time;

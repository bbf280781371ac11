//! Triangle rasterization.
//!
//! Responsibilities:
//! - classify pixel centers against a triangle's three edge functions
//! - partition large bounding boxes into tiles and fan them out over a
//!   scoped worker pool, joining before the call returns
//!
//! Sinks receive pixels concurrently from tile workers. Tiles are spatially
//! disjoint, so a coordinate-indexed target needs no locking; any cross-tile
//! aggregation a sink keeps (counters, sets) must be synchronized by the
//! caller. No emission order is promised — only the emitted pixel set is
//! deterministic across thread counts.

mod pixel;
mod triangle;

pub use pixel::Pixel;
pub use triangle::{Threading, Triangle, fill_triangle, fill_triangle_with};

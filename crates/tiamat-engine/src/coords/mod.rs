//! Coordinate and geometry types shared across the engine.
//!
//! Canonical space:
//! - Pixel coordinates, origin top-left
//! - +X right, +Y down
//! - Geometry math in `f64`; rasterizers emit integer pixel coordinates
//!
//! Degenerate inputs (zero-length box sides, non-finite points) propagate
//! through as IEEE NaN/Inf rather than panicking; validity is the caller's
//! contract.

mod box2;
mod mat3;
mod obb;
mod vec2;

pub use box2::Box2;
pub use mat3::Mat3;
pub use obb::OrientedBox;
pub use vec2::Vec2;

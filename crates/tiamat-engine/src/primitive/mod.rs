//! Primitive state and ownership.
//!
//! Responsibilities:
//! - pose (position, anchor, scale, rotation) with monotonic versioning
//! - draw attributes: depth, color, visibility, shader handle
//! - world-space bounding geometry derived from the pose, with a lazily
//!   populated oriented-box cache
//! - an owning arena with stable handles and depth-ordered iteration
//!
//! Primitives are mutated only between frames; the caches assume nothing
//! touches a primitive while a fill that reads it is in flight.

mod arena;
mod state;

pub use arena::PrimitiveArena;
pub use state::{Primitive, PrimitiveId};

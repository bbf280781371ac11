//! Time subsystem.
//!
//! Frame timing for animation and shading, decoupled from any runtime.
//! Intended usage:
//! - one `FrameClock` per render loop
//! - call `tick()` once per frame; feed `FrameTime::elapsed` to
//!   `ShaderInput::t` and `FrameTime::dt` to animation updates

mod clock;

pub use clock::{FrameClock, FrameTime};

//! Procedural per-pixel shading.
//!
//! A shader maps a UV coordinate plus elapsed time to a color, replacing a
//! primitive's flat fill when shading is enabled. Evaluation (`frag`) is
//! pure in its input and the shader's own state; animation state is mutated
//! only through [`ShaderArena::get_mut`], never by probing a shader's
//! concrete type at runtime.
//!
//! Wiring: the renderer resolves a primitive's [`ShaderId`] against the
//! arena, then wraps its pixel sink with [`shade_pixel`] using the
//! primitive's oriented bounding box for the UV projection.

mod arena;
mod uv;

pub use arena::{ShaderArena, ShaderId};
pub use uv::UvDebugShader;

use crate::coords::{OrientedBox, Vec2};
use crate::paint::Color;

/// Per-pixel shader input.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ShaderInput {
    /// Position inside the primitive's oriented box; roughly [0, 1]² for
    /// pixels the box covers.
    pub uv: Vec2,
    /// Elapsed time in seconds.
    pub t: f64,
}

/// A procedural pixel shader.
///
/// `frag` must be a function of `input` and `self` only — no clocks, no
/// globals. Shaders are shared with tile workers during parallel fills,
/// hence the `Send + Sync` bound.
pub trait Shader: Send + Sync {
    fn frag(&self, input: &ShaderInput) -> Color;

    /// Advances internal animation state by `dt` seconds.
    ///
    /// The mutation interface is separate from evaluation: `update` runs
    /// between frames (via [`ShaderArena::get_mut`]), never while a fill is
    /// in flight. Stateless shaders keep the default no-op.
    fn update(&mut self, dt: f64) {
        let _ = dt;
    }
}

/// Resolves one pixel's color through `shader`, substituting the flat fill
/// entirely.
#[inline]
pub fn shade_pixel(obb: &OrientedBox, shader: &dyn Shader, pos: Vec2, t: f64) -> Color {
    shader.frag(&ShaderInput { uv: obb.uv(pos), t })
}

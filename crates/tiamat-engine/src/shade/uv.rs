use crate::paint::Color;

use super::{Shader, ShaderInput};

/// Shader that visualizes the UV basis: `u` drives red, `v` drives green,
/// and a sine of elapsed time pulses blue. Useful for checking oriented-box
/// projections and as the reference `Shader` implementation.
#[derive(Debug, Copy, Clone, Default)]
pub struct UvDebugShader;

impl Shader for UvDebugShader {
    fn frag(&self, input: &ShaderInput) -> Color {
        Color::from_f64(input.uv.x, input.uv.y, 0.5 + 0.5 * input.t.sin(), 1.0)
    }
}

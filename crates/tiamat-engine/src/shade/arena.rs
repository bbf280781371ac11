use super::Shader;

/// Opaque handle to a shader stored in a [`ShaderArena`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ShaderId(pub(crate) usize);

/// Owning collection of shaders.
///
/// Primitives reference shaders by [`ShaderId`] only — never by pointer —
/// so primitive/shader graphs cannot form ownership cycles. Handles are
/// never invalidated: the arena only grows.
///
/// Mutable access for animation-state updates goes through [`get_mut`];
/// rendering code only ever sees `&dyn Shader`.
///
/// [`get_mut`]: ShaderArena::get_mut
#[derive(Default)]
pub struct ShaderArena {
    shaders: Vec<Box<dyn Shader>>,
}

impl ShaderArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, shader: Box<dyn Shader>) -> ShaderId {
        let id = ShaderId(self.shaders.len());
        self.shaders.push(shader);
        id
    }

    #[inline]
    pub fn get(&self, id: ShaderId) -> Option<&dyn Shader> {
        self.shaders.get(id.0).map(|s| s.as_ref())
    }

    /// Mutable access for updating a shader's internal animation state
    /// between frames. Must not be called while a fill is in flight.
    #[inline]
    pub fn get_mut(&mut self, id: ShaderId) -> Option<&mut (dyn Shader + '_)> {
        match self.shaders.get_mut(id.0) {
            Some(s) => Some(s.as_mut()),
            None => None,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.shaders.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.shaders.is_empty()
    }
}

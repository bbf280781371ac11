use super::{Primitive, PrimitiveId};

/// Owning collection of primitives, indexed by identity.
///
/// Handles are plain indices into a grow-only store; primitives reference
/// shaders (and each other, if ever needed) by id, never by pointer, so the
/// scene graph cannot form ownership cycles.
///
/// Iteration order:
/// 1) `depth`: ascending (back-to-front)
/// 2) insertion order for equal depth
///
/// The depth-sorted index buffer is owned by the arena and rebuilt lazily,
/// so repeated draw passes over an unchanged scene do not re-sort.
#[derive(Debug, Default)]
pub struct PrimitiveArena {
    items: Vec<Primitive>,

    sorted_indices: Vec<usize>,
    sorted_dirty: bool,
}

impl PrimitiveArena {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a primitive with a fresh arena-scoped id and returns its
    /// handle. Configure it through [`get_mut`].
    ///
    /// [`get_mut`]: PrimitiveArena::get_mut
    pub fn insert(&mut self) -> PrimitiveId {
        let id = PrimitiveId(self.items.len() as u64);
        self.items.push(Primitive::new(id));
        self.sorted_dirty = true;
        id
    }

    #[inline]
    pub fn get(&self, id: PrimitiveId) -> Option<&Primitive> {
        self.items.get(id.0 as usize)
    }

    /// Mutable access. Conservatively marks the depth ordering dirty, since
    /// the caller may change `depth` through the returned reference.
    #[inline]
    pub fn get_mut(&mut self, id: PrimitiveId) -> Option<&mut Primitive> {
        self.sorted_dirty = true;
        self.items.get_mut(id.0 as usize)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates primitives in insertion order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Primitive> {
        self.items.iter()
    }

    /// Iterates primitives back-to-front (ascending depth, stable within a
    /// depth layer).
    pub fn iter_in_depth_order(&mut self) -> impl Iterator<Item = &Primitive> {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }
        self.sorted_indices.iter().map(|&i| &self.items[i])
    }

    fn rebuild_sorted_indices(&mut self) {
        self.sorted_indices.clear();
        self.sorted_indices.extend(0..self.items.len());

        // Stable ordering: the index itself is the insertion-order tiebreak.
        let items = &self.items;
        self.sorted_indices.sort_by_key(|&i| (items[i].depth(), i));

        self.sorted_dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_assigns_sequential_ids() {
        let mut arena = PrimitiveArena::new();
        let a = arena.insert();
        let b = arena.insert();
        assert_ne!(a, b);
        assert_eq!(arena.get(a).unwrap().id(), a);
        assert_eq!(arena.len(), 2);
    }

    #[test]
    fn depth_order_is_ascending_and_stable() {
        let mut arena = PrimitiveArena::new();
        let a = arena.insert();
        let b = arena.insert();
        let c = arena.insert();

        arena.get_mut(a).unwrap().set_depth(5);
        arena.get_mut(b).unwrap().set_depth(-1);
        arena.get_mut(c).unwrap().set_depth(5);

        let order: Vec<PrimitiveId> = arena.iter_in_depth_order().map(|p| p.id()).collect();
        // b first (lowest depth); a before c (same depth, inserted earlier).
        assert_eq!(order, vec![b, a, c]);
    }

    #[test]
    fn depth_change_reorders_on_next_pass() {
        let mut arena = PrimitiveArena::new();
        let a = arena.insert();
        let b = arena.insert();

        arena.get_mut(a).unwrap().set_depth(0);
        arena.get_mut(b).unwrap().set_depth(1);
        let first: Vec<PrimitiveId> = arena.iter_in_depth_order().map(|p| p.id()).collect();
        assert_eq!(first, vec![a, b]);

        arena.get_mut(a).unwrap().set_depth(10);
        let second: Vec<PrimitiveId> = arena.iter_in_depth_order().map(|p| p.id()).collect();
        assert_eq!(second, vec![b, a]);
    }
}

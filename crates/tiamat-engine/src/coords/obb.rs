use super::{Box2, Vec2};

/// Oriented bounding box: a parallelogram described by an origin corner and
/// two side vectors.
///
/// The sides are not required to be orthogonal; a sheared transform yields a
/// skewed box. The default is the unit box at the origin.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct OrientedBox {
    pub origin: Vec2,
    pub side_x: Vec2,
    pub side_y: Vec2,
}

impl OrientedBox {
    #[inline]
    pub const fn new(origin: Vec2, side_x: Vec2, side_y: Vec2) -> Self {
        Self { origin, side_x, side_y }
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        self.origin + self.side_x * 0.5 + self.side_y * 0.5
    }

    /// Side lengths.
    #[inline]
    pub fn extent(self) -> Vec2 {
        Vec2::new(self.side_x.length(), self.side_y.length())
    }

    /// Corners walking origin → +x → +x+y → +y.
    #[inline]
    pub fn corners(self) -> [Vec2; 4] {
        [
            self.origin,
            self.origin + self.side_x,
            self.origin + self.side_x + self.side_y,
            self.origin + self.side_y,
        ]
    }

    /// Minimal axis-aligned box enclosing all four corners.
    pub fn enclosing_box(self) -> Box2 {
        let corners = self.corners();
        let mut out = Box2::from_point(corners[0]);
        for c in &corners[1..] {
            out.expand(*c);
        }
        out
    }

    /// Projects `point` onto the box's oblique basis.
    ///
    /// Returns (u, v) with points inside the box mapping to [0, 1]². A
    /// zero-length side produces NaN/Inf components; callers must guarantee
    /// non-degenerate boxes.
    #[inline]
    pub fn uv(self, point: Vec2) -> Vec2 {
        let d = point - self.origin;
        Vec2::new(
            Vec2::dot(d, self.side_x) / Vec2::dot(self.side_x, self.side_x),
            Vec2::dot(d, self.side_y) / Vec2::dot(self.side_y, self.side_y),
        )
    }
}

impl Default for OrientedBox {
    fn default() -> Self {
        Self::new(Vec2::zero(), Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── derived geometry ──────────────────────────────────────────────────

    #[test]
    fn center_of_axis_aligned_box() {
        let b = OrientedBox::new(Vec2::zero(), Vec2::new(10.0, 0.0), Vec2::new(0.0, 4.0));
        assert_eq!(b.center(), Vec2::new(5.0, 2.0));
    }

    #[test]
    fn extent_is_side_lengths() {
        let b = OrientedBox::new(Vec2::zero(), Vec2::new(3.0, 4.0), Vec2::new(0.0, 2.0));
        assert_eq!(b.extent(), Vec2::new(5.0, 2.0));
    }

    #[test]
    fn enclosing_box_of_rotated_square() {
        // Square rotated 45°: sides (1, 1) and (-1, 1).
        let b = OrientedBox::new(Vec2::zero(), Vec2::new(1.0, 1.0), Vec2::new(-1.0, 1.0));
        let e = b.enclosing_box();
        assert_eq!(e.min, Vec2::new(-1.0, 0.0));
        assert_eq!(e.max, Vec2::new(1.0, 2.0));
    }

    // ── uv projection ─────────────────────────────────────────────────────

    #[test]
    fn uv_center_is_half_half() {
        let b = OrientedBox::new(Vec2::new(2.0, 2.0), Vec2::new(4.0, 0.0), Vec2::new(0.0, 8.0));
        assert_eq!(b.uv(b.center()), Vec2::new(0.5, 0.5));
    }

    #[test]
    fn uv_tracks_oblique_basis() {
        let b = OrientedBox::new(Vec2::zero(), Vec2::new(2.0, 0.0), Vec2::new(2.0, 2.0));
        // origin + side_y lands at v = 1 even though side_y is skewed.
        let uv = b.uv(Vec2::new(2.0, 2.0));
        assert!((uv.y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn uv_outside_exceeds_unit_range() {
        let b = OrientedBox::default();
        assert_eq!(b.uv(Vec2::new(2.0, -1.0)), Vec2::new(2.0, -1.0));
    }

    #[test]
    fn uv_degenerate_side_is_not_finite() {
        let b = OrientedBox::new(Vec2::zero(), Vec2::zero(), Vec2::new(0.0, 1.0));
        assert!(!b.uv(Vec2::new(1.0, 1.0)).is_finite());
    }
}

use super::Vec2;

/// Axis-aligned box stored as min/max corners.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Box2 {
    pub min: Vec2,
    pub max: Vec2,
}

impl Box2 {
    #[inline]
    pub const fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Degenerate box spanning a single point.
    #[inline]
    pub const fn from_point(p: Vec2) -> Self {
        Self { min: p, max: p }
    }

    /// Grows the box to include `p`.
    #[inline]
    pub fn expand(&mut self, p: Vec2) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
    }

    #[inline]
    pub fn size(self) -> Vec2 {
        self.max - self.min
    }

    /// Corners in clockwise order starting at `min`.
    #[inline]
    pub fn corners(self) -> [Vec2; 4] {
        [
            self.min,
            Vec2::new(self.max.x, self.min.y),
            self.max,
            Vec2::new(self.min.x, self.max.y),
        ]
    }

    #[inline]
    pub fn union(self, other: Box2) -> Box2 {
        let mut out = self;
        out.expand(other.min);
        out.expand(other.max);
        out
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }
}

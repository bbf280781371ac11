use std::cell::Cell;

use crate::coords::{Box2, Mat3, OrientedBox, Vec2};
use crate::paint::Color;
use crate::shade::ShaderId;

/// Identity of a primitive.
///
/// Ids come from the owning collection ([`PrimitiveArena`]) or from the
/// caller; the engine never generates them itself.
///
/// [`PrimitiveArena`]: super::PrimitiveArena
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct PrimitiveId(pub u64);

/// Drawable-item state: pose, draw attributes, and cached world geometry.
///
/// Every pose setter (position, anchor, scale, rotation) bumps
/// `transform_version` by exactly one, so consumers may memoize derived
/// geometry keyed by `(id, transform_version)`.
///
/// The oriented-box cache is lazy, single-writer state: it is recomputed on
/// the next [`oriented_bounding_box`] call after a position, scale, or
/// rotation change. Anchor changes bump the version but leave the cache
/// untouched, and the cache does not key on the view transform — one view
/// transform per frame, no pose mutation while a frame is in flight.
///
/// [`oriented_bounding_box`]: Primitive::oriented_bounding_box
#[derive(Debug, Clone)]
pub struct Primitive {
    id: PrimitiveId,

    position: Vec2,
    anchor: Vec2,
    scale: Vec2,
    rotation: f64,

    depth: i32,
    color: Color,
    visible: bool,
    bounds: Box2,

    shader: Option<ShaderId>,
    shader_enabled: bool,

    transform_version: i64,

    obb: Cell<OrientedBox>,
    obb_dirty: Cell<bool>,
}

impl Primitive {
    /// Creates a primitive with an untouched pose.
    ///
    /// Until a pose setter runs, bounding-box queries return the
    /// identity-derived default (the unit box).
    pub fn new(id: PrimitiveId) -> Self {
        Self {
            id,
            position: Vec2::zero(),
            anchor: Vec2::zero(),
            scale: Vec2::new(1.0, 1.0),
            rotation: 0.0,
            depth: 0,
            color: Color::WHITE,
            visible: true,
            bounds: Box2::default(),
            shader: None,
            shader_enabled: false,
            transform_version: -1,
            obb: Cell::new(OrientedBox::default()),
            obb_dirty: Cell::new(false),
        }
    }

    #[inline]
    pub fn id(&self) -> PrimitiveId {
        self.id
    }

    // ── pose ──────────────────────────────────────────────────────────────

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
        self.bump_version();
        self.obb_dirty.set(true);
    }

    #[inline]
    pub fn anchor(&self) -> Vec2 {
        self.anchor
    }

    /// Sets the normalized anchor in [0, 1]² of the local bounds.
    ///
    /// Bumps the version but does not invalidate the cached oriented box.
    pub fn set_anchor(&mut self, anchor: Vec2) {
        self.anchor = anchor;
        self.bump_version();
    }

    #[inline]
    pub fn scale(&self) -> Vec2 {
        self.scale
    }

    pub fn set_scale(&mut self, scale: Vec2) {
        self.scale = scale;
        self.bump_version();
        self.obb_dirty.set(true);
    }

    pub fn set_scale_uniform(&mut self, scale: f64) {
        self.set_scale(Vec2::new(scale, scale));
    }

    #[inline]
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn set_rotation(&mut self, radians: f64) {
        self.rotation = radians;
        self.bump_version();
        self.obb_dirty.set(true);
    }

    #[inline]
    pub fn rotation_degrees(&self) -> f64 {
        self.rotation.to_degrees()
    }

    pub fn set_rotation_degrees(&mut self, degrees: f64) {
        self.set_rotation(degrees.to_radians());
    }

    #[inline]
    pub fn transform_version(&self) -> i64 {
        self.transform_version
    }

    fn bump_version(&mut self) {
        self.transform_version += 1;
    }

    // ── draw attributes ───────────────────────────────────────────────────

    #[inline]
    pub fn depth(&self) -> i32 {
        self.depth
    }

    pub fn set_depth(&mut self, depth: i32) {
        self.depth = depth;
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Local geometry extents, set by whoever owns the primitive's shape.
    #[inline]
    pub fn bounds(&self) -> Box2 {
        self.bounds
    }

    pub fn set_bounds(&mut self, bounds: Box2) {
        self.bounds = bounds;
    }

    #[inline]
    pub fn shader(&self) -> Option<ShaderId> {
        self.shader
    }

    pub fn set_shader(&mut self, shader: Option<ShaderId>) {
        self.shader = shader;
    }

    #[inline]
    pub fn shader_enabled(&self) -> bool {
        self.shader_enabled
    }

    pub fn set_shader_enabled(&mut self, enabled: bool) {
        self.shader_enabled = enabled;
    }

    // ── derived geometry ──────────────────────────────────────────────────

    /// Pose matrix mapping local bounds space to the parent space:
    /// translate ∘ rotate ∘ scale ∘ anchor offset.
    pub fn local_transform(&self) -> Mat3 {
        let size = self.bounds.size();
        let anchor_offset = Vec2::new(-self.anchor.x * size.x, -self.anchor.y * size.y);
        Mat3::from_translation(self.position)
            * Mat3::from_rotation(self.rotation)
            * Mat3::from_scale(self.scale)
            * Mat3::from_translation(anchor_offset)
    }

    /// World-space oriented bounding box under `transform ∘ local_transform`.
    ///
    /// Cached: recomputed only when a position/scale/rotation setter ran
    /// since the last call. Callers may reuse the result for as long as
    /// `transform_version` is unchanged.
    pub fn oriented_bounding_box(&self, transform: &Mat3) -> OrientedBox {
        if self.obb_dirty.get() {
            let m = *transform * self.local_transform();
            let size = self.bounds.size();

            let origin = m.transform_point(Vec2::zero());
            let side_x = m.transform_point(Vec2::new(size.x, 0.0)) - origin;
            let side_y = m.transform_point(Vec2::new(0.0, size.y)) - origin;

            self.obb.set(OrientedBox::new(origin, side_x, side_y));
            self.obb_dirty.set(false);
        }
        self.obb.get()
    }

    /// Minimal axis-aligned box over the oriented box's corners.
    pub fn axis_aligned_bounding_box(&self, transform: &Mat3) -> Box2 {
        self.oriented_bounding_box(transform).enclosing_box()
    }

    /// Projects a world point onto the cached oriented box's oblique basis.
    ///
    /// Reads whatever box the last [`oriented_bounding_box`] call produced
    /// (the unit box before any call). Degenerate boxes yield NaN/Inf.
    ///
    /// [`oriented_bounding_box`]: Primitive::oriented_bounding_box
    #[inline]
    pub fn uv(&self, point: Vec2) -> Vec2 {
        self.obb.get().uv(point)
    }
}

use crate::coords::{Box2, Vec2};

/// Straight segments per quadratic arc when flattening.
const CURVE_SEGMENTS: usize = 8;

/// A point on a glyph contour, in font design units.
///
/// On-curve points are anchors the outline passes through; off-curve points
/// are quadratic Bézier control points between them.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ContourPoint {
    pub pos: Vec2,
    pub on_curve: bool,
}

impl ContourPoint {
    #[inline]
    pub const fn on(x: f64, y: f64) -> Self {
        Self { pos: Vec2::new(x, y), on_curve: true }
    }

    #[inline]
    pub const fn off(x: f64, y: f64) -> Self {
        Self { pos: Vec2::new(x, y), on_curve: false }
    }
}

/// A glyph outline: bounding box plus closed contours.
///
/// Each contour is cyclic — the last point connects back to the first.
/// Outlines are immutable once the owning font is in use.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Glyph {
    pub bbox: Box2,
    pub contours: Vec<Vec<ContourPoint>>,
}

impl Glyph {
    pub fn new(bbox: Box2, contours: Vec<Vec<ContourPoint>>) -> Self {
        Self { bbox, contours }
    }

    /// Flattens every contour into straight segments.
    pub(crate) fn flatten(&self) -> Vec<FlatEdge> {
        let mut edges = Vec::new();
        for contour in &self.contours {
            flatten_contour(contour, &mut edges);
        }
        edges
    }
}

/// A straight segment approximating part of a contour, in design units.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FlatEdge {
    pub v0: Vec2,
    pub v1: Vec2,
}

impl FlatEdge {
    #[inline]
    pub const fn new(v0: Vec2, v1: Vec2) -> Self {
        Self { v0, v1 }
    }
}

fn flatten_contour(points: &[ContourPoint], out: &mut Vec<FlatEdge>) {
    if points.len() < 2 {
        log::warn!("glyph contour with {} point(s) skipped", points.len());
        return;
    }

    let n = points.len();

    // Start at an on-curve anchor and walk the cycle from there. A contour
    // of only control points starts at the implied midpoint between its
    // last and first points and walks every point.
    let (start_anchor, walk): (Vec2, Vec<usize>) = match points.iter().position(|p| p.on_curve) {
        Some(i) => (points[i].pos, (1..n).map(|k| (i + k) % n).collect()),
        None => (midpoint(points[n - 1].pos, points[0].pos), (0..n).collect()),
    };

    let mut anchor = start_anchor;
    let mut pending_ctrl: Option<Vec2> = None;

    for idx in walk {
        let p = points[idx];
        if p.on_curve {
            match pending_ctrl.take() {
                None => push_line(out, anchor, p.pos),
                Some(ctrl) => push_quad(out, anchor, ctrl, p.pos),
            }
            anchor = p.pos;
        } else if let Some(prev_ctrl) = pending_ctrl.replace(p.pos) {
            // Consecutive control points imply an on-curve midpoint.
            let implied = midpoint(prev_ctrl, p.pos);
            push_quad(out, anchor, prev_ctrl, implied);
            anchor = implied;
        }
    }

    // Close the contour back to its start.
    match pending_ctrl.take() {
        None => {
            if anchor != start_anchor {
                push_line(out, anchor, start_anchor);
            }
        }
        Some(ctrl) => push_quad(out, anchor, ctrl, start_anchor),
    }
}

#[inline]
fn midpoint(a: Vec2, b: Vec2) -> Vec2 {
    (a + b) * 0.5
}

#[inline]
fn push_line(out: &mut Vec<FlatEdge>, v0: Vec2, v1: Vec2) {
    out.push(FlatEdge::new(v0, v1));
}

/// Subdivides the quadratic arc `(p0, ctrl, p1)` into straight segments.
fn push_quad(out: &mut Vec<FlatEdge>, p0: Vec2, ctrl: Vec2, p1: Vec2) {
    let mut prev = p0;
    for i in 1..=CURVE_SEGMENTS {
        let t = i as f64 / CURVE_SEGMENTS as f64;
        let s = 1.0 - t;
        let point = p0 * (s * s) + ctrl * (2.0 * s * t) + p1 * (t * t);
        push_line(out, prev, point);
        prev = point;
    }
}

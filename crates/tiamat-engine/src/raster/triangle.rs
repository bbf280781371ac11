use std::thread;

use crate::coords::Vec2;
use crate::paint::Color;

use super::Pixel;

/// Side length of the square tiles the pixel bounding box is split into.
const TILE_SIZE: i32 = 32;

/// Bounding-box pixel count above which `Threading::Auto` parallelizes.
const PARALLEL_PIXEL_THRESHOLD: usize = 4096;

/// A triangle in pixel space.
///
/// Callers pre-apply all transforms; the rasterizer consumes final pixel
/// coordinates. Vertex winding does not matter — see [`fill_triangle`].
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Triangle {
    pub v0: Vec2,
    pub v1: Vec2,
    pub v2: Vec2,
}

impl Triangle {
    #[inline]
    pub const fn new(v0: Vec2, v1: Vec2, v2: Vec2) -> Self {
        Self { v0, v1, v2 }
    }

    /// Signed area; zero iff the vertices are collinear.
    #[inline]
    pub fn signed_area(self) -> f64 {
        Vec2::cross(self.v1 - self.v0, self.v2 - self.v0) / 2.0
    }

    /// One linear edge function per edge, ordered v1→v2, v2→v0, v0→v1.
    ///
    /// For points inside the triangle all three share one sign (which sign
    /// depends on winding).
    #[inline]
    fn edge_functions(self) -> [EdgeFn; 3] {
        [
            EdgeFn::new(self.v1, self.v2),
            EdgeFn::new(self.v2, self.v0),
            EdgeFn::new(self.v0, self.v1),
        ]
    }
}

/// Linear edge function `w(x, y) = a·x + b·y + c`, zero along the edge.
#[derive(Debug, Copy, Clone)]
struct EdgeFn {
    a: f64,
    b: f64,
    c: f64,
}

impl EdgeFn {
    #[inline]
    fn new(p: Vec2, q: Vec2) -> Self {
        Self {
            a: p.y - q.y,
            b: q.x - p.x,
            c: Vec2::cross(p, q),
        }
    }

    #[inline]
    fn eval(self, x: f64, y: f64) -> f64 {
        self.a * x + self.b * y + self.c
    }
}

/// Thread-use policy for [`fill_triangle_with`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Threading {
    /// Parallelize when the bounding box exceeds a fixed pixel threshold.
    Auto,
    /// Rasterize every tile on the calling thread.
    Single,
    /// Use the worker pool whenever more than one tile exists.
    Parallel,
}

/// Pixel bounds of one tile, both corners inclusive.
#[derive(Debug, Copy, Clone)]
struct Tile {
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
}

/// Emits every pixel whose center lies inside `triangle` (boundary
/// inclusive) through `sink`.
///
/// The inside test is the product-sign form `w0·w1 ≥ 0 ∧ w1·w2 ≥ 0`:
/// reversing the vertex order negates all three edge values, leaving every
/// product's sign unchanged, so both windings fill the same pixel set.
/// A zero-area triangle emits nothing.
///
/// The call blocks until all tiles are done; see the module docs for the
/// concurrency contract.
pub fn fill_triangle<F>(triangle: Triangle, color: Color, sink: &F)
where
    F: Fn(Pixel) + Sync,
{
    fill_triangle_with(triangle, color, Threading::Auto, sink)
}

/// [`fill_triangle`] with an explicit thread-use policy.
pub fn fill_triangle_with<F>(triangle: Triangle, color: Color, threading: Threading, sink: &F)
where
    F: Fn(Pixel) + Sync,
{
    if triangle.signed_area() == 0.0 {
        log::debug!("fill_triangle: zero-area triangle, nothing to emit");
        return;
    }

    let (min_x, min_y) = Vec2::new(
        triangle.v0.x.min(triangle.v1.x).min(triangle.v2.x),
        triangle.v0.y.min(triangle.v1.y).min(triangle.v2.y),
    )
    .round();
    let (max_x, max_y) = Vec2::new(
        triangle.v0.x.max(triangle.v1.x).max(triangle.v2.x),
        triangle.v0.y.max(triangle.v1.y).max(triangle.v2.y),
    )
    .round();

    let edges = triangle.edge_functions();
    let resolution = (max_x - min_x + 1) as usize * (max_y - min_y + 1) as usize;

    let mut tiles = Vec::new();
    let mut ty = min_y;
    while ty <= max_y {
        let mut tx = min_x;
        while tx <= max_x {
            tiles.push(Tile {
                x0: tx,
                y0: ty,
                x1: (tx + TILE_SIZE - 1).min(max_x),
                y1: (ty + TILE_SIZE - 1).min(max_y),
            });
            tx += TILE_SIZE;
        }
        ty += TILE_SIZE;
    }

    // Edge values are seeded once per tile at the first pixel center, then
    // stepped by the linear coefficients per pixel and per row.
    let rasterize_tile = |tile: &Tile| {
        let start_x = tile.x0 as f64 + 0.5;
        let start_y = tile.y0 as f64 + 0.5;

        let mut w0_row = edges[0].eval(start_x, start_y);
        let mut w1_row = edges[1].eval(start_x, start_y);
        let mut w2_row = edges[2].eval(start_x, start_y);

        for y in tile.y0..=tile.y1 {
            let mut w0 = w0_row;
            let mut w1 = w1_row;
            let mut w2 = w2_row;

            for x in tile.x0..=tile.x1 {
                if w0 * w1 >= 0.0 && w1 * w2 >= 0.0 {
                    sink(Pixel::new(x, y, color));
                }
                w0 += edges[0].a;
                w1 += edges[1].a;
                w2 += edges[2].a;
            }

            w0_row += edges[0].b;
            w1_row += edges[1].b;
            w2_row += edges[2].b;
        }
    };

    let parallel = match threading {
        Threading::Single => false,
        Threading::Parallel => tiles.len() > 1,
        Threading::Auto => resolution > PARALLEL_PIXEL_THRESHOLD && tiles.len() > 1,
    };

    if parallel {
        let workers = thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(2)
            .min(tiles.len());

        thread::scope(|scope| {
            for worker in 0..workers {
                let tiles = &tiles;
                let rasterize_tile = &rasterize_tile;
                scope.spawn(move || {
                    let mut idx = worker;
                    while idx < tiles.len() {
                        rasterize_tile(&tiles[idx]);
                        idx += workers;
                    }
                });
            }
        });
    } else {
        for tile in &tiles {
            rasterize_tile(tile);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::sync::Mutex;

    use super::*;

    fn v(x: f64, y: f64) -> Vec2 {
        Vec2::new(x, y)
    }

    fn pixel_set(triangle: Triangle, threading: Threading) -> BTreeSet<(i32, i32)> {
        let out = Mutex::new(BTreeSet::new());
        fill_triangle_with(triangle, Color::WHITE, threading, &|px: Pixel| {
            out.lock().unwrap().insert((px.x, px.y));
        });
        out.into_inner().unwrap()
    }

    // ── classification ────────────────────────────────────────────────────

    #[test]
    fn fills_interior_of_right_triangle() {
        let set = pixel_set(Triangle::new(v(0.0, 0.0), v(8.0, 0.0), v(0.0, 8.0)), Threading::Single);
        assert!(set.contains(&(1, 1)));
        assert!(set.contains(&(0, 0)));
        // Center (7.5, 7.5) is far outside the hypotenuse x + y = 8.
        assert!(!set.contains(&(7, 7)));
    }

    #[test]
    fn covers_whole_box_for_box_shaped_pair() {
        // The triangle covering the lower-left half of a 4×4 box.
        let set = pixel_set(Triangle::new(v(0.0, 0.0), v(4.0, 4.0), v(0.0, 4.0)), Threading::Single);
        assert!(set.contains(&(0, 3)));
        assert!(!set.contains(&(3, 0)));
    }

    // ── degeneracy ────────────────────────────────────────────────────────

    #[test]
    fn collinear_vertices_emit_nothing() {
        let set = pixel_set(Triangle::new(v(0.0, 0.0), v(5.0, 5.0), v(10.0, 10.0)), Threading::Auto);
        assert!(set.is_empty());
    }

    #[test]
    fn repeated_vertex_emits_nothing() {
        let set = pixel_set(Triangle::new(v(3.0, 3.0), v(3.0, 3.0), v(9.0, 1.0)), Threading::Auto);
        assert!(set.is_empty());
    }

    // ── winding invariance ────────────────────────────────────────────────

    #[test]
    fn reversed_winding_fills_identical_set() {
        let cw = Triangle::new(v(2.0, 1.0), v(60.0, 10.0), v(20.0, 50.0));
        let ccw = Triangle::new(v(20.0, 50.0), v(60.0, 10.0), v(2.0, 1.0));
        assert_eq!(pixel_set(cw, Threading::Single), pixel_set(ccw, Threading::Single));
    }

    // ── concurrency determinism ───────────────────────────────────────────

    #[test]
    fn forced_parallel_matches_single_threaded() {
        // Large enough for a 4×4 tile grid.
        let tri = Triangle::new(v(0.0, 0.0), v(120.0, 5.0), v(10.0, 110.0));
        let single = pixel_set(tri, Threading::Single);
        let parallel = pixel_set(tri, Threading::Parallel);
        assert!(!single.is_empty());
        assert_eq!(single, parallel);
    }

    #[test]
    fn auto_threshold_matches_forced_paths() {
        // Straddles the threshold comfortably: 200×200 bounding box.
        let tri = Triangle::new(v(0.0, 0.0), v(200.0, 0.0), v(0.0, 200.0));
        assert_eq!(pixel_set(tri, Threading::Auto), pixel_set(tri, Threading::Single));
    }
}

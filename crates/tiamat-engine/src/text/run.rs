use crate::coords::{Box2, Mat3, Vec2};
use crate::paint::Color;
use crate::raster::Pixel;

use super::font::Font;
use super::glyph::FlatEdge;

/// A single line of text laid out along a horizontal baseline.
///
/// Layout walks codepoints left to right: kerning for `(prev, cur)` is added
/// to the pen before every glyph except the first, the glyph's advance after
/// it. Glyph outlines scale by `font_size / units_per_em`.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub font_size: f64,
}

impl TextRun {
    pub fn new(text: impl Into<String>, font_size: f64) -> Self {
        Self { text: text.into(), font_size }
    }

    /// Lays out the run and fills every glyph through `sink`.
    ///
    /// Outline Y (Y-up design units) is flipped into the Y-down pixel space
    /// around a baseline centered in the ascent–descent band, then each
    /// edge endpoint goes through `transform`. Glyphs fill one at a time on
    /// the calling thread; no parallelism is applied.
    pub fn rasterize<F>(&self, font: &Font, transform: &Mat3, color: Color, sink: &F)
    where
        F: Fn(Pixel),
    {
        let scale = self.font_size / font.units_per_em() as f64;
        let total_height = (font.ascent() - font.descent()) * scale;
        let baseline = font.ascent() * scale - total_height * 0.5;

        let mut pen_x = 0.0;
        let mut prev: Option<char> = None;

        for c in self.text.chars() {
            if let Some(p) = prev {
                pen_x += font.kerning(p, c) as f64 * scale;
            }

            let mut edges = font.edges(c);
            for edge in &mut edges {
                edge.v0 = transform.transform_point(Vec2::new(
                    edge.v0.x * scale + pen_x,
                    -edge.v0.y * scale + baseline,
                ));
                edge.v1 = transform.transform_point(Vec2::new(
                    edge.v1.x * scale + pen_x,
                    -edge.v1.y * scale + baseline,
                ));
            }
            fill_even_odd(&edges, color, sink);

            pen_x += font.advance(c) as f64 * scale;
            prev = Some(c);
        }
    }

    /// Extent of the laid-out run, as a zero-origin box.
    ///
    /// Measures in pre-flip metrics space: outline Y is offset by the scaled
    /// ascent but *not* flipped the way [`rasterize`] flips it, so this box
    /// is not the rasterized pixel region — only its size is meaningful.
    ///
    /// [`rasterize`]: TextRun::rasterize
    pub fn geometry_size(&self, font: &Font) -> Box2 {
        let scale = self.font_size / font.units_per_em() as f64;
        let baseline = font.ascent() * scale;

        let mut bounds = Box2::default();
        let mut pen_x = 0.0;
        let mut prev: Option<char> = None;

        for c in self.text.chars() {
            if let Some(p) = prev {
                pen_x += font.kerning(p, c) as f64 * scale;
            }

            for edge in font.edges(c) {
                bounds.expand(Vec2::new(edge.v0.x * scale + pen_x, edge.v0.y * scale + baseline));
                bounds.expand(Vec2::new(edge.v1.x * scale + pen_x, edge.v1.y * scale + baseline));
            }

            pen_x += font.advance(c) as f64 * scale;
            prev = Some(c);
        }

        Box2::new(Vec2::zero(), bounds.size())
    }
}

/// Fills the region enclosed by `edges` under the even-odd rule.
///
/// For each pixel in the edges' integer bounding box, a ray cast to the
/// right counts edges whose Y-span strictly straddles the pixel's row and
/// whose X-intersection with that row lies right of the pixel; horizontal
/// edges never contribute. Odd count → inside. Nested contours produce
/// holes with no winding bookkeeping; the O(pixels × edges) cost is the
/// accepted price.
fn fill_even_odd<F>(edges: &[FlatEdge], color: Color, sink: &F)
where
    F: Fn(Pixel),
{
    if edges.is_empty() {
        return;
    }

    let (mut min_x, mut min_y) = edges[0].v0.round();
    let (mut max_x, mut max_y) = (min_x, min_y);
    for edge in edges {
        for (x, y) in [edge.v0.round(), edge.v1.round()] {
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
        }
    }

    for y in min_y..=max_y {
        let yf = y as f64;
        for x in min_x..=max_x {
            let mut crossings = 0u32;

            for edge in edges {
                if edge.v0.y == edge.v1.y {
                    continue;
                }
                if (edge.v0.y > yf) == (edge.v1.y > yf) {
                    continue;
                }

                let dx = edge.v1.x - edge.v0.x;
                let dy = edge.v1.y - edge.v0.y;
                let intersection_x = edge.v0.x + dx * (yf - edge.v0.y) / dy;
                if intersection_x > x as f64 {
                    crossings += 1;
                }
            }

            if crossings % 2 == 1 {
                sink(Pixel::new(x, y, color));
            }
        }
    }
}

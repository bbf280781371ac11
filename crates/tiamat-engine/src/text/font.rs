use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;

use super::glyph::{FlatEdge, Glyph};

/// Error returned by [`Font::new`] for an unusable design grid.
#[derive(Debug, Clone)]
pub struct FontError(pub String);

impl fmt::Display for FontError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font error: {}", self.0)
    }
}

impl std::error::Error for FontError {}

/// Horizontal metrics for one codepoint, in design units.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct GlyphMetrics {
    pub advance_width: i32,
    pub left_side_bearing: i32,
}

/// Glyph outlines plus metric and kerning tables for one typeface.
///
/// Built once by a loader, then read-mostly: the lazily populated
/// flattened-edge cache is the only mutable state, and it is never
/// invalidated — outlines are immutable once the font is in use. Register
/// all glyphs before the first render.
///
/// Every lookup is total: unregistered codepoints and kerning pairs yield
/// empty or zero defaults, never an error.
pub struct Font {
    units_per_em: u32,
    ascent: f64,
    descent: f64,
    line_gap: f64,

    glyphs: HashMap<char, Glyph>,
    metrics: HashMap<char, GlyphMetrics>,
    kerning: HashMap<(char, char), i32>,

    // Lazy, single-writer: populated on first lookup, read thereafter.
    edge_cache: RefCell<HashMap<char, Vec<FlatEdge>>>,
}

impl Font {
    /// Creates an empty font. `ascent`, `descent`, and `line_gap` are in
    /// design units (`descent` is typically negative).
    pub fn new(units_per_em: u32, ascent: f64, descent: f64, line_gap: f64) -> Result<Self, FontError> {
        if units_per_em == 0 {
            return Err(FontError("units_per_em must be non-zero".into()));
        }
        Ok(Self {
            units_per_em,
            ascent,
            descent,
            line_gap,
            glyphs: HashMap::new(),
            metrics: HashMap::new(),
            kerning: HashMap::new(),
            edge_cache: RefCell::new(HashMap::new()),
        })
    }

    // ── loader surface ────────────────────────────────────────────────────

    pub fn set_glyph(&mut self, codepoint: char, glyph: Glyph) {
        self.glyphs.insert(codepoint, glyph);
    }

    pub fn set_metrics(&mut self, codepoint: char, metrics: GlyphMetrics) {
        self.metrics.insert(codepoint, metrics);
    }

    /// Registers a kerning adjustment for the ordered pair `(left, right)`.
    pub fn set_kerning(&mut self, left: char, right: char, offset: i32) {
        self.kerning.insert((left, right), offset);
    }

    // ── lookups ───────────────────────────────────────────────────────────

    #[inline]
    pub fn glyph(&self, codepoint: char) -> Option<&Glyph> {
        self.glyphs.get(&codepoint)
    }

    /// Flattened outline of `codepoint` in design units.
    ///
    /// Flattening happens on the first request and is cached for the font's
    /// lifetime. Missing glyphs yield an empty list.
    pub fn edges(&self, codepoint: char) -> Vec<FlatEdge> {
        if let Some(cached) = self.edge_cache.borrow().get(&codepoint) {
            return cached.clone();
        }

        let edges = self
            .glyphs
            .get(&codepoint)
            .map(|glyph| glyph.flatten())
            .unwrap_or_default();

        self.edge_cache.borrow_mut().insert(codepoint, edges.clone());
        edges
    }

    /// Advance width in design units; 0 if unregistered.
    #[inline]
    pub fn advance(&self, codepoint: char) -> i32 {
        self.metrics.get(&codepoint).map_or(0, |m| m.advance_width)
    }

    /// Left side bearing in design units; 0 if unregistered.
    #[inline]
    pub fn left_side_bearing(&self, codepoint: char) -> i32 {
        self.metrics.get(&codepoint).map_or(0, |m| m.left_side_bearing)
    }

    /// Kerning adjustment for the ordered pair; 0 if unregistered.
    #[inline]
    pub fn kerning(&self, left: char, right: char) -> i32 {
        self.kerning.get(&(left, right)).copied().unwrap_or(0)
    }

    #[inline]
    pub fn units_per_em(&self) -> u32 {
        self.units_per_em
    }

    #[inline]
    pub fn ascent(&self) -> f64 {
        self.ascent
    }

    #[inline]
    pub fn descent(&self) -> f64 {
        self.descent
    }

    #[inline]
    pub fn line_gap(&self) -> f64 {
        self.line_gap
    }

    #[inline]
    pub fn line_height(&self) -> f64 {
        self.ascent - self.descent + self.line_gap
    }
}

#[cfg(test)]
mod tests {
    use crate::coords::{Box2, Vec2};
    use crate::text::ContourPoint;

    use super::*;

    fn font() -> Font {
        Font::new(1000, 800.0, -200.0, 100.0).unwrap()
    }

    fn square_glyph() -> Glyph {
        Glyph::new(
            Box2::new(Vec2::zero(), Vec2::new(10.0, 10.0)),
            vec![vec![
                ContourPoint::on(0.0, 0.0),
                ContourPoint::on(0.0, 10.0),
                ContourPoint::on(10.0, 10.0),
                ContourPoint::on(10.0, 0.0),
            ]],
        )
    }

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn zero_units_per_em_is_rejected() {
        assert!(Font::new(0, 800.0, -200.0, 0.0).is_err());
    }

    #[test]
    fn line_height_combines_vertical_metrics() {
        assert_eq!(font().line_height(), 1100.0);
    }

    // ── default lookups ───────────────────────────────────────────────────

    #[test]
    fn unregistered_lookups_default_to_zero() {
        let f = font();
        assert_eq!(f.advance('Q'), 0);
        assert_eq!(f.left_side_bearing('Q'), 0);
        assert_eq!(f.kerning('A', 'V'), 0);
        assert!(f.edges('Q').is_empty());
    }

    #[test]
    fn kerning_pairs_are_ordered() {
        let mut f = font();
        f.set_kerning('A', 'V', -50);
        assert_eq!(f.kerning('A', 'V'), -50);
        assert_eq!(f.kerning('V', 'A'), 0);
    }

    #[test]
    fn metrics_round_trip() {
        let mut f = font();
        f.set_metrics('a', GlyphMetrics { advance_width: 520, left_side_bearing: 30 });
        assert_eq!(f.advance('a'), 520);
        assert_eq!(f.left_side_bearing('a'), 30);
    }

    // ── edge cache ────────────────────────────────────────────────────────

    #[test]
    fn edges_are_cached_per_codepoint() {
        let mut f = font();
        f.set_glyph('x', square_glyph());

        let first = f.edges('x');
        assert_eq!(first.len(), 4);
        assert_eq!(f.edge_cache.borrow().len(), 1);

        // Second request is served from the cache and matches exactly.
        let second = f.edges('x');
        assert_eq!(first, second);
        assert_eq!(f.edge_cache.borrow().len(), 1);
    }

    #[test]
    fn missing_glyph_result_is_cached_too() {
        let f = font();
        assert!(f.edges('?').is_empty());
        assert!(f.edge_cache.borrow().contains_key(&'?'));
    }
}

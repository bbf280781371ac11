//! Glyph outlines, font tables, and text layout.
//!
//! Responsibilities:
//! - store glyph contours (quadratic outlines in font design units)
//! - flatten curves to straight segments, cached per codepoint
//! - metric and kerning lookup with zero defaults
//! - lay out a string along a baseline and fill each glyph with the
//!   even-odd rule
//!
//! Font *files* are parsed by an external loader; this module consumes
//! already-decoded outlines and tables. All design-unit quantities scale by
//! `font_size / units_per_em` at layout time.

mod font;
mod glyph;
mod run;

pub use font::{Font, FontError, GlyphMetrics};
pub use glyph::{ContourPoint, FlatEdge, Glyph};
pub use run::TextRun;

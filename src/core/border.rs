//! Border glyph sets
//!
//! A pane border is eight glyphs in the fixed order
//! {left, right, top, bottom, top-left, top-right, bottom-left, bottom-right},
//! the same layout curses' `wborder` family takes. Each new pane gets a copy
//! of the default set, never a shared reference, so restyling one pane's
//! border cannot leak into another's.

use super::cell::Attrs;

/// A single border-drawing character with its display attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub attrs: Attrs,
}

impl Glyph {
    pub const fn plain(ch: char) -> Self {
        Self {
            ch,
            attrs: Attrs {
                bold: false,
                dim: false,
                italic: false,
                underline: false,
                blink: false,
                reverse: false,
            },
        }
    }
}

/// The eight glyphs making up a pane border.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderGlyphs {
    pub left: Glyph,
    pub right: Glyph,
    pub top: Glyph,
    pub bottom: Glyph,
    pub top_left: Glyph,
    pub top_right: Glyph,
    pub bottom_left: Glyph,
    pub bottom_right: Glyph,
}

impl BorderGlyphs {
    /// Heavy box-drawing characters
    pub const HEAVY: BorderGlyphs = BorderGlyphs {
        left: Glyph::plain('┃'),
        right: Glyph::plain('┃'),
        top: Glyph::plain('━'),
        bottom: Glyph::plain('━'),
        top_left: Glyph::plain('┏'),
        top_right: Glyph::plain('┓'),
        bottom_left: Glyph::plain('┗'),
        bottom_right: Glyph::plain('┛'),
    };

    /// Single-line box-drawing characters
    pub const SINGLE: BorderGlyphs = BorderGlyphs {
        left: Glyph::plain('│'),
        right: Glyph::plain('│'),
        top: Glyph::plain('─'),
        bottom: Glyph::plain('─'),
        top_left: Glyph::plain('┌'),
        top_right: Glyph::plain('┐'),
        bottom_left: Glyph::plain('└'),
        bottom_right: Glyph::plain('┘'),
    };

    /// Double-line box-drawing characters
    pub const DOUBLE: BorderGlyphs = BorderGlyphs {
        left: Glyph::plain('║'),
        right: Glyph::plain('║'),
        top: Glyph::plain('═'),
        bottom: Glyph::plain('═'),
        top_left: Glyph::plain('╔'),
        top_right: Glyph::plain('╗'),
        bottom_left: Glyph::plain('╚'),
        bottom_right: Glyph::plain('╝'),
    };

    /// Plain ASCII fallback
    pub const ASCII: BorderGlyphs = BorderGlyphs {
        left: Glyph::plain('|'),
        right: Glyph::plain('|'),
        top: Glyph::plain('-'),
        bottom: Glyph::plain('-'),
        top_left: Glyph::plain('+'),
        top_right: Glyph::plain('+'),
        bottom_left: Glyph::plain('+'),
        bottom_right: Glyph::plain('+'),
    };
}

impl Default for BorderGlyphs {
    fn default() -> Self {
        Self::HEAVY
    }
}

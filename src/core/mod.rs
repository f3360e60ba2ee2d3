//! Core primitives: coordinates, cells, border glyphs, and the cell grid.

pub mod border;
pub mod cell;
pub mod coord;
pub mod grid;

pub use border::{BorderGlyphs, Glyph};
pub use cell::{Attrs, Cell, Color};
pub use coord::Coord;
pub use grid::Grid;

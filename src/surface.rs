//! Common operation set for pane-like types
//!
//! [`Pane`](crate::Pane) and [`SubPane`](crate::SubPane) share one command
//! surface; this trait lets hosts treat either polymorphically. Screen-
//! affecting operations take the backend explicitly so a whole pane tree can
//! share one backend without interior mutability.

use crate::backend::{Backend, PairId, Result};
use crate::core::{BorderGlyphs, Coord};

/// Operations shared by plain and nested panes
pub trait Surface {
    /// Outer (origin, extent) rectangle on the display
    fn footprint(&self) -> (Coord, Coord);

    /// Inner writable (min, max) rectangle
    fn cursor_bounds(&self) -> (Coord, Coord);

    /// Set the writable rectangle's minimum corner, clamped strictly inside
    /// the footprint
    fn set_cursor_min(&mut self, c: Coord);

    /// Set the writable rectangle's maximum corner, clamped strictly inside
    /// the footprint
    fn set_cursor_max(&mut self, c: Coord);

    /// Current write-cursor position
    fn cursor(&self) -> Coord;

    /// Clamp `c` strictly inside the footprint, store it, and move the
    /// backend cursor there
    fn move_cursor(&mut self, backend: &mut dyn Backend, c: Coord) -> Result<()>;

    /// Current border glyph set
    fn border(&self) -> &BorderGlyphs;

    /// Replace the border glyph set (takes effect on the next
    /// [`draw_border`](Surface::draw_border))
    fn set_border(&mut self, glyphs: BorderGlyphs);

    /// Draw the stored border glyphs
    fn draw_border(&self, backend: &mut dyn Backend) -> Result<()>;

    /// Commit buffered changes to the display
    fn refresh(&self, backend: &mut dyn Backend) -> Result<()>;

    /// Erase contents and border, then refresh
    fn clear(&self, backend: &mut dyn Backend) -> Result<()>;

    /// Currently applied color pair
    fn color_pair(&self) -> PairId;

    /// Apply a registered color pair as the background
    fn set_color_pair(&mut self, backend: &mut dyn Backend, pair: PairId) -> Result<()>;
}

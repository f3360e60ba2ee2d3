//! Sub-panes - panes nested inside a parent pane
//!
//! A `SubPane` borrows its parent [`Pane`] for its whole lifetime, so the
//! parent region can never disappear underneath it. Refreshing a sub-pane
//! flushes root to leaf: the whole display, then the parent's region, then
//! its own, so a parent's border and content are committed before the
//! child's land on top.

use log::{debug, trace};

use crate::backend::{Backend, PairId, RegionId, Result};
use crate::core::{BorderGlyphs, Color, Coord};
use crate::pane::{Pane, PANE_PAIR};
use crate::surface::Surface;

/// A pane nested inside a parent pane
pub struct SubPane<'p> {
    parent: &'p Pane,
    origin: Coord,
    extent: Coord,
    cursor_min: Coord,
    cursor_max: Coord,
    cursor: Coord,
    border: BorderGlyphs,
    color_pair: PairId,
    handle: RegionId,
}

impl<'p> SubPane<'p> {
    /// Create a sub-pane anchored to `parent`.
    ///
    /// Requested bounds are clamped strictly inside the parent's footprint,
    /// leaving the parent's border visible on every side; like pane
    /// construction this is silent normalization, not an error.
    pub fn new(
        backend: &mut dyn Backend,
        parent: &'p Pane,
        origin: Coord,
        extent: Coord,
    ) -> Result<SubPane<'p>> {
        let (parent_origin, parent_extent) = parent.footprint();
        let clamped_origin = origin.clamp_inside(parent_origin, parent_extent);
        let clamped_extent = extent.clamp_inside(parent_origin, parent_extent);

        if clamped_origin != origin || clamped_extent != extent {
            trace!(
                "sub-pane bounds normalized: {:?}..{:?} -> {:?}..{:?}",
                origin,
                extent,
                clamped_origin,
                clamped_extent
            );
        }

        let handle =
            backend.create_child_region(parent.handle(), clamped_origin, clamped_extent)?;
        let cursor_min = Coord::new(clamped_origin.row + 1, clamped_origin.col + 1);
        let cursor_max = Coord::new(clamped_extent.row - 1, clamped_extent.col - 1);

        let mut sub = SubPane {
            parent,
            origin: clamped_origin,
            extent: clamped_extent,
            cursor_min,
            cursor_max,
            cursor: cursor_min,
            border: BorderGlyphs::default(),
            color_pair: 0,
            handle,
        };

        backend.move_cursor(handle, sub.cursor)?;

        if backend.color_support() {
            backend.register_pair(PANE_PAIR, Color::Black, Color::White)?;
            backend.set_background(handle, PANE_PAIR)?;
            sub.color_pair = PANE_PAIR;
        }

        debug!(
            "sub-pane {:?} spans {:?}..{:?} inside {:?}",
            handle,
            clamped_origin,
            clamped_extent,
            parent.handle()
        );
        Ok(sub)
    }

    /// The pane this sub-pane is anchored to
    pub fn parent(&self) -> &Pane {
        self.parent
    }

    /// Backend handle for this sub-pane's region
    pub fn handle(&self) -> RegionId {
        self.handle
    }

    /// Tear down the backend region. The parent stays untouched.
    pub fn close(self, backend: &mut dyn Backend) -> Result<()> {
        backend.drop_region(self.handle)
    }
}

impl Surface for SubPane<'_> {
    fn footprint(&self) -> (Coord, Coord) {
        (self.origin, self.extent)
    }

    fn cursor_bounds(&self) -> (Coord, Coord) {
        (self.cursor_min, self.cursor_max)
    }

    fn set_cursor_min(&mut self, c: Coord) {
        self.cursor_min = c.clamp_inside(self.origin, self.extent);
    }

    fn set_cursor_max(&mut self, c: Coord) {
        self.cursor_max = c.clamp_inside(self.origin, self.extent);
    }

    fn cursor(&self) -> Coord {
        self.cursor
    }

    fn move_cursor(&mut self, backend: &mut dyn Backend, c: Coord) -> Result<()> {
        let pos = c.clamp_inside(self.origin, self.extent);
        if pos != c {
            trace!("cursor {:?} clamped to {:?}", c, pos);
        }
        self.cursor = pos;
        backend.move_cursor(self.handle, pos)
    }

    fn border(&self) -> &BorderGlyphs {
        &self.border
    }

    fn set_border(&mut self, glyphs: BorderGlyphs) {
        self.border = glyphs;
    }

    fn draw_border(&self, backend: &mut dyn Backend) -> Result<()> {
        backend.draw_border(self.handle, &self.border)
    }

    fn refresh(&self, backend: &mut dyn Backend) -> Result<()> {
        // Root to leaf: display, parent, then this region.
        backend.flush_display()?;
        backend.flush_region(self.parent.handle())?;
        backend.flush_region(self.handle)
    }

    fn clear(&self, backend: &mut dyn Backend) -> Result<()> {
        backend.erase(self.handle)?;
        self.refresh(backend)
    }

    fn color_pair(&self) -> PairId {
        self.color_pair
    }

    fn set_color_pair(&mut self, backend: &mut dyn Backend, pair: PairId) -> Result<()> {
        backend.set_background(self.handle, pair)?;
        self.color_pair = pair;
        Ok(())
    }
}

//! Software ANSI backend
//!
//! Keeps one cell grid per region plus a composited screen grid, and writes
//! ANSI escape sequences to the supplied writer on flush. `flush_region`
//! blits the region onto the screen grid and emits output for exactly that
//! rectangle, so a region flushed after a whole-display flush lands on top.

use std::collections::HashMap;
use std::io::Write;

use log::{debug, trace};

use super::{Backend, Error, PairId, RegionId, Result};
use crate::core::{BorderGlyphs, Color, Coord, Grid};
use crate::renderer::AnsiRenderer;

/// Per-region buffered state
struct RegionBuf {
    origin: Coord,
    extent: Coord,
    /// Footprint-sized content buffer, border included
    grid: Grid,
    /// Write cursor, absolute display coordinates
    cursor: Coord,
    /// Currently applied background pair
    background: PairId,
    parent: Option<RegionId>,
}

impl RegionBuf {
    fn rows(&self) -> usize {
        (self.extent.row - self.origin.row + 1) as usize
    }

    fn cols(&self) -> usize {
        (self.extent.col - self.origin.col + 1) as usize
    }
}

/// Backend rendering regions to an ANSI escape stream
pub struct AnsiBackend<W: Write> {
    rows: i32,
    cols: i32,
    color: bool,
    out: W,
    renderer: AnsiRenderer,
    /// Composited display surface
    screen: Grid,
    regions: HashMap<RegionId, RegionBuf>,
    pairs: HashMap<PairId, (Color, Color)>,
    next_id: u32,
}

impl<W: Write> AnsiBackend<W> {
    /// Create a backend for a `rows` x `cols` display writing to `out`.
    ///
    /// Pair 0 is pre-registered as white-on-black, matching the terminal
    /// default state.
    pub fn new(rows: i32, cols: i32, out: W) -> Self {
        let mut pairs = HashMap::new();
        pairs.insert(0, (Color::White, Color::Black));

        Self {
            rows,
            cols,
            color: true,
            out,
            renderer: AnsiRenderer::new(),
            screen: Grid::new(rows.max(0) as usize, cols.max(0) as usize),
            regions: HashMap::new(),
            pairs,
            next_id: 1,
        }
    }

    /// Report the display as monochrome
    pub fn monochrome(mut self) -> Self {
        self.color = false;
        self
    }

    /// Consume the backend, returning the writer
    pub fn into_writer(self) -> W {
        self.out
    }

    fn region(&self, id: RegionId) -> Result<&RegionBuf> {
        self.regions.get(&id).ok_or(Error::UnknownRegion(id))
    }

    fn region_mut(&mut self, id: RegionId) -> Result<&mut RegionBuf> {
        self.regions.get_mut(&id).ok_or(Error::UnknownRegion(id))
    }

    fn pair_colors(&self, pair: PairId) -> Result<(Color, Color)> {
        self.pairs.get(&pair).copied().ok_or(Error::UnknownPair(pair))
    }

    fn check_geometry(&self, origin: Coord, extent: Coord) -> Result<()> {
        let valid = origin.row >= 0
            && origin.col >= 0
            && extent.row >= origin.row
            && extent.col >= origin.col
            && extent.row < self.rows
            && extent.col < self.cols;
        if valid {
            Ok(())
        } else {
            Err(Error::BadGeometry { origin, extent })
        }
    }

    fn insert_region(
        &mut self,
        origin: Coord,
        extent: Coord,
        parent: Option<RegionId>,
    ) -> Result<RegionId> {
        self.check_geometry(origin, extent)?;

        let id = RegionId(self.next_id);
        self.next_id += 1;

        let rows = (extent.row - origin.row + 1) as usize;
        let cols = (extent.col - origin.col + 1) as usize;
        self.regions.insert(
            id,
            RegionBuf {
                origin,
                extent,
                grid: Grid::new(rows, cols),
                cursor: origin,
                background: 0,
                parent,
            },
        );

        debug!(
            "created region {:?} at {:?}..{:?} (parent {:?})",
            id, origin, extent, parent
        );
        Ok(id)
    }
}

impl<W: Write> Backend for AnsiBackend<W> {
    fn display_size(&self) -> (i32, i32) {
        (self.rows, self.cols)
    }

    fn color_support(&self) -> bool {
        self.color
    }

    fn create_region(&mut self, origin: Coord, extent: Coord) -> Result<RegionId> {
        self.insert_region(origin, extent, None)
    }

    fn create_child_region(
        &mut self,
        parent: RegionId,
        origin: Coord,
        extent: Coord,
    ) -> Result<RegionId> {
        let parent_buf = self
            .regions
            .get(&parent)
            .ok_or(Error::InvalidParent(parent))?;

        // The child's footprint must stay inside the parent's.
        let inside = origin.row >= parent_buf.origin.row
            && origin.col >= parent_buf.origin.col
            && extent.row <= parent_buf.extent.row
            && extent.col <= parent_buf.extent.col;
        if !inside {
            return Err(Error::BadGeometry { origin, extent });
        }

        self.insert_region(origin, extent, Some(parent))
    }

    fn move_cursor(&mut self, id: RegionId, pos: Coord) -> Result<()> {
        self.region_mut(id)?.cursor = pos;
        Ok(())
    }

    fn draw_border(&mut self, id: RegionId, glyphs: &BorderGlyphs) -> Result<()> {
        let pair = self.region(id)?.background;
        let (fg, bg) = self.pair_colors(pair)?;
        self.region_mut(id)?.grid.draw_border(glyphs, fg, bg);
        Ok(())
    }

    fn set_background(&mut self, id: RegionId, pair: PairId) -> Result<()> {
        let (fg, bg) = self.pair_colors(pair)?;
        let region = self.region_mut(id)?;
        region.background = pair;
        region.grid.set_colors(fg, bg);
        Ok(())
    }

    fn register_pair(&mut self, pair: PairId, fg: Color, bg: Color) -> Result<()> {
        trace!("registering pair {} as {:?} on {:?}", pair, fg, bg);
        self.pairs.insert(pair, (fg, bg));
        Ok(())
    }

    fn erase(&mut self, id: RegionId) -> Result<()> {
        let pair = self.region(id)?.background;
        let (fg, bg) = self.pair_colors(pair)?;
        self.region_mut(id)?.grid.clear_with(' ', fg, bg);
        Ok(())
    }

    fn flush_region(&mut self, id: RegionId) -> Result<()> {
        let (origin, cursor, rows, cols) = {
            let region = self.region(id)?;
            (region.origin, region.cursor, region.rows(), region.cols())
        };

        {
            let region = &self.regions[&id];
            self.screen.blit(
                &region.grid,
                0,
                0,
                origin.row as usize,
                origin.col as usize,
                rows,
                cols,
            );
        }

        let mut output = self.renderer.render_rect(
            &self.screen,
            origin.row as usize,
            origin.col as usize,
            rows,
            cols,
        );
        // Leave the terminal cursor where the region's write cursor sits.
        output.push_str(
            &self
                .renderer
                .move_cursor(cursor.row.max(0) as usize, cursor.col.max(0) as usize),
        );

        self.out.write_all(output.as_bytes())?;
        self.out.flush()?;
        Ok(())
    }

    fn flush_display(&mut self) -> Result<()> {
        let output = self.renderer.render_full(&self.screen);
        self.out.write_all(output.as_bytes())?;
        self.out.flush()?;
        Ok(())
    }

    fn drop_region(&mut self, id: RegionId) -> Result<()> {
        if !self.regions.contains_key(&id) {
            return Err(Error::UnknownRegion(id));
        }
        if self.regions.values().any(|r| r.parent == Some(id)) {
            return Err(Error::ParentInUse(id));
        }
        self.regions.remove(&id);
        debug!("dropped region {:?}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pane::Pane;
    use crate::surface::Surface;

    fn backend() -> AnsiBackend<Vec<u8>> {
        AnsiBackend::new(24, 80, Vec::new())
    }

    #[test]
    fn test_create_and_flush_border() {
        let mut backend = backend();
        let id = backend
            .create_region(Coord::new(2, 2), Coord::new(6, 10))
            .unwrap();
        backend.draw_border(id, &BorderGlyphs::HEAVY).unwrap();
        backend.flush_region(id).unwrap();

        let output = String::from_utf8(backend.into_writer()).unwrap();
        assert!(output.contains('┏'));
        assert!(output.contains('┛'));
        // Region's top-left is emitted at one-based (3, 3)
        assert!(output.contains("\x1b[3;3H"));
    }

    #[test]
    fn test_child_region_must_fit_parent() {
        let mut backend = backend();
        let parent = backend
            .create_region(Coord::new(5, 5), Coord::new(10, 10))
            .unwrap();

        let err = backend
            .create_child_region(parent, Coord::new(4, 6), Coord::new(9, 9))
            .unwrap_err();
        assert!(matches!(err, Error::BadGeometry { .. }));

        backend
            .create_child_region(parent, Coord::new(6, 6), Coord::new(9, 9))
            .unwrap();
    }

    #[test]
    fn test_background_pair_must_exist() {
        let mut backend = backend();
        let id = backend
            .create_region(Coord::new(0, 0), Coord::new(5, 5))
            .unwrap();
        assert!(matches!(
            backend.set_background(id, 7),
            Err(Error::UnknownPair(7))
        ));

        backend.register_pair(7, Color::Black, Color::White).unwrap();
        backend.set_background(id, 7).unwrap();
        backend.flush_region(id).unwrap();

        let output = String::from_utf8(backend.into_writer()).unwrap();
        assert!(output.contains("47")); // White background
    }

    #[test]
    fn test_drop_parent_with_children_fails() {
        let mut backend = backend();
        let parent = backend
            .create_region(Coord::new(0, 0), Coord::new(10, 10))
            .unwrap();
        let child = backend
            .create_child_region(parent, Coord::new(1, 1), Coord::new(9, 9))
            .unwrap();

        assert!(matches!(
            backend.drop_region(parent),
            Err(Error::ParentInUse(_))
        ));
        backend.drop_region(child).unwrap();
        backend.drop_region(parent).unwrap();
    }

    #[test]
    fn test_monochrome_pane_keeps_default_colors() {
        let mut backend = AnsiBackend::new(24, 80, Vec::new()).monochrome();
        assert!(!backend.color_support());

        let pane = Pane::full_screen(&mut backend).unwrap();
        assert_eq!(pane.color_pair(), 0);

        backend.flush_region(pane.handle()).unwrap();
        let output = String::from_utf8(backend.into_writer()).unwrap();
        // No black-on-white pair was registered or applied
        assert!(!output.contains("47"));
        assert!(!output.contains("\x1b[30"));
    }

    #[test]
    fn test_geometry_rejected_outside_display() {
        let mut backend = backend();
        assert!(backend
            .create_region(Coord::new(0, 0), Coord::new(24, 80))
            .is_err());
        assert!(backend
            .create_region(Coord::new(-1, 0), Coord::new(5, 5))
            .is_err());
    }
}

//! Panes - bordered rectangular screen regions
//!
//! A `Pane` owns one backend region: a footprint on the display, a border
//! glyph set, an inner writable rectangle, a tracked write cursor, and a
//! color pair. All screen effects are issued through the [`Backend`] passed
//! to each operation; nothing becomes visible until a refresh.

use log::{debug, trace};

use crate::backend::{Backend, Error, PairId, RegionId, Result};
use crate::core::{BorderGlyphs, Color, Coord};
use crate::surface::Surface;

/// The color pair panes register for black-on-white backgrounds
pub(crate) const PANE_PAIR: PairId = 1;

/// An independent rectangular screen region with border, cursor, and color
pub struct Pane {
    /// Absolute top-left corner
    origin: Coord,
    /// Absolute bottom-right corner, inclusive
    extent: Coord,
    /// Inner writable rectangle, kept strictly inside the footprint
    cursor_min: Coord,
    cursor_max: Coord,
    /// Current write-cursor position
    cursor: Coord,
    border: BorderGlyphs,
    color_pair: PairId,
    handle: RegionId,
}

impl Pane {
    /// Create a pane covering the whole display.
    ///
    /// Fails with [`Error::DisplayTooSmall`] when the display cannot hold a
    /// border plus one writable cell.
    pub fn full_screen(backend: &mut dyn Backend) -> Result<Self> {
        let (rows, cols) = backend.display_size();
        if rows < 2 || cols < 2 {
            return Err(Error::DisplayTooSmall { rows, cols });
        }
        Self::build(backend, Coord::new(0, 0), Coord::new(rows - 1, cols - 1))
    }

    /// Create a pane at the given footprint.
    ///
    /// Negative origin components are clamped to zero and extents past the
    /// display edge are clamped to the last display cell; requests are
    /// normalized silently, never rejected.
    pub fn new(backend: &mut dyn Backend, origin: Coord, extent: Coord) -> Result<Self> {
        let (rows, cols) = backend.display_size();
        let clamped_origin = Coord::new(origin.row.max(0), origin.col.max(0));
        let clamped_extent = Coord::new(extent.row.min(rows - 1), extent.col.min(cols - 1));

        if clamped_origin != origin || clamped_extent != extent {
            trace!(
                "pane bounds normalized: {:?}..{:?} -> {:?}..{:?}",
                origin,
                extent,
                clamped_origin,
                clamped_extent
            );
        }
        Self::build(backend, clamped_origin, clamped_extent)
    }

    fn build(backend: &mut dyn Backend, origin: Coord, extent: Coord) -> Result<Self> {
        let handle = backend.create_region(origin, extent)?;
        let cursor_min = Coord::new(origin.row + 1, origin.col + 1);
        let cursor_max = Coord::new(extent.row - 1, extent.col - 1);

        let mut pane = Self {
            origin,
            extent,
            cursor_min,
            cursor_max,
            cursor: cursor_min,
            border: BorderGlyphs::default(),
            color_pair: 0,
            handle,
        };

        backend.move_cursor(handle, pane.cursor)?;

        if backend.color_support() {
            backend.register_pair(PANE_PAIR, Color::Black, Color::White)?;
            backend.set_background(handle, PANE_PAIR)?;
            pane.color_pair = PANE_PAIR;
        }

        debug!("pane {:?} spans {:?}..{:?}", handle, origin, extent);
        Ok(pane)
    }

    /// Backend handle for this pane's region
    pub fn handle(&self) -> RegionId {
        self.handle
    }

    /// Tear down the backend region.
    ///
    /// Sub-panes anchored to this pane must be closed first.
    pub fn close(self, backend: &mut dyn Backend) -> Result<()> {
        backend.drop_region(self.handle)
    }
}

impl Surface for Pane {
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
        // Clamped against the outer footprint, not the writable rectangle:
        // callers that shrink the bounds can still park the cursor on any
        // interior cell.
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
        // Whole surface first so a stale full-surface flush cannot clobber
        // this pane's changes.
        backend.flush_display()?;
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{Call, RecordingBackend};
    use pretty_assertions::assert_eq;

    fn init_logs() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn test_full_screen_defaults_on_24x80() {
        init_logs();
        let mut backend = RecordingBackend::with_size(24, 80);
        let pane = Pane::full_screen(&mut backend).unwrap();

        assert_eq!(pane.footprint(), (Coord::new(0, 0), Coord::new(23, 79)));
        assert_eq!(pane.cursor_bounds(), (Coord::new(1, 1), Coord::new(22, 78)));
        assert_eq!(pane.cursor(), Coord::new(1, 1));
        assert_eq!(pane.color_pair(), 1);
    }

    #[test]
    fn test_full_screen_rejects_tiny_display() {
        let mut backend = RecordingBackend::with_size(1, 80);
        assert!(matches!(
            Pane::full_screen(&mut backend),
            Err(Error::DisplayTooSmall { .. })
        ));
    }

    #[test]
    fn test_construction_issues_cursor_move() {
        let mut backend = RecordingBackend::new();
        let pane = Pane::new(&mut backend, Coord::new(5, 5), Coord::new(10, 10)).unwrap();

        assert_eq!(
            backend.calls[1],
            Call::MoveCursor {
                id: pane.handle(),
                pos: Coord::new(6, 6)
            }
        );
    }

    #[test]
    fn test_new_clamps_negative_origin() {
        let mut backend = RecordingBackend::new();
        let pane = Pane::new(&mut backend, Coord::new(-4, -1), Coord::new(10, 10)).unwrap();
        let (origin, _) = pane.footprint();
        assert_eq!(origin, Coord::new(0, 0));
    }

    #[test]
    fn test_new_clamps_oversized_extent() {
        let mut backend = RecordingBackend::with_size(24, 80);
        let pane = Pane::new(&mut backend, Coord::new(0, 0), Coord::new(99, 200)).unwrap();
        let (_, extent) = pane.footprint();
        assert_eq!(extent, Coord::new(23, 79));
    }

    #[test]
    fn test_move_cursor_clamps_to_footprint() {
        let mut backend = RecordingBackend::new();
        let mut pane = Pane::new(&mut backend, Coord::new(5, 5), Coord::new(10, 10)).unwrap();

        pane.move_cursor(&mut backend, Coord::new(100, 100)).unwrap();
        assert_eq!(pane.cursor(), Coord::new(9, 9));

        pane.move_cursor(&mut backend, Coord::new(0, 0)).unwrap();
        assert_eq!(pane.cursor(), Coord::new(6, 6));
    }

    #[test]
    fn test_cursor_bounds_stay_inside_footprint() {
        let mut backend = RecordingBackend::new();
        let mut pane = Pane::new(&mut backend, Coord::new(5, 5), Coord::new(10, 10)).unwrap();

        pane.set_cursor_min(Coord::new(-50, 7));
        pane.set_cursor_max(Coord::new(10, 200));
        let (min, max) = pane.cursor_bounds();
        assert_eq!(min, Coord::new(6, 7));
        assert_eq!(max, Coord::new(9, 9));
    }

    #[test]
    fn test_border_round_trip() {
        let mut backend = RecordingBackend::new();
        let mut pane = Pane::full_screen(&mut backend).unwrap();

        pane.set_border(BorderGlyphs::DOUBLE);
        assert_eq!(*pane.border(), BorderGlyphs::DOUBLE);

        pane.draw_border(&mut backend).unwrap();
        assert_eq!(
            *backend.calls.last().unwrap(),
            Call::DrawBorder {
                id: pane.handle(),
                glyphs: BorderGlyphs::DOUBLE
            }
        );
    }

    #[test]
    fn test_refresh_flushes_display_then_region() {
        let mut backend = RecordingBackend::new();
        let pane = Pane::full_screen(&mut backend).unwrap();
        backend.clear_calls();

        pane.refresh(&mut backend).unwrap();
        assert_eq!(
            backend.calls,
            vec![Call::FlushDisplay, Call::FlushRegion(pane.handle())]
        );
    }

    #[test]
    fn test_clear_erases_then_refreshes() {
        let mut backend = RecordingBackend::new();
        let pane = Pane::full_screen(&mut backend).unwrap();
        backend.clear_calls();

        pane.clear(&mut backend).unwrap();
        assert_eq!(
            backend.calls,
            vec![
                Call::Erase(pane.handle()),
                Call::FlushDisplay,
                Call::FlushRegion(pane.handle())
            ]
        );
    }

    #[test]
    fn test_monochrome_display_keeps_pair_zero() {
        let mut backend = RecordingBackend::new().monochrome();
        let pane = Pane::full_screen(&mut backend).unwrap();
        assert_eq!(pane.color_pair(), 0);
        assert!(!backend
            .calls
            .iter()
            .any(|call| matches!(call, Call::RegisterPair { .. })));
    }

    #[test]
    fn test_set_color_pair_stores_applied_id() {
        let mut backend = RecordingBackend::new();
        let mut pane = Pane::full_screen(&mut backend).unwrap();

        backend
            .register_pair(3, Color::BrightWhite, Color::Blue)
            .unwrap();
        pane.set_color_pair(&mut backend, 3).unwrap();
        assert_eq!(pane.color_pair(), 3);
    }

    #[test]
    fn test_close_drops_region() {
        let mut backend = RecordingBackend::new();
        let pane = Pane::full_screen(&mut backend).unwrap();
        let handle = pane.handle();

        pane.close(&mut backend).unwrap();
        assert_eq!(*backend.calls.last().unwrap(), Call::DropRegion(handle));
    }
}

//! Display backend abstraction
//!
//! Panes never touch the terminal themselves; every screen-affecting call
//! goes through the [`Backend`] trait. Two implementations ship with the
//! crate: [`AnsiBackend`] renders regions to an ANSI escape stream, and
//! [`RecordingBackend`] records the command sequence for tests and headless
//! hosts.

use thiserror::Error;

use crate::core::{BorderGlyphs, Color, Coord};

pub mod ansi;
pub mod recording;

pub use ansi::AnsiBackend;
pub use recording::{Call, RecordingBackend};

/// Opaque handle for a backend region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegionId(pub u32);

/// Registered color-pair identifier
pub type PairId = u16;

/// Errors surfaced by backends and pane construction
#[derive(Debug, Error)]
pub enum Error {
    #[error("display too small for a pane: {rows}x{cols}")]
    DisplayTooSmall { rows: i32, cols: i32 },

    #[error("bad region geometry: origin {origin:?} to extent {extent:?}")]
    BadGeometry { origin: Coord, extent: Coord },

    #[error("unknown region handle {0:?}")]
    UnknownRegion(RegionId),

    #[error("invalid parent region {0:?}")]
    InvalidParent(RegionId),

    #[error("color pair {0} is not registered")]
    UnknownPair(PairId),

    #[error("region {0:?} still has child regions")]
    ParentInUse(RegionId),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Command surface of the rendering collaborator.
///
/// All coordinates are absolute display positions; `extent` is the inclusive
/// bottom-right cell of a region. Implementations are free to buffer: nothing
/// has to reach the physical display before a flush call.
pub trait Backend {
    /// Current display size as (rows, cols)
    fn display_size(&self) -> (i32, i32);

    /// Whether the display can render color pairs
    fn color_support(&self) -> bool;

    /// Create an independent region covering `origin..=extent`
    fn create_region(&mut self, origin: Coord, extent: Coord) -> Result<RegionId>;

    /// Create a region nested inside `parent`
    fn create_child_region(
        &mut self,
        parent: RegionId,
        origin: Coord,
        extent: Coord,
    ) -> Result<RegionId>;

    /// Move the region's write cursor to an absolute position
    fn move_cursor(&mut self, id: RegionId, pos: Coord) -> Result<()>;

    /// Draw the region's border with the given glyph set
    fn draw_border(&mut self, id: RegionId, glyphs: &BorderGlyphs) -> Result<()>;

    /// Apply a registered color pair as the region's background
    fn set_background(&mut self, id: RegionId, pair: PairId) -> Result<()>;

    /// Register a foreground/background color pairing under `pair`
    fn register_pair(&mut self, pair: PairId, fg: Color, bg: Color) -> Result<()>;

    /// Erase the region's contents, border included
    fn erase(&mut self, id: RegionId) -> Result<()>;

    /// Flush one region's state to the display
    fn flush_region(&mut self, id: RegionId) -> Result<()>;

    /// Flush the whole display surface
    fn flush_display(&mut self) -> Result<()>;

    /// Tear down a region. Children must be dropped before their parent.
    fn drop_region(&mut self, id: RegionId) -> Result<()>;
}

//! terminal-panes - bordered panes over a character-cell display backend
//!
//! A small object-oriented layer for rectangular screen regions: each
//! [`Pane`] owns a footprint on the display with a border glyph set, an
//! inner writable rectangle, a tracked write cursor, and a color pair.
//! A [`SubPane`] nests inside a parent pane and cascades its refresh through
//! the parent so parents always reach the display before their children.
//!
//! Panes never talk to a terminal directly. Every screen effect goes through
//! a [`Backend`]:
//! - [`AnsiBackend`] buffers regions in cell grids and writes ANSI escape
//!   sequences to any `io::Write` on flush
//! - [`RecordingBackend`] records the command sequence, for tests and
//!   headless hosts
//!
//! # Example
//!
//! ```
//! use terminal_panes::{AnsiBackend, BorderGlyphs, Coord, Pane, SubPane, Surface};
//!
//! # fn main() -> terminal_panes::Result<()> {
//! let mut backend = AnsiBackend::new(24, 80, Vec::new());
//!
//! let mut pane = Pane::new(&mut backend, Coord::new(2, 4), Coord::new(20, 60))?;
//! pane.set_border(BorderGlyphs::DOUBLE);
//! pane.draw_border(&mut backend)?;
//! pane.refresh(&mut backend)?;
//!
//! let sub = SubPane::new(&mut backend, &pane, Coord::new(4, 8), Coord::new(12, 40))?;
//! sub.draw_border(&mut backend)?;
//! sub.refresh(&mut backend)?;
//! # Ok(())
//! # }
//! ```
//!
//! Input handling, layout management, and terminal session setup (raw mode,
//! alternate screen) are out of scope; hosts own the terminal lifecycle.

pub mod backend;
pub mod core;
pub mod pane;
pub mod renderer;
pub mod subpane;
pub mod surface;

// Re-export commonly used types
pub use backend::{AnsiBackend, Backend, Call, Error, PairId, RecordingBackend, RegionId, Result};
pub use core::{Attrs, BorderGlyphs, Cell, Color, Coord, Glyph, Grid};
pub use pane::Pane;
pub use renderer::AnsiRenderer;
pub use subpane::SubPane;
pub use surface::Surface;

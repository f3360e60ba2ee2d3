//! Renderer module
//!
//! Converts cell-grid content to ANSI terminal output.

pub mod ansi;

pub use ansi::AnsiRenderer;

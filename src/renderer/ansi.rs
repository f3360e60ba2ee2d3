//! ANSI escape-sequence renderer
//!
//! Turns grid content into escape sequences for 16-color ANSI terminals.
//! Tracks cursor position and current SGR state to keep the output stream
//! short: attributes and colors are only re-emitted when they change.

use crate::core::{Attrs, Cell, Color, Grid};

/// ANSI escape sequence introducer
const CSI: &str = "\x1b[";

/// Stateful grid-to-ANSI converter
pub struct AnsiRenderer {
    /// Track cursor position for optimization
    cursor_row: usize,
    cursor_col: usize,
    /// Track current attributes to minimize escape codes
    current_fg: Color,
    current_bg: Color,
    current_attrs: Attrs,
}

impl Default for AnsiRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl AnsiRenderer {
    pub fn new() -> Self {
        Self {
            cursor_row: 0,
            cursor_col: 0,
            current_fg: Color::White,
            current_bg: Color::Black,
            current_attrs: Attrs::default(),
        }
    }

    /// Generate a cursor move sequence (zero-based coordinates)
    pub fn move_cursor(&mut self, row: usize, col: usize) -> String {
        self.cursor_row = row;
        self.cursor_col = col;
        format!("{}{};{}H", CSI, row + 1, col + 1)
    }

    /// Generate an SGR (color/attribute) sequence
    fn sgr(&mut self, fg: Color, bg: Color, attrs: Attrs) -> String {
        let mut codes: Vec<u8> = Vec::new();

        // An attribute that was on and is now off needs a full reset; there
        // is no individual SGR off-code for most of them.
        let needs_reset = (self.current_attrs.bold && !attrs.bold)
            || (self.current_attrs.dim && !attrs.dim)
            || (self.current_attrs.italic && !attrs.italic)
            || (self.current_attrs.underline && !attrs.underline)
            || (self.current_attrs.blink && !attrs.blink)
            || (self.current_attrs.reverse && !attrs.reverse);

        if needs_reset {
            codes.push(0);
            // After the reset the terminal is at its own defaults; sentinel
            // colors force both colors to be re-emitted for the next cell.
            self.current_fg = Color::BrightMagenta;
            self.current_bg = Color::BrightMagenta;
            self.current_attrs = Attrs::default();
        }

        for code in attrs.sgr_codes() {
            let already_on = match code {
                1 => self.current_attrs.bold,
                2 => self.current_attrs.dim,
                3 => self.current_attrs.italic,
                4 => self.current_attrs.underline,
                5 => self.current_attrs.blink,
                7 => self.current_attrs.reverse,
                _ => false,
            };
            if !already_on {
                codes.push(code);
            }
        }

        if fg != self.current_fg {
            codes.push(fg.fg_code());
        }
        if bg != self.current_bg {
            codes.push(bg.bg_code());
        }

        self.current_fg = fg;
        self.current_bg = bg;
        self.current_attrs = attrs;

        if codes.is_empty() {
            String::new()
        } else {
            let code_strs: Vec<String> = codes.iter().map(|c| c.to_string()).collect();
            format!("{}{}m", CSI, code_strs.join(";"))
        }
    }

    /// Render a single cell (SGR + character)
    fn render_cell(&mut self, cell: &Cell) -> String {
        let mut output = self.sgr(cell.fg, cell.bg, cell.attrs);
        // Sanitize control characters to prevent terminal corruption
        if cell.ch < ' ' || cell.ch == '\x7f' {
            output.push(' ');
        } else {
            output.push(cell.ch);
        }
        self.cursor_col += 1;
        output
    }

    /// Render the entire grid
    pub fn render_full(&mut self, grid: &Grid) -> String {
        self.render_rect(grid, 0, 0, grid.rows, grid.cols)
    }

    /// Render a rectangular slice of the grid at its on-screen position.
    ///
    /// `row`/`col` are the top-left corner, `h`/`w` the rectangle size.
    /// Out-of-grid cells are skipped.
    pub fn render_rect(&mut self, grid: &Grid, row: usize, col: usize, h: usize, w: usize) -> String {
        let mut output = String::with_capacity(h * w * 10);

        for r in row..(row + h).min(grid.rows) {
            output.push_str(&self.move_cursor(r, col));
            for c in col..(col + w).min(grid.cols) {
                if let Some(cell) = grid.get(r, c) {
                    output.push_str(&self.render_cell(cell));
                }
            }
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Attrs;

    #[test]
    fn test_render_simple() {
        let mut renderer = AnsiRenderer::new();
        let mut grid = Grid::new(5, 10);
        grid.set(0, 0, 'X', Color::Red, Color::Black, Attrs::default());

        let output = renderer.render_full(&grid);
        assert!(output.contains('X'));
        assert!(output.contains("31")); // Red foreground
        assert!(output.starts_with("\x1b[1;1H"));
    }

    #[test]
    fn test_render_rect_positions_cursor() {
        let mut renderer = AnsiRenderer::new();
        let mut grid = Grid::new(24, 80);
        grid.set(5, 5, '#', Color::Green, Color::Black, Attrs::default());

        let output = renderer.render_rect(&grid, 5, 5, 2, 3);
        // One-based terminal coordinates
        assert!(output.contains("\x1b[6;6H"));
        assert!(output.contains('#'));
        assert!(!output.contains("\x1b[1;1H"));
    }

    #[test]
    fn test_sgr_not_repeated_for_same_colors() {
        let mut renderer = AnsiRenderer::new();
        let mut grid = Grid::new(1, 4);
        grid.clear_with('x', Color::Cyan, Color::Black);

        let output = renderer.render_full(&grid);
        // Color set once, then plain characters
        assert_eq!(output.matches("36").count(), 1);
    }
}

//! Cell grid - the display buffer
//!
//! A 2D array of cells in row-major order. The software backend keeps one
//! grid per region plus a composited screen grid.

use super::border::BorderGlyphs;
use super::cell::{Attrs, Cell, Color};

/// The display grid - a 2D array of cells
#[derive(Debug, Clone)]
pub struct Grid {
    /// Grid height in rows
    pub rows: usize,
    /// Grid width in columns
    pub cols: usize,
    /// The cell buffer (row-major order)
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with given dimensions
    pub fn new(rows: usize, cols: usize) -> Self {
        let cells = vec![Cell::default(); rows * cols];
        Self { rows, cols, cells }
    }

    /// Get the index for a position
    #[inline]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row < self.rows && col < self.cols {
            Some(row * self.cols + col)
        } else {
            None
        }
    }

    /// Get a reference to a cell
    pub fn get(&self, row: usize, col: usize) -> Option<&Cell> {
        self.index(row, col).map(|i| &self.cells[i])
    }

    /// Get a mutable reference to a cell
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut Cell> {
        self.index(row, col).map(|i| &mut self.cells[i])
    }

    /// Set a cell at position
    pub fn set(&mut self, row: usize, col: usize, ch: char, fg: Color, bg: Color, attrs: Attrs) {
        if let Some(cell) = self.get_mut(row, col) {
            cell.set(ch, fg, bg, attrs);
        }
    }

    /// Clear with specific character and colors
    pub fn clear_with(&mut self, ch: char, fg: Color, bg: Color) {
        for cell in &mut self.cells {
            cell.ch = ch;
            cell.fg = fg;
            cell.bg = bg;
            cell.attrs = Attrs::default();
        }
    }

    /// Recolor every cell, keeping characters and attributes.
    ///
    /// This is the `wbkgd` behavior: applying a background pair restyles
    /// existing content in place.
    pub fn set_colors(&mut self, fg: Color, bg: Color) {
        for cell in &mut self.cells {
            cell.fg = fg;
            cell.bg = bg;
        }
    }

    /// Draw a border around the grid's outermost cells.
    ///
    /// Each glyph carries its own attributes; colors come from the caller
    /// (the region's current pair). Grids smaller than 2x2 have no interior
    /// and are left untouched.
    pub fn draw_border(&mut self, glyphs: &BorderGlyphs, fg: Color, bg: Color) {
        if self.rows < 2 || self.cols < 2 {
            return;
        }

        let bottom = self.rows - 1;
        let right = self.cols - 1;

        // Corners
        self.set(0, 0, glyphs.top_left.ch, fg, bg, glyphs.top_left.attrs);
        self.set(0, right, glyphs.top_right.ch, fg, bg, glyphs.top_right.attrs);
        self.set(bottom, 0, glyphs.bottom_left.ch, fg, bg, glyphs.bottom_left.attrs);
        self.set(
            bottom,
            right,
            glyphs.bottom_right.ch,
            fg,
            bg,
            glyphs.bottom_right.attrs,
        );

        // Top and bottom edges
        for col in 1..right {
            self.set(0, col, glyphs.top.ch, fg, bg, glyphs.top.attrs);
            self.set(bottom, col, glyphs.bottom.ch, fg, bg, glyphs.bottom.attrs);
        }

        // Left and right edges
        for row in 1..bottom {
            self.set(row, 0, glyphs.left.ch, fg, bg, glyphs.left.attrs);
            self.set(row, right, glyphs.right.ch, fg, bg, glyphs.right.attrs);
        }
    }

    /// Copy a rectangle from another grid
    pub fn blit(
        &mut self,
        src: &Grid,
        src_row: usize,
        src_col: usize,
        dst_row: usize,
        dst_col: usize,
        h: usize,
        w: usize,
    ) {
        for dr in 0..h {
            for dc in 0..w {
                if let Some(src_cell) = src.get(src_row + dr, src_col + dc) {
                    if let Some(dst_cell) = self.get_mut(dst_row + dr, dst_col + dc) {
                        *dst_cell = src_cell.clone();
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_new() {
        let grid = Grid::new(24, 80);
        assert_eq!(grid.rows, 24);
        assert_eq!(grid.cols, 80);
        assert_eq!(grid.get(0, 0).unwrap().ch, ' ');
        assert!(grid.get(24, 0).is_none());
    }

    #[test]
    fn test_grid_set_get() {
        let mut grid = Grid::new(24, 80);
        grid.set(5, 10, 'X', Color::Red, Color::Black, Attrs::default());

        let cell = grid.get(5, 10).unwrap();
        assert_eq!(cell.ch, 'X');
        assert_eq!(cell.fg, Color::Red);
    }

    #[test]
    fn test_draw_border_edges() {
        let mut grid = Grid::new(4, 6);
        grid.draw_border(&BorderGlyphs::SINGLE, Color::White, Color::Black);

        assert_eq!(grid.get(0, 0).unwrap().ch, '┌');
        assert_eq!(grid.get(0, 5).unwrap().ch, '┐');
        assert_eq!(grid.get(3, 0).unwrap().ch, '└');
        assert_eq!(grid.get(3, 5).unwrap().ch, '┘');
        assert_eq!(grid.get(0, 2).unwrap().ch, '─');
        assert_eq!(grid.get(1, 0).unwrap().ch, '│');
        // Interior untouched
        assert_eq!(grid.get(1, 1).unwrap().ch, ' ');
    }

    #[test]
    fn test_blit() {
        let mut src = Grid::new(3, 3);
        src.clear_with('#', Color::Green, Color::Black);
        let mut dst = Grid::new(10, 10);
        dst.blit(&src, 0, 0, 4, 5, 3, 3);

        assert_eq!(dst.get(4, 5).unwrap().ch, '#');
        assert_eq!(dst.get(6, 7).unwrap().ch, '#');
        assert_eq!(dst.get(7, 8).unwrap().ch, ' ');
    }

    #[test]
    fn test_set_colors_keeps_content() {
        let mut grid = Grid::new(2, 2);
        grid.set(0, 0, 'A', Color::Red, Color::Black, Attrs::new().bold());
        grid.set_colors(Color::Black, Color::White);

        let cell = grid.get(0, 0).unwrap();
        assert_eq!(cell.ch, 'A');
        assert_eq!(cell.fg, Color::Black);
        assert_eq!(cell.bg, Color::White);
        assert!(cell.attrs.bold);
    }
}

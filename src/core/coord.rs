//! Display coordinates
//!
//! A `Coord` is a plain (row, column) pair. Whether it names an absolute
//! screen position or a size depends on context.

/// A (row, column) pair on the display.
///
/// Rows grow downward, columns grow rightward, both from zero. Components are
/// signed so out-of-range requests can be expressed and then clamped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    /// Create a coordinate from row and column.
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Clamp this coordinate strictly inside the `(min, max)` rectangle.
    ///
    /// A component at or below the minimum snaps to `min + 1`; a component at
    /// or above the maximum snaps to `max - 1`. This is the rule panes use to
    /// keep the cursor and its bounds off the border cells.
    pub fn clamp_inside(self, min: Coord, max: Coord) -> Coord {
        let row = if self.row <= min.row {
            min.row + 1
        } else if self.row >= max.row {
            max.row - 1
        } else {
            self.row
        };

        let col = if self.col <= min.col {
            min.col + 1
        } else if self.col >= max.col {
            max.col - 1
        } else {
            self.col
        };

        Coord { row, col }
    }
}

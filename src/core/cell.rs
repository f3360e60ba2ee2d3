//! Character cells
//!
//! Each cell is one character position with:
//! - Character (Unicode codepoint)
//! - Foreground color (16-color ANSI)
//! - Background color (16-color ANSI)
//! - Attributes (bold, blink, reverse, etc.)

/// Standard ANSI 16-color palette
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Color {
    Black = 0,
    Red = 1,
    Green = 2,
    Yellow = 3,
    Blue = 4,
    Magenta = 5,
    Cyan = 6,
    White = 7,
    BrightBlack = 8, // Gray
    BrightRed = 9,
    BrightGreen = 10,
    BrightYellow = 11,
    BrightBlue = 12,
    BrightMagenta = 13,
    BrightCyan = 14,
    BrightWhite = 15,
}

impl Default for Color {
    fn default() -> Self {
        Color::White
    }
}

impl Color {
    /// Get ANSI SGR code for foreground
    pub fn fg_code(&self) -> u8 {
        let v = *self as u8;
        if v < 8 { 30 + v } else { 90 + (v - 8) }
    }

    /// Get ANSI SGR code for background
    pub fn bg_code(&self) -> u8 {
        let v = *self as u8;
        if v < 8 { 40 + v } else { 100 + (v - 8) }
    }
}

/// Cell attributes (bold, blink, etc.)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Attrs {
    pub bold: bool,
    pub dim: bool,
    pub italic: bool,
    pub underline: bool,
    pub blink: bool,
    pub reverse: bool,
}

impl Attrs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn blink(mut self) -> Self {
        self.blink = true;
        self
    }

    pub fn reverse(mut self) -> Self {
        self.reverse = true;
        self
    }

    /// Check if any attributes are set
    pub fn any(&self) -> bool {
        self.bold || self.dim || self.italic || self.underline || self.blink || self.reverse
    }

    /// Generate ANSI SGR codes for these attributes
    pub fn sgr_codes(&self) -> Vec<u8> {
        let mut codes = Vec::new();
        if self.bold {
            codes.push(1);
        }
        if self.dim {
            codes.push(2);
        }
        if self.italic {
            codes.push(3);
        }
        if self.underline {
            codes.push(4);
        }
        if self.blink {
            codes.push(5);
        }
        if self.reverse {
            codes.push(7);
        }
        codes
    }
}

/// A single character cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    /// The character to display (Unicode)
    pub ch: char,
    /// Foreground color
    pub fg: Color,
    /// Background color
    pub bg: Color,
    /// Display attributes
    pub attrs: Attrs,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Color::White,
            bg: Color::Black,
            attrs: Attrs::default(),
        }
    }
}

impl Cell {
    /// Set all properties
    pub fn set(&mut self, ch: char, fg: Color, bg: Color, attrs: Attrs) {
        self.ch = ch;
        self.fg = fg;
        self.bg = bg;
        self.attrs = attrs;
    }
}

//! Character metrics supplied by the host renderer.
//!
//! The core only ever asks these questions; it never draws.

use unicode_width::UnicodeWidthChar;

/// Pixel sizes of the font the host draws with. Implementations must be
/// pure: same input, same answer, no side effects.
pub trait CharMetrics {
    fn char_width(&self, byte: u8) -> u32;

    fn line_height(&self) -> u32;
}

/// Visible pixel extent of the text area.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewportGeometry {
    pub width: u32,
    pub height: u32,
}

impl ViewportGeometry {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// A monospace font: every byte is `char_width` pixels wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedMetrics {
    pub char_width: u32,
    pub line_height: u32,
}

impl FixedMetrics {
    pub fn new(char_width: u32, line_height: u32) -> Self {
        Self {
            char_width,
            line_height,
        }
    }
}

impl Default for FixedMetrics {
    fn default() -> Self {
        Self::new(8, 8)
    }
}

impl CharMetrics for FixedMetrics {
    fn char_width(&self, _byte: u8) -> u32 {
        self.char_width
    }

    fn line_height(&self) -> u32 {
        self.line_height
    }
}

/// Terminal cells: one row per line, each byte measured as the Latin-1 code
/// point it would be decoded as.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CellMetrics;

impl CharMetrics for CellMetrics {
    fn char_width(&self, byte: u8) -> u32 {
        UnicodeWidthChar::width(char::from(byte)).unwrap_or(0) as u32
    }

    fn line_height(&self) -> u32 {
        1
    }
}

impl<M: CharMetrics + ?Sized> CharMetrics for &M {
    fn char_width(&self, byte: u8) -> u32 {
        (**self).char_width(byte)
    }

    fn line_height(&self) -> u32 {
        (**self).line_height()
    }
}

impl<M: CharMetrics + ?Sized> CharMetrics for Box<M> {
    fn char_width(&self, byte: u8) -> u32 {
        (**self).char_width(byte)
    }

    fn line_height(&self) -> u32 {
        (**self).line_height()
    }
}

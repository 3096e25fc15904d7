//! Scaling of scroll positions into a 16-bit scrollbar range.
//!
//! When a document is longer (or wider) than the widget can count, every
//! value is shifted right by the smallest power of two that fits `total`.
//! The shift is kept so a value read back from the widget can be shifted
//! left again into a real offset.

use crate::models::TextBuffer;

/// Largest value the host scrollbar widget can represent.
pub const SCROLLBAR_RANGE: usize = 0xFFFF;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Vertical,
    Horizontal,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollbarScale {
    pub total: u16,
    pub visible: u16,
    pub top: u16,
    pub shift: u32,
}

impl ScrollbarScale {
    /// Scales `(total, visible, top)` for the widget.
    pub fn new(total: usize, visible: usize, top: usize) -> Self {
        let mut shift = 0u32;
        while (total >> shift) > SCROLLBAR_RANGE {
            shift += 1;
        }

        let fit = |value: usize| (value >> shift).min(SCROLLBAR_RANGE) as u16;
        Self {
            total: fit(total),
            visible: fit(visible),
            top: fit(top),
            shift,
        }
    }

    /// Recovers the real offset for a widget readback, clamped to
    /// `[0, max_scroll]`.
    pub fn unscale(&self, value: u16, max_scroll: usize) -> usize {
        ((value as usize) << self.shift).min(max_scroll)
    }
}

/// The scale for one axis of `buffer`'s current viewport.
pub fn scrollbar(buffer: &TextBuffer, axis: Axis) -> ScrollbarScale {
    let scroll = buffer.scroll();
    match axis {
        Axis::Vertical => {
            ScrollbarScale::new(buffer.line_count(), scroll.page_h, scroll.scroll_y)
        }
        Axis::Horizontal => {
            ScrollbarScale::new(buffer.max_line_len(), scroll.page_w, scroll.scroll_x)
        }
    }
}

/// Applies a widget readback to the buffer's scroll offset on `axis`.
/// Returns whether the offset changed.
pub fn apply_scrollbar(buffer: &mut TextBuffer, axis: Axis, value: u16) -> bool {
    let scale = scrollbar(buffer, axis);
    let scroll = buffer.scroll_mut();
    let (offset, max) = match axis {
        Axis::Vertical => (&mut scroll.scroll_y, scroll.max_scroll_y),
        Axis::Horizontal => (&mut scroll.scroll_x, scroll.max_scroll_x),
    };

    let target = scale.unscale(value, max);
    let changed = *offset != target;
    *offset = target;
    changed
}

#[cfg(test)]
#[path = "../../tests/unit/view/scrollbar.rs"]
mod tests;

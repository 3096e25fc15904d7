//! Page sizing, scroll clamping and cursor following.

use super::metrics::{CharMetrics, ViewportGeometry};
use super::scrollbar::Axis;
use crate::models::TextBuffer;

/// Character whose width defines one text column.
pub const REFERENCE_CHAR: u8 = b' ';

/// Columns held back from the right edge so the last one is never clipped.
pub const PAGE_WIDTH_MARGIN: usize = 1;

/// Derives `page_w`/`page_h` and the scroll maxima from the geometry, then
/// clamps both scroll offsets into range.
pub fn calculate_max_scroll<M: CharMetrics + ?Sized>(
    buffer: &mut TextBuffer,
    metrics: &M,
    geometry: ViewportGeometry,
) {
    let line_height = metrics.line_height();
    let page_h = if line_height == 0 {
        0
    } else {
        (geometry.height / line_height) as usize
    };

    let char_width = metrics.char_width(REFERENCE_CHAR);
    let page_w = if char_width == 0 {
        0
    } else {
        ((geometry.width / char_width) as usize).saturating_sub(PAGE_WIDTH_MARGIN)
    };

    let line_count = buffer.line_count();
    let max_line_len = buffer.max_line_len();

    let scroll = buffer.scroll_mut();
    scroll.page_h = page_h;
    scroll.page_w = page_w;
    scroll.max_scroll_y = line_count.saturating_sub(page_h);
    scroll.max_scroll_x = max_line_len.saturating_sub(page_w);
    scroll.scroll_y = scroll.scroll_y.min(scroll.max_scroll_y);
    scroll.scroll_x = scroll.scroll_x.min(scroll.max_scroll_x);
}

/// Scrolls the minimum needed to bring the cursor into view. Moving left past
/// the edge recentres by half a page. Returns whether anything moved.
///
/// Columns `scroll_x..=scroll_x + page_w` count as visible: the last one is
/// the margin column left by `PAGE_WIDTH_MARGIN`, where an end-of-line
/// cursor sits.
///
/// Expects page sizes from a prior `calculate_max_scroll`.
pub fn scroll_to_cursor(buffer: &mut TextBuffer) -> bool {
    let (row, col) = buffer.cursor();
    let scroll = buffer.scroll_mut();
    let before = (scroll.scroll_x, scroll.scroll_y);

    if row < scroll.scroll_y {
        scroll.scroll_y = row;
    } else if row >= scroll.scroll_y + scroll.page_h {
        scroll.scroll_y = (row + 1).saturating_sub(scroll.page_h.max(1));
    }

    if col < scroll.scroll_x {
        scroll.scroll_x = col.saturating_sub(scroll.page_w / 2);
    } else if col > scroll.scroll_x + scroll.page_w {
        scroll.scroll_x = col - scroll.page_w;
    }

    scroll.scroll_y = scroll.scroll_y.min(scroll.max_scroll_y);
    scroll.scroll_x = scroll.scroll_x.min(scroll.max_scroll_x);
    (scroll.scroll_x, scroll.scroll_y) != before
}

/// Scrolls by `delta` lines (or columns), clamped. Returns whether it moved.
pub fn scroll_by(buffer: &mut TextBuffer, axis: Axis, delta: isize) -> bool {
    let scroll = buffer.scroll_mut();
    let (offset, max) = match axis {
        Axis::Vertical => (&mut scroll.scroll_y, scroll.max_scroll_y),
        Axis::Horizontal => (&mut scroll.scroll_x, scroll.max_scroll_x),
    };

    let target = offset.saturating_add_signed(delta).min(max);
    let changed = *offset != target;
    *offset = target;
    changed
}

/// Maps a pixel inside the text area to a document position, clamped to the
/// nearest valid one. Picks the column whose cell the pixel falls past the
/// midpoint of.
pub fn position_at_pixel<M: CharMetrics + ?Sized>(
    buffer: &TextBuffer,
    metrics: &M,
    x: u32,
    y: u32,
) -> (usize, usize) {
    let scroll = buffer.scroll();
    let line_height = metrics.line_height();
    let row_offset = if line_height == 0 {
        0
    } else {
        (y / line_height) as usize
    };
    let row = scroll
        .scroll_y
        .saturating_add(row_offset)
        .min(buffer.line_count() - 1);

    let line = buffer.line_bytes(row).unwrap_or_default();
    let first = scroll.scroll_x.min(line.len());
    let mut accumulated = 0u32;
    let mut col = line.len();
    for (i, &byte) in line.iter().enumerate().skip(first) {
        let w = metrics.char_width(byte);
        if accumulated.saturating_add(w / 2) >= x {
            col = i;
            break;
        }
        accumulated = accumulated.saturating_add(w);
    }

    (row, col)
}

#[cfg(test)]
#[path = "../../tests/unit/view/viewport.rs"]
mod tests;

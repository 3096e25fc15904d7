//! What the host needs to paint after a command: the visible rows, the
//! cursor and both scrollbars. Everything borrows from the buffer.

use super::scrollbar::{scrollbar, Axis, ScrollbarScale};
use crate::models::TextBuffer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleLine<'a> {
    pub row: usize,
    pub text: &'a [u8],
    pub scroll_x: usize,
}

impl<'a> VisibleLine<'a> {
    /// The part of the line right of the horizontal scroll offset.
    pub fn visible_text(&self) -> &'a [u8] {
        self.text.get(self.scroll_x..).unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame<'a> {
    pub first_line: usize,
    pub lines: Vec<VisibleLine<'a>>,
    pub cursor: (usize, usize),
    /// Cursor relative to the top-left visible cell, if it is on screen.
    /// The margin column at `page_w` counts as on screen.
    pub screen_cursor: Option<(usize, usize)>,
    pub marking: Option<((usize, usize), (usize, usize))>,
    pub vertical: ScrollbarScale,
    pub horizontal: ScrollbarScale,
    pub modified: bool,
}

pub fn frame(buffer: &TextBuffer) -> Frame<'_> {
    let scroll = *buffer.scroll();
    let last = (scroll.scroll_y + scroll.page_h).min(buffer.line_count());
    let lines = (scroll.scroll_y..last)
        .map(|row| VisibleLine {
            row,
            text: buffer.line_bytes(row).unwrap_or_default(),
            scroll_x: scroll.scroll_x,
        })
        .collect();

    let (row, col) = buffer.cursor();
    let screen_cursor = (row >= scroll.scroll_y
        && row < scroll.scroll_y + scroll.page_h
        && col >= scroll.scroll_x
        && col <= scroll.scroll_x + scroll.page_w)
        .then(|| (row - scroll.scroll_y, col - scroll.scroll_x));

    let marking = buffer.marking();
    Frame {
        first_line: scroll.scroll_y,
        lines,
        cursor: (row, col),
        screen_cursor,
        marking: marking.enabled.then(|| marking.range()),
        vertical: scrollbar(buffer, Axis::Vertical),
        horizontal: scrollbar(buffer, Axis::Horizontal),
        modified: buffer.is_modified(),
    }
}

//! Line store and editing engine.
//!
//! Owns:
//! - the ordered line array (never empty)
//! - the cursor `(row, col)`, col being a byte offset
//! - scroll/page state (written by `view::viewport`)
//! - the marking and the modified flag
//!
//! Every mutation reserves the memory it needs before touching any line, so
//! an `Err` always leaves the buffer unchanged.

use super::line::Line;
use super::marking::Marking;
use crate::error::{EditError, Result};

/// Initial capacity of the line array; it doubles from here.
pub const MIN_LINE_SLOTS: usize = 64;

/// Viewport offsets and page sizes, in characters and lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollState {
    pub scroll_x: usize,
    pub scroll_y: usize,
    pub page_w: usize,
    pub page_h: usize,
    pub max_scroll_x: usize,
    pub max_scroll_y: usize,
}

#[derive(Debug, Clone)]
pub struct TextBuffer {
    lines: Vec<Line>,
    cursor: (usize, usize),
    scroll: ScrollState,
    marking: Marking,
    modified: bool,
}

impl TextBuffer {
    pub fn new() -> Self {
        let mut lines = Vec::with_capacity(MIN_LINE_SLOTS);
        lines.push(Line::new());
        Self {
            lines,
            cursor: (0, 0),
            scroll: ScrollState::default(),
            marking: Marking::default(),
            modified: false,
        }
    }

    /// Builds a buffer from already-split lines. An empty vector becomes the
    /// one-empty-line document.
    pub fn from_lines(lines: Vec<Line>) -> Self {
        let mut buffer = Self::new();
        buffer.replace_lines(lines);
        buffer
    }

    /// Splits `text` on `\n`. Convenience for hosts and tests; the codec is
    /// the real entry point for files.
    pub fn from_text(text: &str) -> Self {
        let lines = text
            .split('\n')
            .map(|l| Line::from(l.as_bytes()))
            .collect();
        Self::from_lines(lines)
    }

    /// Discards everything and installs `lines` as a fresh, unmodified
    /// document with the cursor at the origin.
    pub fn replace_lines(&mut self, mut lines: Vec<Line>) {
        if lines.is_empty() {
            lines.push(Line::new());
        }
        if lines.capacity() < MIN_LINE_SLOTS {
            lines.reserve_exact(MIN_LINE_SLOTS - lines.len());
        }
        self.lines = lines;
        self.cursor = (0, 0);
        self.scroll = ScrollState::default();
        self.marking = Marking::default();
        self.modified = false;
    }

    /// Back to the empty one-line document.
    pub fn reset(&mut self) {
        self.replace_lines(Vec::new());
    }

    // ==================== Accessors ====================

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Capacity of the line array.
    pub fn max_lines(&self) -> usize {
        self.lines.capacity()
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn line(&self, row: usize) -> Option<&Line> {
        self.lines.get(row)
    }

    pub fn line_bytes(&self, row: usize) -> Option<&[u8]> {
        self.lines.get(row).map(Line::as_bytes)
    }

    pub fn line_len(&self, row: usize) -> usize {
        self.lines.get(row).map(Line::len).unwrap_or(0)
    }

    /// Length of the longest line. Scans every line.
    pub fn max_line_len(&self) -> usize {
        self.lines.iter().map(Line::len).max().unwrap_or(0)
    }

    pub fn cursor(&self) -> (usize, usize) {
        self.cursor
    }

    pub fn scroll(&self) -> &ScrollState {
        &self.scroll
    }

    pub(crate) fn scroll_mut(&mut self) -> &mut ScrollState {
        &mut self.scroll
    }

    pub fn marking(&self) -> &Marking {
        &self.marking
    }

    pub(crate) fn marking_mut(&mut self) -> &mut Marking {
        &mut self.marking
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    pub(crate) fn mark_saved(&mut self) {
        self.modified = false;
    }

    pub(crate) fn mark_modified(&mut self) {
        self.modified = true;
    }

    pub(crate) fn set_cursor_unchecked(&mut self, row: usize, col: usize) {
        self.cursor = (row, col);
        debug_assert!(self.invariants_hold());
    }

    pub(crate) fn lines_mut(&mut self) -> &mut Vec<Line> {
        &mut self.lines
    }

    /// `line_count >= 1`, cursor on an existing row and within its length,
    /// scroll offsets within their maxima.
    pub fn invariants_hold(&self) -> bool {
        let (row, col) = self.cursor;
        !self.lines.is_empty()
            && row < self.lines.len()
            && col <= self.lines[row].len()
            && self.scroll.scroll_y <= self.scroll.max_scroll_y
            && self.scroll.scroll_x <= self.scroll.max_scroll_x
    }

    /// Returns the cursor after checking it still addresses a valid byte slot.
    pub(crate) fn checked_cursor(&self) -> Result<(usize, usize)> {
        let (row, col) = self.cursor;
        match self.lines.get(row) {
            Some(line) if col <= line.len() => Ok((row, col)),
            _ => Err(EditError::CursorOutOfRange { row, col }),
        }
    }

    /// Ensures one more line fits in the line array, doubling its capacity.
    fn reserve_line_slot(&mut self) -> Result<()> {
        if self.lines.len() == self.lines.capacity() {
            let additional = self.lines.capacity().max(MIN_LINE_SLOTS);
            self.lines.try_reserve_exact(additional)?;
        }
        Ok(())
    }

    // ==================== Editing engine ====================

    /// Inserts `byte` at the cursor and advances the cursor by one.
    pub fn insert_char(&mut self, byte: u8) -> Result<()> {
        if byte == b'\n' || byte == b'\r' {
            return Err(EditError::InvalidByte(byte));
        }
        let (row, col) = self.checked_cursor()?;

        self.lines[row].insert(col, byte).map_err(|e| {
            tracing::warn!(row, len = self.lines[row].len(), "line growth failed");
            EditError::from(e)
        })?;
        self.cursor = (row, col + 1);
        self.modified = true;
        debug_assert!(self.invariants_hold());
        Ok(())
    }

    /// Backspace: removes the byte before the cursor, or joins the current
    /// line onto the previous one when the cursor is at column 0.
    pub fn delete_char(&mut self) -> Result<()> {
        let (row, col) = self.checked_cursor()?;

        if col > 0 {
            self.lines[row].remove(col - 1);
            self.cursor = (row, col - 1);
        } else if row > 0 {
            let prev_len = self.lines[row - 1].len();
            let needed = prev_len + self.lines[row].len();
            self.lines[row - 1].reserve_total(needed)?;

            let current = self.lines.remove(row);
            self.lines[row - 1].extend_reserved(current.as_bytes());
            self.cursor = (row - 1, prev_len);
        } else {
            return Err(EditError::AtDocumentStart);
        }

        self.modified = true;
        debug_assert!(self.invariants_hold());
        Ok(())
    }

    /// Delete: removes the byte under the cursor, or pulls the next line up
    /// onto the current one when the cursor is at end of line.
    pub fn delete_forward(&mut self) -> Result<()> {
        let (row, col) = self.checked_cursor()?;
        let len = self.lines[row].len();

        if col < len {
            self.lines[row].remove(col);
        } else if row + 1 < self.lines.len() {
            let needed = len + self.lines[row + 1].len();
            self.lines[row].reserve_total(needed)?;

            let next = self.lines.remove(row + 1);
            self.lines[row].extend_reserved(next.as_bytes());
        } else {
            return Err(EditError::AtDocumentEnd);
        }

        self.modified = true;
        debug_assert!(self.invariants_hold());
        Ok(())
    }

    /// Splits the current line at the cursor; the tail becomes a new line
    /// below and the cursor moves to its start.
    pub fn insert_newline(&mut self) -> Result<()> {
        let (row, col) = self.checked_cursor()?;

        // Both allocations happen before the array is shifted, so there is
        // nothing to undo if either fails.
        self.reserve_line_slot()?;
        let tail = Line::from_bytes(&self.lines[row].as_bytes()[col..])?;

        self.lines[row].truncate(col);
        self.lines.insert(row + 1, tail);
        self.cursor = (row + 1, 0);
        self.modified = true;
        debug_assert!(self.invariants_hold());
        Ok(())
    }

    /// Types `text` at the cursor. `\n` and `\r\n` split lines; a lone `\r`
    /// is dropped. Stops at the first failure, keeping what was inserted.
    pub fn insert_text(&mut self, text: &[u8]) -> Result<()> {
        for &byte in text {
            match byte {
                b'\n' => self.insert_newline()?,
                b'\r' => {}
                _ => self.insert_char(byte)?,
            }
        }
        Ok(())
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/text_buffer.rs"]
mod tests;

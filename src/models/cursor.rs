//! Cursor placement and arrow-key movement.

use super::text_buffer::TextBuffer;
use crate::error::{EditError, Result};

impl TextBuffer {
    /// Places the cursor; rejects positions outside the document.
    pub fn set_cursor(&mut self, row: usize, col: usize) -> Result<()> {
        if row >= self.line_count() || col > self.line_len(row) {
            return Err(EditError::CursorOutOfRange { row, col });
        }
        self.set_cursor_unchecked(row, col);
        Ok(())
    }

    /// Places the cursor, clamping the row to the last line and the column to
    /// that line's length.
    pub fn set_cursor_clamped(&mut self, row: usize, col: usize) {
        let row = row.min(self.line_count() - 1);
        let col = col.min(self.line_len(row));
        self.set_cursor_unchecked(row, col);
    }

    pub fn move_left(&mut self) -> Result<()> {
        let (row, col) = self.checked_cursor()?;
        if col > 0 {
            self.set_cursor_unchecked(row, col - 1);
        } else if row > 0 {
            self.set_cursor_unchecked(row - 1, self.line_len(row - 1));
        } else {
            return Err(EditError::AtDocumentStart);
        }
        Ok(())
    }

    pub fn move_right(&mut self) -> Result<()> {
        let (row, col) = self.checked_cursor()?;
        if col < self.line_len(row) {
            self.set_cursor_unchecked(row, col + 1);
        } else if row + 1 < self.line_count() {
            self.set_cursor_unchecked(row + 1, 0);
        } else {
            return Err(EditError::AtDocumentEnd);
        }
        Ok(())
    }

    pub fn move_up(&mut self) -> Result<()> {
        let (row, col) = self.checked_cursor()?;
        if row == 0 {
            return Err(EditError::AtDocumentStart);
        }
        self.set_cursor_clamped(row - 1, col);
        Ok(())
    }

    pub fn move_down(&mut self) -> Result<()> {
        let (row, col) = self.checked_cursor()?;
        if row + 1 >= self.line_count() {
            return Err(EditError::AtDocumentEnd);
        }
        self.set_cursor_clamped(row + 1, col);
        Ok(())
    }

    pub fn move_file_start(&mut self) {
        self.set_cursor_unchecked(0, 0);
    }

    pub fn move_file_end(&mut self) {
        let last = self.line_count() - 1;
        self.set_cursor_unchecked(last, self.line_len(last));
    }
}

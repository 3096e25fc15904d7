//! Word-wise cursor movement.
//!
//! Words are runs of non-separator bytes. Separators are ASCII whitespace
//! (space, tab, CR, LF) and ASCII punctuation; letters, digits and every byte
//! >= 0x80 count as word characters, so multi-byte sequences are opaque.

use super::text_buffer::TextBuffer;
use crate::error::{EditError, Result};

pub fn is_word_separator(byte: u8) -> bool {
    matches!(
        byte,
        b' ' | b'\t' | b'\r' | b'\n' | b'!'..=b'/' | b':'..=b'@' | b'['..=b'`' | b'{'..=b'~'
    )
}

fn skip_forward(line: &[u8], mut col: usize, separators: bool) -> usize {
    while col < line.len() && is_word_separator(line[col]) == separators {
        col += 1;
    }
    col
}

fn skip_backward(line: &[u8], mut col: usize, separators: bool) -> usize {
    while col > 0 && is_word_separator(line[col - 1]) == separators {
        col -= 1;
    }
    col
}

impl TextBuffer {
    fn current_line(&self) -> Result<(usize, usize, &[u8])> {
        let (row, col) = self.checked_cursor()?;
        let line = self.line_bytes(row).unwrap_or_default();
        Ok((row, col, line))
    }

    /// Moves to the start of the next word, continuing onto the next line
    /// when the current one runs out. On the last line the cursor stops at
    /// end of line.
    pub fn move_next_word(&mut self) -> Result<()> {
        let (row, col, line) = self.current_line()?;

        let col = skip_forward(line, col, false);
        let col = skip_forward(line, col, true);
        let target = if col < line.len() {
            (row, col)
        } else if row + 1 < self.line_count() {
            let next = self.line_bytes(row + 1).unwrap_or_default();
            (row + 1, skip_forward(next, 0, true))
        } else {
            (row, line.len())
        };

        self.set_cursor_unchecked(target.0, target.1);
        Ok(())
    }

    /// Moves to the start of the previous word. From column 0 it first steps
    /// to the end of the previous line. If the line scanned holds no word
    /// before the cursor, one more line is looked back on.
    pub fn move_prev_word(&mut self) -> Result<()> {
        let (mut row, mut col, _) = self.current_line()?;
        if col == 0 {
            if row == 0 {
                return Err(EditError::AtDocumentStart);
            }
            row -= 1;
            col = self.line_len(row);
        }

        let line = self.line_bytes(row).unwrap_or_default();
        col = skip_backward(line, col, true);
        if col == 0 && row > 0 {
            row -= 1;
            let line = self.line_bytes(row).unwrap_or_default();
            col = skip_backward(line, line.len(), true);
            col = skip_backward(line, col, false);
        } else {
            col = skip_backward(line, col, false);
        }

        self.set_cursor_unchecked(row, col);
        Ok(())
    }

    pub fn move_start_of_line(&mut self) -> Result<()> {
        let (row, _) = self.checked_cursor()?;
        self.set_cursor_unchecked(row, 0);
        Ok(())
    }

    pub fn move_end_of_line(&mut self) -> Result<()> {
        let (row, _) = self.checked_cursor()?;
        self.set_cursor_unchecked(row, self.line_len(row));
        Ok(())
    }

    /// Inside a word: to its end. On a separator: across the separators and
    /// through the following word. Never leaves the line.
    pub fn move_end_of_word(&mut self) -> Result<()> {
        let (row, col, line) = self.current_line()?;

        let target = if col < line.len() && !is_word_separator(line[col]) {
            skip_forward(line, col, false)
        } else {
            let col = skip_forward(line, col, true);
            skip_forward(line, col, false)
        };
        self.set_cursor_unchecked(row, target);
        Ok(())
    }

    /// Back over separators, then back over word characters, on this line only.
    pub fn move_start_of_word(&mut self) -> Result<()> {
        let (row, col, line) = self.current_line()?;

        let col = skip_backward(line, col, true);
        let target = skip_backward(line, col, false);
        self.set_cursor_unchecked(row, target);
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/word.rs"]
mod tests;

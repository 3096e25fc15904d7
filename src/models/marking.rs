//! Marking (selection) and block operations.
//!
//! A marking is anchored at `start` and extended to `stop`; the two may be in
//! either order until `normalize` is called. Block operations normalize first.

use super::text_buffer::TextBuffer;
use crate::error::{EditError, Result};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Marking {
    pub enabled: bool,
    pub start: (usize, usize),
    pub stop: (usize, usize),
}

impl Marking {
    pub fn new(start: (usize, usize), stop: (usize, usize)) -> Self {
        Self {
            enabled: true,
            start,
            stop,
        }
    }

    /// Swaps the ends if `stop` precedes `start` in row-major order.
    pub fn normalize(&mut self) {
        if self.stop < self.start {
            std::mem::swap(&mut self.start, &mut self.stop);
        }
    }

    /// `(start, stop)` in row-major order without modifying the marking.
    pub fn range(&self) -> ((usize, usize), (usize, usize)) {
        if self.stop < self.start {
            (self.stop, self.start)
        } else {
            (self.start, self.stop)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.stop
    }

    pub fn contains(&self, pos: (usize, usize)) -> bool {
        let (start, stop) = self.range();
        self.enabled && start <= pos && pos < stop
    }
}

impl TextBuffer {
    pub fn set_marking(&mut self, marking: Marking) {
        *self.marking_mut() = marking;
    }

    pub fn clear_marking(&mut self) {
        *self.marking_mut() = Marking::default();
    }

    pub fn normalize_marking(&mut self) {
        self.marking_mut().normalize();
    }

    /// Marks from the document start through the end of the last line.
    pub fn mark_all(&mut self) {
        let last = self.line_count() - 1;
        let stop = (last, self.line_len(last));
        self.set_marking(Marking::new((0, 0), stop));
    }

    /// Normalizes the marking and clamps both ends into the document.
    /// `None` when the marking is disabled, starts past the last line, or
    /// covers nothing.
    fn marked_span(&mut self) -> Option<((usize, usize), (usize, usize))> {
        if !self.marking().enabled {
            return None;
        }
        self.normalize_marking();
        let Marking { start, stop, .. } = *self.marking();

        let last = self.line_count() - 1;
        if start.0 > last {
            return None;
        }
        let start = (start.0, start.1.min(self.line_len(start.0)));
        let stop = if stop.0 > last {
            (last, self.line_len(last))
        } else {
            (stop.0, stop.1.min(self.line_len(stop.0)))
        };

        (start < stop).then_some((start, stop))
    }

    /// Copies the marked bytes. Line boundaries inside the marking are not
    /// represented: the tail of the first line is followed directly by the
    /// full middle lines and the head of the last one.
    pub fn get_block(&mut self) -> Option<Vec<u8>> {
        let (start, stop) = self.marked_span()?;

        let size = if start.0 == stop.0 {
            stop.1 - start.1
        } else {
            (self.line_len(start.0) - start.1)
                + (start.0 + 1..stop.0).map(|r| self.line_len(r)).sum::<usize>()
                + stop.1
        };

        let mut block = Vec::new();
        if block.try_reserve_exact(size + 1).is_err() {
            tracing::warn!(size, "block copy allocation failed");
            return None;
        }

        let lines = self.lines();
        if start.0 == stop.0 {
            block.extend_from_slice(&lines[start.0].as_bytes()[start.1..stop.1]);
        } else {
            block.extend_from_slice(&lines[start.0].as_bytes()[start.1..]);
            for line in &lines[start.0 + 1..stop.0] {
                block.extend_from_slice(line.as_bytes());
            }
            block.extend_from_slice(&lines[stop.0].as_bytes()[..stop.1]);
        }
        debug_assert_eq!(block.len(), size);
        Some(block)
    }

    /// Removes the marked range, joining the head of the first line with the
    /// tail of the last. The cursor lands on the start of the range.
    pub fn delete_block(&mut self) -> Result<()> {
        if !self.marking().enabled {
            return Err(EditError::MarkingDisabled);
        }
        let (start, stop) = self.marked_span().ok_or(EditError::EmptyMarking)?;

        if start.0 == stop.0 {
            self.lines_mut()[start.0].remove_range(start.1, stop.1);
        } else {
            let tail_len = self.line_len(stop.0) - stop.1;
            self.lines_mut()[start.0].reserve_total(start.1 + tail_len)?;

            let lines = self.lines_mut();
            lines[start.0].truncate(start.1);
            if let Some(last) = lines.drain(start.0 + 1..=stop.0).last() {
                lines[start.0].extend_reserved(&last.as_bytes()[stop.1..]);
            }
        }

        tracing::trace!(?start, ?stop, "block deleted");
        self.set_cursor_unchecked(start.0, start.1);
        self.clear_marking();
        self.mark_modified();
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/marking.rs"]
mod tests;

//! A single line of text: an owned byte vector with an explicit growth policy.
//!
//! Lines never hold a trailing newline. Capacity is kept at least one byte
//! above the length (room for a terminator when handed to a renderer that
//! wants one) and grows by doubling from `LINE_MIN_CAPACITY`.

use std::collections::TryReserveError;

/// Smallest capacity a growing line is given.
pub const LINE_MIN_CAPACITY: usize = 256;

/// Extra capacity handed to lines built by split, merge or load.
pub const LINE_SLACK: usize = 256;

#[derive(Clone, PartialEq, Eq)]
pub struct Line {
    text: Vec<u8>,
}

impl Line {
    /// An empty line already sized to `LINE_MIN_CAPACITY`.
    pub fn new() -> Self {
        Self {
            text: Vec::with_capacity(LINE_MIN_CAPACITY),
        }
    }

    /// Builds a line holding `bytes` with `bytes.len() + LINE_SLACK` capacity.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, TryReserveError> {
        let mut text = Vec::new();
        text.try_reserve_exact(bytes.len() + LINE_SLACK)?;
        text.extend_from_slice(bytes);
        Ok(Self { text })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn allocated(&self) -> usize {
        self.text.capacity()
    }

    pub fn byte_at(&self, col: usize) -> Option<u8> {
        self.text.get(col).copied()
    }

    /// Makes room for a line of `needed` bytes plus a terminator.
    ///
    /// Capacity doubles from its current value (floored at
    /// `LINE_MIN_CAPACITY`) until it fits. Nothing changes on failure.
    pub fn reserve_total(&mut self, needed: usize) -> Result<(), TryReserveError> {
        let cap = self.text.capacity();
        if needed < cap {
            return Ok(());
        }

        let mut new_cap = (cap * 2).max(LINE_MIN_CAPACITY);
        while new_cap <= needed {
            new_cap *= 2;
        }
        self.text.try_reserve_exact(new_cap - self.text.len())
    }

    pub(crate) fn insert(&mut self, col: usize, byte: u8) -> Result<(), TryReserveError> {
        self.reserve_total(self.text.len() + 1)?;
        self.text.insert(col, byte);
        Ok(())
    }

    pub(crate) fn remove(&mut self, col: usize) -> u8 {
        self.text.remove(col)
    }

    pub(crate) fn truncate(&mut self, len: usize) {
        self.text.truncate(len);
    }

    pub(crate) fn remove_range(&mut self, start: usize, end: usize) {
        self.text.drain(start..end);
    }

    /// Appends bytes; the caller must have reserved room first.
    pub(crate) fn extend_reserved(&mut self, bytes: &[u8]) {
        debug_assert!(self.text.capacity() >= self.text.len() + bytes.len());
        self.text.extend_from_slice(bytes);
    }
}

impl Default for Line {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&[u8]> for Line {
    fn from(bytes: &[u8]) -> Self {
        let mut text = Vec::with_capacity(bytes.len() + LINE_SLACK);
        text.extend_from_slice(bytes);
        Self { text }
    }
}

impl std::fmt::Debug for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Line({:?})", String::from_utf8_lossy(&self.text))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/line.rs"]
mod tests;

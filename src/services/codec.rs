//! Line-oriented load/save of a `TextBuffer`.
//!
//! Reading splits on `\n` and drops a `\r` directly before it. Writing puts
//! `\n` after every line except a final empty one, so an empty document is
//! written as zero bytes.

use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;

use memchr::memchr_iter;

use crate::error::{EditError, Result};
use crate::models::{Line, TextBuffer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded { lines: usize },
    /// The source could not be opened or read; the buffer is the empty
    /// one-line document.
    Empty,
}

/// Splits raw bytes into lines. A trailing `\n` does not start another line.
pub fn decode(data: &[u8]) -> Result<Vec<Line>> {
    let mut lines = Vec::new();
    let mut start = 0;

    for end in memchr_iter(b'\n', data) {
        let mut line = &data[start..end];
        if let Some(stripped) = line.strip_suffix(b"\r") {
            line = stripped;
        }
        lines.try_reserve(1)?;
        lines.push(Line::from_bytes(line)?);
        start = end + 1;
    }
    if start < data.len() {
        lines.try_reserve(1)?;
        lines.push(Line::from_bytes(&data[start..])?);
    }

    Ok(lines)
}

/// Replaces the buffer's contents with everything `reader` yields.
pub fn load<R: Read>(buffer: &mut TextBuffer, mut reader: R) -> Result<usize> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    let lines = decode(&data)?;
    buffer.replace_lines(lines);
    Ok(buffer.line_count())
}

/// Loads `path` into the buffer. A missing or unreadable file is not an
/// error: the buffer is reset to an empty document.
pub fn load_path(buffer: &mut TextBuffer, path: &Path) -> LoadOutcome {
    let result = File::open(path)
        .map_err(EditError::from)
        .and_then(|file| load(buffer, file));

    match result {
        Ok(lines) => {
            tracing::info!(path = %path.display(), lines, "loaded");
            LoadOutcome::Loaded { lines }
        }
        Err(error) => {
            tracing::info!(path = %path.display(), error = %error, "open failed, starting empty");
            buffer.reset();
            LoadOutcome::Empty
        }
    }
}

/// Writes every line followed by `\n`, except a final zero-length line.
pub fn save<W: Write>(buffer: &TextBuffer, writer: &mut W) -> io::Result<()> {
    let count = buffer.line_count();
    for (i, line) in buffer.lines().iter().enumerate() {
        writer.write_all(line.as_bytes())?;
        if i + 1 < count || !line.is_empty() {
            writer.write_all(b"\n")?;
        }
    }
    Ok(())
}

/// Saves to `path` and clears the modified flag. On failure the flag stays
/// set.
pub fn save_path(buffer: &mut TextBuffer, path: &Path) -> Result<()> {
    let result = File::create(path).and_then(|file| {
        let mut writer = BufWriter::new(file);
        save(buffer, &mut writer)?;
        writer.flush()
    });

    match result {
        Ok(()) => {
            buffer.mark_saved();
            tracing::info!(path = %path.display(), lines = buffer.line_count(), "saved");
            Ok(())
        }
        Err(error) => {
            tracing::warn!(path = %path.display(), error = %error, "save failed");
            Err(error.into())
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/services/codec.rs"]
mod tests;

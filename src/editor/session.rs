//! Command dispatch for a single buffer.
//!
//! Every command runs to completion, then paging is recalculated and, for
//! commands that move the cursor or edit text, the viewport follows the
//! cursor. The host renders from `frame()` afterwards.

use std::io;
use std::path::{Path, PathBuf};

use crate::core::Command;
use crate::error::{EditError, Result};
use crate::models::TextBuffer;
use crate::services::codec::{self, LoadOutcome};
use crate::view::{
    apply_scrollbar, calculate_max_scroll, frame, position_at_pixel, scroll_by, scroll_to_cursor,
    CharMetrics, Frame, ViewportGeometry,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    Changed,
    Unchanged,
    /// Bytes copied by `GetBlock`.
    Block(Vec<u8>),
    Rejected(String),
}

impl CommandOutcome {
    pub fn is_rejected(&self) -> bool {
        matches!(self, CommandOutcome::Rejected(_))
    }
}

pub struct Session {
    buffer: TextBuffer,
    metrics: Box<dyn CharMetrics>,
    geometry: ViewportGeometry,
    path: Option<PathBuf>,
}

impl Session {
    pub fn new(metrics: Box<dyn CharMetrics>, geometry: ViewportGeometry) -> Self {
        let mut session = Self {
            buffer: TextBuffer::new(),
            metrics,
            geometry,
            path: None,
        };
        session.refresh(false);
        session
    }

    /// Opens `path`; a file that cannot be read gives an empty document that
    /// will be saved to `path`.
    pub fn open(path: &Path, metrics: Box<dyn CharMetrics>, geometry: ViewportGeometry) -> Self {
        let mut session = Self::new(metrics, geometry);
        session.load(path);
        session
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn geometry(&self) -> ViewportGeometry {
        self.geometry
    }

    pub fn is_modified(&self) -> bool {
        self.buffer.is_modified()
    }

    pub fn frame(&self) -> Frame<'_> {
        frame(&self.buffer)
    }

    pub fn execute(&mut self, command: Command) -> CommandOutcome {
        let name = command.name();
        let follow = command.is_edit_command()
            || command.is_cursor_command()
            || matches!(command, Command::Load(_));
        let before = self.state_stamp();

        let result = self.apply(command);
        let scrolled = self.refresh(follow && result.is_ok());

        match result {
            Ok(Some(block)) => CommandOutcome::Block(block),
            Ok(None) if scrolled || self.state_stamp() != before => CommandOutcome::Changed,
            Ok(None) => CommandOutcome::Unchanged,
            Err(error) => {
                tracing::debug!(command = name, error = %error, "command rejected");
                CommandOutcome::Rejected(error.to_string())
            }
        }
    }

    fn apply(&mut self, command: Command) -> Result<Option<Vec<u8>>> {
        let buffer = &mut self.buffer;
        match command {
            Command::InsertChar(byte) => buffer.insert_char(byte)?,
            Command::InsertText(text) => buffer.insert_text(&text)?,
            Command::InsertNewline => buffer.insert_newline()?,
            Command::DeleteBackward => buffer.delete_char()?,
            Command::DeleteForward => buffer.delete_forward()?,

            Command::CursorLeft => buffer.move_left()?,
            Command::CursorRight => buffer.move_right()?,
            Command::CursorUp => buffer.move_up()?,
            Command::CursorDown => buffer.move_down()?,
            Command::CursorFileStart => buffer.move_file_start(),
            Command::CursorFileEnd => buffer.move_file_end(),
            Command::CursorLineStart => buffer.move_start_of_line()?,
            Command::CursorLineEnd => buffer.move_end_of_line()?,
            Command::CursorNextWord => buffer.move_next_word()?,
            Command::CursorPrevWord => buffer.move_prev_word()?,
            Command::CursorWordStart => buffer.move_start_of_word()?,
            Command::CursorWordEnd => buffer.move_end_of_word()?,
            Command::SetCursor { row, col } => buffer.set_cursor(row, col)?,
            Command::Click { x, y } => {
                let (row, col) = position_at_pixel(buffer, &self.metrics, x, y);
                buffer.set_cursor(row, col)?;
            }

            Command::SetMarking(marking) => buffer.set_marking(marking),
            Command::ClearMarking => buffer.clear_marking(),
            Command::NormalizeMarking => buffer.normalize_marking(),
            Command::MarkAll => buffer.mark_all(),
            Command::GetBlock => {
                if !buffer.marking().enabled {
                    return Err(EditError::MarkingDisabled);
                }
                return buffer.get_block().map(Some).ok_or(EditError::EmptyMarking);
            }
            Command::DeleteBlock => buffer.delete_block()?,

            Command::ScrollTo { axis, value } => {
                apply_scrollbar(buffer, axis, value);
            }
            Command::ScrollBy { axis, delta } => {
                scroll_by(buffer, axis, delta);
            }
            Command::Resize(geometry) => self.geometry = geometry,

            Command::Load(path) => self.load(&path),
            Command::Save => {
                let path = self.path.clone().ok_or_else(|| {
                    EditError::Io(io::Error::new(io::ErrorKind::NotFound, "no file name"))
                })?;
                codec::save_path(&mut self.buffer, &path)?;
            }
            Command::SaveAs(path) => {
                codec::save_path(&mut self.buffer, &path)?;
                self.path = Some(path);
            }
        }
        Ok(None)
    }

    fn load(&mut self, path: &Path) {
        if let LoadOutcome::Empty = codec::load_path(&mut self.buffer, path) {
            tracing::debug!(path = %path.display(), "new document");
        }
        self.path = Some(path.to_path_buf());
    }

    /// Recalculates paging and optionally follows the cursor. Returns whether
    /// the scroll position changed.
    fn refresh(&mut self, follow_cursor: bool) -> bool {
        let before = *self.buffer.scroll();
        calculate_max_scroll(&mut self.buffer, &self.metrics, self.geometry);
        if follow_cursor {
            scroll_to_cursor(&mut self.buffer);
        }
        debug_assert!(self.buffer.invariants_hold());
        *self.buffer.scroll() != before
    }

    fn state_stamp(&self) -> StateStamp {
        StateStamp {
            cursor: self.buffer.cursor(),
            scroll: *self.buffer.scroll(),
            marking: *self.buffer.marking(),
            line_count: self.buffer.line_count(),
            modified: self.buffer.is_modified(),
        }
    }
}

#[derive(PartialEq, Eq)]
struct StateStamp {
    cursor: (usize, usize),
    scroll: crate::models::ScrollState,
    marking: crate::models::Marking,
    line_count: usize,
    modified: bool,
}

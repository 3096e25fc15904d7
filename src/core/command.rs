//! Editing commands: the fixed vocabulary a host drives the core with.
//!
//! Each command has a stable camelCase name; `parse` reads the textual form
//! `<name> [args...]` used by command scripts.

use std::path::PathBuf;

use crate::models::Marking;
use crate::view::{Axis, ViewportGeometry};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    // ==================== Editing ====================
    InsertChar(u8),
    InsertText(Vec<u8>),
    InsertNewline,
    DeleteBackward,
    DeleteForward,

    // ==================== Cursor ====================
    CursorLeft,
    CursorRight,
    CursorUp,
    CursorDown,
    CursorFileStart,
    CursorFileEnd,
    CursorLineStart,
    CursorLineEnd,
    CursorNextWord,
    CursorPrevWord,
    CursorWordStart,
    CursorWordEnd,
    SetCursor { row: usize, col: usize },
    /// Mouse click at a pixel inside the text area.
    Click { x: u32, y: u32 },

    // ==================== Marking ====================
    SetMarking(Marking),
    ClearMarking,
    NormalizeMarking,
    MarkAll,
    GetBlock,
    DeleteBlock,

    // ==================== Viewport ====================
    /// Scrollbar readback, in scaled widget units.
    ScrollTo { axis: Axis, value: u16 },
    ScrollBy { axis: Axis, delta: isize },
    Resize(ViewportGeometry),

    // ==================== File ====================
    Load(PathBuf),
    Save,
    SaveAs(PathBuf),
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::InsertChar(_) => "insertChar",
            Command::InsertText(_) => "insertText",
            Command::InsertNewline => "insertNewline",
            Command::DeleteBackward => "deleteBackward",
            Command::DeleteForward => "deleteForward",
            Command::CursorLeft => "cursorLeft",
            Command::CursorRight => "cursorRight",
            Command::CursorUp => "cursorUp",
            Command::CursorDown => "cursorDown",
            Command::CursorFileStart => "cursorFileStart",
            Command::CursorFileEnd => "cursorFileEnd",
            Command::CursorLineStart => "cursorLineStart",
            Command::CursorLineEnd => "cursorLineEnd",
            Command::CursorNextWord => "cursorNextWord",
            Command::CursorPrevWord => "cursorPrevWord",
            Command::CursorWordStart => "cursorWordStart",
            Command::CursorWordEnd => "cursorWordEnd",
            Command::SetCursor { .. } => "setCursor",
            Command::Click { .. } => "click",
            Command::SetMarking(_) => "setMarking",
            Command::ClearMarking => "clearMarking",
            Command::NormalizeMarking => "normalizeMarking",
            Command::MarkAll => "markAll",
            Command::GetBlock => "getBlock",
            Command::DeleteBlock => "deleteBlock",
            Command::ScrollTo { .. } => "scrollTo",
            Command::ScrollBy { .. } => "scrollBy",
            Command::Resize(_) => "resize",
            Command::Load(_) => "load",
            Command::Save => "save",
            Command::SaveAs(_) => "saveAs",
        }
    }

    /// Parses `<name> [args...]`. Arguments are whitespace separated, except
    /// for `insertChar`/`insertText` which take the rest of the line verbatim
    /// (with `\n`, `\t` and `\\` escapes), and the path commands.
    pub fn parse(input: &str) -> Option<Command> {
        let input = input.strip_suffix('\n').unwrap_or(input);
        let input = input.strip_suffix('\r').unwrap_or(input);
        let (name, rest) = match input.split_once(' ') {
            Some((name, rest)) => (name, rest),
            None => (input, ""),
        };
        let mut args = rest.split_whitespace();
        let mut number = || args.next()?.parse::<usize>().ok();

        let command = match name {
            "insertChar" => Command::InsertChar(*unescape(rest).first()?),
            "insertText" => Command::InsertText(unescape(rest)),
            "insertNewline" => Command::InsertNewline,
            "deleteBackward" => Command::DeleteBackward,
            "deleteForward" => Command::DeleteForward,
            "cursorLeft" => Command::CursorLeft,
            "cursorRight" => Command::CursorRight,
            "cursorUp" => Command::CursorUp,
            "cursorDown" => Command::CursorDown,
            "cursorFileStart" => Command::CursorFileStart,
            "cursorFileEnd" => Command::CursorFileEnd,
            "cursorLineStart" => Command::CursorLineStart,
            "cursorLineEnd" => Command::CursorLineEnd,
            "cursorNextWord" => Command::CursorNextWord,
            "cursorPrevWord" => Command::CursorPrevWord,
            "cursorWordStart" => Command::CursorWordStart,
            "cursorWordEnd" => Command::CursorWordEnd,
            "setCursor" => Command::SetCursor {
                row: number()?,
                col: number()?,
            },
            "click" => Command::Click {
                x: u32::try_from(number()?).ok()?,
                y: u32::try_from(number()?).ok()?,
            },
            "setMarking" => {
                let start = (number()?, number()?);
                let stop = (number()?, number()?);
                Command::SetMarking(Marking::new(start, stop))
            }
            "clearMarking" => Command::ClearMarking,
            "normalizeMarking" => Command::NormalizeMarking,
            "markAll" => Command::MarkAll,
            "getBlock" => Command::GetBlock,
            "deleteBlock" => Command::DeleteBlock,
            "scrollTo" => {
                let mut parts = rest.split_whitespace();
                let axis = parse_axis(parts.next()?)?;
                let value = parts.next()?.parse::<u16>().ok()?;
                Command::ScrollTo { axis, value }
            }
            "scrollBy" => {
                let mut parts = rest.split_whitespace();
                let axis = parse_axis(parts.next()?)?;
                let delta = parts.next()?.parse::<isize>().ok()?;
                Command::ScrollBy { axis, delta }
            }
            "resize" => Command::Resize(ViewportGeometry::new(
                u32::try_from(number()?).ok()?,
                u32::try_from(number()?).ok()?,
            )),
            "load" if !rest.trim().is_empty() => Command::Load(PathBuf::from(rest.trim())),
            "save" => Command::Save,
            "saveAs" if !rest.trim().is_empty() => Command::SaveAs(PathBuf::from(rest.trim())),
            _ => return None,
        };
        Some(command)
    }

    pub fn is_edit_command(&self) -> bool {
        matches!(
            self,
            Command::InsertChar(_)
                | Command::InsertText(_)
                | Command::InsertNewline
                | Command::DeleteBackward
                | Command::DeleteForward
                | Command::DeleteBlock
        )
    }

    pub fn is_cursor_command(&self) -> bool {
        matches!(
            self,
            Command::CursorLeft
                | Command::CursorRight
                | Command::CursorUp
                | Command::CursorDown
                | Command::CursorFileStart
                | Command::CursorFileEnd
                | Command::CursorLineStart
                | Command::CursorLineEnd
                | Command::CursorNextWord
                | Command::CursorPrevWord
                | Command::CursorWordStart
                | Command::CursorWordEnd
                | Command::SetCursor { .. }
                | Command::Click { .. }
        )
    }

    pub fn is_marking_command(&self) -> bool {
        matches!(
            self,
            Command::SetMarking(_)
                | Command::ClearMarking
                | Command::NormalizeMarking
                | Command::MarkAll
                | Command::GetBlock
                | Command::DeleteBlock
        )
    }
}

fn parse_axis(value: &str) -> Option<Axis> {
    match value {
        "vertical" | "v" => Some(Axis::Vertical),
        "horizontal" | "h" => Some(Axis::Horizontal),
        _ => None,
    }
}

fn unescape(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len());
    let mut bytes = text.bytes();
    while let Some(b) = bytes.next() {
        if b != b'\\' {
            out.push(b);
            continue;
        }
        match bytes.next() {
            Some(b'n') => out.push(b'\n'),
            Some(b't') => out.push(b'\t'),
            Some(b's') => out.push(b' '),
            Some(other) => out.push(other),
            None => out.push(b'\\'),
        }
    }
    out
}

//! linecore - editable-text core of a line-oriented editor
//!
//! Module layout:
//! - models: line store, cursor, editing engine, marking, word movement
//! - view: page sizing, scroll clamping, scrollbar scaling, render frame
//! - services: line-oriented file codec, settings
//! - core: command vocabulary
//! - editor: per-buffer session that dispatches commands

pub mod core;
pub mod editor;
pub mod error;
pub mod models;
pub mod services;
pub mod view;

pub use editor::{CommandOutcome, Session};
pub use error::{EditError, Result};
pub use models::{Line, Marking, TextBuffer};

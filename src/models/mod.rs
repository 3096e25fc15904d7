//! Data model: lines, the text buffer, cursor, marking and word movement.

pub mod cursor;
pub mod line;
pub mod marking;
pub mod text_buffer;
pub mod word;

pub use line::{Line, LINE_MIN_CAPACITY, LINE_SLACK};
pub use marking::Marking;
pub use text_buffer::{ScrollState, TextBuffer, MIN_LINE_SLOTS};
pub use word::is_word_separator;

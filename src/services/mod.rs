//! Services around the buffer: file codec and settings.

pub mod codec;
pub mod settings;

pub use codec::{decode, load, load_path, save, save_path, LoadOutcome};
pub use settings::{load_settings, Settings};

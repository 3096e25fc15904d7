//! Command vocabulary accepted by the editing core.

pub mod command;

pub use command::Command;

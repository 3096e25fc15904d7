//! Editing session: one buffer, its metrics and geometry, and the command
//! dispatcher hosts call into.

pub mod session;

pub use session::{CommandOutcome, Session};

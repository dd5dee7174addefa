//! Running shell commands with the caller's terminal attached.
//!
//! Nothing is captured or piped: the child reads the same keystrokes and
//! writes to the same terminal as the parent, and the caller resumes only
//! once it exits.

mod error;
mod interactive;

pub use error::RunError;
pub use interactive::{exec_interactive, Interactive};

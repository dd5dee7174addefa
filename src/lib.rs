//! clikit - helpers for writing command-line scripts on UNIX-like systems
//!
//! Provides:
//! - ANSI styling by symbolic name (`style`)
//! - Interactive subprocesses that inherit the terminal (`process`)
//! - The terminal bell (`bell`)
//! - TOML configuration for named styles and the shell (`config`)
//!
//! Unknown style names are never errors: they simply produce no styling.

pub mod bell;
pub mod config;
pub mod process;
pub mod style;

pub use bell::{bell, bell_to, DEFAULT_BELL_REPEAT};
pub use config::{Config, ConfigError, ShellConfig};
pub use process::{exec_interactive, Interactive, RunError};
pub use style::{
    background_code, color, compose, foreground_code, format_code, reset, say, say_to, Formats,
    Style,
};

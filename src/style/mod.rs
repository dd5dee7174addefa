//! ANSI text styling by symbolic name.
//!
//! `registry` holds the name -> SGR code tables, `format` composes the
//! resulting escape sequences around text.

pub mod format;
pub mod registry;

pub use format::{color, compose, say, say_to, Formats, Style};
pub use registry::{
    background_code, escape, foreground_code, format_code, reset, BACKGROUND_COLOURS,
    FOREGROUND_COLOURS, FORMAT_CODES, RESET,
};

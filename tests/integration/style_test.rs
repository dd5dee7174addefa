//! Integration tests for styling through the public API.

use clikit::style::{BACKGROUND_COLOURS, FOREGROUND_COLOURS, FORMAT_CODES};
use clikit::{
    background_code, bell_to, compose, foreground_code, format_code, reset, say_to, Formats,
    Style,
};

#[test]
fn red_foreground_and_bold_format() {
    let none: [&str; 0] = [];
    assert_eq!(compose("hi", Some("red"), None, none), "\x1b[0;31mhi\x1b[0m");
    assert_eq!(compose("hi", None, None, "bold"), "\x1b[1mhi\x1b[0m");
}

#[test]
fn output_always_ends_with_reset() {
    for &(name, _) in FOREGROUND_COLOURS {
        assert!(compose("x", Some(name), None, Formats::none()).ends_with(reset()));
    }
    assert!(compose("x", Some("unknown"), Some("unknown"), "unknown").ends_with(reset()));
}

#[test]
fn every_table_entry_resolves() {
    for &(name, code) in FOREGROUND_COLOURS {
        assert!(foreground_code(Some(name)).contains(code));
    }
    for &(name, code) in BACKGROUND_COLOURS {
        assert!(background_code(Some(name)).contains(code));
    }
    for &(name, code) in FORMAT_CODES {
        assert!(format_code(Some(name)).contains(code));
    }
}

#[test]
fn say_output_is_compose_plus_newline() {
    let mut out = Vec::new();
    let printed = say_to(&mut out, "done", Some("green"), None, ["bold"]).unwrap();

    assert_eq!(printed, "\x1b[0;32m\x1b[1mdone\x1b[0m\n");
    assert_eq!(String::from_utf8(out).unwrap(), printed);
}

#[test]
fn style_and_compose_agree() {
    let style = Style::new().fg("white").bg("magenta").format("reverse");
    assert_eq!(
        style.paint("x"),
        compose("x", Some("white"), Some("magenta"), "reverse")
    );
}

#[test]
fn bell_writes_only_bell_characters() {
    let mut out = Vec::new();
    bell_to(&mut out, 3).unwrap();
    assert_eq!(out, vec![0x07, 0x07, 0x07]);
}

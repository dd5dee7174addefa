//! Integration tests for loading configuration files.

use std::fs;

use clikit::{Config, ConfigError, Style};

use crate::helpers::scratch_dir;

#[test]
fn load_reads_styles_from_file() {
    let dir = scratch_dir();
    let path = dir.path().join("clikit.toml");
    fs::write(
        &path,
        "[styles.heading]\nfg = \"lightBlue\"\nformats = [\"bold\", \"underline\"]\n",
    )
    .unwrap();

    let config = Config::load(&path).unwrap();
    let heading = config.style("heading");

    assert_eq!(
        heading,
        Style::new().fg("lightBlue").format("bold").format("underline")
    );
    assert_eq!(heading.paint("Title"), "\x1b[1;34m\x1b[1m\x1b[4mTitle\x1b[0m");
}

#[test]
fn load_missing_file_reports_path() {
    let dir = scratch_dir();
    let path = dir.path().join("missing.toml");

    let err = Config::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
    assert!(err.to_string().contains("missing.toml"));
}

#[test]
fn load_invalid_file_is_parse_error() {
    let dir = scratch_dir();
    let path = dir.path().join("bad.toml");
    fs::write(&path, "styles = 5\n").unwrap();

    assert!(matches!(Config::load(&path), Err(ConfigError::Parse(_))));
}

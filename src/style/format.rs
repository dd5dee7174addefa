//! Composing escape sequences around text.

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use super::registry::{background_code, foreground_code, format_code, RESET};

/// Line terminator appended by [`say`].
const LINE_TERMINATOR: &str = "\n";

/// An ordered list of format names, e.g. `["bold", "underline"]`.
///
/// Built from a single name, an array, slice, or `Vec` of names. Escape
/// sequences are emitted in exactly this order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Formats<'a>(Vec<&'a str>);

impl<'a> Formats<'a> {
    /// No format attributes.
    pub fn none() -> Self {
        Self(Vec::new())
    }

    pub fn names(&self) -> &[&'a str] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Concatenated escape sequences; unknown names contribute nothing.
    pub fn codes(&self) -> String {
        self.0.iter().map(|&name| format_code(Some(name))).collect()
    }
}

impl<'a> From<&'a str> for Formats<'a> {
    fn from(name: &'a str) -> Self {
        Self(vec![name])
    }
}

impl<'a> From<&'a String> for Formats<'a> {
    fn from(name: &'a String) -> Self {
        Self(vec![name.as_str()])
    }
}

impl<'a> From<Option<&'a str>> for Formats<'a> {
    fn from(name: Option<&'a str>) -> Self {
        Self(name.into_iter().collect())
    }
}

impl<'a, const N: usize> From<[&'a str; N]> for Formats<'a> {
    fn from(names: [&'a str; N]) -> Self {
        Self(names.to_vec())
    }
}

impl<'a, 'b> From<&'b [&'a str]> for Formats<'a> {
    fn from(names: &'b [&'a str]) -> Self {
        Self(names.to_vec())
    }
}

impl<'a> From<&'a [String]> for Formats<'a> {
    fn from(names: &'a [String]) -> Self {
        Self(names.iter().map(String::as_str).collect())
    }
}

impl<'a> From<Vec<&'a str>> for Formats<'a> {
    fn from(names: Vec<&'a str>) -> Self {
        Self(names)
    }
}

fn prefix(fg: Option<&str>, bg: Option<&str>, formats: &Formats<'_>) -> String {
    let mut out = foreground_code(fg);
    out.push_str(&background_code(bg));
    out.push_str(&formats.codes());
    out
}

/// Format `text` with the given colours and format attributes.
///
/// The result is foreground + background + formats (in order) + text +
/// reset. The reset is appended even when nothing resolved, so plain text
/// still gains four invisible bytes. Some attribute combinations do not
/// work together on real terminals; they are emitted as requested.
///
/// ```
/// use clikit::compose;
///
/// assert_eq!(compose("hi", Some("red"), None, "bold"), "\x1b[0;31m\x1b[1mhi\x1b[0m");
/// assert_eq!(compose("hi", Some("nope"), None, "bold"), "\x1b[1mhi\x1b[0m");
/// ```
pub fn compose<'a>(
    text: &str,
    fg: Option<&str>,
    bg: Option<&str>,
    formats: impl Into<Formats<'a>>,
) -> String {
    let mut out = prefix(fg, bg, &formats.into());
    out.push_str(text);
    out.push_str(RESET);
    out
}

/// Alias for [`compose`].
pub fn color<'a>(
    text: &str,
    fg: Option<&str>,
    bg: Option<&str>,
    formats: impl Into<Formats<'a>>,
) -> String {
    compose(text, fg, bg, formats)
}

/// Like [`say`], writing to `writer` instead of stdout.
pub fn say_to<'a, W: Write + ?Sized>(
    writer: &mut W,
    text: &str,
    fg: Option<&str>,
    bg: Option<&str>,
    formats: impl Into<Formats<'a>>,
) -> io::Result<String> {
    let mut line = compose(text, fg, bg, formats);
    line.push_str(LINE_TERMINATOR);
    writer.write_all(line.as_bytes())?;
    writer.flush()?;
    Ok(line)
}

/// Format `text`, print it to stdout followed by a newline, and return
/// exactly what was printed.
#[cfg(not(tarpaulin_include))]
pub fn say<'a>(
    text: &str,
    fg: Option<&str>,
    bg: Option<&str>,
    formats: impl Into<Formats<'a>>,
) -> io::Result<String> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    say_to(&mut handle, text, fg, bg, formats)
}

/// A reusable combination of colours and format attributes.
///
/// Names are resolved at paint time, so a `Style` built from unknown names
/// paints plain text (plus the reset) rather than failing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bg: Option<String>,
    #[serde(deserialize_with = "one_or_many")]
    pub formats: Vec<String>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the foreground colour.
    pub fn fg(mut self, name: impl Into<String>) -> Self {
        self.fg = Some(name.into());
        self
    }

    /// Set the background colour.
    pub fn bg(mut self, name: impl Into<String>) -> Self {
        self.bg = Some(name.into());
        self
    }

    /// Append a format attribute.
    pub fn format(mut self, name: impl Into<String>) -> Self {
        self.formats.push(name.into());
        self
    }

    /// Escape sequences this style emits before the text.
    pub fn prefix(&self) -> String {
        prefix(
            self.fg.as_deref(),
            self.bg.as_deref(),
            &Formats::from(self.formats.as_slice()),
        )
    }

    /// Same as [`compose`] with this style's settings.
    pub fn paint(&self, text: &str) -> String {
        compose(
            text,
            self.fg.as_deref(),
            self.bg.as_deref(),
            self.formats.as_slice(),
        )
    }
}

/// Accept `formats = "bold"` as well as `formats = ["bold", "underline"]`.
fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(name) => vec![name],
        OneOrMany::Many(names) => names,
    })
}

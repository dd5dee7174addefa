//! Terminal bell.

use std::io::{self, Read, Write};

/// BEL control character.
const BELL: u8 = 0x07;

/// Repeat count used when the caller has no preference.
pub const DEFAULT_BELL_REPEAT: usize = 1;

/// Ring the terminal bell `repeat` times on stdout.
///
/// A count of zero writes nothing.
#[cfg(not(tarpaulin_include))]
pub fn bell(repeat: usize) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    bell_to(&mut handle, repeat)
}

/// Write `repeat` bell characters to `writer`.
///
/// The bytes are streamed, so memory use does not grow with `repeat`.
pub fn bell_to<W: Write + ?Sized>(writer: &mut W, repeat: usize) -> io::Result<()> {
    if repeat == 0 {
        return Ok(());
    }
    io::copy(&mut io::repeat(BELL).take(repeat as u64), writer)?;
    writer.flush()
}

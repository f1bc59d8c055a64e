//! Producer-side output.
//!
//! A producer embeds commands in its ordinary stdout stream, one per line.
//! The consumer on the other end splits on `\n`, so a command line must be
//! written atomically and flushed; a command buffered past the producer's
//! exit never arrives.
//!
//! # Important
//!
//! - The serializer escapes CR/LF, so a serialized command is always
//!   exactly one line.
//! - Writes use an explicit `\n`, not `println!`, which may emit `\r\n` on
//!   Windows and leave a stray `\r` in the parsed message.
//!
//! # Example
//!
//! ```no_run
//! use cmdwire::{emit, Command};
//!
//! let cmd = Command::new("progress")
//!     .with_prop("percent", 40i64)
//!     .with_message("compiling");
//! emit::emit(&cmd).unwrap();
//! ```

use std::io::Write;

use crate::command::Command;
use crate::protocol;

/// Write a single line to stdout and flush it.
///
/// # Errors
///
/// Returns the I/O error if the write or flush fails.
pub fn write_stdout_line(line: &str) -> std::io::Result<()> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    handle.write_all(line.as_bytes())?;
    handle.write_all(b"\n")?;
    handle.flush()?;
    Ok(())
}

/// Serialize a command and write it to `writer` as one flushed line.
///
/// # Errors
///
/// Returns the I/O error if the write or flush fails.
pub fn emit_to<W: Write>(writer: &mut W, cmd: &Command) -> std::io::Result<()> {
    writer.write_all(protocol::serialize(cmd).as_bytes())?;
    writer.write_all(b"\n")?;
    writer.flush()
}

/// Serialize a command and write it to stdout as one flushed line.
///
/// # Errors
///
/// Returns the I/O error if the write or flush fails.
pub fn emit(cmd: &Command) -> std::io::Result<()> {
    write_stdout_line(&protocol::serialize(cmd))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emit_to_writes_one_flushed_line() {
        let cmd = Command::new("notice")
            .with_prop("level", "warn")
            .with_message("low disk");

        let mut out = Vec::new();
        emit_to(&mut out, &cmd).unwrap();

        assert_eq!(out, b"::notice level=warn::low disk\n");
    }

    #[test]
    fn test_emit_to_keeps_multiline_message_on_one_line() {
        let cmd = Command::new("log").with_message("first\nsecond");

        let mut out = Vec::new();
        emit_to(&mut out, &cmd).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "::log::first%0Asecond\n");
        assert_eq!(text.matches('\n').count(), 1);
    }
}

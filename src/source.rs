//! Line source adapter.
//!
//! Turns an async byte reader into a sequence of text lines and feeds each
//! one to a callback. The protocol engine has no opinion on where lines
//! come from (a child process's stdout, a file, a socket); it consumes
//! exactly one line per parse call.

use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};

use crate::error::Result;

/// Read `reader` to end of stream, invoking `on_line` for every line.
///
/// Line terminators (`\n`, `\r\n`) are stripped. The scan stops at the
/// first callback error or read error, which is returned; end of stream
/// returns `Ok(())`.
///
/// # Errors
///
/// Propagates read errors and whatever `on_line` returns.
///
/// # Example
///
/// ```
/// use cmdwire::source::scan_lines;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> cmdwire::Result<()> {
/// let mut lines = Vec::new();
/// scan_lines(&b"one\ntwo\n"[..], |line| {
///     lines.push(line.to_string());
///     Ok(())
/// })
/// .await?;
/// assert_eq!(lines, ["one", "two"]);
/// # Ok(())
/// # }
/// ```
pub async fn scan_lines<R, F>(reader: R, mut on_line: F) -> Result<()>
where
    R: AsyncRead + Unpin,
    F: FnMut(&str) -> Result<()>,
{
    let mut lines = BufReader::new(reader).lines();
    while let Some(line) = lines.next_line().await? {
        on_line(&line)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CmdwireError;

    #[tokio::test]
    async fn test_scan_lines_strips_terminators() {
        let mut seen = Vec::new();
        scan_lines(&b"a\nb\r\nc"[..], |line| {
            seen.push(line.to_string());
            Ok(())
        })
        .await
        .unwrap();
        assert_eq!(seen, ["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_scan_lines_empty_input() {
        scan_lines(&b""[..], |_line| panic!("no lines expected"))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_scan_lines_stops_on_callback_error() {
        let mut seen = 0;
        let err = scan_lines(&b"a\nb\nc\n"[..], |_line| {
            seen += 1;
            if seen == 2 {
                Err(CmdwireError::Handler("stop".to_string()))
            } else {
                Ok(())
            }
        })
        .await
        .unwrap_err();

        assert!(matches!(err, CmdwireError::Handler(_)));
        assert_eq!(seen, 2);
    }
}

//! Wire line parsing and serialization.
//!
//! One command occupies exactly one line:
//!
//! ```text
//! ::<name>[ <key1>=<value1>,<key2>=<value2>,...]::<message>
//! ```
//!
//! `name` runs to the first whitespace or `::`. The props segment is only
//! present when a single whitespace follows the name, and is terminated by
//! the next `::`; everything after that separator is the message, captured
//! verbatim.
//!
//! # Example
//!
//! ```
//! use cmdwire::protocol::{parse, serialize};
//!
//! let cmd = parse("::notice level=warn::disk almost full").unwrap();
//! assert_eq!(cmd.name(), "notice");
//! assert_eq!(cmd.prop_text("level"), Some("warn"));
//! assert_eq!(cmd.message(), "disk almost full");
//! assert_eq!(serialize(&cmd), "::notice level=warn::disk almost full");
//! ```

use crate::command::Command;
use crate::error::{CmdwireError, Result};

use super::escape::{escape_message, escape_prop, unescape_prop};

/// Marker opening a command line and separating props from the message.
const DELIM: &str = "::";

/// Parse one line of text into a [`Command`].
///
/// Property values are unescaped before being stored; the message is NOT.
/// It is the wire text after the second `::`, verbatim. Callers that need
/// the original message apply
/// [`unescape_message`](super::unescape_message) themselves.
///
/// Property segments are handled leniently: empty segments and segments
/// without exactly one `=` are skipped, so noise inside the props region
/// does not reject the command.
///
/// # Errors
///
/// - [`CmdwireError::NotACommand`] when the line does not match the
///   `::name...::message` shape at all. Expected for ordinary text lines;
///   callers fall through to plain-text handling.
/// - [`CmdwireError::EmptyKey`] when a props segment has an empty key
///   (e.g. `=value`). This one fails the whole parse.
pub fn parse(line: &str) -> Result<Command> {
    let rest = line.strip_prefix(DELIM).ok_or(CmdwireError::NotACommand)?;

    // Name runs to the first whitespace or "::"; a line with neither has
    // no message separator and is not a command.
    let name_end = rest
        .char_indices()
        .find(|&(i, c)| c.is_whitespace() || rest[i..].starts_with(DELIM))
        .map(|(i, _)| i)
        .ok_or(CmdwireError::NotACommand)?;
    let name = &rest[..name_end];
    if name.is_empty() {
        return Err(CmdwireError::NotACommand);
    }

    let after_name = &rest[name_end..];
    let (props, message) = match after_name.strip_prefix(DELIM) {
        Some(message) => ("", message),
        None => {
            // A single whitespace announces the props segment, which must
            // still be closed by "::".
            let mut chars = after_name.chars();
            chars.next();
            let after_ws = chars.as_str();
            let sep = after_ws.find(DELIM).ok_or(CmdwireError::NotACommand)?;
            (&after_ws[..sep], &after_ws[sep + DELIM.len()..])
        }
    };

    let mut cmd = Command::new(name);
    cmd.set_message(message);

    for segment in props.split(',') {
        if segment.is_empty() {
            continue;
        }
        // Exactly one '=' makes a property; anything else is noise.
        let (key, value) = match segment.split_once('=') {
            Some((key, value)) if !value.contains('=') => (key, value),
            _ => continue,
        };
        if key.is_empty() {
            return Err(CmdwireError::EmptyKey(segment.to_string()));
        }
        cmd.set_prop(key, unescape_prop(value));
    }

    Ok(cmd)
}

/// Serialize a [`Command`] to its canonical wire line. Total, never fails.
///
/// Properties render as `key=value` tokens with escaped values, sorted
/// lexicographically by full token text so output is deterministic
/// regardless of insertion order. The message is escaped, which keeps the
/// whole command on one line.
pub fn serialize(cmd: &Command) -> String {
    let mut tokens: Vec<String> = cmd
        .props()
        .map(|(key, value)| format!("{}={}", key, escape_prop(&value.to_string())))
        .collect();
    tokens.sort();

    let props = if tokens.is_empty() {
        String::new()
    } else {
        format!(" {}", tokens.join(","))
    };

    format!(
        "{}{}{}{}{}",
        DELIM,
        cmd.name(),
        props,
        DELIM,
        escape_message(cmd.message())
    )
}

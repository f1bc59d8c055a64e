//! # cmdwire
//!
//! Line-oriented command protocol embedded in plain text streams.
//!
//! A producer process (a build tool, a game engine, a CI step) emits
//! structured directives as single lines of the form
//!
//! ```text
//! ::<name>[ <key1>=<value1>,<key2>=<value2>,...]::<message>
//! ```
//!
//! in the middle of otherwise unstructured output. A consumer picks out
//! exactly those lines, dispatches them by name, and passes everything
//! else through untouched. The protocol is a pure line-text convention:
//! no transport, no persistence.
//!
//! ## Architecture
//!
//! - **Protocol engine** ([`protocol`]): escaping, parsing, serialization.
//!   Pure per call, safe to use concurrently on independent inputs.
//! - **Command** ([`Command`]): name + message + properties, the value the
//!   engine produces and consumes.
//! - **Dispatch** ([`HandlerRegistry`]): caller-owned table routing parsed
//!   commands to handlers by name. Unknown names are silently ignored.
//! - **Plumbing** ([`source`], [`emit`], [`Consumer`]): async line
//!   scanning, producer-side line writing, and the consumer loop that
//!   glues scanning, parsing, and dispatch together.
//!
//! ## Example
//!
//! ```
//! use cmdwire::{Command, HandlerRegistry};
//!
//! // Producer side: build a directive and put it on the wire.
//! let line = Command::new("progress")
//!     .with_prop("percent", 40i64)
//!     .with_message("compiling")
//!     .to_string();
//! assert_eq!(line, "::progress percent=40::compiling");
//!
//! // Consumer side: parse and dispatch.
//! let mut registry = HandlerRegistry::new();
//! registry.register("progress", |cmd| {
//!     assert_eq!(cmd.prop_text("percent"), Some("40"));
//!     Ok(())
//! });
//!
//! let cmd: Command = line.parse().unwrap();
//! registry.handle(&cmd).unwrap();
//! ```
//!
//! ## Sharp edge: asymmetric message escaping
//!
//! The serializer escapes the message (`%` → `%25`, CR → `%0D`, LF →
//! `%0A`) so a command stays on one line, but the parser does NOT reverse
//! it: the parsed message is the wire text after the second `::`,
//! verbatim. Only property values are unescaped automatically. Apply
//! [`protocol::unescape_message`] on the consuming side when the message
//! may contain escaped characters.

pub mod command;
pub mod emit;
pub mod error;
pub mod handler;
pub mod protocol;
pub mod source;

mod consumer;

pub use command::{Command, PropValue};
pub use consumer::{Consumer, ConsumerBuilder};
pub use error::{CmdwireError, Result};
pub use handler::{HandlerRegistry, HandlerResult};

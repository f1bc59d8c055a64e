//! Protocol module - wire syntax, escaping, parsing, serialization.
//!
//! This module implements the text line protocol:
//! - Escaping for the message and property-value channels
//! - `parse`: one line of text → [`Command`](crate::Command) or a
//!   structured failure
//! - `serialize`: [`Command`](crate::Command) → canonical wire line

mod escape;
mod wire;

pub use escape::{escape_message, escape_prop, unescape_message, unescape_prop};
pub use wire::{parse, serialize};

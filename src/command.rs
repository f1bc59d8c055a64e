//! The command value type.
//!
//! A [`Command`] is one directive: a name (the dispatch key), a free-form
//! message, and an unordered set of key/value properties. Commands are
//! created by the parser or built directly by a producer about to serialize
//! them.
//!
//! Property values are a tagged variant, [`PropValue`]: plain text, or
//! structured JSON data. Structured values serialize out as compact JSON
//! inside the property slot, but parsing always yields text; the narrowing
//! is intentional, see [`PropValue`].
//!
//! # Example
//!
//! ```
//! use cmdwire::Command;
//!
//! let cmd = Command::new("progress")
//!     .with_prop("percent", 40i64)
//!     .with_message("compiling");
//!
//! assert_eq!(cmd.to_string(), "::progress percent=40::compiling");
//!
//! let back: Command = "::progress percent=40::compiling".parse().unwrap();
//! assert_eq!(back.prop_text("percent"), Some("40"));
//! ```

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use serde_json::Value;

use crate::error::{CmdwireError, Result};
use crate::protocol;

/// A property value: plain text, or structured JSON data.
///
/// Text values round-trip through the wire verbatim (after escaping).
/// `Json` values render as compact JSON on serialization and come back as
/// `Text` holding that rendering when parsed: the wire carries no type
/// tag, so the narrowing to text is intentional, not data loss to repair.
#[derive(Debug, Clone, PartialEq)]
pub enum PropValue {
    /// Plain text, carried verbatim.
    Text(String),
    /// Structured data, rendered as compact JSON on the wire.
    Json(Value),
}

impl PropValue {
    /// Build a structured value from anything serializable.
    ///
    /// Plain string values become [`PropValue::Text`], everything else
    /// [`PropValue::Json`].
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be converted to JSON.
    pub fn json<T: Serialize>(value: &T) -> Result<Self> {
        Ok(Self::from(serde_json::to_value(value)?))
    }

    /// The text content, if this is a [`PropValue::Text`].
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Json(_) => None,
        }
    }
}

/// Renders the unescaped wire form: text verbatim, `null` as empty text,
/// any other JSON value in compact notation.
impl fmt::Display for PropValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Json(Value::Null) => Ok(()),
            Self::Json(v) => write!(f, "{}", v),
        }
    }
}

impl From<Value> for PropValue {
    fn from(value: Value) -> Self {
        match value {
            // A JSON string is just text; keep it on the verbatim path.
            Value::String(s) => Self::Text(s),
            v => Self::Json(v),
        }
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for PropValue {
    fn from(value: bool) -> Self {
        Self::Json(Value::from(value))
    }
}

impl From<i64> for PropValue {
    fn from(value: i64) -> Self {
        Self::Json(Value::from(value))
    }
}

impl From<u64> for PropValue {
    fn from(value: u64) -> Self {
        Self::Json(Value::from(value))
    }
}

impl From<f64> for PropValue {
    fn from(value: f64) -> Self {
        Self::Json(Value::from(value))
    }
}

/// One directive: name, message, properties.
///
/// Mutable until handed off: set the message and properties freely, then
/// serialize with [`Display`](fmt::Display) / [`protocol::serialize`] or
/// dispatch through a
/// [`HandlerRegistry`](crate::HandlerRegistry). Equality ignores property
/// order.
#[derive(Debug, Clone, PartialEq)]
pub struct Command {
    name: String,
    message: String,
    props: HashMap<String, PropValue>,
}

impl Command {
    /// Create a command with the given name, no message, no properties.
    ///
    /// # Panics
    ///
    /// Panics if `name` is empty or contains whitespace; such a name can
    /// never appear on the wire, so constructing it is a programmer error.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        assert!(!name.is_empty(), "command name must not be empty");
        assert!(
            !name.contains(char::is_whitespace),
            "command name must not contain whitespace"
        );
        Self {
            name,
            message: String::new(),
            props: HashMap::new(),
        }
    }

    /// The command name (the dispatch key).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The free-form message payload.
    ///
    /// For a parsed command this is the wire text after the second `::`,
    /// verbatim. Apply
    /// [`unescape_message`](protocol::unescape_message) if the producer
    /// escaped it.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Replace the message.
    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    /// Builder-style [`set_message`](Self::set_message).
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.set_message(message);
        self
    }

    /// Look up a property by key.
    pub fn prop(&self, key: &str) -> Option<&PropValue> {
        self.props.get(key)
    }

    /// Look up a property's text content by key.
    ///
    /// `None` for missing keys and for structured values. Parsed commands
    /// only ever hold text values, so on the consuming side this is the
    /// accessor to reach for.
    pub fn prop_text(&self, key: &str) -> Option<&str> {
        self.props.get(key).and_then(PropValue::as_text)
    }

    /// Insert or replace a property. Last write wins.
    ///
    /// # Panics
    ///
    /// Panics if `key` is empty; an empty key cannot be expressed on the
    /// wire.
    pub fn set_prop(&mut self, key: impl Into<String>, value: impl Into<PropValue>) {
        let key = key.into();
        assert!(!key.is_empty(), "property key must not be empty");
        self.props.insert(key, value.into());
    }

    /// Builder-style [`set_prop`](Self::set_prop).
    pub fn with_prop(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.set_prop(key, value);
        self
    }

    /// Remove a property, returning it if present. No-op for unknown keys.
    pub fn remove_prop(&mut self, key: &str) -> Option<PropValue> {
        self.props.remove(key)
    }

    /// Iterate over the properties, in no particular order.
    pub fn props(&self) -> impl Iterator<Item = (&str, &PropValue)> {
        self.props.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// The canonical wire line, via [`protocol::serialize`].
impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&protocol::serialize(self))
    }
}

/// Parse a wire line, via [`protocol::parse`].
impl FromStr for Command {
    type Err = CmdwireError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        protocol::parse(s)
    }
}

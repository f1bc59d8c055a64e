//! Escaping for the two wire channels.
//!
//! The protocol reserves a handful of characters per channel:
//!
//! - **Message channel**: `%`, CR, LF (a command must stay on one line).
//! - **Property-value channel**: the above plus `:` and `,`, which delimit
//!   the props segment and the key/value list.
//!
//! Each reserved character is replaced by its `%XX` hex code. Escaping is
//! reversible for exactly these characters; unknown `%XX` sequences in
//! incoming wire text pass through unchanged (no validation).
//!
//! Note the parser does NOT apply [`unescape_message`] to the message field
//! it captures; only property values are unescaped automatically. Callers
//! that emitted an escaped message must reverse it themselves. See
//! [`parse`](super::parse) for the full story on this asymmetry.

/// Escape a message for the wire: `%` → `%25`, CR → `%0D`, LF → `%0A`.
///
/// Percent goes first; escaping it later would re-escape the codes
/// introduced for CR and LF.
pub fn escape_message(s: &str) -> String {
    s.replace('%', "%25").replace('\r', "%0D").replace('\n', "%0A")
}

/// Reverse [`escape_message`].
///
/// The specific codes decode first and `%25` last, so an escaped literal
/// like `%250A` decodes once (to `%0A`), not twice.
pub fn unescape_message(s: &str) -> String {
    s.replace("%0D", "\r").replace("%0A", "\n").replace("%25", "%")
}

/// Escape a property value: message escaping, then `:` → `%3A`, `,` → `%2C`.
pub fn escape_prop(s: &str) -> String {
    escape_message(s).replace(':', "%3A").replace(',', "%2C")
}

/// Reverse [`escape_prop`].
///
/// Same ordering rule as [`unescape_message`]: `%25` decodes last.
pub fn unescape_prop(s: &str) -> String {
    s.replace("%3A", ":")
        .replace("%2C", ",")
        .replace("%0D", "\r")
        .replace("%0A", "\n")
        .replace("%25", "%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_message_reserved_chars() {
        assert_eq!(
            escape_message("percent % cr \r lf \n"),
            "percent %25 cr %0D lf %0A"
        );
    }

    #[test]
    fn test_escape_message_does_not_double_escape() {
        // A literal "%0A" in the input must come out as "%250A", not "%0A".
        assert_eq!(escape_message("%25 %0D %0A"), "%2525 %250D %250A");
    }

    #[test]
    fn test_escape_prop_covers_delimiters() {
        assert_eq!(
            escape_prop("a:b,c%d\re\nf"),
            "a%3Ab%2Cc%25d%0De%0Af"
        );
    }

    #[test]
    fn test_message_roundtrip() {
        let inputs = ["", "plain", "% \r \n", "%25", "%0A", "%%0D%", "100%"];
        for input in inputs {
            assert_eq!(unescape_message(&escape_message(input)), input);
        }
    }

    #[test]
    fn test_prop_roundtrip() {
        let inputs = [
            "",
            "plain",
            "a:b,c",
            "%3A",
            "%2C",
            "%0A",
            "%25",
            ":,%\r\n",
            "va:lue, with %0D everything",
        ];
        for input in inputs {
            assert_eq!(unescape_prop(&escape_prop(input)), input);
        }
    }

    #[test]
    fn test_unescape_prop_wire_codes() {
        assert_eq!(unescape_prop("va%3Alue"), "va:lue");
        assert_eq!(unescape_prop("a%2Cb"), "a,b");
        assert_eq!(unescape_prop("line%0Abreak"), "line\nbreak");
    }

    #[test]
    fn test_unknown_sequences_pass_through() {
        assert_eq!(unescape_prop("%7B%zz%"), "%7B%zz%");
        assert_eq!(unescape_message("%XY"), "%XY");
    }
}

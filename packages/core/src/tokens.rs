//! Token definitions for path lexical analysis
//!
//! Every character the path grammar gives meaning to lives here, together with
//! the byte classes used for member names. The scanner and the segment
//! renderers both read from this module so that "legal" has one definition.

/// Root marker every path starts with
pub const ROOT_MARKER: &str = "$";

/// Root marker as a byte for the scanner
pub(crate) const ROOT_BYTE: u8 = b'$';

/// Separator introducing a member leg (`.name`)
pub const MEMBER_SEPARATOR: char = '.';

/// Opening bracket of an index leg (`[0]`)
pub const INDEX_OPEN: char = '[';

/// Closing bracket of an index leg
pub const INDEX_CLOSE: char = ']';

/// Wildcard token, valid after a separator or inside brackets
pub const WILDCARD: &str = "*";

/// Recursive descent token
pub const RECURSIVE_DESCENT: &str = "**";

/// Canonical rendering of an index wildcard leg
pub const WILDCARD_INDEX: &str = "[*]";

/// Canonical rendering of a recursive descent leg
pub const RECURSIVE_DESCENT_SEGMENT: &str = ".**";

/// Check whether a byte may start a member name
#[inline]
#[must_use]
pub const fn is_identifier_start(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'_'
}

/// Check whether a byte may continue a member name
#[inline]
#[must_use]
pub const fn is_identifier_continue(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifier_byte_classes() {
        assert!(is_identifier_start(b'a'));
        assert!(is_identifier_start(b'Z'));
        assert!(is_identifier_start(b'_'));
        assert!(!is_identifier_start(b'1'));
        assert!(!is_identifier_start(b'-'));

        assert!(is_identifier_continue(b'9'));
        assert!(is_identifier_continue(b'_'));
        assert!(!is_identifier_continue(b' '));
        assert!(!is_identifier_continue(0xC3));
    }

    #[test]
    fn rendered_segments_use_the_token_characters() {
        assert!(WILDCARD_INDEX.starts_with(INDEX_OPEN));
        assert!(WILDCARD_INDEX.ends_with(INDEX_CLOSE));
        assert!(WILDCARD_INDEX.contains(WILDCARD));
        assert!(RECURSIVE_DESCENT_SEGMENT.starts_with(MEMBER_SEPARATOR));
        assert!(RECURSIVE_DESCENT_SEGMENT.ends_with(RECURSIVE_DESCENT));
    }
}

//! Java identifier rules.
//!
//! ## Notes
//! - Validation follows `Character.isJavaIdentifierStart/Part` closely enough for descriptors: a letter, `_` or `$`
//!   first, then letters, digits, `_` or `$`. Unicode letters are accepted.

use super::keywords;

/// Check whether `c` may start a Java identifier.
pub fn is_identifier_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

/// Check whether `c` may continue a Java identifier.
pub fn is_identifier_part(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

/// Check whether `name` is a legal simple Java identifier (not a reserved word).
///
/// ## Examples
/// ```rust
/// use subjectgen_core::is_valid_identifier;
///
/// assert!(is_valid_identifier("startsWith"));
/// assert!(!is_valid_identifier("2fast"));
/// assert!(!is_valid_identifier("class"));
/// ```
pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if is_identifier_start(first) => {}
        _ => return false,
    }
    chars.all(is_identifier_part) && !keywords::is_reserved(name)
}

/// Check whether `name` is a dot-separated sequence of legal identifiers.
///
/// ## Examples
/// ```rust
/// use subjectgen_core::is_qualified_name;
///
/// assert!(is_qualified_name("com.google.common.truth"));
/// assert!(!is_qualified_name("com..truth"));
/// assert!(!is_qualified_name(""));
/// ```
pub fn is_qualified_name(name: &str) -> bool {
    !name.is_empty() && name.split('.').all(is_valid_identifier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dollar_and_underscore() {
        assert!(is_valid_identifier("$proxy"));
        assert!(is_valid_identifier("_value"));
        assert!(!is_valid_identifier("_"));
    }

    #[test]
    fn test_unicode_letters() {
        assert!(is_valid_identifier("größe"));
    }

    #[test]
    fn test_qualified_rejects_keyword_segment() {
        assert!(!is_qualified_name("com.example.new"));
        assert!(is_qualified_name("Outer.Inner"));
    }
}

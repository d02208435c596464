//! Java reserved words (for identifier validation in descriptors and type expressions).
//!
//! ## Notes
//! - Restricted identifiers such as `var`, `record` or `yield` are legal simple names and are not listed.
//! - The literals `true`, `false` and `null` cannot be used as identifiers either, so they live here too.

/// Reserved keywords of the Java language.
pub const JAVA_KEYWORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const", "continue",
    "default", "do", "double", "else", "enum", "extends", "final", "finally", "float", "for", "goto", "if",
    "implements", "import", "instanceof", "int", "interface", "long", "native", "new", "package", "private",
    "protected", "public", "return", "short", "static", "strictfp", "super", "switch", "synchronized", "this",
    "throw", "throws", "transient", "try", "void", "volatile", "while", "_",
];

/// Literal spellings that are reserved like keywords.
pub const JAVA_RESERVED_LITERALS: &[&str] = &["true", "false", "null"];

/// Check whether a spelling is a Java keyword.
pub fn is_keyword(name: &str) -> bool {
    JAVA_KEYWORDS.contains(&name)
}

/// Check whether a spelling can never be used as a Java identifier.
pub fn is_reserved(name: &str) -> bool {
    is_keyword(name) || JAVA_RESERVED_LITERALS.contains(&name)
}

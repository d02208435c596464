//! AST for Java type expressions.

use std::fmt;

use subjectgen_core::lang::primitives::{self, PrimitiveId};

/// Byte range into the parsed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Span> for miette::SourceSpan {
    fn from(span: Span) -> Self {
        (span.start, span.len()).into()
    }
}

/// A parsed Java type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum JavaType {
    Primitive(PrimitiveId),
    /// Only produced for a bare top-level `void`.
    Void,
    Class(ClassType),
    /// One array dimension around the element type.
    Array(Box<JavaType>),
    /// A trailing `...` on a parameter type; semantically an array.
    Varargs(Box<JavaType>),
}

/// A (possibly qualified, possibly generic) class or interface type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClassType {
    /// Dot-separated name segments (`["java", "lang", "String"]`).
    pub segments: Vec<String>,
    pub args: Vec<TypeArg>,
}

/// A generic type argument.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeArg {
    Type(JavaType),
    Wildcard(Option<WildcardBound>),
}

/// Bound on a `?` wildcard.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum WildcardBound {
    Extends(JavaType),
    Super(JavaType),
}

impl ClassType {
    /// Build a non-generic class type from a dotted name.
    pub fn named(qualified: &str) -> Self {
        Self {
            segments: qualified.split('.').map(str::to_string).collect(),
            args: Vec::new(),
        }
    }

    /// The dotted name without type arguments.
    pub fn qualified_name(&self) -> String {
        self.segments.join(".")
    }

    /// The last name segment.
    pub fn simple_name(&self) -> &str {
        self.segments.last().map(String::as_str).unwrap_or_default()
    }
}

impl JavaType {
    /// Build a non-generic class type from a dotted name.
    pub fn class(qualified: &str) -> Self {
        JavaType::Class(ClassType::named(qualified))
    }

    pub fn is_void(&self) -> bool {
        matches!(self, JavaType::Void)
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self, JavaType::Primitive(_))
    }

    pub fn is_varargs(&self) -> bool {
        matches!(self, JavaType::Varargs(_))
    }

    /// Return the reference type usable as a generic argument: primitives become their wrapper class, every other
    /// type is returned unchanged.
    ///
    /// ## Examples
    /// ```rust
    /// use subjectgen_syntax::parse_type;
    ///
    /// assert_eq!(parse_type("int").unwrap().boxed().to_string(), "java.lang.Integer");
    /// assert_eq!(parse_type("int[]").unwrap().boxed().to_string(), "int[]");
    /// ```
    pub fn boxed(&self) -> JavaType {
        match self {
            JavaType::Primitive(id) => JavaType::class(primitives::boxed_name(*id)),
            other => other.clone(),
        }
    }

    /// Count the array dimensions (`String[][]` → 2, `String...` → 1).
    pub fn dimensions(&self) -> usize {
        match self {
            JavaType::Array(inner) | JavaType::Varargs(inner) => 1 + inner.dimensions(),
            _ => 0,
        }
    }
}

impl fmt::Display for JavaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JavaType::Primitive(id) => f.write_str(primitives::as_str(*id)),
            JavaType::Void => f.write_str(primitives::VOID),
            JavaType::Class(class) => write!(f, "{}", class),
            JavaType::Array(inner) => write!(f, "{}[]", inner),
            JavaType::Varargs(inner) => write!(f, "{}...", inner),
        }
    }
}

impl fmt::Display for ClassType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.qualified_name())?;
        if !self.args.is_empty() {
            f.write_str("<")?;
            for (i, arg) in self.args.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{}", arg)?;
            }
            f.write_str(">")?;
        }
        Ok(())
    }
}

impl fmt::Display for TypeArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeArg::Type(ty) => write!(f, "{}", ty),
            TypeArg::Wildcard(None) => f.write_str("?"),
            TypeArg::Wildcard(Some(WildcardBound::Extends(ty))) => write!(f, "? extends {}", ty),
            TypeArg::Wildcard(Some(WildcardBound::Super(ty))) => write!(f, "? super {}", ty),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_generic() {
        let ty = JavaType::Class(ClassType {
            segments: vec!["java".into(), "util".into(), "Map".into()],
            args: vec![
                TypeArg::Type(JavaType::class("java.lang.String")),
                TypeArg::Wildcard(Some(WildcardBound::Super(JavaType::class("java.lang.Integer")))),
            ],
        });
        assert_eq!(
            ty.to_string(),
            "java.util.Map<java.lang.String, ? super java.lang.Integer>"
        );
    }

    #[test]
    fn test_display_arrays_and_varargs() {
        let ty = JavaType::Varargs(Box::new(JavaType::Array(Box::new(JavaType::Primitive(PrimitiveId::Byte)))));
        assert_eq!(ty.to_string(), "byte[]...");
        assert_eq!(ty.dimensions(), 2);
    }

    #[test]
    fn test_simple_name() {
        assert_eq!(ClassType::named("a.b.Outer.Inner").simple_name(), "Inner");
    }
}

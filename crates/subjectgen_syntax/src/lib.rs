//! Syntax frontend for Java type expressions: lexer, parser, AST, diagnostics.
//!
//! Descriptors name Java types as text (`java.lang.String`, `java.util.Map<K, ? extends V>`, `byte[]`,
//! `java.lang.Object...`). This crate turns that text into a [`JavaType`] the backend can box, compare and render.
//!
//! ## Notes
//! - This crate is “syntax-only”: it does not resolve names or check that a type exists.
//! - Reserved words and primitive spellings come from `subjectgen_core::lang`.
//!
//! ## Examples
//! ```rust
//! use subjectgen_syntax::parse_type;
//!
//! let ty = parse_type("java.util.List<? extends java.lang.Number>").unwrap();
//! assert_eq!(ty.to_string(), "java.util.List<? extends java.lang.Number>");
//! ```

pub mod ast;
pub mod diagnostics;
pub mod lexer;
pub mod parser;

pub use ast::{ClassType, JavaType, Span, TypeArg, WildcardBound};
pub use diagnostics::{SyntaxErrorKind, TypeSyntaxError};
pub use parser::{parse_type, MAX_TYPE_DEPTH};

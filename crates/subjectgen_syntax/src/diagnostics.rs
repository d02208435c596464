//! Diagnostics for Java type expressions.
//!
//! Errors carry the text they were produced from so the CLI can render them with `miette` and point at the
//! offending span.

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

use crate::ast::Span;

/// What went wrong while lexing or parsing a type expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxErrorKind {
    #[error("unexpected character '{0}' in type")]
    UnexpectedChar(char),

    #[error("expected {expected}, found '{found}'")]
    UnexpectedToken { expected: &'static str, found: String },

    #[error("expected {0}, found end of type")]
    UnexpectedEnd(&'static str),

    #[error("keyword '{0}' cannot be used as a type name")]
    KeywordAsName(String),

    #[error("primitive type '{0}' cannot be used as a type argument")]
    PrimitiveTypeArgument(String),

    #[error("'void' is only allowed as a bare return type")]
    MisplacedVoid,

    #[error("'...' is only allowed once, at the end of a parameter type")]
    MisplacedVarargs,

    #[error("type is nested more than {0} levels deep")]
    TooDeep(usize),

    #[error("type is empty")]
    Empty,
}

/// A syntax error in a type expression, with source context.
#[derive(Debug, Clone, PartialEq, Error, Diagnostic)]
#[error("{kind}")]
#[diagnostic(code(subjectgen::type_syntax))]
pub struct TypeSyntaxError {
    pub kind: SyntaxErrorKind,
    #[source_code]
    pub source_code: String,
    #[label("here")]
    pub span: SourceSpan,
    #[help]
    pub help: Option<String>,
}

impl TypeSyntaxError {
    pub fn new(kind: SyntaxErrorKind, source_code: &str, span: Span) -> Self {
        let help = default_help(&kind);
        Self {
            kind,
            source_code: source_code.to_string(),
            span: span.into(),
            help,
        }
    }

    /// Replace the help text.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Byte offset of the error in the source text.
    pub fn offset(&self) -> usize {
        self.span.offset()
    }
}

fn default_help(kind: &SyntaxErrorKind) -> Option<String> {
    match kind {
        SyntaxErrorKind::PrimitiveTypeArgument(name) => {
            let boxed = subjectgen_core::lang::primitives::from_str(name).map(subjectgen_core::boxed_name)?;
            Some(format!("use the wrapper type '{}' instead", boxed))
        }
        SyntaxErrorKind::KeywordAsName(_) => Some("type names must be fully-qualified Java identifiers".to_string()),
        SyntaxErrorKind::TooDeep(_) => {
            Some("type arguments and array dimensions together count toward the nesting limit".to_string())
        }
        SyntaxErrorKind::Empty => Some("write a type such as 'java.lang.String'".to_string()),
        _ => None,
    }
}

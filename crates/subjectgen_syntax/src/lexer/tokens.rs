//! Token types for the type-expression lexer.

use crate::ast::Span;

/// Kind of token produced by the lexer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// Identifier or keyword; keywords are classified by the parser.
    Ident(String),
    Dot,
    Comma,
    Lt,
    Gt,
    Question,
    LBracket,
    RBracket,
    Ellipsis,
    Eof,
}

impl TokenKind {
    /// Spelling used in diagnostics.
    pub fn describe(&self) -> String {
        match self {
            TokenKind::Ident(name) => name.clone(),
            TokenKind::Dot => ".".to_string(),
            TokenKind::Comma => ",".to_string(),
            TokenKind::Lt => "<".to_string(),
            TokenKind::Gt => ">".to_string(),
            TokenKind::Question => "?".to_string(),
            TokenKind::LBracket => "[".to_string(),
            TokenKind::RBracket => "]".to_string(),
            TokenKind::Ellipsis => "...".to_string(),
            TokenKind::Eof => "end of type".to_string(),
        }
    }
}

/// A token with its kind and source span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

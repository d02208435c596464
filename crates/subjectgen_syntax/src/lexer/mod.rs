//! Lexer for Java type expressions.
//!
//! Produces identifiers and the handful of punctuation tokens that appear in types: `.` `,` `<` `>` `?` `[` `]`
//! and `...`. Whitespace is insignificant. `>>` is always two `Gt` tokens, so nested generics close naturally.

pub mod tokens;

pub use tokens::{Token, TokenKind};

use subjectgen_core::lang::identifiers::{is_identifier_part, is_identifier_start};

use crate::ast::Span;
use crate::diagnostics::{SyntaxErrorKind, TypeSyntaxError};

/// Lexer state over a single type expression.
pub struct Lexer<'a> {
    source: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            tokens: Vec::new(),
        }
    }

    /// Tokenize the whole input. The stream always ends with an `Eof` token.
    ///
    /// ## Errors
    /// Returns a [`TypeSyntaxError`] for the first character that cannot appear in a type.
    pub fn tokenize(mut self) -> Result<Vec<Token>, TypeSyntaxError> {
        while let Some((start, c)) = self.chars.next() {
            let kind = match c {
                c if c.is_whitespace() => continue,
                '.' => {
                    if self.source[start..].starts_with("...") {
                        self.chars.next();
                        self.chars.next();
                        self.push(TokenKind::Ellipsis, start, start + 3);
                        continue;
                    }
                    TokenKind::Dot
                }
                ',' => TokenKind::Comma,
                '<' => TokenKind::Lt,
                '>' => TokenKind::Gt,
                '?' => TokenKind::Question,
                '[' => TokenKind::LBracket,
                ']' => TokenKind::RBracket,
                c if is_identifier_start(c) => {
                    let end = self.identifier_end(start + c.len_utf8());
                    let name = self.source[start..end].to_string();
                    self.push(TokenKind::Ident(name), start, end);
                    continue;
                }
                other => {
                    return Err(TypeSyntaxError::new(
                        SyntaxErrorKind::UnexpectedChar(other),
                        self.source,
                        Span::new(start, start + other.len_utf8()),
                    ));
                }
            };
            self.push(kind, start, start + c.len_utf8());
        }

        let end = self.source.len();
        self.push(TokenKind::Eof, end, end);
        Ok(self.tokens)
    }

    fn identifier_end(&mut self, mut end: usize) -> usize {
        while let Some(&(i, c)) = self.chars.peek() {
            if !is_identifier_part(c) {
                break;
            }
            self.chars.next();
            end = i + c.len_utf8();
        }
        end
    }

    fn push(&mut self, kind: TokenKind, start: usize, end: usize) {
        self.tokens.push(Token::new(kind, Span::new(start, end)));
    }
}

/// Tokenize a type expression.
#[tracing::instrument(level = "trace", skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Result<Vec<Token>, TypeSyntaxError> {
    Lexer::new(source).tokenize()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        lex(source).unwrap().into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_qualified_name() {
        assert_eq!(
            kinds("java.lang.String"),
            vec![
                TokenKind::Ident("java".into()),
                TokenKind::Dot,
                TokenKind::Ident("lang".into()),
                TokenKind::Dot,
                TokenKind::Ident("String".into()),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_nested_generics_close_separately() {
        let ks = kinds("A<B<C>>");
        assert_eq!(ks.iter().filter(|k| **k == TokenKind::Gt).count(), 2);
    }

    #[test]
    fn test_ellipsis_and_brackets() {
        assert_eq!(
            kinds("int[] ..."),
            vec![
                TokenKind::Ident("int".into()),
                TokenKind::LBracket,
                TokenKind::RBracket,
                TokenKind::Ellipsis,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_spans() {
        let tokens = lex("  Foo").unwrap();
        assert_eq!(tokens[0].span, Span::new(2, 5));
        assert_eq!(tokens[1].span, Span::new(5, 5));
    }

    #[test]
    fn test_unexpected_char() {
        let err = lex("java.lang.String;").unwrap_err();
        assert_eq!(err.kind, SyntaxErrorKind::UnexpectedChar(';'));
        assert_eq!(err.offset(), 16);
    }

    #[test]
    fn test_annotation_is_rejected() {
        let err = lex("@Nullable String").unwrap_err();
        assert_eq!(err.kind, SyntaxErrorKind::UnexpectedChar('@'));
    }
}

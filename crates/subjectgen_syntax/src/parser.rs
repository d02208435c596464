//! Recursive-descent parser for Java type expressions.
//!
//! Grammar (informal):
//!
//! ```text
//! top      := type '...'? EOF
//! type     := base ('[' ']')*
//! base     := primitive | 'void' | class
//! class    := name ('.' name)* ('<' arg (',' arg)* '>')?
//! arg      := '?' (('extends' | 'super') reftype)? | reftype
//! reftype  := type, but not a bare primitive and not void
//! ```
//!
//! ## Notes
//! - `void` is accepted only as a whole top-level type; callers decide whether a void type is legal where it is used.
//! - Type arguments on inner segments (`Outer<A>.Inner`) are not supported; descriptors name erased outer types.
//! - Nesting is capped at [`MAX_TYPE_DEPTH`]. Each type-argument level and each array dimension counts once.

use subjectgen_core::lang::{keywords, primitives};

use crate::ast::{ClassType, JavaType, Span, TypeArg, WildcardBound};
use crate::diagnostics::{SyntaxErrorKind, TypeSyntaxError};
use crate::lexer::{self, Token, TokenKind};

const EXTENDS: &str = "extends";
const SUPER: &str = "super";

/// Deepest accepted nesting of type arguments and array dimensions.
pub const MAX_TYPE_DEPTH: usize = 64;

/// Parser state over a token stream.
pub struct Parser<'a> {
    source: &'a str,
    tokens: &'a [Token],
    pos: usize,
    /// Type-argument levels currently open.
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Create a parser for tokens produced from `source`.
    pub fn new(source: &'a str, tokens: &'a [Token]) -> Self {
        Self {
            source,
            tokens,
            pos: 0,
            depth: 0,
        }
    }

    /// Parse a complete top-level type.
    ///
    /// ## Errors
    /// Returns the first [`TypeSyntaxError`]; the parser does not attempt recovery since a type is a single
    /// expression.
    pub fn parse(mut self) -> Result<JavaType, TypeSyntaxError> {
        if self.check(&TokenKind::Eof) {
            return Err(self.error_here(SyntaxErrorKind::Empty));
        }

        let ty = self.type_expr(true)?;
        let ty = if self.match_kind(&TokenKind::Ellipsis) {
            JavaType::Varargs(Box::new(ty))
        } else {
            ty
        };

        self.expect(&TokenKind::Eof, "end of type")?;
        Ok(ty)
    }

    // ========================================================================
    // Types
    // ========================================================================

    fn type_expr(&mut self, allow_void: bool) -> Result<JavaType, TypeSyntaxError> {
        let token = self.peek().clone();
        let mut ty = match &token.kind {
            TokenKind::Ident(name) if name == primitives::VOID => {
                self.advance();
                if !allow_void || !self.check(&TokenKind::Eof) {
                    return Err(self.error_at(SyntaxErrorKind::MisplacedVoid, token.span));
                }
                return Ok(JavaType::Void);
            }
            TokenKind::Ident(name) => match primitives::from_str(name) {
                Some(id) => {
                    self.advance();
                    JavaType::Primitive(id)
                }
                None => JavaType::Class(self.class_type()?),
            },
            _ => return Err(self.unexpected("a type")),
        };

        let mut dimensions = 0;
        while self.check(&TokenKind::LBracket) {
            if self.depth + dimensions >= MAX_TYPE_DEPTH {
                return Err(self.error_here(SyntaxErrorKind::TooDeep(MAX_TYPE_DEPTH)));
            }
            self.advance();
            self.expect(&TokenKind::RBracket, "']'")?;
            ty = JavaType::Array(Box::new(ty));
            dimensions += 1;
        }
        Ok(ty)
    }

    fn class_type(&mut self) -> Result<ClassType, TypeSyntaxError> {
        let mut segments = vec![self.name_segment()?];
        while self.match_kind(&TokenKind::Dot) {
            segments.push(self.name_segment()?);
        }

        let args = if self.check(&TokenKind::Lt) {
            if self.depth >= MAX_TYPE_DEPTH {
                return Err(self.error_here(SyntaxErrorKind::TooDeep(MAX_TYPE_DEPTH)));
            }
            self.advance();
            self.depth += 1;
            let args = self.type_args();
            self.depth -= 1;
            args?
        } else {
            Vec::new()
        };
        Ok(ClassType { segments, args })
    }

    fn name_segment(&mut self) -> Result<String, TypeSyntaxError> {
        let token = self.peek().clone();
        match token.kind {
            TokenKind::Ident(name) if keywords::is_reserved(&name) => {
                Err(self.error_at(SyntaxErrorKind::KeywordAsName(name), token.span))
            }
            TokenKind::Ident(name) => {
                self.advance();
                Ok(name)
            }
            _ => Err(self.unexpected("a name")),
        }
    }

    fn type_args(&mut self) -> Result<Vec<TypeArg>, TypeSyntaxError> {
        let mut args = vec![self.type_arg()?];
        while self.match_kind(&TokenKind::Comma) {
            args.push(self.type_arg()?);
        }
        self.expect(&TokenKind::Gt, "',' or '>'")?;
        Ok(args)
    }

    fn type_arg(&mut self) -> Result<TypeArg, TypeSyntaxError> {
        if !self.match_kind(&TokenKind::Question) {
            return Ok(TypeArg::Type(self.reference_type()?));
        }

        let keyword = match &self.peek().kind {
            TokenKind::Ident(name) => Some(name.clone()),
            _ => None,
        };
        let bound = match keyword.as_deref() {
            Some(EXTENDS) => {
                self.advance();
                Some(WildcardBound::Extends(self.reference_type()?))
            }
            Some(SUPER) => {
                self.advance();
                Some(WildcardBound::Super(self.reference_type()?))
            }
            _ => None,
        };
        Ok(TypeArg::Wildcard(bound))
    }

    fn reference_type(&mut self) -> Result<JavaType, TypeSyntaxError> {
        let start = self.peek().span;
        let ty = self.type_expr(false)?;
        if let JavaType::Primitive(id) = ty {
            let name = primitives::as_str(id).to_string();
            return Err(self.error_at(SyntaxErrorKind::PrimitiveTypeArgument(name), start));
        }
        Ok(ty)
    }

    // ========================================================================
    // Token helpers
    // ========================================================================

    fn peek(&self) -> &Token {
        // The lexer always terminates the stream with Eof, and `advance` never moves past it.
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    fn advance(&mut self) {
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
    }

    fn check(&self, kind: &TokenKind) -> bool {
        &self.peek().kind == kind
    }

    fn match_kind(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: &TokenKind, expected: &'static str) -> Result<(), TypeSyntaxError> {
        if self.match_kind(kind) {
            Ok(())
        } else {
            Err(self.unexpected(expected))
        }
    }

    fn unexpected(&self, expected: &'static str) -> TypeSyntaxError {
        let token = self.peek();
        let kind = match &token.kind {
            TokenKind::Eof => SyntaxErrorKind::UnexpectedEnd(expected),
            TokenKind::Ellipsis => SyntaxErrorKind::MisplacedVarargs,
            other => SyntaxErrorKind::UnexpectedToken {
                expected,
                found: other.describe(),
            },
        };
        self.error_at(kind, token.span)
    }

    fn error_here(&self, kind: SyntaxErrorKind) -> TypeSyntaxError {
        self.error_at(kind, self.peek().span)
    }

    fn error_at(&self, kind: SyntaxErrorKind, span: Span) -> TypeSyntaxError {
        TypeSyntaxError::new(kind, self.source, span)
    }
}

/// Parse a Java type expression such as `java.util.List<java.lang.String>[]`.
///
/// ## Errors
/// Returns a [`TypeSyntaxError`] describing the first lexical or syntactic problem.
pub fn parse_type(source: &str) -> Result<JavaType, TypeSyntaxError> {
    let tokens = lexer::lex(source)?;
    Parser::new(source, &tokens).parse()
}

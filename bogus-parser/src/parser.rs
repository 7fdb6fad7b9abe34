use crate::ast::{Expr, Literal, Stmt};
use crate::error::ParseError;
use crate::lexer::{Token, TokenKind};
use bogus_stack::ensure_sufficient_stack;

mod expr;
mod stmt;

/// Maximum number of expressions and blocks that can be nested inside each other.
pub const MAX_NESTING_DEPTH: usize = 256;

pub struct Parser {
    tokens: Vec<Token>,
    /// Index of the current (peeked) token. Never moves past the trailing [`TokenKind::Eof`].
    cursor: usize,
    /// Current nesting of expressions and blocks.
    depth: usize,
}

impl Parser {
    /// Creates a parser over `tokens`. A [`TokenKind::Eof`] marker is appended if missing.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last().map(|token| token.kind) != Some(TokenKind::Eof) {
            let end = tokens.last().map_or(0, |token| token.span.end);
            tokens.push(Token::eof(end));
        }
        Self {
            tokens,
            cursor: 0,
            depth: 0,
        }
    }
}

impl Parser {
    /// Parses declarations until the end of input.
    pub fn parse_program(&mut self) -> Result<Vec<Stmt>, ParseError> {
        let mut stmts = Vec::new();
        while !self.at(TokenKind::Eof) {
            stmts.push(self.parse_declaration()?);
        }
        Ok(stmts)
    }
}

/// Parses a whole token stream into statements.
pub fn parse(tokens: Vec<Token>) -> Result<Vec<Stmt>, ParseError> {
    Parser::new(tokens).parse_program()
}

/// Parse utilities
impl Parser {
    fn current(&self) -> &Token {
        &self.tokens[self.cursor]
    }

    fn at(&self, kind: TokenKind) -> bool {
        self.current().kind == kind
    }

    /// Consumes the current token and returns it.
    fn next(&mut self) -> Token {
        let token = self.current().clone();
        if self.cursor + 1 < self.tokens.len() {
            self.cursor += 1;
        }
        token
    }

    /// Predicate that tests whether the current token is of `kind` and eats it if yes as a side effect.
    fn eat(&mut self, kind: TokenKind) -> bool {
        if self.at(kind) {
            self.next(); // eat token
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: TokenKind) -> Result<Token, ParseError> {
        if self.at(kind) {
            Ok(self.next())
        } else {
            Err(self.unexpected(kind.describe()))
        }
    }

    fn expect_identifier(&mut self) -> Result<String, ParseError> {
        self.expect(TokenKind::Identifier).map(|token| token.lexeme)
    }

    /// Eats the closing delimiter `close` or fails with an unmatched delimiter error pointing at
    /// the opening delimiter.
    fn expect_closing(&mut self, close: TokenKind, open: &Token) -> Result<(), ParseError> {
        if self.eat(close) {
            Ok(())
        } else {
            Err(Self::unmatched(open))
        }
    }

    fn unmatched(open: &Token) -> ParseError {
        ParseError::UnmatchedDelimiter {
            delimiter: open.lexeme.chars().next().unwrap_or('('),
            span: open.span.clone(),
        }
    }

    /// Runs `f` one nesting level deeper. Fails once [`MAX_NESTING_DEPTH`] is reached.
    fn nested<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(ParseError::NestingTooDeep {
                max_depth: MAX_NESTING_DEPTH,
                span: self.current().span.clone(),
            });
        }

        self.depth += 1;
        let result = ensure_sufficient_stack(|| f(self));
        self.depth -= 1;
        result
    }

    /// Creates an error for the current token.
    fn unexpected(&self, expected: &'static str) -> ParseError {
        let token = self.current();
        if token.kind == TokenKind::Eof {
            ParseError::UnterminatedExpression {
                expected,
                span: token.span.clone(),
            }
        } else {
            ParseError::UnexpectedToken {
                found: token.lexeme.clone(),
                expected,
                span: token.span.clone(),
            }
        }
    }

    fn int_literal(token: &Token) -> Result<Expr, ParseError> {
        token
            .lexeme
            .parse()
            .map(|val| Expr::Literal(Literal::Int(val)))
            .map_err(|_| ParseError::IntegerOutOfRange {
                literal: token.lexeme.clone(),
                span: token.span.clone(),
            })
    }

    /// Strips the surrounding quotes of a string literal token.
    /// Tokens that do not come from [`crate::lexer::tokenize`] may lack them.
    fn string_literal(token: &Token) -> Result<Expr, ParseError> {
        token
            .lexeme
            .strip_prefix('"')
            .and_then(|rest| rest.strip_suffix('"'))
            .map(|content| Expr::Literal(Literal::Str(content.to_string())))
            .ok_or_else(|| ParseError::UnexpectedToken {
                found: token.lexeme.clone(),
                expected: "a quoted string literal",
                span: token.span.clone(),
            })
    }
}

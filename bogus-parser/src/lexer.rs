use bogus_source::{Source, Span, SyntaxError};
use logos::Logos;

#[derive(Debug, Logos, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // literals
    #[regex(r"[0-9]+")]
    IntLit,
    #[regex(r#""[^"]*""#)]
    StringLit,
    #[token("true")]
    True,
    #[token("false")]
    False,

    // identifiers
    #[regex("[a-zA-Z_][a-zA-Z0-9_]*")]
    Identifier,

    // unary operators
    #[token("!")]
    Bang,

    // binary operators
    // - arithmetics
    #[token("+")]
    Plus,
    #[token("-")]
    Minus, // NOTE: can also be unary
    #[token("*")]
    Asterisk,
    #[token("/")]
    Slash,
    // - assignment
    #[token("=")]
    Equals,
    // - equality
    #[token("==")]
    EqualsEquals,
    #[token("!=")]
    NotEquals,
    // - ordering
    #[token(">")]
    GreaterThan,
    #[token(">=")]
    GreaterThanEquals,
    #[token("<")]
    LessThan,
    #[token("<=")]
    LessThanEquals,

    // punctuation
    #[token("(")]
    OpenParen,
    #[token(")")]
    CloseParen,
    #[token("{")]
    OpenBrace,
    #[token("}")]
    CloseBrace,
    #[token(",")]
    Comma,
    #[token(";")]
    Semi,

    // keywords
    #[token("fun")]
    Fun,
    #[token("let")]
    Let,
    #[token("return")]
    Return,
    #[token("if")]
    If,
    #[token("else")]
    Else,

    // misc
    #[regex(r"[ \t\n\r\f]+", logos::skip)]
    #[regex(r"//[^\n]*", logos::skip)] // single line comments
    #[error]
    Error,

    /// Only generated by [`tokenize`] after the last scanned token.
    Eof,
}

/// Minimum power that accepts any expression.
pub const ANY_BP: u8 = 0;
/// Power of the argument separator. Arguments are parsed with this as their minimum so that a
/// `,` always ends the current argument.
pub const SEPARATOR_BP: u8 = 1;

impl TokenKind {
    /// Returns the prefix binding power or `None` if the kind cannot start an expression.
    /// Leaves (literals and identifiers) and `(` do not recurse with their power, they report
    /// [`ANY_BP`].
    pub fn prefix_bp(self) -> Option<u8> {
        match self {
            TokenKind::IntLit
            | TokenKind::StringLit
            | TokenKind::True
            | TokenKind::False
            | TokenKind::Identifier
            | TokenKind::OpenParen => Some(ANY_BP),
            TokenKind::Bang | TokenKind::Minus => Some(13),
            _ => None,
        }
    }

    /// Returns the infix binding power `(l_bp, r_bp)` or `None` if the kind cannot continue an
    /// expression.
    /// An operator is consumed while `l_bp` is strictly greater than the current minimum, and its
    /// right hand side is parsed with `r_bp` as the new minimum. `r_bp == l_bp` is
    /// left-associative, `r_bp < l_bp` is right-associative.
    /// Assignment (`TokenKind::Equals`) has the lowest operator precedence with `(3, 2)`.
    pub fn infix_bp(self) -> Option<(u8, u8)> {
        match self {
            /* Call */
            TokenKind::OpenParen => Some((15, SEPARATOR_BP)),
            /* Multiplicative */
            TokenKind::Asterisk | TokenKind::Slash => Some((11, 11)),
            /* Additive */
            TokenKind::Plus | TokenKind::Minus => Some((9, 9)),
            /* Ordering */
            TokenKind::GreaterThan
            | TokenKind::GreaterThanEquals
            | TokenKind::LessThan
            | TokenKind::LessThanEquals => Some((7, 7)),
            /* Equality */
            TokenKind::EqualsEquals | TokenKind::NotEquals => Some((5, 5)),
            /* Assignment */
            TokenKind::Equals => Some((3, 2)),
            /* Separator */
            TokenKind::Comma => Some((SEPARATOR_BP, SEPARATOR_BP)),
            _ => None,
        }
    }

    /// Human readable description used in parse errors.
    pub fn describe(self) -> &'static str {
        match self {
            TokenKind::IntLit => "integer literal",
            TokenKind::StringLit => "string literal",
            TokenKind::True => "`true`",
            TokenKind::False => "`false`",
            TokenKind::Identifier => "identifier",
            TokenKind::Bang => "`!`",
            TokenKind::Plus => "`+`",
            TokenKind::Minus => "`-`",
            TokenKind::Asterisk => "`*`",
            TokenKind::Slash => "`/`",
            TokenKind::Equals => "`=`",
            TokenKind::EqualsEquals => "`==`",
            TokenKind::NotEquals => "`!=`",
            TokenKind::GreaterThan => "`>`",
            TokenKind::GreaterThanEquals => "`>=`",
            TokenKind::LessThan => "`<`",
            TokenKind::LessThanEquals => "`<=`",
            TokenKind::OpenParen => "`(`",
            TokenKind::CloseParen => "`)`",
            TokenKind::OpenBrace => "`{`",
            TokenKind::CloseBrace => "`}`",
            TokenKind::Comma => "`,`",
            TokenKind::Semi => "`;`",
            TokenKind::Fun => "`fun`",
            TokenKind::Let => "`let`",
            TokenKind::Return => "`return`",
            TokenKind::If => "`if`",
            TokenKind::Else => "`else`",
            TokenKind::Error => "unrecognized input",
            TokenKind::Eof => "end of input",
        }
    }
}

/// The binding-power table: `(prefix power, infix power)` for `kind`.
pub fn power(kind: TokenKind) -> (Option<u8>, Option<(u8, u8)>) {
    (kind.prefix_bp(), kind.infix_bp())
}

/// A scanned token.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// The exact source text of the token.
    pub lexeme: String,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            span,
        }
    }

    /// Creates an end of input marker positioned at `offset`.
    pub fn eof(offset: usize) -> Self {
        Self::new(TokenKind::Eof, "", offset..offset)
    }
}

/// Scans the whole `source` into tokens, terminated by a [`TokenKind::Eof`] token.
/// Unrecognized input is kept as [`TokenKind::Error`] tokens and reported to `source.errors`.
pub fn tokenize(source: &Source) -> Vec<Token> {
    let mut tokens = Vec::new();
    for (kind, span) in TokenKind::lexer(source.content).spanned() {
        let lexeme = &source.content[span.clone()];
        if kind == TokenKind::Error {
            source.errors.add_error(SyntaxError::new(
                format!("Unrecognized character `{}`", lexeme),
                span.clone(),
            ));
        }
        tokens.push(Token::new(kind, lexeme, span));
    }
    tokens.push(Token::eof(source.content.len()));
    tokens
}

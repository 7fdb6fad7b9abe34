use bogus_source::Span;
use thiserror::Error;

/// Errors that abort parsing of the current statement.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// The token at `span` cannot appear here.
    #[error("Unexpected token `{found}`, expected {expected}")]
    UnexpectedToken {
        found: String,
        expected: &'static str,
        span: Span,
    },
    /// The input ended in the middle of an expression or statement.
    #[error("Unexpected end of input, expected {expected}")]
    UnterminatedExpression { expected: &'static str, span: Span },
    /// The delimiter opened at `span` is never closed.
    #[error("Unmatched delimiter `{delimiter}`")]
    UnmatchedDelimiter { delimiter: char, span: Span },
    /// The left hand side of `=` is not an identifier.
    #[error("Invalid assignment target")]
    InvalidAssignmentTarget { span: Span },
    #[error("Integer literal `{literal}` is out of range")]
    IntegerOutOfRange { literal: String, span: Span },
    /// Expressions or blocks are nested more than `max_depth` levels deep.
    #[error("Nesting is deeper than {max_depth} levels")]
    NestingTooDeep { max_depth: usize, span: Span },
}

impl ParseError {
    pub fn span(&self) -> Span {
        match self {
            ParseError::UnexpectedToken { span, .. }
            | ParseError::UnterminatedExpression { span, .. }
            | ParseError::UnmatchedDelimiter { span, .. }
            | ParseError::InvalidAssignmentTarget { span }
            | ParseError::IntegerOutOfRange { span, .. }
            | ParseError::NestingTooDeep { span, .. } => span.clone(),
        }
    }
}

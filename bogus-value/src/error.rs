use thiserror::Error;

/// Errors that abort evaluation of the whole program.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuntimeError {
    /// `let` (or `fun`) on an identifier that is already bound in the same frame.
    #[error("Identifier `{0}` is already defined in this scope")]
    DuplicateIdentifier(String),
    /// The lookup exhausted the frame chain.
    #[error("Cannot resolve identifier `{0}`")]
    UnknownIdentifier(String),
    #[error("Can't apply `{operator}` to {found}")]
    TypeMismatch {
        operator: &'static str,
        /// The kinds of the operands, e.g. `Int and Str`.
        found: String,
    },
    #[error("Value of type {found} is not callable")]
    NotCallable { found: &'static str },
    #[error("Function `{callee}` expects {expected} argument(s) but got {found}")]
    ArityMismatch {
        callee: String,
        expected: usize,
        found: usize,
    },
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Integer overflow in `{operator}`")]
    IntegerOverflow { operator: &'static str },
    #[error("Maximum call depth of {max_depth} exceeded")]
    StackOverflow { max_depth: usize },
    #[error("Assertion failed: {0}")]
    AssertionFailed(String),
}

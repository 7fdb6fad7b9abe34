pub mod builtin_functions;
pub mod config;

use std::sync::Once;

use bogus_eval::{EvalOptions, Interpreter};
use bogus_parser::{lexer::tokenize, parse, ParseError};
use bogus_source::{Source, Span, SyntaxError};
use bogus_value::{RuntimeError, Scope, Value};
use thiserror::Error;

/// Any error produced while running a program.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The scanner found input it does not recognize.
    #[error("{0}")]
    Syntax(SyntaxError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl Error {
    /// The source location of the error, if it has one. Runtime errors have none.
    pub fn span(&self) -> Option<Span> {
        match self {
            Error::Syntax(err) => Some(err.span()),
            Error::Parse(err) => Some(err.span()),
            Error::Runtime(_) => None,
        }
    }
}

/// Scans, parses and evaluates `source` in `scope`.
pub fn interpret_with(
    source: &str,
    scope: &Scope,
    interpreter: &mut Interpreter,
) -> Result<Value, Error> {
    let source: Source = source.into();
    let tokens = tokenize(&source);
    if let Some(err) = source.errors.errors().into_iter().next() {
        return Err(Error::Syntax(err));
    }

    let stmts = parse(tokens)?;
    tracing::debug!(stmts = stmts.len(), "parsed program");
    Ok(interpreter.evaluate_program(&stmts, scope)?)
}

/// Runs `source` in a fresh scope containing the builtin functions.
pub fn interpret(source: &str) -> Result<Value, Error> {
    let scope = builtin_functions::default_scope();
    interpret_with(source, &scope, &mut Interpreter::new(EvalOptions::default()))
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times.
/// Enable with `RUST_LOG=bogus_eval=debug` or `RUST_LOG=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true).with_writer(std::io::stderr))
                .with(filter)
                .init();
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_interpret() {
        assert_eq!(interpret("1 + 2 * 3;"), Ok(Value::Int(7)));
    }

    #[test]
    fn test_error_kinds() {
        let err = interpret("let x = 1 @").unwrap_err();
        assert_eq!(
            err,
            Error::Syntax(SyntaxError::new("Unrecognized character `@`", 10..11))
        );
        assert_eq!(err.span(), Some(10..11));

        let err = interpret("let x = (1;").unwrap_err();
        assert!(matches!(err, Error::Parse(ParseError::UnmatchedDelimiter { .. })));
        assert_eq!(err.span(), Some(8..9));

        let err = interpret("x;").unwrap_err();
        assert_eq!(
            err,
            Error::Runtime(RuntimeError::UnknownIdentifier("x".to_string()))
        );
        assert_eq!(err.span(), None);
        assert_eq!(err.to_string(), "Cannot resolve identifier `x`");
    }

    #[test]
    fn test_shared_scope() {
        let scope = builtin_functions::default_scope();
        let mut interpreter = Interpreter::new(EvalOptions::default());
        interpret_with("let x = 1;", &scope, &mut interpreter).unwrap();
        assert_eq!(
            interpret_with("x + 1;", &scope, &mut interpreter),
            Ok(Value::Int(2))
        );
        // builtins can be shadowed by user code
        assert_eq!(
            interpret_with("let print = 5; print;", &scope, &mut interpreter),
            Ok(Value::Int(5))
        );
    }
}

//! Tree-walking evaluator.

mod expr;
mod ops;
mod stmt;

use bogus_parser::ast::Stmt;
use bogus_value::{RuntimeError, Scope, Value};

/// Outcome of evaluating a statement.
///
/// `Return` stops the enclosing statement sequence and is turned into the result of the
/// enclosing call (or of the program).
#[derive(Debug, Clone, PartialEq)]
pub enum ControlResult {
    Normal(Value),
    Return(Value),
}

impl ControlResult {
    /// Returns the carried value regardless of the variant.
    pub fn into_value(self) -> Value {
        match self {
            ControlResult::Normal(value) | ControlResult::Return(value) => value,
        }
    }
}

/// Options for [`Interpreter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalOptions {
    /// Maximum number of nested function calls before evaluation fails with
    /// [`RuntimeError::StackOverflow`].
    pub max_call_depth: usize,
}

impl EvalOptions {
    pub const DEFAULT_MAX_CALL_DEPTH: usize = 256;
}

impl Default for EvalOptions {
    fn default() -> Self {
        Self {
            max_call_depth: Self::DEFAULT_MAX_CALL_DEPTH,
        }
    }
}

/// Evaluates statements against scopes.
pub struct Interpreter {
    options: EvalOptions,
    /// Number of function calls currently being evaluated.
    call_depth: usize,
}

impl Interpreter {
    pub fn new(options: EvalOptions) -> Self {
        Self {
            options,
            call_depth: 0,
        }
    }

    /// Evaluates a whole program in `scope`.
    /// The result is the value of the last statement, or the value of a top level `return`.
    #[tracing::instrument(level = "debug", skip_all, fields(stmts = stmts.len()))]
    pub fn evaluate_program(
        &mut self,
        stmts: &[Stmt],
        scope: &Scope,
    ) -> Result<Value, RuntimeError> {
        let result = self.evaluate_stmts(stmts, scope)?;
        Ok(result.into_value())
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new(EvalOptions::default())
    }
}

/// Evaluates `stmts` against `global_scope` with the default [`EvalOptions`].
pub fn evaluate(stmts: &[Stmt], global_scope: &Scope) -> Result<Value, RuntimeError> {
    Interpreter::default().evaluate_program(stmts, global_scope)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use bogus_parser::{lexer::tokenize, parse};
    use pretty_assertions::assert_eq;

    pub fn program(source: &str) -> Vec<Stmt> {
        let source = source.into();
        let tokens = tokenize(&source);
        assert!(source.has_no_errors());
        parse(tokens).unwrap()
    }

    pub fn run(source: &str) -> Result<Value, RuntimeError> {
        evaluate(&program(source), &Scope::new())
    }

    #[test]
    fn test_precedence() {
        assert_eq!(run("1 + 2 * 3;"), Ok(Value::Int(7)));
        assert_eq!(run("(1 + 2) * 3;"), Ok(Value::Int(9)));
        assert_eq!(run("10 - 4 - 3;"), Ok(Value::Int(3)));
        assert_eq!(run("2 * 3 == 6;"), Ok(Value::Bool(true)));
    }

    #[test]
    fn test_grouping_equivalence() {
        assert_eq!(run("(1+2);"), run("1+2;"));
        assert_eq!(run("((((1))));"), Ok(Value::Int(1)));
    }

    #[test]
    fn test_program_result() {
        assert_eq!(run(""), Ok(Value::Void));
        assert_eq!(run("let x = 5;"), Ok(Value::Void));
        assert_eq!(run("let x = 5; x;"), Ok(Value::Int(5)));
        // a top level return ends the program
        assert_eq!(run("return 1; 2;"), Ok(Value::Int(1)));
    }

    #[test]
    fn test_let_in_same_frame() {
        let global = Scope::new();
        assert_eq!(evaluate(&program("let x = 5;"), &global), Ok(Value::Void));
        assert_eq!(global.lookup("x"), Ok(Value::Int(5)));
        assert_eq!(
            evaluate(&program("let x = 6;"), &global),
            Err(RuntimeError::DuplicateIdentifier("x".to_string()))
        );
        assert_eq!(global.lookup("x"), Ok(Value::Int(5)));
    }

    #[test]
    fn test_unknown_identifier() {
        assert_eq!(
            run("return y;"),
            Err(RuntimeError::UnknownIdentifier("y".to_string()))
        );
    }

    #[test]
    fn test_stack_overflow() {
        let stmts = program("fun f(n) { return f(n + 1); } f(0);");
        let mut interpreter = Interpreter::new(EvalOptions { max_call_depth: 16 });
        assert_eq!(
            interpreter.evaluate_program(&stmts, &Scope::new()),
            Err(RuntimeError::StackOverflow { max_depth: 16 })
        );
        // the depth counter is restored after the error
        assert_eq!(interpreter.call_depth, 0);
    }

    #[test]
    fn test_default_call_depth_limit() {
        // the stack grows as needed, so the limit is reached before the host stack runs out
        assert_eq!(
            run("fun f(n) { return f(n + 1); } f(0);"),
            Err(RuntimeError::StackOverflow {
                max_depth: EvalOptions::DEFAULT_MAX_CALL_DEPTH,
            })
        );
        assert_eq!(
            run("fun count(n) { if n == 0 { return 0; } return 1 + count(n - 1); } count(255);"),
            Ok(Value::Int(255))
        );
    }
}

use std::rc::Rc;

use bogus_parser::ast::Stmt;
use bogus_stack::ensure_sufficient_stack;
use bogus_value::{Function, RuntimeError, Scope, Value};

use crate::{ControlResult, Interpreter};

impl Interpreter {
    /// Evaluates a single statement in `scope`.
    pub fn evaluate_stmt(
        &mut self,
        stmt: &Stmt,
        scope: &Scope,
    ) -> Result<ControlResult, RuntimeError> {
        ensure_sufficient_stack(|| match stmt {
            Stmt::LetDeclaration { ident, initializer } => {
                // checked before the initializer runs
                if scope.is_defined_locally(ident) {
                    return Err(RuntimeError::DuplicateIdentifier(ident.clone()));
                }
                let value = self.evaluate_expr(initializer, scope)?;
                scope.define(ident.clone(), value)?;
                Ok(ControlResult::Normal(Value::Void))
            }
            Stmt::FnDeclaration {
                ident,
                params,
                body,
            } => {
                let function = Function::new(
                    ident.clone(),
                    params.clone(),
                    Rc::clone(body),
                    scope.clone(),
                );
                scope.define(ident.clone(), Value::Function(Rc::new(function)))?;
                Ok(ControlResult::Normal(Value::Void))
            }
            Stmt::Block(body) => self.evaluate_block(body, scope),
            Stmt::If {
                condition,
                then_branch,
                else_branch,
            } => {
                let condition = self.evaluate_expr(condition, scope)?;
                match condition.cast_to_bool() {
                    Some(true) => self.evaluate_block(then_branch, scope),
                    Some(false) => match else_branch {
                        Some(else_branch) => self.evaluate_block(else_branch, scope),
                        None => Ok(ControlResult::Normal(Value::Void)),
                    },
                    None => Err(RuntimeError::TypeMismatch {
                        operator: "if",
                        found: condition.type_name().to_string(),
                    }),
                }
            }
            Stmt::ExprStmt(expr) => Ok(ControlResult::Normal(self.evaluate_expr(expr, scope)?)),
            Stmt::ReturnStmt(expr) => Ok(ControlResult::Return(self.evaluate_expr(expr, scope)?)),
        })
    }

    /// Evaluates `stmts` in order in `scope`.
    /// A [`ControlResult::Return`] short-circuits the remaining statements. Otherwise the result
    /// is the value of the last statement, or `Void` if there is none.
    pub fn evaluate_stmts(
        &mut self,
        stmts: &[Stmt],
        scope: &Scope,
    ) -> Result<ControlResult, RuntimeError> {
        let mut last = Value::Void;
        for stmt in stmts {
            match self.evaluate_stmt(stmt, scope)? {
                ControlResult::Normal(value) => last = value,
                ret @ ControlResult::Return(_) => return Ok(ret),
            }
        }
        Ok(ControlResult::Normal(last))
    }

    /// Evaluates `stmts` in a new lexical block (a child frame of `scope`).
    fn evaluate_block(
        &mut self,
        stmts: &[Stmt],
        scope: &Scope,
    ) -> Result<ControlResult, RuntimeError> {
        self.evaluate_stmts(stmts, &scope.child())
    }

    /// Calls a user defined function with already evaluated arguments.
    pub(crate) fn call_function(
        &mut self,
        function: &Function,
        args: Vec<Value>,
    ) -> Result<Value, RuntimeError> {
        if args.len() != function.arity() {
            return Err(RuntimeError::ArityMismatch {
                callee: function.ident.clone(),
                expected: function.arity(),
                found: args.len(),
            });
        }
        if self.call_depth >= self.options.max_call_depth {
            return Err(RuntimeError::StackOverflow {
                max_depth: self.options.max_call_depth,
            });
        }

        let frame = function.env.child();
        for (param, arg) in function.params.iter().zip(args) {
            frame.define(param.clone(), arg)?;
        }

        tracing::debug!(ident = %function.ident, depth = self.call_depth, "call");
        self.call_depth += 1;
        let result = self.evaluate_stmts(&function.body, &frame);
        self.call_depth -= 1;

        let value = match result? {
            ControlResult::Return(value) => value,
            // falling off the end
            ControlResult::Normal(_) => Value::Void,
        };
        tracing::debug!(ident = %function.ident, value = %value, "return");
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use crate::tests::run;
    use bogus_value::{RuntimeError, Value};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_function_call() {
        assert_eq!(
            run("fun double(x) { let result = x * 2; return result; } double(21);"),
            Ok(Value::Int(42))
        );
        assert_eq!(run("fun nothing() {} nothing();"), Ok(Value::Void));
        // a value that is not returned is discarded
        assert_eq!(run("fun f() { 1; } f();"), Ok(Value::Void));
    }

    #[test]
    fn test_early_return() {
        assert_eq!(
            run("fun f(x) { if x { return 1; } return 2; } f(true) * 10 + f(false);"),
            Ok(Value::Int(12))
        );
        assert_eq!(
            run("fun f() { { { return 1; } } return 2; } f();"),
            Ok(Value::Int(1))
        );
    }

    #[test]
    fn test_closures() {
        assert_eq!(
            run("let outer = 10; fun addOuter(a) { return a + outer; } addOuter(5);"),
            Ok(Value::Int(15))
        );
        // invoked from a frame where `outer` is not visible
        assert_eq!(
            run(r#"
            fun make() {
                let outer = 10;
                fun addOuter(a) { return a + outer; }
                return addOuter;
            }
            fun apply(f) { return f(5); }
            apply(make());"#),
            Ok(Value::Int(15))
        );
    }

    #[test]
    fn test_closure_state() {
        assert_eq!(
            run(r#"
            fun counter() {
                let count = 0;
                fun next() {
                    count = count + 1;
                    return count;
                }
                return next;
            }
            let a = counter();
            let b = counter();
            a(); a();
            b();
            a() * 10 + b();"#),
            Ok(Value::Int(32))
        );
    }

    #[test]
    fn test_recursion() {
        assert_eq!(
            run(r#"
            fun fib(n) {
                if n < 2 { return n; }
                return fib(n - 1) + fib(n - 2);
            }
            fib(15);"#),
            Ok(Value::Int(610))
        );
    }

    #[test]
    fn test_arity_mismatch() {
        assert_eq!(
            run("fun addOuter(a) { return a; } addOuter(1, 2);"),
            Err(RuntimeError::ArityMismatch {
                callee: "addOuter".to_string(),
                expected: 1,
                found: 2,
            })
        );
    }

    #[test]
    fn test_scopes() {
        // shadowing an outer binding in a block is allowed
        assert_eq!(
            run("let x = 1; { let x = 2; } x;"),
            Ok(Value::Int(1))
        );
        // block bindings are not visible outside
        assert_eq!(
            run("{ let y = 2; } y;"),
            Err(RuntimeError::UnknownIdentifier("y".to_string()))
        );
        // parameters live in the call frame
        assert_eq!(
            run("let a = 1; fun f(a) { return a; } f(2) + a;"),
            Ok(Value::Int(3))
        );
        assert_eq!(
            run("fun f(a) { let a = 2; } f(1);"),
            Err(RuntimeError::DuplicateIdentifier("a".to_string()))
        );
        assert_eq!(
            run("fun f() {} fun f() {}"),
            Err(RuntimeError::DuplicateIdentifier("f".to_string()))
        );
    }

    #[test]
    fn test_let_checks_before_initializer() {
        // the initializer would fail, but the duplicate is reported first
        assert_eq!(
            run("let x = 1; let x = missing;"),
            Err(RuntimeError::DuplicateIdentifier("x".to_string()))
        );
    }

    #[test]
    fn test_if() {
        assert_eq!(run("if 1 < 2 { 1; } else { 2; }"), Ok(Value::Int(1)));
        assert_eq!(run("if 1 > 2 { 1; } else { 2; }"), Ok(Value::Int(2)));
        assert_eq!(run("if false { 1; }"), Ok(Value::Void));
        assert_eq!(
            run("let x = 3; if x == 1 { 1; } else if x == 3 { 3; } else { 0; }"),
            Ok(Value::Int(3))
        );
        assert_eq!(
            run("if 1 { 1; }"),
            Err(RuntimeError::TypeMismatch {
                operator: "if",
                found: "Int".to_string(),
            })
        );
    }
}

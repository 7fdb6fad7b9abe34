use bogus_parser::ast::{Expr, Literal};
use bogus_stack::ensure_sufficient_stack;
use bogus_value::{RuntimeError, Scope, Value};

use crate::{ops, Interpreter};

impl Interpreter {
    /// Evaluates an expression in `scope`.
    pub fn evaluate_expr(&mut self, expr: &Expr, scope: &Scope) -> Result<Value, RuntimeError> {
        ensure_sufficient_stack(|| match expr {
            Expr::Literal(literal) => Ok(match literal {
                Literal::Int(val) => Value::Int(*val),
                Literal::Str(val) => Value::from(val.as_str()),
                Literal::Bool(val) => Value::Bool(*val),
            }),
            Expr::Identifier(ident) => scope.lookup(ident),
            Expr::Unary { op, arg } => {
                let arg = self.evaluate_expr(arg, scope)?;
                ops::unary(*op, arg)
            }
            Expr::Binary { lhs, op, rhs } => {
                let lhs = self.evaluate_expr(lhs, scope)?;
                let rhs = self.evaluate_expr(rhs, scope)?;
                ops::binary(*op, lhs, rhs)
            }
            Expr::Grouping(inner) => self.evaluate_expr(inner, scope),
            Expr::Call { callee, args } => {
                let callee = self.evaluate_expr(callee, scope)?;
                let mut arg_values = Vec::with_capacity(args.len());
                for arg in args {
                    arg_values.push(self.evaluate_expr(arg, scope)?);
                }
                self.call_value(callee, arg_values)
            }
            Expr::Assign { ident, value } => {
                let value = self.evaluate_expr(value, scope)?;
                scope.assign(ident, value.clone())?;
                Ok(value)
            }
        })
    }

    /// Calls `callee` with already evaluated `args`.
    pub fn call_value(&mut self, callee: Value, args: Vec<Value>) -> Result<Value, RuntimeError> {
        match callee {
            Value::Function(function) => self.call_function(&function, args),
            Value::Builtin(native_fn) => {
                if args.len() != native_fn.arity {
                    return Err(RuntimeError::ArityMismatch {
                        callee: native_fn.ident.clone(),
                        expected: native_fn.arity,
                        found: args.len(),
                    });
                }
                tracing::debug!(ident = %native_fn.ident, "native call");
                native_fn.call(&args)
            }
            other => Err(RuntimeError::NotCallable {
                found: other.type_name(),
            }),
        }
    }
}

use std::fmt;
use std::rc::Rc;

use bogus_parser::ast::Stmt;

use crate::{RuntimeError, Scope, Value};

/// A user defined function together with the frame it was declared in.
pub struct Function {
    pub ident: String,
    pub params: Vec<String>,
    pub body: Rc<Vec<Stmt>>,
    /// The captured frame. Keeps the declaring frame (and its parents) alive for as long as the
    /// function value is reachable.
    pub env: Scope,
}

impl Function {
    pub fn new(ident: String, params: Vec<String>, body: Rc<Vec<Stmt>>, env: Scope) -> Self {
        Self {
            ident,
            params,
            body,
            env,
        }
    }

    /// Number of arguments that the function accepts.
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // env is omitted, it usually contains this function.
        f.debug_struct("Function")
            .field("ident", &self.ident)
            .field("params", &self.params)
            .finish()
    }
}

/// `Drop` is implemented for `Function` merely to ease lifetime debugging.
impl Drop for Function {
    fn drop(&mut self) {
        tracing::trace!(ident = %self.ident, "collecting function object");
    }
}

pub type NativeFnPtr = &'static dyn Fn(&[Value]) -> Result<Value, RuntimeError>;

/// A function implemented by the host.
#[derive(Clone)]
pub struct NativeFn {
    pub ident: String,
    /// Number of arguments that the function accepts.
    pub arity: usize,
    pub func: NativeFnPtr,
}

impl NativeFn {
    pub fn new(ident: impl Into<String>, arity: usize, func: NativeFnPtr) -> Self {
        Self {
            ident: ident.into(),
            arity,
            func,
        }
    }

    pub fn call(&self, args: &[Value]) -> Result<Value, RuntimeError> {
        (self.func)(args)
    }
}

impl fmt::Debug for NativeFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<native fn {}>", self.ident)
    }
}

pub mod error;
pub mod object;
pub mod scope;

pub use error::RuntimeError;
pub use object::{Function, NativeFn};
pub use scope::Scope;

use std::fmt;
use std::rc::Rc;

#[derive(Clone)]
pub enum Value {
    Int(i64),
    Str(Rc<str>),
    Bool(bool),
    /// The result of statements that produce no usable value.
    Void,
    /// A closure.
    Function(Rc<Function>),
    /// A function provided by the host.
    Builtin(Rc<NativeFn>),
}

impl Value {
    /// Name of the value's kind, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "Int",
            Value::Str(_) => "Str",
            Value::Bool(_) => "Bool",
            Value::Void => "Void",
            Value::Function(_) | Value::Builtin(_) => "Function",
        }
    }

    /// Attempts to cast the `Value` into a `bool` or `None` if wrong type.
    pub fn cast_to_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(val) => Some(*val),
            _ => None,
        }
    }

    pub fn is_void(&self) -> bool {
        matches!(self, Value::Void)
    }
}

impl From<i64> for Value {
    fn from(val: i64) -> Self {
        Value::Int(val)
    }
}

impl From<bool> for Value {
    fn from(val: bool) -> Self {
        Value::Bool(val)
    }
}

impl From<&str> for Value {
    fn from(val: &str) -> Self {
        Value::Str(val.into())
    }
}

impl From<String> for Value {
    fn from(val: String) -> Self {
        Value::Str(val.into())
    }
}

/// Functions are equal only to themselves.
impl PartialEq for Value {
    fn eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Int(l), Value::Int(r)) => l == r,
            (Value::Str(l), Value::Str(r)) => l == r,
            (Value::Bool(l), Value::Bool(r)) => l == r,
            (Value::Void, Value::Void) => true,
            (Value::Function(l), Value::Function(r)) => Rc::ptr_eq(l, r),
            (Value::Builtin(l), Value::Builtin(r)) => Rc::ptr_eq(l, r),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(val) => write!(f, "{}", val),
            Value::Str(val) => write!(f, "{}", val),
            Value::Bool(val) => write!(f, "{}", val),
            Value::Void => write!(f, "void"),
            Value::Function(func) => write!(f, "<fn {}>", func.ident),
            Value::Builtin(func) => write!(f, "<native fn {}>", func.ident),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(val) => write!(f, "Int({})", val),
            Value::Str(val) => write!(f, "Str({:?})", val),
            Value::Bool(val) => write!(f, "Bool({})", val),
            Value::Void | Value::Function(_) | Value::Builtin(_) => fmt::Display::fmt(self, f),
        }
    }
}

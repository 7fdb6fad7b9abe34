//! Operator semantics.

use bogus_parser::lexer::TokenKind;
use bogus_value::{RuntimeError, Value};

fn mismatch(op: TokenKind, found: String) -> RuntimeError {
    RuntimeError::TypeMismatch {
        operator: op.describe(),
        found,
    }
}

fn binary_mismatch(op: TokenKind, lhs: &Value, rhs: &Value) -> RuntimeError {
    mismatch(op, format!("{} and {}", lhs.type_name(), rhs.type_name()))
}

/// Applies a prefix operator.
pub fn unary(op: TokenKind, arg: Value) -> Result<Value, RuntimeError> {
    match (op, arg) {
        (TokenKind::Minus, Value::Int(val)) => val
            .checked_neg()
            .map(Value::Int)
            .ok_or(RuntimeError::IntegerOverflow {
                operator: op.describe(),
            }),
        (TokenKind::Bang, Value::Bool(val)) => Ok(Value::Bool(!val)),
        (op, arg) => Err(mismatch(op, arg.type_name().to_string())),
    }
}

/// Applies a binary operator.
pub fn binary(op: TokenKind, lhs: Value, rhs: Value) -> Result<Value, RuntimeError> {
    /// Generate checked arithmetic on two `Value::Int`s.
    macro_rules! checked_int_op {
        ($method: ident) => {
            match (&lhs, &rhs) {
                (Value::Int(a), Value::Int(b)) => a
                    .$method(*b)
                    .map(Value::Int)
                    .ok_or(RuntimeError::IntegerOverflow {
                        operator: op.describe(),
                    }),
                _ => Err(binary_mismatch(op, &lhs, &rhs)),
            }
        };
    }

    /// Generate comparison of two `Value::Int`s.
    macro_rules! int_comparison {
        ($op: tt) => {
            match (&lhs, &rhs) {
                (Value::Int(a), Value::Int(b)) => Ok(Value::Bool(a $op b)),
                _ => Err(binary_mismatch(op, &lhs, &rhs)),
            }
        };
    }

    match op {
        TokenKind::Plus => match (&lhs, &rhs) {
            (Value::Int(_), Value::Int(_)) => checked_int_op!(checked_add),
            // handle string concatenation
            (Value::Str(_), Value::Str(_) | Value::Int(_))
            | (Value::Int(_), Value::Str(_)) => Ok(Value::from(format!("{}{}", lhs, rhs))),
            _ => Err(binary_mismatch(op, &lhs, &rhs)),
        },
        TokenKind::Minus => checked_int_op!(checked_sub),
        TokenKind::Asterisk => checked_int_op!(checked_mul),
        TokenKind::Slash => match (&lhs, &rhs) {
            (Value::Int(_), Value::Int(0)) => Err(RuntimeError::DivisionByZero),
            _ => checked_int_op!(checked_div),
        },
        TokenKind::LessThan => int_comparison!(<),
        TokenKind::LessThanEquals => int_comparison!(<=),
        TokenKind::GreaterThan => int_comparison!(>),
        TokenKind::GreaterThanEquals => int_comparison!(>=),
        TokenKind::EqualsEquals | TokenKind::NotEquals => {
            if lhs.type_name() != rhs.type_name() {
                return Err(binary_mismatch(op, &lhs, &rhs));
            }
            let equal = lhs == rhs;
            Ok(Value::Bool(if op == TokenKind::EqualsEquals {
                equal
            } else {
                !equal
            }))
        }
        _ => Err(binary_mismatch(op, &lhs, &rhs)),
    }
}

use bogus_value::{NativeFn, RuntimeError, Scope, Value};

/// Returns the default builtin functions that should be used.
pub fn default_builtins() -> Vec<NativeFn> {
    vec![
        NativeFn::new("print", 1, &print),
        NativeFn::new("println", 1, &println),
        NativeFn::new("assert_eq", 2, &assert_eq),
        NativeFn::new("assert", 1, &assert),
    ]
}

/// Creates a top level scope for user code.
/// The builtins are bound in the parent frame so that user code can shadow them.
pub fn default_scope() -> Scope {
    let prelude = Scope::new();
    for native_fn in default_builtins() {
        prelude
            .define_native_fn(native_fn)
            .expect("builtin functions have unique names");
    }
    prelude.child()
}

pub fn print(args: &[Value]) -> Result<Value, RuntimeError> {
    let arg = &args[0];
    print!("{}", arg);

    Ok(Value::Void)
}

pub fn println(args: &[Value]) -> Result<Value, RuntimeError> {
    let arg = &args[0];
    println!("{}", arg);

    Ok(Value::Void)
}

pub fn assert(args: &[Value]) -> Result<Value, RuntimeError> {
    let arg = &args[0];

    match arg.cast_to_bool() {
        Some(true) => Ok(Value::Void),
        Some(false) => Err(RuntimeError::AssertionFailed(
            "assertion evaluated to false".to_string(),
        )),
        None => Err(RuntimeError::TypeMismatch {
            operator: "assert",
            found: arg.type_name().to_string(),
        }),
    }
}

pub fn assert_eq(args: &[Value]) -> Result<Value, RuntimeError> {
    let left = &args[0];
    let right = &args[1];

    if left == right {
        Ok(Value::Void)
    } else {
        Err(RuntimeError::AssertionFailed(format!(
            "left: {:?}, right: {:?}",
            left, right
        )))
    }
}

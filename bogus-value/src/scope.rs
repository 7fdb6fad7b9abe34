//! Chained binding environments.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::{NativeFn, RuntimeError, Value};

struct Frame {
    bindings: RefCell<HashMap<String, Value>>,
    parent: Option<Scope>,
}

/// A shared handle to a scope frame.
///
/// Cloning a `Scope` shares the frame. A frame references its parent but never owns it
/// exclusively: every child frame and every closure holding a handle keeps the whole parent chain
/// alive.
#[derive(Clone)]
pub struct Scope(Rc<Frame>);

impl Scope {
    /// Creates a top level frame without a parent.
    pub fn new() -> Self {
        Self(Rc::new(Frame {
            bindings: RefCell::new(HashMap::new()),
            parent: None,
        }))
    }

    /// Creates a new frame whose parent is `self`.
    pub fn child(&self) -> Self {
        Self(Rc::new(Frame {
            bindings: RefCell::new(HashMap::new()),
            parent: Some(self.clone()),
        }))
    }

    pub fn parent(&self) -> Option<&Scope> {
        self.0.parent.as_ref()
    }

    /// Returns `true` if `ident` is bound in this frame, ignoring parents.
    pub fn is_defined_locally(&self, ident: &str) -> bool {
        self.0.bindings.borrow().contains_key(ident)
    }

    /// Binds `ident` in this frame.
    /// Fails if `ident` is already bound in this frame. Bindings of parent frames are shadowed.
    pub fn define(&self, ident: impl Into<String>, value: Value) -> Result<(), RuntimeError> {
        let ident = ident.into();
        let mut bindings = self.0.bindings.borrow_mut();
        if bindings.contains_key(&ident) {
            return Err(RuntimeError::DuplicateIdentifier(ident));
        }
        tracing::trace!(ident = %ident, value = %value, "define");
        bindings.insert(ident, value);
        Ok(())
    }

    /// Resolves `ident` searching this frame and then each parent in order.
    pub fn lookup(&self, ident: &str) -> Result<Value, RuntimeError> {
        let mut frame = Some(self);
        while let Some(scope) = frame {
            if let Some(value) = scope.0.bindings.borrow().get(ident) {
                return Ok(value.clone());
            }
            frame = scope.parent();
        }
        Err(RuntimeError::UnknownIdentifier(ident.to_string()))
    }

    /// Overwrites the binding of `ident` in the nearest frame that binds it.
    pub fn assign(&self, ident: &str, value: Value) -> Result<(), RuntimeError> {
        let mut frame = Some(self);
        while let Some(scope) = frame {
            if let Some(slot) = scope.0.bindings.borrow_mut().get_mut(ident) {
                tracing::trace!(ident = %ident, value = %value, "assign");
                *slot = value;
                return Ok(());
            }
            frame = scope.parent();
        }
        Err(RuntimeError::UnknownIdentifier(ident.to_string()))
    }

    /// Binds a host function in this frame.
    pub fn define_native_fn(
        &self,
        native_fn: NativeFn,
    ) -> Result<(), RuntimeError> {
        let ident = native_fn.ident.clone();
        self.define(ident, Value::Builtin(Rc::new(native_fn)))
    }

    /// Returns `true` if both handles point to the same frame.
    pub fn ptr_eq(&self, other: &Scope) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Number of frames between this frame and the top level frame.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut frame = self.parent();
        while let Some(scope) = frame {
            depth += 1;
            frame = scope.parent();
        }
        depth
    }
}

impl Default for Scope {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bindings = self.0.bindings.borrow();
        let mut idents: Vec<&String> = bindings.keys().collect();
        idents.sort();
        f.debug_struct("Scope")
            .field("depth", &self.depth())
            .field("bindings", &idents)
            .finish()
    }
}

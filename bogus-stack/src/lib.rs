//! Stack growth for the recursive parser and evaluator.
//!
//! Deeply nested programs recurse once per nesting level (or per call). Wrapping those
//! recursive entry points in [`ensure_sufficient_stack`] keeps them from overflowing the host
//! stack, whatever its size, so the limits enforced by the parser and the evaluator are the
//! ones that are reported.

/// Minimum stack space to keep available (100KB red zone).
const RED_ZONE: usize = 100 * 1024;

/// Stack space to allocate when growing (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Runs `f`, first moving to a freshly allocated stack segment if less than the red zone
/// remains on the current one.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

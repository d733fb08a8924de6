//! Stack safety for deep recursion.
//!
//! Both the parser and the evaluator recurse once per syntax node, and an
//! evaluated program's own call stack is the interpreter's Rust call stack.
//! Wrapping each recursive step in [`ensure_sufficient_stack`] grows the
//! stack on demand instead of overflowing it.
//!
//! - **Native targets**: `stacker::maybe_grow`.
//! - **WASM targets**: no-op passthrough.
//!
//! Growth is not a recursion limit: runaway recursion in evaluated code is
//! cut off by the evaluator's call-depth limit, not here.

/// Minimum stack space to keep available (128KB red zone).
const RED_ZONE: usize = 128 * 1024;

/// Stack space to allocate when growing (2MB).
const STACK_PER_RECURSION: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM manages its own stack; call through directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests;

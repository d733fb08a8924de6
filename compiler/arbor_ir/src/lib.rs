//! Arbor IR - syntax tree and source location types.
//!
//! This crate contains the data shared between the front-end and the
//! evaluator:
//! - Spans for source locations
//! - Names for interned identifiers
//! - Tokens for lexer output
//! - The syntax tree (`Node`, `NodeKind`)
//!
//! Node kinds are named after the Babel/ESTree kinds they model, so
//! diagnostics can report e.g. `IfStatement` verbatim.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

pub mod ast;
mod interner;
mod name;
mod span;
mod token;

pub use ast::{BinaryOp, DeclarationKind, FunctionDecl, Ident, Node, NodeKind};
pub use interner::{SharedInterner, StringInterner};
pub use name::Name;
pub use span::{Span, SpanError};
pub use token::{Token, TokenKind, TokenList};

//! Read-only traversal over chains of extensible records.
//!
//! Extensible structs link to each other through a type-erased successor
//! pointer: a record optionally points at the next extension record, but the
//! pointer carries no type information at the chain head. [`ChainRange`]
//! wraps such a chain and walks it lazily through the
//! [`Chained`](chain::traits::Chained) customization point, so the usual
//! iterator machinery (counting,
//! searching, filtering, mapping) applies without hand-written pointer
//! loops. See the [`chain`] module for a worked example.
#![no_std]

#[cfg(test)]
extern crate std;

pub mod chain;

#[doc(inline)]
pub use chain::cursor::ChainCursor;
#[doc(inline)]
pub use chain::range::ChainRange;
#[doc(inline)]
pub use chain::traits::Chained;

pub use ext_chain_derive::Chained;

//! # Extension chain traversal
//!
//! This module provides a read-only view over a singly-linked chain of
//! records connected through a type-erased successor pointer.
//!
//! ## Core Components
//!
//! - [`traits::Chained`]: the customization point mapping a record to its
//!   type-erased successor pointer.
//! - [`range::ChainRange`]: the value type wrapping a chain's head and
//!   exposing cursor-producing and summary operations.
//! - [`cursor::ChainCursor`]: the forward-only cursor used to walk a range
//!   one record at a time; the null position is the shared end sentinel.
//!
//! The default [`Chained`](traits::Chained) implementation comes from
//! `#[derive(Chained)]`, which reads a successor field named `next`; a
//! `#[chained(field = "...")]` attribute or a hand-written impl covers
//! record types that keep their successor elsewhere.
//!
//! ## Safety
//!
//! The chain itself is externally owned, so the user of this module is
//! responsible for upholding several invariants:
//!
//! - Every record reachable from the head must stay valid (not freed, not
//!   relocated) for the lifetime of any range or cursor referencing it.
//! - Following successor pointers must reach null after finitely many
//!   steps; a cyclic chain makes full traversals non-terminating.
//! - The chain must not be mutated while it is being traversed.
//! - A head pointer passed in type-erased form must actually address a
//!   record of the range's record type.
//!
//! # Examples
//!
//! ```
//! use core::ffi::c_void;
//! use core::ptr;
//!
//! use ext_chain::{ChainRange, Chained};
//!
//! #[derive(Chained)]
//! #[repr(C)]
//! struct Extension {
//!     kind: u32,
//!     next: *const c_void,
//!     payload: u64,
//! }
//!
//! let tail = Extension { kind: 2, next: ptr::null(), payload: 30 };
//! let mid = Extension {
//!     kind: 1,
//!     next: &tail as *const Extension as *const c_void,
//!     payload: 20,
//! };
//! let head = Extension {
//!     kind: 0,
//!     next: &mid as *const Extension as *const c_void,
//!     payload: 10,
//! };
//!
//! // The records outlive the range and are never mutated while it is alive.
//! let chain = unsafe { ChainRange::from_head(&head as *const Extension) };
//!
//! assert_eq!(chain.len(), 3);
//! let payloads: Vec<u64> = chain.iter().map(|ext| ext.payload).collect();
//! assert_eq!(payloads, vec![10, 20, 30]);
//! ```
pub mod cursor;
pub mod range;
pub mod traits;

#[cfg(test)]
mod tests;

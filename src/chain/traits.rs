use core::ffi::c_void;

/// A record type whose values can be linked into an extension chain.
///
/// The successor pointer is type-erased: a record stores the address of the
/// next record as an untyped pointer, not as a pointer to the successor's
/// concrete type. [`next_ptr`](Chained::next_ptr) is the single point where
/// that pointer is read; reinterpreting it as the record type happens once,
/// during cursor advancement.
///
/// Implementations are selected per record type at compile time. The usual
/// way to get one is `#[derive(Chained)]`, which reads a field named `next`
/// (or the field named by `#[chained(field = "...")]`).
///
/// # Safety
///
/// This is unsafe to implement because the traversal machinery trusts the
/// returned pointer without further checks. An implementation must ensure
/// that:
///
/// - `next_ptr` only reads from `self`; it must not mutate the record or
///   anything reachable from it.
/// - Every non-null pointer it returns addresses a record that is valid for
///   reads as `Self` for as long as `self` itself is valid.
/// - Repeatedly following successors from any record reaches null after
///   finitely many steps.
pub unsafe trait Chained {
    /// Returns the type-erased pointer to this record's successor, or null
    /// when this record ends the chain.
    fn next_ptr(&self) -> *const c_void;
}

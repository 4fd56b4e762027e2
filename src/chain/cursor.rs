use core::fmt;
use core::iter::FusedIterator;
use core::marker::PhantomData;
use core::ptr::{self, NonNull};

use super::traits::Chained;

/// A forward-only cursor over an extension chain.
///
/// A cursor marks one position: either a reachable record or the null end
/// sentinel. Cursors are cheap value types; copies advance independently
/// and share no state. Equality compares the position by record identity,
/// never by record contents, and the end sentinel compares equal to every
/// other end sentinel. Cursors carry no ordering: `<` and friends are
/// deliberately not implemented, since a singly-linked chain has no
/// position order cheaper than walking it.
///
/// The cursor doubles as the range's iterator: [`Iterator::next`] returns
/// the record under the cursor and then advances, while
/// [`advance`](ChainCursor::advance) moves in place.
pub struct ChainCursor<'chain, T: Chained> {
    current: Option<NonNull<T>>,
    _records: PhantomData<&'chain T>,
}

impl<'chain, T: Chained> ChainCursor<'chain, T> {
    #[inline]
    pub(crate) fn new(current: Option<NonNull<T>>) -> Self {
        Self {
            current,
            _records: PhantomData,
        }
    }

    /// Returns the record under the cursor, or `None` at the end sentinel.
    #[inline]
    pub fn get(&self) -> Option<&'chain T> {
        self.current.map(|current| unsafe { &*current.as_ptr() })
    }

    /// Returns the raw pointer under the cursor; null at the end sentinel.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.current
            .map_or(ptr::null(), |current| current.as_ptr().cast_const())
    }

    /// Returns `true` once the cursor has moved past the last record.
    #[inline]
    pub fn is_end(&self) -> bool {
        self.current.is_none()
    }

    /// Moves the cursor to the current record's successor.
    ///
    /// One successor extraction per call. Advancing past the last record
    /// parks the cursor on the end sentinel; advancing the end sentinel is
    /// a no-op.
    #[inline]
    pub fn advance(&mut self) {
        if let Some(current) = self.current {
            // The one place where a type-erased successor is reinterpreted
            // as `T`; the `Chained` impl vouches for the cast.
            let next = unsafe { current.as_ref() }.next_ptr();
            self.current = NonNull::new(next.cast_mut()).map(|next| next.cast());
        }
    }
}

impl<'chain, T: Chained> Iterator for ChainCursor<'chain, T> {
    type Item = &'chain T;

    fn next(&mut self) -> Option<Self::Item> {
        self.current
            .inspect(|_| self.advance())
            .map(|record| unsafe { &*record.as_ptr() })
    }
}

impl<T: Chained> FusedIterator for ChainCursor<'_, T> {}

impl<T: Chained> PartialEq for ChainCursor<'_, T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.current == other.current
    }
}

impl<T: Chained> Eq for ChainCursor<'_, T> {}

impl<T: Chained> Clone for ChainCursor<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Chained> Copy for ChainCursor<'_, T> {}

impl<T: Chained> fmt::Debug for ChainCursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChainCursor")
            .field("current", &self.current)
            .finish()
    }
}

unsafe impl<T: Chained + Sync> Send for ChainCursor<'_, T> {}
unsafe impl<T: Chained + Sync> Sync for ChainCursor<'_, T> {}

use core::ffi::c_void;
use core::fmt;
use core::marker::PhantomData;
use core::ptr::{self, NonNull};

use super::cursor::ChainCursor;
use super::traits::Chained;

/// A read-only view over a chain of records linked through type-erased
/// successor pointers.
///
/// A range is a cheap, copyable value: it holds the head pointer and a
/// borrow of the externally-owned records, nothing else. It never mutates,
/// allocates, or frees; any number of ranges and cursors may walk the same
/// chain at the same time.
pub struct ChainRange<'chain, T: Chained> {
    head: Option<NonNull<T>>,
    _records: PhantomData<&'chain T>,
}

impl<'chain, T: Chained> ChainRange<'chain, T> {
    /// Creates a range over the empty chain.
    pub const fn empty() -> Self {
        Self {
            head: None,
            _records: PhantomData,
        }
    }

    /// Creates a range starting at `head`.
    ///
    /// `head` may be null; construction never dereferences it, and a null
    /// head is the empty chain.
    ///
    /// # Safety
    ///
    /// If `head` is non-null it must point to a record that, together with
    /// every record reachable from it through [`Chained::next_ptr`], stays
    /// valid and unmodified for `'chain`.
    pub unsafe fn from_head(head: *const T) -> Self {
        Self {
            head: NonNull::new(head.cast_mut()),
            _records: PhantomData,
        }
    }

    /// Creates a range from a type-erased head pointer.
    ///
    /// # Safety
    ///
    /// Same contract as [`from_head`](Self::from_head). Additionally `head`
    /// must actually address a record of type `T`; the reinterpretation is
    /// not checked.
    pub unsafe fn from_erased(head: *const c_void) -> Self {
        unsafe { Self::from_head(head.cast()) }
    }

    /// Returns `true` if the chain has no records.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Counts the records reachable from the head.
    ///
    /// Walks the whole chain on every call: O(n) in chain length, with no
    /// caching between calls.
    pub fn len(&self) -> usize {
        self.cursor_front().count()
    }

    /// Returns the first record, or `None` for the empty chain.
    #[inline]
    pub fn front(&self) -> Option<&'chain T> {
        self.head.map(|head| unsafe { &*head.as_ptr() })
    }

    /// Returns the raw head pointer; null for the empty chain.
    #[inline]
    pub fn head_ptr(&self) -> *const T {
        self.head
            .map_or(ptr::null(), |head| head.as_ptr().cast_const())
    }

    /// Returns a cursor positioned at the first record.
    ///
    /// For the empty chain this is already the end sentinel.
    #[inline]
    pub fn cursor_front(&self) -> ChainCursor<'chain, T> {
        ChainCursor::new(self.head)
    }

    /// Returns the end sentinel cursor, one position past the last record.
    #[inline]
    pub fn cursor_end(&self) -> ChainCursor<'chain, T> {
        ChainCursor::new(None)
    }

    /// Iterates over the records in link order.
    #[inline]
    pub fn iter(&self) -> ChainCursor<'chain, T> {
        self.cursor_front()
    }
}

impl<T: Chained> Clone for ChainRange<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Chained> Copy for ChainRange<'_, T> {}

impl<T: Chained> Default for ChainRange<'_, T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Chained> fmt::Debug for ChainRange<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChainRange").field("head", &self.head).finish()
    }
}

impl<'chain, T: Chained> IntoIterator for ChainRange<'chain, T> {
    type Item = &'chain T;
    type IntoIter = ChainCursor<'chain, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.cursor_front()
    }
}

impl<'chain, T: Chained> IntoIterator for &ChainRange<'chain, T> {
    type Item = &'chain T;
    type IntoIter = ChainCursor<'chain, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.cursor_front()
    }
}

unsafe impl<T: Chained + Sync> Send for ChainRange<'_, T> {}
unsafe impl<T: Chained + Sync> Sync for ChainRange<'_, T> {}

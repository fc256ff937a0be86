//! The growable sequence contract under test
//!
//! [`Sequence`] names the operations the suite checks, in the vocabulary of a
//! generic dynamic array. It adds no behavior of its own: each implementation
//! forwards to the standard container and only turns its panicking or
//! infallible edges into [`SequenceError`] values.
//!
//! Method names avoid the inherent methods of `Vec` whose semantics differ
//! (`Vec::reserve` takes an additional count, `Vec::append` moves another
//! vector), so concrete call sites never resolve to the wrong one.

use std::collections::VecDeque;
use std::ops::{Bound, Range, RangeBounds};

use crate::error::SequenceError;
use crate::limits::{max_len_for, validate_len};

/// Operations of an ordered, index-addressable, resizable container
pub trait Sequence {
    /// Element type
    type Item;

    /// Construct an empty container
    fn new_empty() -> Self
    where
        Self: Sized;

    /// Number of elements logically present
    fn len(&self) -> usize;

    /// True when `len() == 0`
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Elements storable without reallocation; always `>= len()`
    fn capacity(&self) -> usize;

    /// Theoretical upper bound on `len()`
    fn max_size(&self) -> usize;

    /// Append one element at the back
    fn push_back(&mut self, item: Self::Item);

    /// Last element, if any
    fn last(&self) -> Option<&Self::Item>;

    /// Set the length to `len`, filling new slots with `Item::default()`
    fn resize_default(&mut self, len: usize);

    /// Remove every element; capacity is left to the container
    fn clear(&mut self);

    /// Remove the elements in `range`, returning how many were removed
    ///
    /// # Errors
    ///
    /// `SequenceError::InvalidRange` if the range is inverted or leaves `[0, len]`.
    fn erase<R: RangeBounds<usize>>(&mut self, range: R) -> Result<usize, SequenceError>;

    /// Ensure `capacity() >= total` without changing `len()`
    ///
    /// # Errors
    ///
    /// `SequenceError::LengthExceeded` if `total > max_size()`,
    /// `SequenceError::AllocFailed` if the allocator refuses the request.
    fn reserve_total(&mut self, total: usize) -> Result<(), SequenceError>;

    /// Bounds-checked access
    ///
    /// # Errors
    ///
    /// `SequenceError::OutOfRange` if `index >= len()`.
    fn at(&self, index: usize) -> Result<&Self::Item, SequenceError>;
}

/// Resolve `range` against `len` into a concrete half-open range
fn resolve_range<R: RangeBounds<usize>>(range: R, len: usize) -> Result<Range<usize>, SequenceError> {
    let start = match range.start_bound() {
        Bound::Included(&s) => Some(s),
        Bound::Excluded(&s) => s.checked_add(1),
        Bound::Unbounded => Some(0),
    };
    let end = match range.end_bound() {
        Bound::Included(&e) => e.checked_add(1),
        Bound::Excluded(&e) => Some(e),
        Bound::Unbounded => Some(len),
    };
    match (start, end) {
        (Some(start), Some(end)) if start <= end && end <= len => Ok(start..end),
        (start, end) => Err(SequenceError::InvalidRange {
            start: start.unwrap_or(usize::MAX),
            end: end.unwrap_or(usize::MAX),
            len,
        }),
    }
}

impl<T: Clone + Default> Sequence for Vec<T> {
    type Item = T;

    fn new_empty() -> Self {
        Vec::new()
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn capacity(&self) -> usize {
        Vec::capacity(self)
    }

    fn max_size(&self) -> usize {
        max_len_for::<T>()
    }

    fn push_back(&mut self, item: T) {
        self.push(item);
    }

    fn last(&self) -> Option<&T> {
        <[T]>::last(self)
    }

    fn resize_default(&mut self, len: usize) {
        self.resize(len, T::default());
    }

    fn clear(&mut self) {
        Vec::clear(self);
    }

    fn erase<R: RangeBounds<usize>>(&mut self, range: R) -> Result<usize, SequenceError> {
        let range = resolve_range(range, Vec::len(self))?;
        let removed = range.len();
        self.drain(range);
        Ok(removed)
    }

    fn reserve_total(&mut self, total: usize) -> Result<(), SequenceError> {
        validate_len(total, max_len_for::<T>())?;
        if total <= Vec::capacity(self) {
            return Ok(());
        }
        self.try_reserve(total - Vec::len(self))
            .map_err(|_| SequenceError::AllocFailed { requested: total })
    }

    fn at(&self, index: usize) -> Result<&T, SequenceError> {
        self.get(index).ok_or(SequenceError::OutOfRange {
            index,
            len: Vec::len(self),
        })
    }
}

impl<T: Clone + Default> Sequence for VecDeque<T> {
    type Item = T;

    fn new_empty() -> Self {
        VecDeque::new()
    }

    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn capacity(&self) -> usize {
        VecDeque::capacity(self)
    }

    fn max_size(&self) -> usize {
        max_len_for::<T>()
    }

    fn push_back(&mut self, item: T) {
        VecDeque::push_back(self, item);
    }

    fn last(&self) -> Option<&T> {
        self.back()
    }

    fn resize_default(&mut self, len: usize) {
        self.resize(len, T::default());
    }

    fn clear(&mut self) {
        VecDeque::clear(self);
    }

    fn erase<R: RangeBounds<usize>>(&mut self, range: R) -> Result<usize, SequenceError> {
        let range = resolve_range(range, VecDeque::len(self))?;
        let removed = range.len();
        self.drain(range);
        Ok(removed)
    }

    fn reserve_total(&mut self, total: usize) -> Result<(), SequenceError> {
        validate_len(total, max_len_for::<T>())?;
        if total <= VecDeque::capacity(self) {
            return Ok(());
        }
        self.try_reserve(total - VecDeque::len(self))
            .map_err(|_| SequenceError::AllocFailed { requested: total })
    }

    fn at(&self, index: usize) -> Result<&T, SequenceError> {
        self.get(index).ok_or(SequenceError::OutOfRange {
            index,
            len: VecDeque::len(self),
        })
    }
}

//! Size limits for sequence containers
//!
//! The standard library caps every allocation at `isize::MAX` bytes, so the
//! largest element count a growable container can represent depends on the
//! element size. Zero-sized elements never allocate and are bounded only by
//! `usize::MAX`.

use crate::error::SequenceError;

/// Exclusive upper bound of generated filler values (`0..FILLER_MAX`)
pub const FILLER_MAX: i32 = 100;

/// Maximum representable element count for a container of `T`
pub const fn max_len_for<T>() -> usize {
    let size = std::mem::size_of::<T>();
    if size == 0 {
        usize::MAX
    } else {
        isize::MAX as usize / size
    }
}

/// Validate a requested length against a maximum
///
/// Returns `Ok(())` if `requested <= max`, or `Err(SequenceError::LengthExceeded)`
/// otherwise.
pub fn validate_len(requested: usize, max: usize) -> Result<(), SequenceError> {
    if requested > max {
        return Err(SequenceError::LengthExceeded { requested, max });
    }
    Ok(())
}

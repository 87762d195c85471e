//! Core traits and types.
//!
//! This module defines:
//! - [`CodeAccessor`]: the trait collections implement to expose their codes.
//! - SortPtr: internal pointer/cache structure used during sorting.

use std::collections::VecDeque;

/// Number of rank lanes cached in a sort pointer.
pub const CACHE_LANES: usize = 8;

/// Pointer to a code, carrying a packed prefix of its ranks.
///
/// `cache` holds up to [`CACHE_LANES`] leading ranks, one byte per character
/// in big-endian lane order, each stored as `rank + 1` so that 0 always means
/// "past the end of the code". `resume` is the byte offset of the first
/// character not covered by `cache`, so a refill can continue mid-code
/// without re-scanning multi-byte characters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct SortPtr {
    pub index: usize,
    pub cache: u64,
    pub resume: usize,
}

/// A trait for reading codes out of a collection without copying.
///
/// Implement this to sort custom storage (an arena, an offsets-plus-buffer
/// layout, a column of a record batch) without first materializing a
/// `Vec<String>`.
///
/// # Examples
///
/// ```
/// use ranksort::CodeAccessor;
///
/// struct Catalog {
///     codes: Vec<String>,
/// }
///
/// impl CodeAccessor for Catalog {
///     fn get_code(&self, index: usize) -> &str {
///         &self.codes[index]
///     }
///
///     fn len(&self) -> usize {
///         self.codes.len()
///     }
/// }
/// ```
pub trait CodeAccessor {
    /// Returns the code at the given index.
    fn get_code(&self, index: usize) -> &str;

    /// Returns the number of codes in the collection.
    fn len(&self) -> usize;

    /// Returns `true` if the collection is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// Blanket implementation for indexable slices of string-ref types.
impl<T: AsRef<str>> CodeAccessor for [T] {
    fn get_code(&self, index: usize) -> &str {
        self[index].as_ref()
    }

    fn len(&self) -> usize {
        self.len()
    }
}

// Explicit Vec impl to improve ergonomics (avoiding .as_slice()).
impl<T: AsRef<str>> CodeAccessor for Vec<T> {
    fn get_code(&self, index: usize) -> &str {
        self[index].as_ref()
    }

    fn len(&self) -> usize {
        self.len()
    }
}

// VecDeque has O(1) random access, so it is suitable here as well.
impl<T: AsRef<str>> CodeAccessor for VecDeque<T> {
    fn get_code(&self, index: usize) -> &str {
        self[index].as_ref()
    }

    fn len(&self) -> usize {
        self.len()
    }
}

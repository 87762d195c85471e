//! # Ranksort
//!
//! `ranksort` sorts short string codes ("product codes") under a character
//! order supplied at runtime instead of the standard lexicographic order.
//! The caller passes an **order alphabet** — a string whose characters, left
//! to right, define ascending rank — and a collection of codes; the crate
//! returns the codes arranged by that rank, with a shorter code sorting
//! before any longer code it is a prefix of.
//!
//! ## Key Features
//!
//! - **Runtime collation**: any permutation of any alphabet works, rebuilt
//!   per call with no global state.
//! - **Cache Locality**: the first 8 ranks of each code are packed into the
//!   sort pointer, so most comparisons resolve in CPU registers without
//!   touching the code text.
//! - **Adaptive Strategy**: large partitions are distributed with a counting
//!   sort over rank lanes before falling back to comparison sorting.
//! - **Zero-Copy abstractions**: the [`CodeAccessor`] trait sorts arbitrary
//!   storage (offset buffers, arenas, `Vec<String>`) without copying codes.
//! - **Checked input**: a character missing from the order alphabet has no
//!   defined rank; the sort rejects such input with [`UnrankedChar`] before
//!   moving anything, rather than guessing a fallback position.
//!
//! ## Usage
//!
//! ### Basic Usage
//!
//! For standard collections, use [`rank_sort`] (index-based) or
//! [`rank_sort_mut`] (in-place).
//!
//! ```rust
//! use ranksort::rank_sort_mut;
//!
//! // 'b' ranks before 'a', which ranks before 'c'.
//! let mut codes = vec!["cab", "bac", "abc"];
//! rank_sort_mut(&mut codes, "bac")?;
//!
//! assert_eq!(codes, vec!["bac", "abc", "cab"]);
//! # Ok::<(), ranksort::UnrankedChar>(())
//! ```
//!
//! ### Custom Storage
//!
//! To sort codes held in a custom data structure without materializing
//! intermediate strings, implement the [`CodeAccessor`] trait.
//!
//! ```rust
//! use ranksort::{rank_sort, CodeAccessor};
//!
//! struct Sku {
//!     code: String,
//! }
//!
//! // Wrapper struct to avoid orphan rule violation (impl foreign trait on foreign type).
//! struct Catalog(Vec<Sku>);
//!
//! impl CodeAccessor for Catalog {
//!     fn get_code(&self, index: usize) -> &str {
//!         &self.0[index].code
//!     }
//!
//!     fn len(&self) -> usize {
//!         self.0.len()
//!     }
//! }
//!
//! let catalog = Catalog(vec![
//!     Sku { code: "zz".to_string() },
//!     Sku { code: "az".to_string() },
//! ]);
//!
//! // Under reversed order, "zz" sorts first.
//! let indices = rank_sort(&catalog, "zyxwvutsrqponmlkjihgfedcba")?;
//! assert_eq!(indices, vec![0, 1]);
//! # Ok::<(), ranksort::UnrankedChar>(())
//! ```
//!
//! ## Ordering Rules
//!
//! Two codes compare position by position; at the first differing character
//! the one whose character has the smaller rank sorts first. If no position
//! differs within the shared length, the shorter code sorts first. Codes are
//! never modified, only rearranged, and ties between identical codes are
//! indistinguishable, so stability is irrelevant.
//!
//! ## Performance Characteristics
//!
//! - **Comparison cost**: most comparisons are a single `u64` compare of the
//!   packed rank prefixes; only codes agreeing on their first 8 ranks fall
//!   back to scanning text.
//! - **Memory Overhead**: a temporary vector of sort pointers (24 bytes per
//!   code) plus the returned index vector.
//! - Prefix packing turns itself off for alphabets with more than 255
//!   positions; sorting stays correct through the comparator alone.

pub mod algo;
pub mod core;
pub mod order;
pub use algo::{compare_codes, rank_sort, rank_sort_mut};
pub use core::CodeAccessor;
pub use order::{RankTable, UnrankedChar};

pub mod prelude {
    pub use crate::algo::{compare_codes, rank_sort, rank_sort_mut};
    pub use crate::core::CodeAccessor;
    pub use crate::order::{RankTable, UnrankedChar};
}

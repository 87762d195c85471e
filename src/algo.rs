//! Custom-order sorting (rank comparator and adaptive lane radix).
//!
//! This module implements the sort itself:
//! - A rank comparator that orders codes by the caller's alphabet, falling
//!   back to length when one code is a prefix of the other.
//! - A packed-prefix fast path: the first 8 ranks of each code ride along in
//!   the sort pointer, so most comparisons resolve in registers.
//! - An adaptive radix stage for large partitions, bucketing on rank lanes.
//!
//! The main entry points are [`rank_sort`] and [`rank_sort_mut`].

use crate::core::{CACHE_LANES, CodeAccessor, SortPtr};
use crate::order::{RankTable, UnrankedChar};
use cuneiform::cuneiform;
use std::cmp::Ordering;

const RADIX_SORT_THRESHOLD: usize = 1024;

/// Largest rank that still fits a cache lane as `rank + 1`.
/// Alphabets beyond this disable prefix packing; the comparator alone is
/// still correct, just slower.
const MAX_PACKED_RANK: u32 = 254;

/// Performs an index-based sort of `provider` under the order alphabet.
///
/// Does not modify the input collection. Returns a `Vec<usize>` of indices
/// such that reading the codes in that order yields them sorted by rank.
///
/// Every character of every code is checked against the alphabet before any
/// comparison happens; the first character without a rank aborts the sort
/// with [`UnrankedChar`].
///
/// # Arguments
///
/// * `provider` - The collection to be sorted.
/// * `order` - The order alphabet; its characters, left to right, define
///   ascending rank. A repeated character takes its last position.
///
/// # Examples
///
/// ```
/// use ranksort::rank_sort;
///
/// let codes = vec!["cab", "bac", "abc"];
/// let indices = rank_sort(&codes, "bac")?;
///
/// assert_eq!(indices, vec![1, 2, 0]); // bac, abc, cab
/// # Ok::<(), ranksort::UnrankedChar>(())
/// ```
pub fn rank_sort<T: CodeAccessor + ?Sized>(
    provider: &T,
    order: &str,
) -> Result<Vec<usize>, UnrankedChar> {
    let table = RankTable::new(order);
    let len = provider.len();
    if len == 0 {
        return Ok(vec![]);
    }

    let packed = table.max_rank().is_none_or(|rank| rank <= MAX_PACKED_RANK);

    // Validate every code and cache its leading ranks in one pass.
    let mut pointers = Vec::with_capacity(len);
    for index in 0..len {
        let ptr = build_ptr(&table, index, provider.get_code(index), packed)?;
        pointers.push(ptr);
    }

    sort_range(provider, &table, &mut pointers, 0, packed, true);

    Ok(pointers.into_iter().map(|p| p.index).collect())
}

/// Sorts a mutable slice of codes in place under the order alphabet.
///
/// This is the in-place companion of [`rank_sort`]: it computes the sorted
/// permutation and applies it by swapping, so the codes themselves are never
/// cloned or altered, only rearranged. On error the slice keeps its original
/// order.
///
/// # Examples
///
/// ```
/// use ranksort::rank_sort_mut;
///
/// let mut codes = vec!["cab", "bac", "abc"];
/// rank_sort_mut(&mut codes, "bac")?;
///
/// assert_eq!(codes, vec!["bac", "abc", "cab"]);
/// # Ok::<(), ranksort::UnrankedChar>(())
/// ```
///
/// A code using a character outside the alphabet is rejected up front:
///
/// ```
/// use ranksort::rank_sort_mut;
///
/// let mut codes = vec!["ab", "cd"];
/// let err = rank_sort_mut(&mut codes, "abc").unwrap_err();
///
/// assert_eq!(err.ch, 'd');
/// assert_eq!(codes, vec!["ab", "cd"]); // untouched
/// ```
pub fn rank_sort_mut<T: AsRef<str>>(data: &mut [T], order: &str) -> Result<(), UnrankedChar> {
    let indices = rank_sort(data, order)?;
    apply_permutation(data, indices);
    Ok(())
}

/// Compares two codes under `table`'s order.
///
/// Scans position by position; at the first differing character the smaller
/// rank wins. If one code is a prefix of the other, the shorter sorts first.
/// Both codes must already be validated against the table.
pub fn compare_codes(table: &RankTable, a: &str, b: &str) -> Ordering {
    for (ca, cb) in a.chars().zip(b.chars()) {
        if ca != cb {
            return table.rank_validated(ca).cmp(&table.rank_validated(cb));
        }
    }
    a.len().cmp(&b.len())
}

/// Validates `code` and builds its sort pointer.
///
/// Walks the code once: every character must have a rank, and when packing is
/// enabled the first [`CACHE_LANES`] ranks are packed into the cache word.
fn build_ptr(
    table: &RankTable,
    index: usize,
    code: &str,
    packed: bool,
) -> Result<SortPtr, UnrankedChar> {
    let mut cache = 0u64;
    let mut lanes = 0usize;
    let mut resume = 0usize;

    for ch in code.chars() {
        let rank = table.require(ch)?;
        if packed && lanes < CACHE_LANES {
            cache = (cache << 8) | (u64::from(rank) + 1);
            lanes += 1;
            resume += ch.len_utf8();
        }
    }

    if lanes > 0 {
        cache <<= 8 * (CACHE_LANES - lanes);
    }

    Ok(SortPtr {
        index,
        cache,
        resume,
    })
}

/// Reloads a cache word with the next up-to-8 ranks starting at byte `start`.
///
/// Returns the new cache and the byte offset just past the characters it
/// covers. Only called on already-validated codes.
fn refill_cache(table: &RankTable, code: &str, start: usize) -> (u64, usize) {
    let mut cache = 0u64;
    let mut lanes = 0usize;
    let mut end = start;

    for ch in code[start..].chars().take(CACHE_LANES) {
        cache = (cache << 8) | (u64::from(table.rank_validated(ch)) + 1);
        lanes += 1;
        end += ch.len_utf8();
    }

    if lanes > 0 {
        cache <<= 8 * (CACHE_LANES - lanes);
    }

    (cache, end)
}

/// Sorts a partition of pointers.
///
/// Large partitions go through the lane radix when prefix packing is on;
/// everything else uses `sort_unstable_by` with the rank comparator.
/// * `spent`: lanes already consumed from the current cache load.
/// * `allow_radix`: disabled for degenerate partitions that keep landing in a
///   single bucket.
fn sort_range<T: CodeAccessor + ?Sized>(
    provider: &T,
    table: &RankTable,
    ptrs: &mut [SortPtr],
    spent: usize,
    packed: bool,
    allow_radix: bool,
) {
    if packed && allow_radix && ptrs.len() > RADIX_SORT_THRESHOLD {
        lane_radix(provider, table, ptrs, spent);
        return;
    }

    ptrs.sort_unstable_by(|a, b| compare_entries(provider, table, a, b));
}

/// Number of radix buckets (one per possible cache lane value).
const RADIX_BUCKETS: usize = 256;

// Cache-aligned counts struct.
#[cuneiform]
struct LaneCounts {
    data: [usize; RADIX_BUCKETS],
}

/// One counting-sort step over the top cache lane.
///
/// 1. Counts lane frequencies.
/// 2. Computes prefix sums for bucket positions.
/// 3. Permutes pointers into bucket order through an aux buffer.
/// 4. Recurses per bucket with the caches advanced one lane.
///
/// Lane 0 means the code ended at this position; every pointer in that bucket
/// refers to an identical string, so bucket 0 never recurses.
fn lane_radix<T: CodeAccessor + ?Sized>(
    provider: &T,
    table: &RankTable,
    ptrs: &mut [SortPtr],
    spent: usize,
) {
    let mut counts = LaneCounts {
        data: [0; RADIX_BUCKETS],
    };
    let counts = &mut counts.data;

    // cache >> 56 is the most significant lane, i.e. the next undecided rank.
    for p in ptrs.iter() {
        counts[(p.cache >> 56) as usize] += 1;
    }

    let mut offsets = [0usize; RADIX_BUCKETS];
    let mut sum = 0;
    for (offset, &count) in offsets.iter_mut().zip(counts.iter()) {
        *offset = sum;
        sum += count;
    }

    let buffer = ptrs.to_vec();
    let mut cursors = offsets;
    for p in buffer.iter() {
        let lane = (p.cache >> 56) as usize;
        ptrs[cursors[lane]] = *p;
        cursors[lane] += 1;
    }

    let total = ptrs.len();
    let mut start = counts[0];
    for &count in counts.iter().skip(1) {
        let end = start + count;
        if end - start > 1 {
            let bucket = &mut ptrs[start..end];
            let next_spent = advance(provider, table, bucket, spent);

            // A bucket holding the whole partition means a long run of a
            // shared rank; hand it to the comparator rather than re-bucketing
            // lane by lane.
            let allow_radix = count < total;
            sort_range(provider, table, bucket, next_spent, true, allow_radix);
        }
        start = end;
    }
}

/// Advances a bucket's caches past the lane that was just consumed.
///
/// Shifts the cache word while loaded lanes remain; once all 8 are spent,
/// refills each cache from the code text at its resume offset. Returns the
/// new spent count.
fn advance<T: CodeAccessor + ?Sized>(
    provider: &T,
    table: &RankTable,
    ptrs: &mut [SortPtr],
    spent: usize,
) -> usize {
    let next = spent + 1;
    if next < CACHE_LANES {
        for p in ptrs.iter_mut() {
            p.cache <<= 8;
        }
        return next;
    }

    for p in ptrs.iter_mut() {
        let (cache, resume) = refill_cache(table, provider.get_code(p.index), p.resume);
        p.cache = cache;
        p.resume = resume;
    }
    0
}

/// Compares two sort pointers.
///
/// 1. **Fast path**: unequal cache words decide immediately; lane packing is
///    order-preserving, including the end-of-code padding rule.
/// 2. **Slow path**: equal caches mean the cached lanes cannot separate the
///    codes, so the full rank comparator runs on the underlying text.
#[inline(always)]
fn compare_entries<T: CodeAccessor + ?Sized>(
    provider: &T,
    table: &RankTable,
    a: &SortPtr,
    b: &SortPtr,
) -> Ordering {
    if a.cache != b.cache {
        return a.cache.cmp(&b.cache);
    }

    compare_codes(table, provider.get_code(a.index), provider.get_code(b.index))
}

fn apply_permutation<T>(data: &mut [T], mut indices: Vec<usize>) {
    for i in 0..data.len() {
        let mut current = i;
        while indices[current] != i {
            let next = indices[current];
            data.swap(current, next);
            indices[current] = current; // Mark as visited/placed
            current = next;
        }
        indices[current] = current;
    }
}

//! Order alphabets and rank lookup.
//!
//! A [`RankTable`] maps each character of an order alphabet to its zero-based
//! position. The table is the single source of truth for the sort order: a
//! character with a smaller rank sorts earlier, and a character missing from
//! the table is a usage error surfaced as [`UnrankedChar`].

use std::collections::HashMap;
use std::fmt;

/// Sentinel stored in the ASCII table for characters with no rank.
const UNRANKED: u32 = u32::MAX;

/// Error returned when a code contains a character that is absent from the
/// order alphabet.
///
/// The rank of such a character is undefined, so the sort rejects the whole
/// input up front rather than inventing a fallback position. The input
/// sequence is left untouched when this error is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnrankedChar {
    /// The first offending character encountered.
    pub ch: char,
}

impl fmt::Display for UnrankedChar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "character {:?} does not appear in the order alphabet",
            self.ch
        )
    }
}

impl std::error::Error for UnrankedChar {}

/// Mapping from character to its rank in an order alphabet.
///
/// Built once per sort invocation from the order string, scanning left to
/// right; if a character repeats, the later occurrence's position wins. ASCII
/// characters resolve through a dense table, everything else through a map.
///
/// # Examples
///
/// ```
/// use ranksort::RankTable;
///
/// let table = RankTable::new("bac");
/// assert_eq!(table.rank('b'), Some(0));
/// assert_eq!(table.rank('a'), Some(1));
/// assert_eq!(table.rank('z'), None);
/// ```
#[derive(Debug, Clone)]
pub struct RankTable {
    ascii: [u32; 128],
    wide: HashMap<char, u32>,
    max_rank: Option<u32>,
}

impl RankTable {
    /// Builds the rank table for `order`.
    pub fn new(order: &str) -> Self {
        let mut ascii = [UNRANKED; 128];
        let mut wide = HashMap::new();
        let mut chars = 0u32;

        for (position, ch) in order.chars().enumerate() {
            let rank = position as u32;
            if (ch as u32) < 128 {
                ascii[ch as usize] = rank;
            } else {
                wide.insert(ch, rank);
            }
            chars += 1;
        }

        // The final character's position is always its winning rank, so the
        // largest winning rank is the last position in the alphabet.
        let max_rank = chars.checked_sub(1);

        Self {
            ascii,
            wide,
            max_rank,
        }
    }

    /// Returns the rank of `ch`, or `None` if it is not in the alphabet.
    #[inline]
    pub fn rank(&self, ch: char) -> Option<u32> {
        if (ch as u32) < 128 {
            let rank = self.ascii[ch as usize];
            (rank != UNRANKED).then_some(rank)
        } else {
            self.wide.get(&ch).copied()
        }
    }

    /// Returns the rank of `ch`, or [`UnrankedChar`] if it has none.
    #[inline]
    pub fn require(&self, ch: char) -> Result<u32, UnrankedChar> {
        self.rank(ch).ok_or(UnrankedChar { ch })
    }

    /// Largest rank held by any character, `None` for an empty alphabet.
    #[inline]
    pub fn max_rank(&self) -> Option<u32> {
        self.max_rank
    }

    /// Rank lookup for codes that have already been validated.
    ///
    /// Maps an unranked character to the sentinel instead of panicking, which
    /// keeps the comparator total even if the contract is broken.
    #[inline(always)]
    pub(crate) fn rank_validated(&self, ch: char) -> u32 {
        self.rank(ch).unwrap_or(UNRANKED)
    }
}

// ========================================================================================
//                             High-Level Data Contracts
// ========================================================================================

// This file is only for types that are shared between files, not types that
// live and die inside one module.

use serde::Deserialize;
use std::cmp::Ordering;

/// One input entity: identity, a grouping label, and the two ranking fields.
///
/// Records are created by the roster reader and are read-only from then on.
/// The pipeline moves them between containers; it never mutates them. The
/// wire names of the input file (`username`, `gender`, `year`, `grade`) are
/// mapped onto the domain names here, in one place.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Record {
    pub name: String,
    #[serde(rename = "username")]
    pub handle: String,
    #[serde(rename = "gender")]
    pub category: String,
    #[serde(rename = "year")]
    pub rank: i32,
    #[serde(rename = "grade")]
    pub score: f64,
}

impl Record {
    /// The derived ordering key. Not stored: two records are compared by
    /// rank first, with score breaking ties.
    #[inline]
    pub fn rank_key(&self) -> RankKey {
        RankKey {
            rank: self.rank,
            score: self.score,
        }
    }
}

/// The `(rank, score)` pair used for descending comparison.
///
/// A higher rank wins regardless of score; equal ranks break by higher
/// score. The order is total (`f64::total_cmp`), so a NaN score orders
/// consistently instead of poisoning the sort.
#[derive(Debug, Clone, Copy)]
pub struct RankKey {
    pub rank: i32,
    pub score: f64,
}

impl PartialEq for RankKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for RankKey {}

impl PartialOrd for RankKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RankKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank
            .cmp(&other.rank)
            .then_with(|| self.score.total_cmp(&other.score))
    }
}

/// A record paired with its computed digest, retained only if it passed the
/// score filter. Owned by the `ResultStore` after insertion; never mutated,
/// only relocated within the store's order.
#[derive(Debug, Clone, PartialEq)]
pub struct Scored {
    pub record: Record,
    pub digest: String,
}

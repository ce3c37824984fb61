//! Distance heuristics for informed search.

use warren_core::Point;

/// Manhattan (L1) distance between two points, scaled by `weight` per step.
#[inline]
pub fn manhattan(a: Point, b: Point, weight: i32) -> i32 {
    ((a.x - b.x).abs() + (a.y - b.y).abs()) * weight
}

/// Chebyshev (L∞) distance between two points.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}

/// Taxicab distance: [`manhattan`] with unit step weight.
#[inline]
pub fn taxicab(a: Point, b: Point) -> i32 {
    manhattan(a, b, 1)
}

/// Heuristic selector for [`SearchOptions`](crate::SearchOptions).
///
/// A heuristic is only admissible when its per-step estimate does not
/// exceed the minimum cell weight on the grid; this is the caller's
/// responsibility and is not validated at runtime. With the default
/// unit-scale Manhattan estimate on a 4-connected grid A* is optimal.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heuristic {
    Manhattan { scale: i32 },
    Chebyshev,
    Taxicab,
}

impl Default for Heuristic {
    fn default() -> Self {
        Heuristic::Manhattan { scale: 1 }
    }
}

impl Heuristic {
    /// Estimated remaining cost from `a` to `b`.
    #[inline]
    pub fn estimate(self, a: Point, b: Point) -> i32 {
        match self {
            Heuristic::Manhattan { scale } => manhattan(a, b, scale),
            Heuristic::Chebyshev => chebyshev(a, b),
            Heuristic::Taxicab => taxicab(a, b),
        }
    }
}

//! Min-ordered frontier entries for cost-based searches.

use warren_core::Point;

/// Frontier entry for a `BinaryHeap`, ordered so the smallest score pops
/// first. Stale entries (already-visited positions) are skipped on pop
/// rather than removed, so pushes never need a decrease-key.
///
/// Equal scores break toward the larger accumulated cost: on an f-score
/// plateau the entry deepest into its path pops first, which keeps A*
/// pushing toward the goal instead of sweeping the whole plateau.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct ScoredPoint {
    pub(crate) score: i32,
    pub(crate) cost: i32,
    pub(crate) pos: Point,
}

impl Ord for ScoredPoint {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse on score so BinaryHeap (max-heap) pops the smallest score
        // first; then larger cost, then position for determinism.
        other
            .score
            .cmp(&self.score)
            .then_with(|| self.cost.cmp(&other.cost))
            .then_with(|| other.pos.cmp(&self.pos))
    }
}

impl PartialOrd for ScoredPoint {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

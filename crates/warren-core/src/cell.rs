//! Cell model: semantic status tags and traversal-weight tiers.
//!
//! A cell's status is a pure semantic tag. Mapping statuses to colors or
//! glyphs is the job of an external renderer; the core never deals in
//! display representations.

/// Semantic state of a single grid cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// Impassable wall, excluded from adjacency.
    #[default]
    Barrier,
    /// Passable, not yet touched by a search.
    Open,
    /// The search origin.
    Start,
    /// The search goal.
    End,
    /// Queued for expansion by a search.
    Frontier,
    /// Expanded by a search.
    Visited,
    /// Part of a reconstructed path.
    Path,
}

impl Status {
    /// Whether a search may pass through a cell in this state.
    #[inline]
    pub const fn passable(self) -> bool {
        !matches!(self, Status::Barrier)
    }
}

/// Traversal cost of a default-weight cell.
pub const DEFAULT_WEIGHT: i32 = 1;

/// Discrete traversal-cost class of a cell.
///
/// The generator samples a concrete weight from the tier's range when
/// painting weighted regions; the cell stores only the sampled value.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WeightTier {
    #[default]
    Default,
    Light,
    Heavy,
}

impl WeightTier {
    /// Inclusive weight range of the tier.
    pub const fn range(self) -> (i32, i32) {
        match self {
            WeightTier::Default => (DEFAULT_WEIGHT, DEFAULT_WEIGHT),
            WeightTier::Light => (5, 10),
            WeightTier::Heavy => (15, 25),
        }
    }

    /// Classify a stored weight back into its tier.
    pub const fn of(weight: i32) -> WeightTier {
        match weight {
            5..=10 => WeightTier::Light,
            15..=25 => WeightTier::Heavy,
            _ => WeightTier::Default,
        }
    }
}

/// A single grid cell: status tag plus the cost of entering the cell.
///
/// Identity is positional; the owning grid never relocates cells.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub status: Status,
    pub weight: i32,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            status: Status::Barrier,
            weight: DEFAULT_WEIGHT,
        }
    }
}

//! The randomized maze generator.

use std::collections::{HashSet, VecDeque};
use std::time::Instant;

use rand::Rng;
use rand::RngExt;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use warren_core::{DEFAULT_WEIGHT, MazeGrid, Point, Range, Status, WeightTier};

use crate::error::GenError;

/// How many random endpoint pairs to draw before the attempt is abandoned.
const ENDPOINT_TRIES: usize = 200;

/// Tuning knobs for maze generation.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenConfig {
    /// Side length of the maze; even values are rounded up to the next odd.
    pub dim: i32,
    /// Share of braid candidate walls that get opened.
    pub braid_fraction: f64,
    /// Upper bound on opened braid walls.
    pub braid_cap: usize,
    /// Minimum Manhattan separation between start and end; `0` derives
    /// `dim / 2`.
    pub min_separation: i32,
    /// Light-region flood seeds per quadrant.
    pub light_seeds: usize,
    /// Cells touched per light-region flood.
    pub light_flood: usize,
    /// Cells touched by the heavy flood near the end cell; smaller than
    /// `light_flood` by default so the heavy region stays a local obstacle.
    pub heavy_flood: usize,
    /// Carving attempts before generation is declared failed.
    pub max_attempts: u32,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            dim: 25,
            braid_fraction: 0.05,
            braid_cap: 100,
            min_separation: 0,
            light_seeds: 2,
            light_flood: 12,
            heavy_flood: 8,
            max_attempts: 10,
        }
    }
}

/// Maze generator with an injected random source.
pub struct MazeGen<R: Rng> {
    rng: R,
    config: GenConfig,
}

/// Generate a maze of the given dimension from a fixed seed, with default
/// tuning. Equal seeds produce equal mazes.
pub fn generate_seeded(dim: i32, seed: u64) -> Result<MazeGrid, GenError> {
    let config = GenConfig {
        dim,
        ..GenConfig::default()
    };
    MazeGen::new(config, StdRng::seed_from_u64(seed)).generate()
}

impl<R: Rng> MazeGen<R> {
    /// Create a generator from a config and a random source.
    pub fn new(config: GenConfig, rng: R) -> Self {
        Self { rng, config }
    }

    /// Produce a connected weighted maze with start and end placed.
    ///
    /// An attempt fails when endpoint placement cannot clear the separation
    /// threshold or when the connectivity check fails; either way the maze
    /// is recarved from scratch, and exhausting `max_attempts` is a fatal
    /// [`GenError`].
    pub fn generate(&mut self) -> Result<MazeGrid, GenError> {
        for attempt in 1..=self.config.max_attempts {
            let t0 = Instant::now();
            let mut grid = MazeGrid::new(self.config.dim);
            self.carve(&mut grid);
            self.braid(&mut grid);
            if !self.place_endpoints(&mut grid) {
                log::warn!("attempt {attempt}: endpoint separation threshold unmet, recarving");
                continue;
            }
            self.paint_weights(&mut grid);
            if connected(&grid) {
                log::info!(
                    "maze {0}x{0} generated in {1:?} (attempt {attempt})",
                    grid.dim(),
                    t0.elapsed()
                );
                return Ok(grid);
            }
            log::warn!("attempt {attempt}: maze is disconnected, recarving");
        }
        Err(GenError::Exhausted {
            attempts: self.config.max_attempts,
        })
    }

    /// Iterative stack-based randomized DFS over the odd lattice.
    ///
    /// Each time an unvisited lattice neighbor (step 2) is found, the
    /// current cell, the connecting wall and the target cell are opened.
    /// The result is a spanning tree: exactly one route between any two
    /// open cells.
    fn carve(&mut self, grid: &mut MazeGrid) {
        let t0 = Instant::now();
        let interior = grid.interior();
        let mut stack = vec![Point::new(1, 1)];

        while let Some(c) = stack.pop() {
            let mut dirs = [
                Point::new(2, 0),
                Point::new(-2, 0),
                Point::new(0, 2),
                Point::new(0, -2),
            ];
            dirs.shuffle(&mut self.rng);
            for d in dirs {
                let n = c + d;
                if interior.contains(n) && grid.is_barrier(n) {
                    grid.set_status(c, Status::Open);
                    grid.set_status(Point::new(c.x + d.x / 2, c.y + d.y / 2), Status::Open);
                    grid.set_status(n, Status::Open);
                    stack.push(n);
                }
            }
        }
        log::debug!("carved spanning tree in {:?}", t0.elapsed());
    }

    /// Open a random sample of corridor walls to introduce cycles.
    ///
    /// A candidate is an interior barrier whose two open neighbors are
    /// collinear: opening it joins two parallel corridors into a short loop
    /// instead of creating a dead end. Without braiding every algorithm
    /// would walk the same unique path and comparisons would be pointless.
    fn braid(&mut self, grid: &mut MazeGrid) {
        let mut candidates: Vec<Point> = Vec::new();
        for p in grid.interior().iter() {
            if !grid.is_barrier(p) {
                continue;
            }
            let open: Vec<Point> = p
                .neighbors_4()
                .into_iter()
                .filter(|&n| grid.in_bounds(n) && !grid.is_barrier(n))
                .collect();
            if open.len() == 2 && (open[0].x == open[1].x || open[0].y == open[1].y) {
                candidates.push(p);
            }
        }
        if candidates.is_empty() {
            return;
        }

        let want = ((candidates.len() as f64 * self.config.braid_fraction) as usize)
            .clamp(1, self.config.braid_cap);
        candidates.shuffle(&mut self.rng);
        for &p in candidates.iter().take(want) {
            grid.set_status(p, Status::Open);
        }
        log::debug!("braided {want} of {} candidate walls", candidates.len());
    }

    /// Place start and end on open cells in diagonally opposite quadrants,
    /// resampling until their Manhattan separation clears the threshold.
    ///
    /// Returns `false` when no sampled pair clears the threshold, which
    /// fails the whole generation attempt; endpoints too close together
    /// would void the separation guarantee the placement exists to provide.
    fn place_endpoints(&mut self, grid: &mut MazeGrid) -> bool {
        let quads = quadrants(grid.dim());
        let qi = self.rng.random_range(0..4usize);
        let (qa, qb) = (quads[qi], quads[3 - qi]);
        let min_sep = if self.config.min_separation > 0 {
            self.config.min_separation
        } else {
            grid.dim() / 2
        };

        for _ in 0..ENDPOINT_TRIES {
            let (Some(s), Some(e)) = (self.sample_open(grid, qa), self.sample_open(grid, qb))
            else {
                continue;
            };
            let d = (s.x - e.x).abs() + (s.y - e.y).abs();
            if d > min_sep {
                grid.set_start(s);
                grid.set_end(e);
                return true;
            }
        }
        false
    }

    /// Paint weighted regions: light floods seeded across every quadrant,
    /// then one smaller heavy flood concentrated near the end cell.
    ///
    /// Floods only upgrade default-weight Open cells; Start, End and
    /// Barrier cells are never touched and existing tiers are never
    /// downgraded.
    fn paint_weights(&mut self, grid: &mut MazeGrid) {
        for q in quadrants(grid.dim()) {
            for _ in 0..self.config.light_seeds {
                if let Some(seed) = self.sample_open(grid, q) {
                    self.flood_tier(grid, seed, WeightTier::Light, self.config.light_flood);
                }
            }
        }
        let near = grid.dim() / 6;
        if let Some(seed) = self.sample_open_near(grid, grid.end(), near.max(2)) {
            self.flood_tier(grid, seed, WeightTier::Heavy, self.config.heavy_flood);
        }
    }

    /// Bounded breadth-first flood from `seed` upgrading default-weight Open
    /// cells to a random weight in the tier's range.
    fn flood_tier(&mut self, grid: &mut MazeGrid, seed: Point, tier: WeightTier, cap: usize) {
        let (lo, hi) = tier.range();
        let mut queue = VecDeque::from([seed]);
        let mut seen = HashSet::from([seed]);
        let mut buf = Vec::with_capacity(4);
        let mut touched = 0usize;

        while let Some(p) = queue.pop_front() {
            if touched >= cap {
                break;
            }
            touched += 1;
            if grid.status(p) == Status::Open && grid.weight(p) == DEFAULT_WEIGHT {
                grid.set_weight(p, self.rng.random_range(lo..=hi));
            }
            grid.neighbors(p, &mut buf);
            for &n in &buf {
                if seen.insert(n) {
                    queue.push_back(n);
                }
            }
        }
    }

    /// A random non-barrier cell inside `range`, falling back to a linear
    /// scan when sampling keeps hitting walls.
    fn sample_open(&mut self, grid: &MazeGrid, range: Range) -> Option<Point> {
        for _ in 0..64 {
            let p = Point::new(
                self.rng.random_range(range.min.x..range.max.x),
                self.rng.random_range(range.min.y..range.max.y),
            );
            if !grid.is_barrier(p) {
                return Some(p);
            }
        }
        range.iter().find(|&p| !grid.is_barrier(p))
    }

    /// A random Open cell within Chebyshev distance `radius` of `center`.
    fn sample_open_near(&mut self, grid: &MazeGrid, center: Point, radius: i32) -> Option<Point> {
        let candidates: Vec<Point> = Range::new(
            center.x - radius,
            center.y - radius,
            center.x + radius + 1,
            center.y + radius + 1,
        )
        .iter()
        .filter(|&p| grid.status(p) == Status::Open)
        .collect();
        if candidates.is_empty() {
            None
        } else {
            Some(candidates[self.rng.random_range(0..candidates.len())])
        }
    }
}

/// Partition of the interior into quadrants, ordered so that index `i` and
/// `3 - i` are diagonally opposite.
fn quadrants(dim: i32) -> [Range; 4] {
    let m = dim / 2;
    [
        Range::new(1, 1, m, m),
        Range::new(m, 1, dim - 1, m),
        Range::new(1, m, m, dim - 1),
        Range::new(m, m, dim - 1, dim - 1),
    ]
}

/// Whether every passable cell (end included) is reachable from the start.
///
/// Iterative flood over the final open-neighbor graph; this is the verified
/// post-generation invariant, not an assumption.
fn connected(grid: &MazeGrid) -> bool {
    let t0 = Instant::now();
    let start = grid.start();
    let mut stack = vec![start];
    let mut seen = HashSet::from([start]);
    let mut buf = Vec::with_capacity(4);

    while let Some(p) = stack.pop() {
        grid.neighbors(p, &mut buf);
        for &n in &buf {
            if seen.insert(n) {
                stack.push(n);
            }
        }
    }

    let ok = seen.contains(&grid.end()) && seen.len() == grid.open_count();
    log::debug!(
        "connectivity verified in {:?}: reached {} of {} open cells",
        t0.elapsed(),
        seen.len(),
        grid.open_count()
    );
    ok
}

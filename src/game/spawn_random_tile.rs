use crate::game::empty_cells::empty_cells;
use crate::game::grid::Grid;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Chance that a spawned tile is a 4 rather than a 2.
pub const FOUR_PROBABILITY: f64 = 0.1;

/// Source of randomness for tile spawning. Injected so games can be replayed.
pub trait TileSource {
    /// Index into the list of empty cells. `empty_count` is never zero.
    fn pick_cell(&mut self, empty_count: usize) -> usize;

    /// Value of the new tile, 2 or 4.
    fn pick_value(&mut self) -> u32;
}

/// Uniform cell choice, 2 with probability 0.9 and 4 otherwise.
#[derive(Debug, Clone)]
pub struct RandomTileSource<R = StdRng> {
    rng: R,
}

impl RandomTileSource<StdRng> {
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::from_seed(rand::random())
    }
}

impl<R: Rng> RandomTileSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> TileSource for RandomTileSource<R> {
    fn pick_cell(&mut self, empty_count: usize) -> usize {
        self.rng.random_range(0..empty_count)
    }

    fn pick_value(&mut self) -> u32 {
        if self.rng.random_bool(FOUR_PROBABILITY) {
            4
        } else {
            2
        }
    }
}

/// Always the same empty-cell index (clamped to what is available) and value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedTileSource {
    pub cell: usize,
    pub value: u32,
}

impl FixedTileSource {
    /// First empty cell, value 2.
    pub fn first_two() -> Self {
        Self { cell: 0, value: 2 }
    }
}

impl TileSource for FixedTileSource {
    fn pick_cell(&mut self, empty_count: usize) -> usize {
        self.cell.min(empty_count.saturating_sub(1))
    }

    fn pick_value(&mut self) -> u32 {
        self.value
    }
}

/// Returns a copy of `grid` with one new tile on a random empty cell.
/// A full grid comes back unchanged.
pub fn spawn_random_tile<S: TileSource + ?Sized>(grid: &Grid, source: &mut S) -> Grid {
    let empty = empty_cells(grid);
    if empty.is_empty() {
        return *grid;
    }

    let index = source.pick_cell(empty.len()).min(empty.len() - 1);
    let (row, col) = empty[index];
    grid.with_cell(row, col, source.pick_value())
}

use crate::game::grid::{Grid, MergeMap};

/// Outcome of sliding the board once. Built fresh for every move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    pub grid: Grid,
    pub merge_map: MergeMap,
    /// True when any tile moved or merged.
    pub changed: bool,
    /// Sum of the values created by merges in this move only.
    pub score_delta: u64,
}

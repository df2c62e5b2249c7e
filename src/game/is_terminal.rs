use crate::game::grid::{Grid, GRID_SIZE};

/// True when the board is full and no two orthogonal neighbours are equal.
///
/// Each cell is only compared with its right and lower neighbour. Adjacency
/// is symmetric, so every horizontal and vertical pair is still seen exactly
/// once, from its left or upper member.
pub fn is_terminal(grid: &Grid) -> bool {
    if !grid.is_full() {
        return false;
    }

    for r in 0..GRID_SIZE {
        for c in 0..GRID_SIZE {
            let current = grid.cells[r][c];
            if c + 1 < GRID_SIZE && grid.cells[r][c + 1] == current {
                return false;
            }
            if r + 1 < GRID_SIZE && grid.cells[r + 1][c] == current {
                return false;
            }
        }
    }

    true
}

use crate::game::direction::Direction;
use crate::game::grid::{Grid, MergeMap, GRID_SIZE};
use crate::game::move_result::MoveResult;
use crate::game::transform::View;

struct SlidRow {
    cells: [u32; GRID_SIZE],
    merged: [bool; GRID_SIZE],
    score_delta: u64,
}

/// Compacts one row to the left and merges equal neighbours, one pair at a
/// time. A tile produced by a merge never merges again in the same slide.
fn slide_row_left(row: &[u32; GRID_SIZE]) -> SlidRow {
    let tiles: Vec<u32> = row.iter().copied().filter(|&value| value != 0).collect();

    let mut slid = SlidRow {
        cells: [0; GRID_SIZE],
        merged: [false; GRID_SIZE],
        score_delta: 0,
    };

    let mut out = 0;
    let mut i = 0;
    while i < tiles.len() {
        if i + 1 < tiles.len() && tiles[i] == tiles[i + 1] {
            let value = tiles[i] * 2;
            slid.cells[out] = value;
            slid.merged[out] = true;
            slid.score_delta += u64::from(value);
            i += 2;
        } else {
            slid.cells[out] = tiles[i];
            i += 1;
        }
        out += 1;
    }

    slid
}

/// The one real move. Every other direction is this, seen through a [`View`].
pub fn move_left(grid: &Grid) -> MoveResult {
    let mut cells = [[0; GRID_SIZE]; GRID_SIZE];
    let mut merges = [[false; GRID_SIZE]; GRID_SIZE];
    let mut score_delta = 0;
    let mut changed = false;

    for (r, row) in grid.cells.iter().enumerate() {
        let slid = slide_row_left(row);
        if slid.merged.iter().any(|&m| m) || slid.cells != *row {
            changed = true;
        }
        cells[r] = slid.cells;
        merges[r] = slid.merged;
        score_delta += slid.score_delta;
    }

    MoveResult {
        grid: Grid::from_rows(cells),
        merge_map: MergeMap::from_rows(merges),
        changed,
        score_delta,
    }
}

pub fn apply_direction(grid: &Grid, direction: Direction) -> MoveResult {
    let view = View::for_direction(direction);
    let moved = move_left(&Grid::from_rows(view.apply(&grid.cells)));

    MoveResult {
        grid: Grid::from_rows(view.invert(&moved.grid.cells)),
        merge_map: MergeMap::from_rows(view.invert(&moved.merge_map.cells)),
        ..moved
    }
}

pub fn move_right(grid: &Grid) -> MoveResult {
    apply_direction(grid, Direction::Right)
}

pub fn move_up(grid: &Grid) -> MoveResult {
    apply_direction(grid, Direction::Up)
}

pub fn move_down(grid: &Grid) -> MoveResult {
    apply_direction(grid, Direction::Down)
}

/// Whether sliding in `direction` would change the board.
pub fn can_move(grid: &Grid, direction: Direction) -> bool {
    apply_direction(grid, direction).changed
}

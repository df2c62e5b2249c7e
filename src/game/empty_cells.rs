use crate::game::grid::Grid;

/// Coordinates `(row, col)` of every empty cell, in row-major order.
pub fn empty_cells(grid: &Grid) -> Vec<(usize, usize)> {
    grid.cells
        .iter()
        .enumerate()
        .flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .filter_map(move |(c, &value)| if value == 0 { Some((r, c)) } else { None })
        })
        .collect()
}

use crate::game::transform::Matrix;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Side length of the board. The game is only ever played on 4×4.
pub const GRID_SIZE: usize = 4;

/// Tile values, row-major. `0` is an empty cell, anything else is a power of two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grid {
    pub cells: Matrix<u32>,
}

/// Cells that were produced by a merge during the last move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MergeMap {
    pub cells: Matrix<bool>,
}

pub fn create_empty_grid() -> Grid {
    Grid::default()
}

impl Grid {
    pub fn from_rows(cells: Matrix<u32>) -> Self {
        Self { cells }
    }

    pub fn get(&self, row: usize, col: usize) -> u32 {
        self.cells[row][col]
    }

    /// Copy of the grid with one cell replaced.
    pub fn with_cell(&self, row: usize, col: usize, value: u32) -> Grid {
        let mut cells = self.cells;
        cells[row][col] = value;
        Grid { cells }
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|&value| value != 0)
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&value| value == 0).count()
    }

    pub fn max_tile(&self) -> u32 {
        self.cells.iter().flatten().copied().max().unwrap_or(0)
    }
}

impl MergeMap {
    pub fn from_rows(cells: Matrix<bool>) -> Self {
        Self { cells }
    }

    pub fn merged_count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&merged| merged).count()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let border = format!("+{}", "------+".repeat(GRID_SIZE));
        writeln!(f, "{}", border)?;
        for row in &self.cells {
            write!(f, "|")?;
            for &value in row {
                if value == 0 {
                    write!(f, "      |")?;
                } else {
                    write!(f, "{:^6}|", value)?;
                }
            }
            writeln!(f)?;
            writeln!(f, "{}", border)?;
        }
        Ok(())
    }
}

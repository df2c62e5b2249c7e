//! Geometric views of the board.
//!
//! Every move is computed as a left slide. The other three directions look at
//! the board through one of these views, slide left, and map the result back.

use crate::game::direction::Direction;
use crate::game::grid::GRID_SIZE;

pub type Matrix<T> = [[T; GRID_SIZE]; GRID_SIZE];

/// Reverse every row (horizontal mirror).
pub fn mirror<T: Copy>(matrix: &Matrix<T>) -> Matrix<T> {
    let mut out = *matrix;
    for row in out.iter_mut() {
        row.reverse();
    }
    out
}

/// Swap rows and columns.
pub fn transpose<T: Copy>(matrix: &Matrix<T>) -> Matrix<T> {
    let mut out = *matrix;
    for (r, row) in matrix.iter().enumerate() {
        for (c, &cell) in row.iter().enumerate() {
            out[c][r] = cell;
        }
    }
    out
}

/// How a direction sees the board so that its move becomes a left slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Identity,
    Mirrored,
    Transposed,
    TransposedMirrored,
}

impl View {
    pub fn for_direction(direction: Direction) -> Self {
        match direction {
            Direction::Left => View::Identity,
            Direction::Right => View::Mirrored,
            Direction::Up => View::Transposed,
            Direction::Down => View::TransposedMirrored,
        }
    }

    pub fn apply<T: Copy>(self, matrix: &Matrix<T>) -> Matrix<T> {
        match self {
            View::Identity => *matrix,
            View::Mirrored => mirror(matrix),
            View::Transposed => transpose(matrix),
            View::TransposedMirrored => mirror(&transpose(matrix)),
        }
    }

    /// Undo [`View::apply`].
    pub fn invert<T: Copy>(self, matrix: &Matrix<T>) -> Matrix<T> {
        match self {
            View::Identity => *matrix,
            View::Mirrored => mirror(matrix),
            View::Transposed => transpose(matrix),
            View::TransposedMirrored => transpose(&mirror(matrix)),
        }
    }
}

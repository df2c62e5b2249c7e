pub mod direction;
pub mod empty_cells;
pub mod grid;
pub mod is_terminal;
pub mod move_result;
pub mod slide;
pub mod spawn_random_tile;
pub mod transform;

pub use direction::Direction;
pub use empty_cells::empty_cells;
pub use grid::{create_empty_grid, Grid, MergeMap, GRID_SIZE};
pub use is_terminal::is_terminal;
pub use move_result::MoveResult;
pub use slide::{apply_direction, can_move, move_down, move_left, move_right, move_up};
pub use spawn_random_tile::{spawn_random_tile, FixedTileSource, RandomTileSource, TileSource};

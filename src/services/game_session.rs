// src/services/game_session.rs - One player's game, from new game to game over

use crate::data::ResultRecord;
use crate::game::{
    apply_direction, create_empty_grid, is_terminal, spawn_random_tile, Direction, Grid, MergeMap,
    TileSource,
};
use crate::{Game2048Error, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    NotStarted,
    Playing,
    GameOver,
}

/// What a single input did to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Wrong state, unknown input, or a slide that changed nothing.
    Ignored,
    Moved { score_delta: u64 },
    /// The move ended the game. The record still has to be persisted.
    GameOver(ResultRecord),
}

#[derive(Debug, Clone)]
pub struct GameSession {
    player_name: String,
    grid: Grid,
    merge_map: MergeMap,
    score: u64,
    state: SessionState,
    turns: u32,
}

impl GameSession {
    /// A session waiting for its first game. The name is trimmed and must not be blank.
    pub fn new(player_name: &str) -> Result<Self> {
        let player_name = player_name.trim();
        if player_name.is_empty() {
            return Err(Game2048Error::InvalidPlayerName);
        }

        Ok(Self {
            player_name: player_name.to_string(),
            grid: create_empty_grid(),
            merge_map: MergeMap::default(),
            score: 0,
            state: SessionState::NotStarted,
            turns: 0,
        })
    }

    /// Two tiles on an empty board, score back to zero. Valid from any state.
    pub fn new_game<S: TileSource + ?Sized>(&mut self, tiles: &mut S) {
        let grid = spawn_random_tile(&create_empty_grid(), tiles);
        self.grid = spawn_random_tile(&grid, tiles);
        self.merge_map = MergeMap::default();
        self.score = 0;
        self.turns = 0;
        self.state = SessionState::Playing;

        log::info!("🎮 New game for {}", self.player_name);
    }

    pub fn apply_move<S: TileSource + ?Sized>(
        &mut self,
        direction: Direction,
        tiles: &mut S,
    ) -> MoveOutcome {
        if self.state != SessionState::Playing {
            return MoveOutcome::Ignored;
        }

        let moved = apply_direction(&self.grid, direction);
        if !moved.changed {
            return MoveOutcome::Ignored;
        }

        self.grid = spawn_random_tile(&moved.grid, tiles);
        self.merge_map = moved.merge_map;
        self.score += moved.score_delta;
        self.turns += 1;

        log::debug!(
            "{} moved {}: +{} (score {}, turn {})",
            self.player_name,
            direction,
            moved.score_delta,
            self.score,
            self.turns
        );

        if is_terminal(&self.grid) {
            self.state = SessionState::GameOver;
            log::info!(
                "💀 Game over for {}: score={}, best tile={}, turns={}",
                self.player_name,
                self.score,
                self.grid.max_tile(),
                self.turns
            );
            return MoveOutcome::GameOver(ResultRecord::new(&self.player_name, self.score));
        }

        MoveOutcome::Moved {
            score_delta: moved.score_delta,
        }
    }

    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn merge_map(&self) -> &MergeMap {
        &self.merge_map
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_game_over(&self) -> bool {
        self.state == SessionState::GameOver
    }

    /// Accepted moves in the current game.
    pub fn turns(&self) -> u32 {
        self.turns
    }

    /// Starts from an arbitrary board.
    #[cfg(test)]
    pub(crate) fn resume(&mut self, grid: Grid, score: u64) {
        self.grid = grid;
        self.merge_map = MergeMap::default();
        self.score = score;
        self.turns = 0;
        self.state = if is_terminal(&grid) {
            SessionState::GameOver
        } else {
            SessionState::Playing
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{FixedTileSource, RandomTileSource};
    use assert_matches::assert_matches;

    fn playing_session() -> (GameSession, FixedTileSource) {
        let mut tiles = FixedTileSource::first_two();
        let mut session = GameSession::new("ada").unwrap();
        session.new_game(&mut tiles);
        (session, tiles)
    }

    #[test]
    fn test_blank_name_is_rejected() {
        assert_matches!(GameSession::new("   "), Err(Game2048Error::InvalidPlayerName));
        assert_eq!(GameSession::new("  ada ").unwrap().player_name(), "ada");
    }

    #[test]
    fn test_moves_before_start_are_ignored() {
        let mut session = GameSession::new("ada").unwrap();
        let mut tiles = FixedTileSource::first_two();
        assert_eq!(session.state(), SessionState::NotStarted);
        assert_eq!(session.apply_move(Direction::Left, &mut tiles), MoveOutcome::Ignored);
        assert_eq!(session.grid(), &create_empty_grid());
    }

    #[test]
    fn test_new_game_spawns_two_tiles() {
        let (session, _) = playing_session();
        assert_eq!(session.state(), SessionState::Playing);
        assert_eq!(session.grid().empty_count(), 14);
        assert_eq!(session.grid().get(0, 0), 2);
        assert_eq!(session.grid().get(0, 1), 2);
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn test_accepted_move_scores_and_spawns() {
        let (mut session, mut tiles) = playing_session();
        let outcome = session.apply_move(Direction::Left, &mut tiles);

        assert_eq!(outcome, MoveOutcome::Moved { score_delta: 4 });
        assert_eq!(session.score(), 4);
        assert_eq!(session.turns(), 1);
        // merged 4 at (0,0), fresh 2 in the first empty cell (0,1)
        assert_eq!(session.grid().cells[0], [4, 2, 0, 0]);
        assert!(session.merge_map().cells[0][0]);
    }

    #[test]
    fn test_unchanged_move_is_not_a_turn() {
        let (mut session, mut tiles) = playing_session();
        let before = *session.grid();
        assert_eq!(session.apply_move(Direction::Up, &mut tiles), MoveOutcome::Ignored);
        assert_eq!(session.grid(), &before);
        assert_eq!(session.turns(), 0);
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn test_last_move_ends_the_game() {
        let mut session = GameSession::new("ada").unwrap();
        // Sliding left merges the two 2s on the bottom row, the spawned 2 fills
        // (3,3) and nothing can move afterwards.
        session.resume(
            Grid::from_rows([
                [8, 4, 8, 4],
                [4, 8, 4, 8],
                [8, 4, 8, 4],
                [2, 2, 32, 16],
            ]),
            100,
        );
        assert_eq!(session.state(), SessionState::Playing);

        let mut tiles = FixedTileSource::first_two();
        let outcome = session.apply_move(Direction::Left, &mut tiles);

        assert_eq!(session.grid().cells[3], [4, 32, 16, 2]);
        assert_matches!(outcome, MoveOutcome::GameOver(ref record) if record.final_score == 104);
        assert!(session.is_game_over());

        // Further input is ignored until a new game.
        assert_eq!(session.apply_move(Direction::Right, &mut tiles), MoveOutcome::Ignored);
        session.new_game(&mut tiles);
        assert_eq!(session.state(), SessionState::Playing);
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn test_random_game_reaches_game_over() {
        let mut tiles = RandomTileSource::from_seed(11);
        let mut session = GameSession::new("bot").unwrap();
        session.new_game(&mut tiles);

        let mut record = None;
        for step in 0..100_000 {
            let direction = Direction::ALL[step % 4];
            if let MoveOutcome::GameOver(r) = session.apply_move(direction, &mut tiles) {
                record = Some(r);
                break;
            }
        }

        let record = record.expect("A cycling player should eventually lose");
        assert_eq!(record.final_score, session.score());
        assert_eq!(record.player_name, "bot");
        assert!(is_terminal(session.grid()));
    }
}

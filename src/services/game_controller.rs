// src/services/game_controller.rs - Session + randomness + persistence

use crate::data::{load_recent_history, lock_store, record_result, ResultRecord, SharedStore};
use crate::game::{Direction, Grid, MergeMap, TileSource};
use crate::services::game_session::{GameSession, MoveOutcome, SessionState};
use crate::Result;
use serde::{Deserialize, Serialize};

/// Tile source owned by a controller. `Sync` so controllers can sit in a shared map.
pub type BoxedTileSource = Box<dyn TileSource + Send + Sync>;

/// Everything a front end needs to draw the game screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameView {
    pub player_name: String,
    pub grid: Grid,
    pub merge_map: MergeMap,
    pub score: u64,
    pub game_over: bool,
    pub state: SessionState,
    pub turns: u32,
    pub max_tile: u32,
    /// The player's most recent finished games, newest first.
    pub recent_history: Vec<ResultRecord>,
}

/// Drives one [`GameSession`] and writes its result to the store when it ends.
pub struct GameController {
    session: GameSession,
    tiles: BoxedTileSource,
    store: SharedStore,
    /// Refreshed from the store at new game and after game over only.
    recent_history: Vec<ResultRecord>,
}

impl GameController {
    /// Creates the session and starts the first game right away.
    pub fn new(player_name: &str, tiles: BoxedTileSource, store: SharedStore) -> Result<Self> {
        let session = GameSession::new(player_name)?;
        let mut controller = Self {
            session,
            tiles,
            store,
            recent_history: Vec::new(),
        };
        controller.new_game();
        Ok(controller)
    }

    pub fn new_game(&mut self) {
        self.session.new_game(&mut *self.tiles);
        self.refresh_history();
    }

    pub fn apply_move(&mut self, direction: Direction) -> MoveOutcome {
        let outcome = self.session.apply_move(direction, &mut *self.tiles);
        if let MoveOutcome::GameOver(record) = &outcome {
            self.persist(record);
            self.refresh_history();
        }
        outcome
    }

    /// Key name, direction word or WASD. Anything else is ignored.
    pub fn handle_input(&mut self, input: &str) -> MoveOutcome {
        match Direction::parse_intent(input) {
            Some(direction) => self.apply_move(direction),
            None => {
                log::debug!("Ignoring unrecognized input {:?}", input);
                MoveOutcome::Ignored
            }
        }
    }

    pub fn handle_swipe(&mut self, dx: f64, dy: f64) -> MoveOutcome {
        match Direction::from_swipe(dx, dy) {
            Some(direction) => self.apply_move(direction),
            None => MoveOutcome::Ignored,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn view(&self) -> GameView {
        GameView {
            player_name: self.session.player_name().to_string(),
            grid: *self.session.grid(),
            merge_map: *self.session.merge_map(),
            score: self.session.score(),
            game_over: self.session.is_game_over(),
            state: self.session.state(),
            turns: self.session.turns(),
            max_tile: self.session.grid().max_tile(),
            recent_history: self.recent_history.clone(),
        }
    }

    fn refresh_history(&mut self) {
        let store = lock_store(&self.store);
        self.recent_history = load_recent_history(&*store, self.session.player_name());
    }

    fn persist(&self, record: &ResultRecord) {
        let mut store = lock_store(&self.store);
        if let Err(e) = record_result(&mut *store, record) {
            // The game itself is unaffected; only the saved result is lost.
            log::error!(
                "❌ Failed to save result for {} ({}): {}",
                record.player_name,
                record.final_score,
                e
            );
        }
    }
}

pub mod game_controller;
pub mod game_session;
pub mod session_registry;

pub use game_controller::{BoxedTileSource, GameController, GameView};
pub use game_session::{GameSession, MoveOutcome, SessionState};
pub use session_registry::{Intent, SessionLimits, SessionRegistry};

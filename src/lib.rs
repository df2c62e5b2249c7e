//! # Aztec 2048
//!
//! The 2048 sliding-tile puzzle on a 4×4 board, with per-player history and a
//! local leaderboard.
//!
//! ## Features
//!
//! - **Grid Engine**: pure slide/merge, tile spawning and game-over detection
//! - **Session Controller**: one player's game from start to game over
//! - **Record Store**: history and leaderboard in memory, JSON files or SQLite
//! - **Web API**: JSON endpoints for a browser front end
//! - **Terminal play**: line-based front end for local games
//!
//! ## Usage
//!
//! ```rust
//! use aztec_2048::{
//!     data::{shared_store, MemoryStore},
//!     game::{Direction, FixedTileSource},
//!     services::GameController,
//! };
//!
//! let store = shared_store(MemoryStore::new());
//! let mut controller =
//!     GameController::new("ada", Box::new(FixedTileSource::first_two()), store).unwrap();
//! controller.apply_move(Direction::Left);
//! assert_eq!(controller.view().score, 4);
//! ```

// ============================================================================
// PUBLIC API MODULES
// ============================================================================

/// Grid engine: moves, spawning, terminal detection
pub mod game;

/// Result records, history, leaderboard and their stores
pub mod data;

/// Session state machine and controllers
pub mod services;

/// HTTP API for the browser front end
pub mod servers;

/// Line-based terminal front end
pub mod play_cli;

/// Logger initialization
pub mod logging;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

pub use game::*;

pub use services::{GameController, GameSession, GameView, MoveOutcome, SessionState};

pub use servers::{WebUiConfig, WebUiServer};

// ============================================================================
// ERROR TYPES
// ============================================================================

/// Main error type for the Aztec 2048 library
#[derive(Debug, thiserror::Error)]
pub enum Game2048Error {
    #[error("Player name must not be empty")]
    InvalidPlayerName,

    #[error("Unknown direction: {0}")]
    UnknownDirection(String),

    #[error("Session not found: {0}")]
    SessionNotFound(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Game2048Error>;

// ============================================================================
// LIBRARY VERSION INFO
// ============================================================================

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Library description
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

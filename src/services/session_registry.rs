// src/services/session_registry.rs - Live games of the web front end, by session id

use crate::data::{load_leaderboard, load_recent_history, lock_store, ResultRecord, SharedStore};
use crate::game::{Direction, RandomTileSource};
use crate::services::game_controller::{BoxedTileSource, GameController, GameView};
use crate::{Game2048Error, Result};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use uuid::Uuid;

/// One direction intent from the browser: a key/word, or a swipe vector.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    Input(String),
    Swipe { dx: f64, dy: f64 },
}

/// Bounds on the live session map, enforced whenever a session is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionLimits {
    /// Sessions untouched for this long are dropped.
    pub idle_timeout: Duration,
    /// Above this many sessions the least recently used are dropped.
    pub max_sessions: usize,
}

impl Default for SessionLimits {
    fn default() -> Self {
        Self {
            idle_timeout: Duration::from_secs(2 * 60 * 60),
            max_sessions: 1_000,
        }
    }
}

struct SessionEntry {
    controller: GameController,
    last_seen: Instant,
    /// Touch order; breaks ties between equal `Instant`s.
    last_tick: u64,
}

#[derive(Default)]
struct SessionTable {
    entries: HashMap<String, SessionEntry>,
    ticks: u64,
}

impl SessionTable {
    fn next_tick(&mut self) -> u64 {
        self.ticks += 1;
        self.ticks
    }

    fn insert(&mut self, session_id: String, controller: GameController) {
        let last_tick = self.next_tick();
        self.entries.insert(
            session_id,
            SessionEntry {
                controller,
                last_seen: Instant::now(),
                last_tick,
            },
        );
    }

    fn touch(&mut self, session_id: &str) -> Option<&mut GameController> {
        let tick = self.next_tick();
        let entry = self.entries.get_mut(session_id)?;
        entry.last_seen = Instant::now();
        entry.last_tick = tick;
        Some(&mut entry.controller)
    }

    /// Drops idle sessions, then the least recently used ones until at most
    /// `keep` remain. Returns how many were dropped.
    fn evict(&mut self, idle_timeout: Duration, keep: usize) -> usize {
        let before = self.entries.len();
        self.entries
            .retain(|_, entry| entry.last_seen.elapsed() < idle_timeout);

        if self.entries.len() > keep {
            let mut by_age: Vec<(u64, String)> = self
                .entries
                .iter()
                .map(|(id, entry)| (entry.last_tick, id.clone()))
                .collect();
            by_age.sort_unstable();
            let excess = self.entries.len() - keep;
            for (_, id) in by_age.into_iter().take(excess) {
                self.entries.remove(&id);
            }
        }

        before - self.entries.len()
    }
}

#[derive(Clone)]
pub struct SessionRegistry {
    sessions: Arc<RwLock<SessionTable>>,
    store: SharedStore,
    seed: Option<u64>,
    limits: SessionLimits,
    created: Arc<AtomicU64>,
}

impl SessionRegistry {
    pub fn new(store: SharedStore) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(SessionTable::default())),
            store,
            seed: None,
            limits: SessionLimits::default(),
            created: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Seeds every new session from `seed` plus its creation index, so a
    /// server run can be replayed.
    pub fn with_seed(store: SharedStore, seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::new(store)
        }
    }

    pub fn with_limits(mut self, limits: SessionLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn limits(&self) -> SessionLimits {
        self.limits
    }

    fn tile_source(&self) -> BoxedTileSource {
        let index = self.created.fetch_add(1, Ordering::Relaxed);
        match self.seed {
            Some(seed) => Box::new(RandomTileSource::from_seed(seed.wrapping_add(index))),
            None => Box::new(RandomTileSource::from_entropy()),
        }
    }

    // ========================================================================
    // SESSION LIFECYCLE
    // ========================================================================

    /// Starts a game for `player_name`. Idle and surplus sessions are evicted
    /// first so the map stays within [`SessionLimits`].
    pub async fn create_session(&self, player_name: &str) -> Result<(String, GameView)> {
        let mut sessions = self.sessions.write().await;
        let controller = GameController::new(player_name, self.tile_source(), self.store.clone())?;
        let view = controller.view();

        let keep = self.limits.max_sessions.saturating_sub(1);
        let evicted = sessions.evict(self.limits.idle_timeout, keep);
        if evicted > 0 {
            log::info!("🧹 Evicted {} stale session(s)", evicted);
        }

        let session_id = Uuid::new_v4().to_string();
        sessions.insert(session_id.clone(), controller);

        log::info!("🆕 Session {} created for {}", session_id, view.player_name);
        Ok((session_id, view))
    }

    pub async fn view(&self, session_id: &str) -> Result<GameView> {
        self.with_session(session_id, |_| {}).await
    }

    /// Applies one intent. Unrecognized intents leave the game untouched.
    pub async fn apply_intent(&self, session_id: &str, intent: &Intent) -> Result<GameView> {
        self.with_session(session_id, |controller| {
            match intent {
                Intent::Input(input) => controller.handle_input(input),
                Intent::Swipe { dx, dy } => controller.handle_swipe(*dx, *dy),
            };
        })
        .await
    }

    pub async fn apply_move(&self, session_id: &str, direction: Direction) -> Result<GameView> {
        self.with_session(session_id, |controller| {
            controller.apply_move(direction);
        })
        .await
    }

    pub async fn restart(&self, session_id: &str) -> Result<GameView> {
        self.with_session(session_id, GameController::new_game).await
    }

    pub async fn close_session(&self, session_id: &str) -> bool {
        let removed = self
            .sessions
            .write()
            .await
            .entries
            .remove(session_id)
            .is_some();
        if removed {
            log::info!("Session {} closed", session_id);
        }
        removed
    }

    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.entries.len()
    }

    async fn with_session<F>(&self, session_id: &str, action: F) -> Result<GameView>
    where
        F: FnOnce(&mut GameController),
    {
        let mut sessions = self.sessions.write().await;
        let controller = sessions
            .touch(session_id)
            .ok_or_else(|| Game2048Error::SessionNotFound(session_id.to_string()))?;
        action(controller);
        Ok(controller.view())
    }

    // ========================================================================
    // STORE QUERIES
    // ========================================================================

    pub fn leaderboard(&self) -> Vec<ResultRecord> {
        load_leaderboard(&*lock_store(&self.store))
    }

    pub fn recent_history(&self, player_name: &str) -> Vec<ResultRecord> {
        load_recent_history(&*lock_store(&self.store), player_name.trim())
    }
}

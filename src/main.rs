// main.rs - Aztec 2048: web server, terminal play and record queries
use clap::Parser;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use aztec_2048::data::{
    export_records_to_path, load_leaderboard, load_recent_history, lock_store, rank_of,
    shared_store, JsonFileStore, MemoryStore, SharedStore, SqliteStore, HISTORY_KEY,
};
use aztec_2048::game::RandomTileSource;
use aztec_2048::logging::setup_logging;
use aztec_2048::play_cli::play_in_terminal;
use aztec_2048::services::{BoxedTileSource, GameController, SessionLimits, SessionRegistry};
use aztec_2048::servers::{WebUiConfig, WebUiServer};

#[derive(clap::ValueEnum, Clone, Debug, PartialEq, Eq)]
enum Mode {
    /// HTTP API and static front end
    Serve,
    /// Play in the terminal
    Play,
    /// Print the leaderboard
    Leaderboard,
    /// Print a player's recent games
    History,
    /// Write the full history as CSV
    Export,
}

#[derive(clap::ValueEnum, Clone, Debug, PartialEq, Eq)]
enum StoreBackend {
    /// One JSON file per document in the data directory
    Json,
    /// SQLite database in the data directory
    Sqlite,
    /// Nothing survives the process
    Memory,
}

#[derive(Parser, Debug)]
#[command(name = "aztec_2048", version, about)]
struct Config {
    /// What to run
    #[arg(long, value_enum, default_value = "serve")]
    mode: Mode,

    /// Where history and leaderboard are kept
    #[arg(long, value_enum, default_value = "json")]
    store: StoreBackend,

    /// Directory for the JSON or SQLite store
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,

    /// Bind address for the web server
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Port for the web server
    #[arg(short = 'p', long, default_value_t = 2048)]
    port: u16,

    /// Static front-end files served next to the API
    #[arg(long, default_value = "web")]
    static_dir: PathBuf,

    /// Player name (play and history modes)
    #[arg(short = 'n', long)]
    name: Option<String>,

    /// Most live web sessions; the least recently used are dropped beyond this
    #[arg(long, default_value_t = 1_000)]
    max_sessions: usize,

    /// Minutes after which an untouched web session is dropped
    #[arg(long, default_value_t = 120)]
    session_idle_mins: u64,

    /// Seed for tile spawning; random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Log to rotated files in this directory instead of stderr
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Default log level when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Destination of the CSV export
    #[arg(short = 'o', long, default_value = "history.csv")]
    output: PathBuf,
}

fn open_store(config: &Config) -> aztec_2048::Result<SharedStore> {
    let store = match config.store {
        StoreBackend::Json => shared_store(JsonFileStore::new(&config.data_dir)?),
        StoreBackend::Sqlite => {
            std::fs::create_dir_all(&config.data_dir)?;
            shared_store(SqliteStore::open(config.data_dir.join("aztec2048.db"))?)
        }
        StoreBackend::Memory => shared_store(MemoryStore::new()),
    };
    log::info!("📦 Store: {:?} ({})", config.store, config.data_dir.display());
    Ok(store)
}

fn player_name(config: &Config) -> Result<String, Box<dyn std::error::Error>> {
    match &config.name {
        Some(name) => Ok(name.clone()),
        None => {
            println!("Enter your name to begin:");
            let mut line = String::new();
            io::stdin().read_line(&mut line)?;
            Ok(line.trim().to_string())
        }
    }
}

fn tile_source(seed: Option<u64>) -> BoxedTileSource {
    match seed {
        Some(seed) => Box::new(RandomTileSource::from_seed(seed)),
        None => Box::new(RandomTileSource::from_entropy()),
    }
}

// ============================================================================
// ENTRY POINT
// ============================================================================

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::parse();
    let _logger = setup_logging(&config.log_level, config.log_dir.as_deref())?;

    let store = open_store(&config)?;

    match config.mode {
        Mode::Serve => {
            let web_config = WebUiConfig {
                port: config.port,
                host: config.host.clone(),
                static_dir: config.static_dir.clone(),
            };
            let limits = SessionLimits {
                idle_timeout: Duration::from_secs(config.session_idle_mins * 60),
                max_sessions: config.max_sessions.max(1),
            };
            let registry = match config.seed {
                Some(seed) => SessionRegistry::with_seed(store, seed),
                None => SessionRegistry::new(store),
            }
            .with_limits(limits);
            WebUiServer::with_registry(web_config, registry).start().await?;
        }
        Mode::Play => {
            let name = player_name(&config)?;
            let mut controller = GameController::new(&name, tile_source(config.seed), store)?;
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            let finished = play_in_terminal(&mut controller, stdin.lock(), &mut stdout)?;
            log::info!("👋 {} finished {} game(s)", controller.session().player_name(), finished);
        }
        Mode::Leaderboard => {
            let board = load_leaderboard(&*lock_store(&store));
            if board.is_empty() {
                println!("No games recorded yet.");
            }
            for (rank, record) in board.iter().enumerate() {
                println!("{:>3}. {:<20} {:>8}  {}", rank + 1, record.player_name, record.final_score, record.timestamp);
            }
        }
        Mode::History => {
            let name = player_name(&config)?;
            let name = name.trim();
            let (history, board) = {
                let guard = lock_store(&store);
                (load_recent_history(&*guard, name), load_leaderboard(&*guard))
            };
            if history.is_empty() {
                println!("No games recorded for {}.", name);
            }
            for record in history {
                println!("{} pts - {}", record.final_score, record.timestamp);
            }
            if let Some(rank) = rank_of(&board, name) {
                println!("Leaderboard rank: #{}", rank);
            }
        }
        Mode::Export => {
            let history = lock_store(&store).read(HISTORY_KEY);
            let written = export_records_to_path(&history, &config.output)?;
            println!("Exported {} games to {}", written, config.output.display());
        }
    }

    Ok(())
}

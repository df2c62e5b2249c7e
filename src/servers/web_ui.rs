use crate::data::{ResultRecord, SharedStore};
use crate::services::{GameView, Intent, SessionRegistry};
use crate::Game2048Error;
use axum::{
    extract::{Json, Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json as ResponseJson, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::net::SocketAddr;
use std::path::PathBuf;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

// API payloads
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct NewGameRequest {
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct NewGameResponse {
    pub session_id: String,
    pub view: GameView,
}

/// Either a direction word / key name, or a swipe vector in pixels.
///
/// Fields are kept as raw JSON so a mistyped intent is ignored like any
/// other unrecognized input instead of failing the request.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct MoveRequest {
    #[serde(default)]
    pub direction: Option<Value>,
    #[serde(default)]
    pub swipe: Option<Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
pub struct SwipeVector {
    pub dx: f64,
    pub dy: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct HistoryQuery {
    pub name: String,
}

#[derive(Serialize, Debug, Clone)]
pub struct ApiResponse {
    pub status: String,
    pub message: String,
}

impl MoveRequest {
    /// Any JSON body; anything that is not an object with the expected
    /// fields yields an empty request.
    fn from_body(body: Value) -> Self {
        if !body.is_object() {
            return Self::default();
        }
        serde_json::from_value(body).unwrap_or_default()
    }

    fn into_intent(self) -> Option<Intent> {
        if let Some(Value::String(direction)) = self.direction {
            return Some(Intent::Input(direction));
        }
        let SwipeVector { dx, dy } = serde_json::from_value(self.swipe?).ok()?;
        Some(Intent::Swipe { dx, dy })
    }
}

/// Maps library errors onto HTTP status codes.
pub struct ApiError(Game2048Error);

impl From<Game2048Error> for ApiError {
    fn from(error: Game2048Error) -> Self {
        Self(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            Game2048Error::InvalidPlayerName | Game2048Error::UnknownDirection(_) => {
                StatusCode::BAD_REQUEST
            }
            Game2048Error::SessionNotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            log::error!("❌ API error: {}", self.0);
        }

        let body = ApiResponse {
            status: "error".to_string(),
            message: self.0.to_string(),
        };
        (status, ResponseJson(body)).into_response()
    }
}

type ApiResult<T> = Result<ResponseJson<T>, ApiError>;

// Server configuration
#[derive(Debug, Clone)]
pub struct WebUiConfig {
    pub port: u16,
    pub host: String,
    /// Directory holding the browser front end.
    pub static_dir: PathBuf,
}

impl Default for WebUiConfig {
    fn default() -> Self {
        Self {
            port: 2048,
            host: "0.0.0.0".to_string(),
            static_dir: PathBuf::from("web"),
        }
    }
}

// Server
pub struct WebUiServer {
    config: WebUiConfig,
    registry: SessionRegistry,
}

impl WebUiServer {
    pub fn new(config: WebUiConfig, store: SharedStore) -> Self {
        Self::with_registry(config, SessionRegistry::new(store))
    }

    pub fn with_registry(config: WebUiConfig, registry: SessionRegistry) -> Self {
        Self { config, registry }
    }

    pub fn config(&self) -> &WebUiConfig {
        &self.config
    }

    pub async fn start(&self) -> Result<(), Box<dyn std::error::Error>> {
        let app = self.create_router();
        let addr: SocketAddr = format!("{}:{}", self.config.host, self.config.port).parse()?;
        let listener = TcpListener::bind(addr).await?;

        log::info!(
            "🌐 Aztec 2048 server starting on http://localhost:{}",
            self.config.port
        );

        axum::serve(listener, app).await?;
        Ok(())
    }

    pub fn create_router(&self) -> Router {
        let static_dir = self.config.static_dir.clone();
        Router::new()
            .route("/", get(serve_index).with_state(static_dir.clone()))
            .route("/api/status", get(api_status))
            .route("/api/games", post(api_new_game))
            .route("/api/games/{id}", get(api_get_game).delete(api_close_game))
            .route("/api/games/{id}/move", post(api_move))
            .route("/api/games/{id}/restart", post(api_restart))
            .route("/api/leaderboard", get(api_leaderboard))
            .route("/api/history", get(api_history))
            .with_state(self.registry.clone())
            .fallback_service(ServeDir::new(static_dir))
            .layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            )
    }
}

// Handlers
async fn serve_index(State(static_dir): State<PathBuf>) -> Html<String> {
    let index_content = tokio::fs::read_to_string(static_dir.join("index.html"))
        .await
        .unwrap_or_else(|_| {
            r#"<!DOCTYPE html>
<html><head><title>Aztec 2048</title></head>
<body>
<h1>Aztec 2048</h1>
<p>No front end found. Put index.html in the static directory, or use the JSON API under /api.</p>
</body></html>"#
                .to_string()
        });

    Html(index_content)
}

async fn api_status(State(registry): State<SessionRegistry>) -> ResponseJson<ApiResponse> {
    ResponseJson(ApiResponse {
        status: "ready".to_string(),
        message: format!(
            "Aztec 2048 server is running, {} active session(s)",
            registry.session_count().await
        ),
    })
}

async fn api_new_game(
    State(registry): State<SessionRegistry>,
    Json(request): Json<NewGameRequest>,
) -> ApiResult<NewGameResponse> {
    let (session_id, view) = registry.create_session(&request.name).await?;
    Ok(ResponseJson(NewGameResponse { session_id, view }))
}

async fn api_get_game(
    State(registry): State<SessionRegistry>,
    Path(id): Path<String>,
) -> ApiResult<GameView> {
    Ok(ResponseJson(registry.view(&id).await?))
}

async fn api_close_game(
    State(registry): State<SessionRegistry>,
    Path(id): Path<String>,
) -> ApiResult<ApiResponse> {
    if !registry.close_session(&id).await {
        return Err(Game2048Error::SessionNotFound(id).into());
    }
    Ok(ResponseJson(ApiResponse {
        status: "closed".to_string(),
        message: format!("Session {} closed", id),
    }))
}

async fn api_move(
    State(registry): State<SessionRegistry>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> ApiResult<GameView> {
    let view = match MoveRequest::from_body(body).into_intent() {
        Some(intent) => registry.apply_intent(&id, &intent).await?,
        None => registry.view(&id).await?,
    };
    Ok(ResponseJson(view))
}

async fn api_restart(
    State(registry): State<SessionRegistry>,
    Path(id): Path<String>,
) -> ApiResult<GameView> {
    Ok(ResponseJson(registry.restart(&id).await?))
}

async fn api_leaderboard(State(registry): State<SessionRegistry>) -> ResponseJson<Vec<ResultRecord>> {
    ResponseJson(registry.leaderboard())
}

async fn api_history(
    State(registry): State<SessionRegistry>,
    Query(query): Query<HistoryQuery>,
) -> ResponseJson<Vec<ResultRecord>> {
    ResponseJson(registry.recent_history(&query.name))
}

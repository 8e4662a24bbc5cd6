use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;
use service::{League, PlayerStore};

use crate::errors::ApiError;

/// Store handle shared by every handler. Any `PlayerStore` will do.
pub type SharedStore = Arc<dyn PlayerStore>;

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// `GET /league`: every player as JSON, most wins first.
async fn get_league(State(store): State<SharedStore>) -> Json<League> {
    Json(store.get_league().await)
}

/// `GET /players/:name`: the score as plain text, or an empty 404.
async fn get_player_score(
    State(store): State<SharedStore>,
    Path(name): Path<String>,
) -> Response {
    match store.find_player(&name).await {
        Some(player) => (StatusCode::OK, player.wins.to_string()).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

/// `POST /players/:name`: one more win for `name`.
async fn record_win(
    State(store): State<SharedStore>,
    Path(name): Path<String>,
) -> Result<StatusCode, ApiError> {
    store.record_win(&name).await?;
    Ok(StatusCode::ACCEPTED)
}

async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}

/// Build the full application router.
///
/// Unknown paths and unsupported methods on known paths both answer 404.
pub fn build_router(store: SharedStore, cors: CorsLayer) -> Router {
    let league = Router::new()
        .route("/league", get(get_league).fallback(not_found))
        .route(
            "/players/:name",
            get(get_player_score).post(record_win).fallback(not_found),
        );

    let public = Router::new().route("/health", get(health));

    public
        .merge(league)
        .fallback(not_found)
        .with_state(store)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}

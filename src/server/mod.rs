// SPDX-License-Identifier: MIT

//! HTTP boundary: JSON API plus static frontend assets.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::catalog;
use crate::config::AppConfig;
use crate::error::BridgeError;
use crate::screener;
use crate::voice::SessionProvider;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub provider: Arc<dyn SessionProvider>,
}

pub async fn serve(config: AppConfig, provider: Arc<dyn SessionProvider>) -> Result<(), BridgeError> {
    let port = config.port;
    let app = router(AppState { config, provider });

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    log::info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the full application router.
pub fn router(state: AppState) -> Router {
    let static_dir = state.config.static_dir.clone();

    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/sql-to-url", post(sql_to_url))
        .route("/api/screener/redirect", post(screener_redirect))
        .route("/api/signed-url", get(signed_url))
        .route("/api/getAgentId", get(get_agent_id))
        .route("/api/queries", get(list_queries))
        .nest_service("/static", ServeDir::new(&static_dir))
        .route_service("/avatar.html", ServeFile::new(static_dir.join("avatar.html")))
        .fallback_service(ServeFile::new(static_dir.join("index.html")))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

#[derive(Debug, Deserialize)]
pub struct SqlQueryRequest {
    #[serde(rename = "sqlQuery")]
    pub sql_query: Option<String>,
}

impl SqlQueryRequest {
    /// Boundary-level validation: the translator itself accepts anything,
    /// but an absent or blank query is a caller mistake.
    fn query(&self) -> Option<&str> {
        self.sql_query
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
    }
}

pub async fn sql_to_url(Json(payload): Json<SqlQueryRequest>) -> (StatusCode, Json<Value>) {
    let Some(query) = payload.query() else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "SQL query is required" })),
        );
    };

    log::info!("Converting SQL query to URL: {}", query);
    let url = screener::translate(query);
    log::info!("Generated URL: {}", url);

    (StatusCode::OK, Json(json!({ "url": url })))
}

pub async fn screener_redirect(Json(payload): Json<SqlQueryRequest>) -> (StatusCode, Json<Value>) {
    let Some(query) = payload.query() else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "SQL query is required" })),
        );
    };

    let redirect_url = screener::translate(query);

    (
        StatusCode::OK,
        Json(json!({
            "success": true,
            "redirectUrl": redirect_url,
            "query": query,
        })),
    )
}

#[derive(Debug, Deserialize)]
pub struct SignedUrlParams {
    pub opponent: Option<String>,
    pub mode: Option<String>,
    pub language: Option<String>,
}

pub async fn signed_url(
    State(state): State<AppState>,
    Query(params): Query<SignedUrlParams>,
) -> (StatusCode, Json<Value>) {
    log::info!(
        "Getting signed URL for opponent: {:?}, mode: {:?}, language: {:?}",
        params.opponent,
        params.mode,
        params.language
    );

    let Some(agent_id) = state.config.agent_id_for(params.opponent.as_deref()) else {
        log::error!("No agent configured for opponent {:?}", params.opponent);
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Failed to get signed URL" })),
        );
    };

    log::info!("Using agent ID: {}", agent_id);

    match state.provider.signed_url(agent_id).await {
        Ok(url) => (StatusCode::OK, Json(json!({ "signedUrl": url }))),
        Err(e) => {
            log::error!("Error getting signed URL: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to get signed URL" })),
            )
        }
    }
}

pub async fn get_agent_id(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    match &state.config.agent_id {
        Some(agent_id) => (StatusCode::OK, Json(json!({ "agentId": agent_id }))),
        None => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "AGENT_ID not configured" })),
        ),
    }
}

pub async fn list_queries(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let path = &state.config.queries_path;
    if !path.exists() {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Queries file not found" })),
        );
    }

    match catalog::load(path) {
        Ok(rows) => (StatusCode::OK, Json(json!(rows))),
        Err(e) => {
            log::error!("Error reading queries CSV: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to load queries" })),
            )
        }
    }
}

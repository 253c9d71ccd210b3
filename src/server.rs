use crate::config::{AppConfig, MapConfig};
use crate::data::DashboardData;
use crate::layout::{page_layout, PageLayout};
use crate::options::candidate_options;
use crate::render::{render, DashboardFigures, Selection, BOUNDARIES_URL};
use crate::types::{DropdownOption, Office, UnknownOffice};
use anyhow::{Context, Result};
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use bytes::Bytes;
use serde::Deserialize;
use std::path::Path;
use std::sync::Arc;
use tokio::signal;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

#[derive(Clone)]
pub struct AppState {
    pub data: Arc<DashboardData>,
    pub map: Arc<MapConfig>,
    /// Boundary collection serialized once at startup.
    pub boundaries_json: Bytes,
}

impl AppState {
    pub fn new(data: DashboardData, map: MapConfig) -> Result<Self> {
        let boundaries_json = serde_json::to_vec(&data.boundaries.collection)
            .context("Failed to serialize boundary collection")?;
        Ok(Self {
            data: Arc::new(data),
            map: Arc::new(map),
            boundaries_json: Bytes::from(boundaries_json),
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    UnknownOffice(#[from] UnknownOffice),
    #[error("invalid query: {0}")]
    Query(#[from] QueryRejection),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (StatusCode::BAD_REQUEST, body).into_response()
    }
}

#[derive(Deserialize)]
pub struct CandidatesParams {
    year: u16,
    office: String,
}

#[derive(Deserialize)]
pub struct FiguresParams {
    year: u16,
    office: String,
    candidate: Option<String>,
}

pub fn build_app(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .route("/api/layout", get(layout_handler))
        .route("/api/candidates", get(candidates_handler))
        .route("/api/figures", get(figures_handler))
        .route(BOUNDARIES_URL, get(boundaries_handler))
        .route("/api/health", get(health_handler))
        .fallback_service(ServeDir::new(static_dir))
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn start_server(config: AppConfig, data: DashboardData) -> Result<()> {
    let state = AppState::new(data, config.map.clone())?;
    let app = build_app(state, &config.server.static_dir);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Dashboard listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server failed")?;

    tracing::info!("Server shut down gracefully");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

async fn layout_handler() -> Json<PageLayout> {
    Json(page_layout())
}

async fn candidates_handler(
    params: Result<Query<CandidatesParams>, QueryRejection>,
) -> Result<Json<Vec<DropdownOption>>, ApiError> {
    let Query(params) = params?;
    let options = candidate_options(params.year, &params.office);
    if Office::from_label(&params.office).is_none() {
        tracing::warn!(office = %params.office, "candidate options requested for unknown office");
    }
    Ok(Json(options))
}

async fn figures_handler(
    State(state): State<AppState>,
    params: Result<Query<FiguresParams>, QueryRejection>,
) -> Result<Json<DashboardFigures>, ApiError> {
    let Query(params) = params?;
    let office: Office = params.office.parse()?;
    let candidate = params.candidate.filter(|c| !c.trim().is_empty());

    let selection = Selection {
        year: params.year,
        office,
        candidate,
    };
    Ok(Json(render(&state.data, &state.map, &selection)))
}

async fn boundaries_handler(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/geo+json")],
        state.boundaries_json.clone(),
    )
}

async fn health_handler(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "records": state.data.records.len(),
        "precincts": state.data.boundaries.geoids.len(),
    }))
}

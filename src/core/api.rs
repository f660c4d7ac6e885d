//! HTTP API: Places proxy plus classified cafe cards
//!
//! Endpoints:
//! - GET /health - Health check
//! - POST /api/nearby - Nearby cafe search (raw Places JSON)
//! - GET /api/photo?name= - Photo media lookup (raw Places JSON)
//! - POST /api/cafes - Nearby cafes adapted into scored cards

use axum::{
    extract::{Query, State},
    response::Json,
    routing::{get, post},
    Router,
};
use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::core::adapter::CafeAdapter;
use crate::core::config::ProxyConfig;
use crate::core::error::ProxyError;
use crate::core::places::{NearbyRequest, PlacesClient};
use crate::types::{CafeView, Coordinates};

/// App state
pub struct AppState {
    pub client: PlacesClient,
    pub adapter: CafeAdapter,
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub api_key_configured: bool,
}

/// Photo lookup query
#[derive(Debug, Deserialize)]
pub struct PhotoQuery {
    pub name: Option<String>,
}

/// Create the API router
pub fn create_router(config: ProxyConfig) -> Router {
    let state = Arc::new(AppState {
        client: PlacesClient::new(config),
        adapter: CafeAdapter::new(),
    });

    Router::new()
        .route("/health", get(health))
        .route("/api/nearby", post(nearby))
        .route("/api/photo", get(photo))
        .route("/api/cafes", post(cafes))
        // Browser front ends call the proxy from their own origin
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check endpoint
async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: crate::VERSION.to_string(),
        api_key_configured: state.client.config().api_key.is_some(),
    })
}

/// Forward a nearby search
async fn nearby(
    State(state): State<Arc<AppState>>,
    Json(req): Json<NearbyRequest>,
) -> Result<Json<Value>, ProxyError> {
    let data = state.client.search_nearby(&req).await.map_err(log_failure)?;
    Ok(Json(data))
}

/// Forward a photo media lookup
async fn photo(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PhotoQuery>,
) -> Result<Json<Value>, ProxyError> {
    let name = query.name.unwrap_or_default();
    let data = state.client.photo_media(&name).await.map_err(log_failure)?;
    Ok(Json(data))
}

/// Nearby search, adapted and classified for the requesting user
async fn cafes(
    State(state): State<Arc<AppState>>,
    Json(req): Json<NearbyRequest>,
) -> Result<Json<Vec<CafeView>>, ProxyError> {
    let response = state.client.nearby_places(&req).await.map_err(log_failure)?;
    let user = req.coordinates().ok().map(|(lat, lng)| Coordinates::new(lat, lng));
    let today = Local::now().weekday();

    let views = state.adapter.views(&response.places, user, today);
    log::info!("Served {} cafe cards", views.len());
    Ok(Json(views))
}

/// Log transport and configuration failures; upstream errors are logged by the client
fn log_failure(err: ProxyError) -> ProxyError {
    match &err {
        ProxyError::MissingApiKey => log::error!("Missing GOOGLE_PLACES_API_KEY"),
        ProxyError::NearbyFetch(e) => log::error!("Nearby search error: {}", e),
        ProxyError::PhotoFetch(e) => log::error!("Photo fetch error: {}", e),
        ProxyError::UnexpectedResponse(e) => log::error!("Unexpected nearby response: {}", e),
        _ => {}
    }
    err
}

/// Run the API server
pub async fn run_server(addr: &str, config: ProxyConfig) -> Result<(), Box<dyn std::error::Error>> {
    let router = create_router(config);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!("Server running on http://{}", listener.local_addr()?);
    log::info!("  POST /api/nearby      - Nearby cafe search");
    log::info!("  GET  /api/photo?name= - Photo lookup");
    log::info!("  POST /api/cafes       - Scored cafe cards");
    log::info!("  GET  /health          - Health check");
    axum::serve(listener, router).await?;
    Ok(())
}

//! HTTP transport: routing, marshalling and status mapping over the core.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use tracing::info;

use crate::api::types::{BeaconReading, ConsolidateRequest, ConsolidateResponse, MessageBody};
use crate::consolidate::Consolidator;
use crate::core::Beacon;
use crate::error::Error;
use crate::registry::BeaconRegistry;

/// Shared service state: the injected registry plus the orchestrator.
pub struct AppState {
    pub registry: BeaconRegistry,
    pub consolidator: Consolidator,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            registry: BeaconRegistry::new(),
            consolidator: Consolidator::new(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the service router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/topsecret", post(consolidate))
        .route("/topsecret_split/:beacon_name", post(submit_beacon))
        .route("/topsecret_split", get(consolidate_split))
        .with_state(state)
}

/// `POST /topsecret`: consolidate three beacon records supplied together.
async fn consolidate(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ConsolidateRequest>,
) -> Result<Json<ConsolidateResponse>, ApiError> {
    let beacons: Vec<Beacon> = request.beacons.into_iter().map(Beacon::from).collect();
    let consolidation = state.consolidator.consolidate(&beacons)?;
    info!(
        x = consolidation.position.x,
        y = consolidation.position.y,
        "emitter located"
    );
    Ok(Json(consolidation.into()))
}

/// `POST /topsecret_split/{beacon_name}`: store one beacon's data for a
/// later consolidation.
async fn submit_beacon(
    State(state): State<Arc<AppState>>,
    Path(beacon_name): Path<String>,
    Json(reading): Json<BeaconReading>,
) -> Result<Json<MessageBody>, ApiError> {
    let stored = state
        .registry
        .submit(&beacon_name, reading.into_beacon(&beacon_name))?;
    info!(beacon = %stored, "stored beacon reading");
    Ok(Json(MessageBody::new("stored")))
}

/// `GET /topsecret_split`: consolidate whatever the registry holds.
async fn consolidate_split(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ConsolidateResponse>, ApiError> {
    let snapshot = state.registry.snapshot();
    let consolidation = state.consolidator.consolidate_snapshot(&snapshot)?;
    info!(
        x = consolidation.position.x,
        y = consolidation.position.y,
        "emitter located from stored readings"
    );
    Ok(Json(consolidation.into()))
}

/// Core error carried to the wire with its status mapping.
#[derive(Debug)]
pub struct ApiError(pub Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

/// Missing data maps to 404; bad submissions map to 400.
pub fn status_for(err: &Error) -> StatusCode {
    match err {
        Error::IncompleteData => StatusCode::NOT_FOUND,
        Error::InvalidBeaconName { .. } | Error::InvalidMeasurement { .. } => {
            StatusCode::BAD_REQUEST
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        info!(error = %self.0, "request rejected");
        let body = serde_json::json!({ "message": self.0.to_string() });
        (status_for(&self.0), Json(body)).into_response()
    }
}

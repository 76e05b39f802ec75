use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use log::info;

use super::error_response;
use super::mappers::AvailabilityMapper;
use crate::domain::date_grid;
use crate::AppState;
use shared::{
    AvailabilityMapResponse, DateAvailabilityResponse, ReplaceAvailabilityRequest,
    SaveAvailabilityResponse,
};

/// Create a router for the stored availability map
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_availability).put(replace_availability))
        .route("/save", post(save_availability))
        .route("/:date", get(get_date_availability))
}

fn map_response(state: &AppState) -> AvailabilityMapResponse {
    let service = &state.availability_service;
    AvailabilityMapResponse {
        garage_id: service.garage_id().to_string(),
        entries: AvailabilityMapper::entries_to_dto(&service.entries()),
    }
}

/// Every stored classification, keyed by date
async fn list_availability(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/availability");

    (StatusCode::OK, Json(map_response(&state))).into_response()
}

/// Replace the whole map. Nothing changes unless every entry is valid and
/// the new map was written to disk.
async fn replace_availability(
    State(state): State<AppState>,
    Json(request): Json<ReplaceAvailabilityRequest>,
) -> impl IntoResponse {
    info!("PUT /api/availability - {} entries", request.entries.len());

    let entries = match AvailabilityMapper::entries_to_domain(&request.entries) {
        Ok(entries) => entries,
        Err(e) => return error_response("replace availability", e),
    };

    match state.availability_service.replace_all(entries).await {
        Ok(_) => (StatusCode::OK, Json(map_response(&state))).into_response(),
        Err(e) => error_response("replace availability", e),
    }
}

/// Effective availability for one date; unset dates report the default working day
async fn get_date_availability(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> impl IntoResponse {
    info!("GET /api/availability/{}", date);

    let date = match AvailabilityMapper::parse_date(&date) {
        Ok(date) => date,
        Err(e) => return error_response("get availability", e),
    };

    let (availability, is_stored) = state.availability_service.availability_for(date);
    let response = DateAvailabilityResponse {
        date: date_grid::iso_date(date),
        availability: AvailabilityMapper::to_dto(&availability),
        is_stored,
    };
    (StatusCode::OK, Json(response)).into_response()
}

/// Persist the in-memory map
async fn save_availability(State(state): State<AppState>) -> impl IntoResponse {
    info!("POST /api/availability/save");

    match state.availability_service.save().await {
        Ok(saved_entries) => {
            let response = SaveAvailabilityResponse {
                saved_entries,
                success_message: format!(
                    "Saved {} entries for garage '{}'",
                    saved_entries,
                    state.availability_service.garage_id()
                ),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => error_response("save availability", e),
    }
}

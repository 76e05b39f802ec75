use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post, put},
    Router,
};
use log::info;

use super::error_response;
use super::mappers::{AvailabilityMapper, CalendarMapper};
use crate::domain::{date_grid, AvailabilityError, ChoiceOutcome};
use crate::AppState;
use shared::{ChooseDayTypeRequest, EditTimeRangeRequest, SelectDateRequest, SelectionResponse};

/// Create a router for the date-selection flow
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(get_selection).post(select_date).delete(clear_selection),
        )
        .route("/day-type", post(choose_day_type))
        .route("/time-range", put(edit_time_range))
        .route("/confirm", post(confirm_time_range))
        .route("/cancel", post(cancel_time_range))
}

/// Current selection plus the visible week, which reflects any store change
fn selection_response(state: &AppState, operation: &str, success_message: String) -> Response {
    let service = &state.availability_service;
    match service.current_week() {
        Ok(week) => {
            let response = SelectionResponse {
                selection: CalendarMapper::to_selection_dto(&service.selection()),
                week: CalendarMapper::to_week_view_dto(&week),
                success_message,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => error_response(operation, e),
    }
}

async fn get_selection(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/selection");

    selection_response(&state, "get selection", "Current selection".to_string())
}

/// Select a day of the visible month
async fn select_date(
    State(state): State<AppState>,
    Json(request): Json<SelectDateRequest>,
) -> impl IntoResponse {
    info!("POST /api/selection - request: {:?}", request);

    let date = match AvailabilityMapper::parse_date(&request.date) {
        Ok(date) => date,
        Err(e) => return error_response("select date", e),
    };

    match state.availability_service.select_date(date) {
        Ok(_) => selection_response(
            &state,
            "select date",
            format!("Selected {}", date_grid::format_date_for_display(date)),
        ),
        Err(e) => error_response("select date", e),
    }
}

/// Classify the selected date. Weekend and holiday are stored immediately;
/// working opens the time-range editor.
async fn choose_day_type(
    State(state): State<AppState>,
    Json(request): Json<ChooseDayTypeRequest>,
) -> impl IntoResponse {
    info!("POST /api/selection/day-type - request: {:?}", request);

    match state.availability_service.choose_day_type(request.day_type).await {
        Ok(ChoiceOutcome::EditorOpened(slot)) => selection_response(
            &state,
            "choose day type",
            format!("Editing hours {}-{}", slot.start_str(), slot.end_str()),
        ),
        Ok(ChoiceOutcome::Stored(availability)) => selection_response(
            &state,
            "choose day type",
            format!("Marked as {}", availability.day_type),
        ),
        Err(e) => error_response("choose day type", e),
    }
}

/// Update the draft range in the open editor
async fn edit_time_range(
    State(state): State<AppState>,
    Json(request): Json<EditTimeRangeRequest>,
) -> impl IntoResponse {
    info!("PUT /api/selection/time-range - request: {:?}", request);

    let result = AvailabilityMapper::slot_to_domain(&shared::TimeSlot {
        start: request.start,
        end: request.end,
    })
    .and_then(|slot| {
        state.availability_service.edit_time_range(slot)?;
        Ok::<_, AvailabilityError>(slot)
    });

    match result {
        Ok(slot) => selection_response(
            &state,
            "edit time range",
            format!("Hours set to {}-{}", slot.start_str(), slot.end_str()),
        ),
        Err(e) => error_response("edit time range", e),
    }
}

/// Store the draft range as a working day and close the editor
async fn confirm_time_range(State(state): State<AppState>) -> impl IntoResponse {
    info!("POST /api/selection/confirm");

    match state.availability_service.confirm_time_range().await {
        Ok((date, _)) => selection_response(
            &state,
            "confirm time range",
            format!("Saved hours for {}", date_grid::format_date_for_display(date)),
        ),
        Err(e) => error_response("confirm time range", e),
    }
}

/// Close the editor without touching the store
async fn cancel_time_range(State(state): State<AppState>) -> impl IntoResponse {
    info!("POST /api/selection/cancel");

    match state.availability_service.cancel_time_range() {
        Ok(date) => selection_response(
            &state,
            "cancel time range",
            format!("Left {} unchanged", date_grid::format_date_for_display(date)),
        ),
        Err(e) => error_response("cancel time range", e),
    }
}

async fn clear_selection(State(state): State<AppState>) -> impl IntoResponse {
    info!("DELETE /api/selection");

    state.availability_service.clear_selection();
    selection_response(&state, "clear selection", "Selection cleared".to_string())
}

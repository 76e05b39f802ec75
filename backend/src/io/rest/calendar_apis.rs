use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use chrono::Datelike;
use log::info;
use serde::Deserialize;

use super::error_response;
use super::mappers::CalendarMapper;
use crate::domain::{date_grid, AvailabilityError, WeekView};
use crate::AppState;
use shared::{CurrentDateResponse, NavigateWeekResponse, UpdateCalendarFocusRequest};

// Query parameters for calendar month API
#[derive(Debug, Deserialize)]
pub struct CalendarMonthQuery {
    pub month: u32, // 0 = January
    pub year: i32,
}

/// Create a router for calendar related APIs
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/current-date", get(get_current_date))
        .route("/month", get(get_calendar_month))
        .route("/week", get(get_current_week))
        .route("/week/previous", post(navigate_previous_week))
        .route("/week/next", post(navigate_next_week))
        .route("/week/today", post(navigate_to_today))
        .route("/focus", post(set_calendar_focus))
}

fn week_response(
    operation: &str,
    result: Result<WeekView, AvailabilityError>,
) -> axum::response::Response {
    match result {
        Ok(week) => {
            let week = CalendarMapper::to_week_view_dto(&week);
            let response = NavigateWeekResponse {
                success_message: format!(
                    "Showing week {} of {} in {} {}",
                    week.cursor.week_index + 1,
                    week.cursor.total_weeks,
                    week.month_name,
                    week.cursor.year
                ),
                week,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => error_response(operation, e),
    }
}

/// Get current date information from the backend
async fn get_current_date() -> impl IntoResponse {
    info!("GET /api/calendar/current-date");

    let today = date_grid::today();
    let response = CurrentDateResponse {
        month: today.month0(),
        year: today.year(),
        day: today.day(),
        formatted_date: date_grid::format_date_for_display(today),
        iso_date: date_grid::iso_date(today),
    };
    (StatusCode::OK, Json(response)).into_response()
}

/// Full month grid with availability; does not move the visible week
async fn get_calendar_month(
    State(state): State<AppState>,
    Query(query): Query<CalendarMonthQuery>,
) -> impl IntoResponse {
    info!("GET /api/calendar/month - query: {:?}", query);

    match state.availability_service.month_grid(query.month, query.year) {
        Ok(grid) => (StatusCode::OK, Json(CalendarMapper::to_month_grid_dto(&grid))).into_response(),
        Err(e) => error_response("build month grid", e),
    }
}

async fn get_current_week(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/calendar/week");

    match state.availability_service.current_week() {
        Ok(week) => (StatusCode::OK, Json(CalendarMapper::to_week_view_dto(&week))).into_response(),
        Err(e) => error_response("get current week", e),
    }
}

async fn navigate_previous_week(State(state): State<AppState>) -> impl IntoResponse {
    info!("POST /api/calendar/week/previous");

    week_response("navigate to previous week", state.availability_service.previous_week())
}

async fn navigate_next_week(State(state): State<AppState>) -> impl IntoResponse {
    info!("POST /api/calendar/week/next");

    week_response("navigate to next week", state.availability_service.next_week())
}

async fn navigate_to_today(State(state): State<AppState>) -> impl IntoResponse {
    info!("POST /api/calendar/week/today");

    week_response("navigate to today", state.availability_service.reset_to_today())
}

/// Show a month directly, starting at its first week
async fn set_calendar_focus(
    State(state): State<AppState>,
    Json(request): Json<UpdateCalendarFocusRequest>,
) -> impl IntoResponse {
    info!("POST /api/calendar/focus - request: {:?}", request);

    week_response(
        "set calendar focus",
        state.availability_service.select_month(request.month, request.year),
    )
}

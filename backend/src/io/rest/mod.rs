//! # REST API Interface Layer
//!
//! Provides HTTP REST endpoints for the garage availability calendar.
//! This layer handles:
//! - HTTP request/response serialization and deserialization
//! - Mapping shared DTOs to domain types (and rejecting invalid input)
//! - Error translation from domain errors to HTTP status codes
//! - Request logging
//!
//! Status codes: validation failures are 400, operations that do not fit the
//! current selection state are 409, storage failures are 500.

pub mod availability_apis;
pub mod calendar_apis;
pub mod mappers;
pub mod selection_apis;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::{error, warn};

use crate::domain::{AvailabilityError, SelectionError};

/// HTTP status for a domain error
pub fn status_for(error: &AvailabilityError) -> StatusCode {
    match error {
        AvailabilityError::Calendar(_)
        | AvailabilityError::TimeSlot(_)
        | AvailabilityError::InvalidDate(_)
        | AvailabilityError::Selection(SelectionError::NotSelectable(_)) => StatusCode::BAD_REQUEST,
        AvailabilityError::Selection(_) => StatusCode::CONFLICT,
        AvailabilityError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Log a failed operation and turn it into a plain-text error response
pub fn error_response(operation: &str, error: AvailabilityError) -> Response {
    let status = status_for(&error);
    if status.is_server_error() {
        error!("Failed to {}: {:#}", operation, error);
        (status, format!("Failed to {}", operation)).into_response()
    } else {
        warn!("Rejected request to {}: {}", operation, error);
        (status, error.to_string()).into_response()
    }
}


#[cfg(test)]
pub(crate) mod test_support {
    use axum::{body::Body, http::Request, response::Response, Router};
    use serde::de::DeserializeOwned;
    use std::path::Path;
    use tower::ServiceExt;

    use crate::config::AppConfig;
    use crate::{create_router, initialize_backend};

    pub async fn test_app(data_directory: &Path) -> anyhow::Result<Router> {
        let config = AppConfig {
            data_directory: data_directory.to_path_buf(),
            ..AppConfig::default()
        };
        let app_state = initialize_backend(&config).await?;
        Ok(create_router(app_state, &config.cors_origin))
    }

    pub async fn send(app: &Router, request: Request<Body>) -> anyhow::Result<Response> {
        Ok(app.clone().oneshot(request).await?)
    }

    pub fn json_request<T: serde::Serialize>(method: &str, uri: &str, body: &T) -> anyhow::Result<Request<Body>> {
        Ok(Request::builder()
            .uri(uri)
            .method(method)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(body)?))?)
    }

    pub fn empty_request(method: &str, uri: &str) -> anyhow::Result<Request<Body>> {
        Ok(Request::builder().uri(uri).method(method).body(Body::empty())?)
    }

    pub async fn read_json<T: DeserializeOwned>(response: Response) -> anyhow::Result<T> {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

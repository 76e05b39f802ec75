//! # Garage Availability Backend
//!
//! Calendar backend for recording which days a garage is open, and when.
//!
//! This crate brings together:
//! - **Domain**: month grids, week navigation, the selection flow and the
//!   availability store
//! - **Storage**: per-garage YAML files
//! - **IO**: the REST API consumed by the calendar widget
//!
//! ## Architecture
//!
//! ```text
//! Calendar widget
//!     ↓
//! IO Layer (REST API, mappers)
//!     ↓
//! Domain Layer (AvailabilityService)
//!     ↓
//! Storage Layer (YAML files)
//! ```

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use anyhow::Result;
use axum::{
    http::{HeaderValue, Method},
    Router,
};
use log::{info, warn};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::config::AppConfig;
use crate::domain::AvailabilityService;
use crate::storage::{AvailabilityRepository, AvailabilityStorage, DataConnection};

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub availability_service: AvailabilityService,
}

/// Initialize the backend and load the garage's stored availability
pub async fn initialize_backend(config: &AppConfig) -> Result<AppState> {
    info!("Setting up data directory {:?}", config.data_directory);
    let connection = DataConnection::new(&config.data_directory)?;
    let storage: Arc<dyn AvailabilityStorage> = Arc::new(AvailabilityRepository::new(connection));

    info!("Setting up domain model for garage '{}'", config.garage_id);
    let availability_service = AvailabilityService::new(config.garage_id.clone(), storage)?;
    availability_service.load().await?;

    Ok(AppState {
        availability_service,
    })
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, cors_origin: &str) -> Router {
    // CORS setup to allow the widget to make requests
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);
    let cors = match cors_origin.parse::<HeaderValue>() {
        Ok(origin) => cors.allow_origin(origin),
        Err(e) => {
            warn!("Invalid CORS origin '{}' ({}), allowing any origin", cors_origin, e);
            cors.allow_origin(Any)
        }
    };

    let api_routes = Router::new()
        .nest("/availability", io::availability_apis::router())
        .nest("/calendar", io::calendar_apis::router())
        .nest("/selection", io::selection_apis::router());

    Router::new()
        .nest("/api", api_routes)
        .layer(cors)
        .with_state(app_state)
}

//! Web layer - axum routes that render the core operations as HTML pages.
//!
//! Handlers stay thin: they pull inputs out of the request, call one `core`
//! operation against the shared connection, and render the returned view model.

/// Error-to-response mapping
pub mod error;
/// Request handlers, one per page
pub mod handlers;
/// Staff-only access control
pub mod staff;
/// HTML rendering of view models
pub mod templates;

use crate::config::users::UserDirectory;
use axum::{Router, middleware, routing::get};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Path of the staff moderation page, also the redirect target after a decision.
pub const APPROVE_CARS_PATH: &str = "/approve_cars";

/// Shared state available to every handler.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Data store for all car operations
    pub db: DatabaseConnection,
    /// Users who may authenticate, for the staff check
    pub users: Arc<UserDirectory>,
}

impl AppState {
    /// Creates the state shared by all requests.
    #[must_use]
    pub fn new(db: DatabaseConnection, users: UserDirectory) -> Self {
        Self {
            db,
            users: Arc::new(users),
        }
    }
}

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    let moderation = Router::new()
        .route(
            APPROVE_CARS_PATH,
            get(handlers::approve_cars).post(handlers::moderate_car),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            staff::require_staff,
        ));

    Router::new()
        .route("/", get(handlers::index))
        .route("/cars", get(handlers::cars))
        .route("/cars/:id", get(handlers::car_detail))
        .route("/search", get(handlers::search))
        .merge(moderation)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

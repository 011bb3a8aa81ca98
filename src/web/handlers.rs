//! Request handlers. Each one extracts its inputs, calls a single `core`
//! operation and renders the result.

use crate::{
    core::{car, listing, moderation, search},
    errors::Result,
    web::{
        APPROVE_CARS_PATH, AppState,
        templates::{CarDetail, Template},
    },
};
use axum::{
    Form,
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;

/// Query string of the listing page
#[derive(Debug, Default, Deserialize)]
pub struct ListingQuery {
    /// Requested page, kept raw so malformed values can fall back to a default
    pub page: Option<String>,
}

/// Fields posted by the moderation form
#[derive(Debug, Default, Deserialize)]
pub struct ModerationForm {
    /// Identifier of the car being decided on
    pub car_id: Option<String>,
    /// `approve` or `reject`
    pub action: Option<String>,
}

/// Plain 302 redirect, as browsers expect after a form post.
fn found(location: &'static str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
}

/// GET / - sends visitors to the listing
pub async fn index() -> Response {
    found("/cars")
}

/// GET /cars
pub async fn cars(
    State(state): State<AppState>,
    Query(query): Query<ListingQuery>,
) -> Result<Html<String>> {
    let listing = listing::list_approved_cars(&state.db, query.page.as_deref()).await?;
    Ok(Html(listing.render()))
}

/// GET /cars/:id
pub async fn car_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>> {
    let single_car = car::get_car(&state.db, &id).await?;
    Ok(Html(CarDetail { single_car }.render()))
}

/// GET /search
pub async fn search(
    State(state): State<AppState>,
    Query(filters): Query<search::SearchFilters>,
) -> Result<Html<String>> {
    let results = search::search_cars(&state.db, &filters).await?;
    Ok(Html(results.render()))
}

/// GET /approve_cars (staff only)
pub async fn approve_cars(State(state): State<AppState>) -> Result<Html<String>> {
    let pending = moderation::pending_cars(&state.db).await?;
    Ok(Html(pending.render()))
}

/// POST /approve_cars (staff only) - applies the decision, then reloads the list
pub async fn moderate_car(
    State(state): State<AppState>,
    Form(form): Form<ModerationForm>,
) -> Result<Response> {
    moderation::moderate_car(&state.db, form.car_id.as_deref(), form.action.as_deref()).await?;
    Ok(found(APPROVE_CARS_PATH))
}

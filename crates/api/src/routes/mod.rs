pub mod favorite;
pub mod health;
pub mod inquiry;
pub mod property;
pub mod stats;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /properties              list (filtered), create
/// /properties/{id}         detail (with images), full update, delete
///
/// /stats                   dashboard counts
///
/// /favorites               favorited properties
/// /favorites/{id}          idempotent add / remove
///
/// /inquiries               list (with property columns), create
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/properties", property::router())
        .nest("/stats", stats::router())
        .nest("/favorites", favorite::router())
        .nest("/inquiries", inquiry::router())
}

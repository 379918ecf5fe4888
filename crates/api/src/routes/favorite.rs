//! Route definitions for the `/favorites` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::favorite;
use crate::state::AppState;

/// Routes mounted at `/favorites`.
///
/// ```text
/// GET    /        -> list
/// POST   /{id}    -> add
/// DELETE /{id}    -> remove
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(favorite::list))
        .route("/{id}", post(favorite::add).delete(favorite::remove))
}

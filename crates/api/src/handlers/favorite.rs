//! Handlers for the `/favorites` resource.
//!
//! Favorites are a single flag per property; both toggle directions are
//! idempotent, so repeated calls are success, not errors.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use inmovista_core::types::DbId;
use inmovista_db::models::property::Property;
use inmovista_db::repositories::FavoriteRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/favorites -- the favorited properties, newest favorite first.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Property>>> {
    let properties = FavoriteRepo::list_properties(&state.pool).await?;
    Ok(Json(properties))
}

/// POST /api/favorites/{id}
///
/// Favoriting a property that is already favorited is a no-op; favoriting
/// a nonexistent property is rejected as a constraint conflict.
pub async fn add(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    FavoriteRepo::add(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/favorites/{id} -- removing a non-favorite is a no-op.
pub async fn remove(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    FavoriteRepo::remove(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

//! Handlers for the `/properties` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use inmovista_core::error::CoreError;
use inmovista_core::types::DbId;
use inmovista_db::models::property::{
    CreateProperty, Property, PropertyFilter, PropertyWithImages, UpdateProperty,
};
use inmovista_db::repositories::PropertyRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/properties
///
/// Optional `type`, `operation`, `minPrice`, `maxPrice` query parameters
/// narrow the result; malformed values are rejected with 400 before the
/// store is touched. Results are ordered featured-first, then newest-first.
/// Image sets are not included in the listing.
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<PropertyFilter>,
) -> AppResult<Json<Vec<Property>>> {
    let properties = PropertyRepo::list(&state.pool, &filter).await?;
    Ok(Json(properties))
}

/// GET /api/properties/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<PropertyWithImages>> {
    let property = PropertyRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Property",
            id,
        }))?;
    let images = PropertyRepo::find_images(&state.pool, id).await?;
    Ok(Json(PropertyWithImages { property, images }))
}

/// POST /api/properties
///
/// Inserts the property and its image list as one atomic unit.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProperty>,
) -> AppResult<(StatusCode, Json<PropertyWithImages>)> {
    input.validate()?;
    let (property, images) = PropertyRepo::create_with_images(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(PropertyWithImages { property, images })))
}

/// PUT /api/properties/{id}
///
/// Full overwrite: every attribute is replaced and the image set is
/// swapped for the supplied list, atomically.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProperty>,
) -> AppResult<Json<PropertyWithImages>> {
    input.validate()?;
    let (property, images) = PropertyRepo::update_with_images(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Property",
            id,
        }))?;
    Ok(Json(PropertyWithImages { property, images }))
}

/// DELETE /api/properties/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = PropertyRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Property",
            id,
        }))
    }
}

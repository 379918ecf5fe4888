//! Handlers for the `/inquiries` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use inmovista_db::models::inquiry::{CreateInquiry, Inquiry, InquiryWithProperty};
use inmovista_db::repositories::InquiryRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/inquiries
///
/// All inquiries newest-first, each carrying the title and main image of
/// its property (null once the property has been deleted).
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<InquiryWithProperty>>> {
    let inquiries = InquiryRepo::list_with_property(&state.pool).await?;
    Ok(Json(inquiries))
}

/// POST /api/inquiries
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateInquiry>,
) -> AppResult<(StatusCode, Json<Inquiry>)> {
    input.validate()?;
    let inquiry = InquiryRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(inquiry)))
}

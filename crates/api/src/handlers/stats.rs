//! Handler for the dashboard stats endpoint.

use axum::extract::State;
use axum::Json;
use inmovista_db::models::stats::DashboardStats;
use inmovista_db::repositories::StatsRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/stats -- `{total, active, sold, inquiries}`.
///
/// The four counts run as independent statements; they may reflect
/// slightly different instants, which is acceptable for an informational
/// dashboard.
pub async fn get(State(state): State<AppState>) -> AppResult<Json<DashboardStats>> {
    let stats = StatsRepo::dashboard(&state.pool).await?;
    Ok(Json(stats))
}

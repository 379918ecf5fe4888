//! Dashboard aggregate counts.

use serde::Serialize;

/// Independent counts for the admin dashboard. The four values may reflect
/// different instants; no cross-count consistency is guaranteed.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardStats {
    pub total: i64,
    pub active: i64,
    pub sold: i64,
    pub inquiries: i64,
}

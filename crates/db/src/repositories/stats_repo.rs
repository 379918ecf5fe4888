//! Aggregate counts for the admin dashboard.

use sqlx::PgPool;

use crate::models::stats::DashboardStats;

/// Provides the dashboard count query.
pub struct StatsRepo;

impl StatsRepo {
    /// Compute the four dashboard counts concurrently.
    ///
    /// The counts are independent single statements; a reader may see
    /// values reflecting different instants.
    pub async fn dashboard(pool: &PgPool) -> Result<DashboardStats, sqlx::Error> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM properties").fetch_one(pool);
        let active = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM properties WHERE status = 'available'",
        )
        .fetch_one(pool);
        let sold =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM properties WHERE status = 'sold'")
                .fetch_one(pool);
        let inquiries =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM inquiries").fetch_one(pool);

        let (total, active, sold, inquiries) =
            futures::try_join!(total, active, sold, inquiries)?;

        Ok(DashboardStats {
            total,
            active,
            sold,
            inquiries,
        })
    }
}

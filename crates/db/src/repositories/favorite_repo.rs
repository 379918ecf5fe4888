//! Repository for the `favorites` table.
//!
//! A favorite is a single flag per property (no user identity exists in
//! this system). Both toggle directions are idempotent.

use inmovista_core::types::DbId;
use sqlx::PgPool;

use crate::models::property::Property;

/// Property column list qualified for the favorites join.
const P_COLUMNS: &str = "p.id, p.title, p.description, p.price, p.location, p.type, \
     p.operation, p.bedrooms, p.bathrooms, p.area, p.featured, p.status, \
     p.main_image, p.created_at";

/// Provides the idempotent favorite toggle and the favorites listing.
pub struct FavoriteRepo;

impl FavoriteRepo {
    /// Mark a property as favorited. Adding an existing favorite is a
    /// no-op, not an error. Favoriting a nonexistent property fails with
    /// a foreign-key violation.
    pub async fn add(pool: &PgPool, property_id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO favorites (property_id) VALUES ($1) \
             ON CONFLICT (property_id) DO NOTHING",
        )
        .bind(property_id)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Clear the favorite flag. Removing a non-favorited property is a
    /// no-op.
    pub async fn remove(pool: &PgPool, property_id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM favorites WHERE property_id = $1")
            .bind(property_id)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// List favorited properties, most recently favorited first.
    pub async fn list_properties(pool: &PgPool) -> Result<Vec<Property>, sqlx::Error> {
        let query = format!(
            "SELECT {P_COLUMNS} FROM favorites f \
             JOIN properties p ON p.id = f.property_id \
             ORDER BY f.created_at DESC"
        );
        sqlx::query_as::<_, Property>(&query).fetch_all(pool).await
    }
}

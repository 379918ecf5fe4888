//! Repository for the `inquiries` table.

use sqlx::PgPool;

use crate::models::inquiry::{CreateInquiry, Inquiry, InquiryWithProperty};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, property_id, client_name, client_phone, message, status, created_at";

/// Provides operations for property inquiries (leads).
pub struct InquiryRepo;

impl InquiryRepo {
    /// Insert a new inquiry, returning the created row. Status starts as
    /// `pending`.
    pub async fn create(pool: &PgPool, input: &CreateInquiry) -> Result<Inquiry, sqlx::Error> {
        let query = format!(
            "INSERT INTO inquiries (property_id, client_name, client_phone, message) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Inquiry>(&query)
            .bind(input.property_id)
            .bind(&input.client_name)
            .bind(&input.client_phone)
            .bind(&input.message)
            .fetch_one(pool)
            .await
    }

    /// List all inquiries newest-first, joined with the title and main
    /// image of their property. The joined columns are NULL for inquiries
    /// whose property has been deleted.
    pub async fn list_with_property(pool: &PgPool) -> Result<Vec<InquiryWithProperty>, sqlx::Error> {
        let query = format!(
            "SELECT i.id, i.property_id, i.client_name, i.client_phone, i.message, \
                    i.status, i.created_at, \
                    p.title AS property_title, p.main_image AS property_image \
             FROM inquiries i \
             LEFT JOIN properties p ON p.id = i.property_id \
             ORDER BY i.created_at DESC"
        );
        sqlx::query_as::<_, InquiryWithProperty>(&query)
            .fetch_all(pool)
            .await
    }
}

//! Inquiry entity model and DTOs.

use inmovista_core::error::CoreError;
use inmovista_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Lead follow-up status mirroring the `inquiry_status` database enum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "inquiry_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum InquiryStatus {
    #[default]
    Pending,
    Contacted,
    Closed,
}

/// An inquiry row from the `inquiries` table.
///
/// `property_id` is NULL once the referenced property has been deleted;
/// the inquiry itself is retained.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Inquiry {
    pub id: DbId,
    pub property_id: Option<DbId>,
    pub client_name: String,
    pub client_phone: Option<String>,
    pub message: Option<String>,
    pub status: InquiryStatus,
    pub created_at: Timestamp,
}

/// An inquiry joined with display columns of its property, for listings.
/// Both joined columns are NULL when the property no longer exists.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct InquiryWithProperty {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub inquiry: Inquiry,
    pub property_title: Option<String>,
    pub property_image: Option<String>,
}

/// DTO for creating a new inquiry. Status starts as `pending`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateInquiry {
    pub property_id: Option<DbId>,
    pub client_name: String,
    pub client_phone: Option<String>,
    pub message: Option<String>,
}

impl CreateInquiry {
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.client_name.trim().is_empty() {
            return Err(CoreError::Validation("client_name must not be empty".into()));
        }
        Ok(())
    }
}

//! Property entity model, enums and DTOs.

use inmovista_core::error::CoreError;
use inmovista_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Listing category mirroring the `property_type` database enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "property_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    House,
    Apartment,
    Land,
    Commercial,
    Villa,
}

/// Sale vs. rental classification mirroring the `operation_type` database enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "operation_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum OperationType {
    Sale,
    Rental,
}

/// Listing lifecycle status mirroring the `property_status` database enum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "property_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PropertyStatus {
    #[default]
    Available,
    Reserved,
    Sold,
}

/// A property row from the `properties` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Property {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub price: f64,
    pub location: String,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    pub operation: OperationType,
    pub bedrooms: Option<i32>,
    pub bathrooms: Option<i32>,
    pub area: Option<f64>,
    pub featured: bool,
    pub status: PropertyStatus,
    pub main_image: Option<String>,
    pub created_at: Timestamp,
}

/// A child image row from the `property_images` table.
///
/// The set belonging to a property is replaced as a whole on every update,
/// never patched individually.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PropertyImage {
    pub id: DbId,
    pub property_id: DbId,
    pub url: String,
}

/// A property together with its image set, as returned by detail fetches
/// and write operations.
#[derive(Debug, Clone, Serialize)]
pub struct PropertyWithImages {
    #[serde(flatten)]
    pub property: Property,
    pub images: Vec<PropertyImage>,
}

/// DTO for creating a new property. `status` is not accepted on create;
/// new listings start as `available`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProperty {
    pub title: String,
    pub description: Option<String>,
    pub price: f64,
    pub location: String,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    pub operation: OperationType,
    pub bedrooms: Option<i32>,
    pub bathrooms: Option<i32>,
    pub area: Option<f64>,
    #[serde(default)]
    pub featured: bool,
    pub main_image: Option<String>,
    /// Ordered image URLs. Duplicates and an empty list are permitted.
    #[serde(default)]
    pub images: Vec<String>,
}

impl CreateProperty {
    /// Reject values the store would refuse, before any statement runs.
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_common(
            &self.title,
            self.price,
            self.area,
            self.bedrooms,
            self.bathrooms,
        )
    }
}

/// DTO for a full property overwrite. Every attribute is replaced; absent
/// optional fields become NULL and an absent `status` resets to `available`.
/// Partial updates are not supported.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProperty {
    pub title: String,
    pub description: Option<String>,
    pub price: f64,
    pub location: String,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    pub operation: OperationType,
    pub bedrooms: Option<i32>,
    pub bathrooms: Option<i32>,
    pub area: Option<f64>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub status: PropertyStatus,
    pub main_image: Option<String>,
    /// Replacement image set; the previous set is deleted in the same
    /// transaction.
    #[serde(default)]
    pub images: Vec<String>,
}

impl UpdateProperty {
    /// Reject values the store would refuse, before any statement runs.
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_common(
            &self.title,
            self.price,
            self.area,
            self.bedrooms,
            self.bathrooms,
        )
    }
}

fn validate_common(
    title: &str,
    price: f64,
    area: Option<f64>,
    bedrooms: Option<i32>,
    bathrooms: Option<i32>,
) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation("title must not be empty".into()));
    }
    if price < 0.0 {
        return Err(CoreError::Validation("price must be non-negative".into()));
    }
    if area.is_some_and(|a| a < 0.0) {
        return Err(CoreError::Validation("area must be non-negative".into()));
    }
    if bedrooms.is_some_and(|b| b < 0) {
        return Err(CoreError::Validation("bedrooms must be non-negative".into()));
    }
    if bathrooms.is_some_and(|b| b < 0) {
        return Err(CoreError::Validation(
            "bathrooms must be non-negative".into(),
        ));
    }
    Ok(())
}

/// Optional list filters. All criteria combine independently; omitted
/// criteria impose no constraint. Field names match the query string
/// (`?type=&operation=&minPrice=&maxPrice=`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PropertyFilter {
    #[serde(rename = "type")]
    pub property_type: Option<PropertyType>,
    pub operation: Option<OperationType>,
    #[serde(rename = "minPrice")]
    pub min_price: Option<f64>,
    #[serde(rename = "maxPrice")]
    pub max_price: Option<f64>,
}

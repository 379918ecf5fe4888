//! Repository for the `properties` and `property_images` tables.
//!
//! Both write paths run inside a single transaction: the property row and
//! its image set change together or not at all. A failure partway through
//! rolls everything back.

use inmovista_core::types::DbId;
use sqlx::PgPool;

use crate::models::property::{
    CreateProperty, OperationType, Property, PropertyFilter, PropertyImage, PropertyType,
    UpdateProperty,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, price, location, type, operation, \
     bedrooms, bathrooms, area, featured, status, main_image, created_at";

const IMAGE_COLUMNS: &str = "id, property_id, url";

/// Provides CRUD operations for properties and their image sets.
pub struct PropertyRepo;

impl PropertyRepo {
    /// List properties matching the filter.
    ///
    /// Ordering is a contract: featured listings first, then newest first.
    pub async fn list(pool: &PgPool, filter: &PropertyFilter) -> Result<Vec<Property>, sqlx::Error> {
        let (where_clause, bind_values) = build_property_filter(filter);
        let query = format!(
            "SELECT {COLUMNS} FROM properties {where_clause} \
             ORDER BY featured DESC, created_at DESC"
        );
        let q = bind_filter_values(sqlx::query_as::<_, Property>(&query), &bind_values);
        q.fetch_all(pool).await
    }

    /// Find a property by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Property>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM properties WHERE id = $1");
        sqlx::query_as::<_, Property>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Fetch the image set belonging to a property, in insertion order.
    pub async fn find_images(pool: &PgPool, id: DbId) -> Result<Vec<PropertyImage>, sqlx::Error> {
        let query =
            format!("SELECT {IMAGE_COLUMNS} FROM property_images WHERE property_id = $1 ORDER BY id");
        sqlx::query_as::<_, PropertyImage>(&query)
            .bind(id)
            .fetch_all(pool)
            .await
    }

    /// Insert a property together with its image list, atomically.
    ///
    /// If any image insert fails, the property insert is rolled back too;
    /// no orphaned property is left behind.
    pub async fn create_with_images(
        pool: &PgPool,
        input: &CreateProperty,
    ) -> Result<(Property, Vec<PropertyImage>), sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO properties \
                 (title, description, price, location, type, operation, \
                  bedrooms, bathrooms, area, featured, main_image) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) \
             RETURNING {COLUMNS}"
        );
        let property = sqlx::query_as::<_, Property>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.price)
            .bind(&input.location)
            .bind(input.property_type)
            .bind(input.operation)
            .bind(input.bedrooms)
            .bind(input.bathrooms)
            .bind(input.area)
            .bind(input.featured)
            .bind(&input.main_image)
            .fetch_one(&mut *tx)
            .await?;

        let images = insert_images(&mut tx, property.id, &input.images).await?;

        tx.commit().await?;
        Ok((property, images))
    }

    /// Overwrite every attribute of a property and replace its image set,
    /// atomically. Returns `None` if no row with the given `id` exists,
    /// leaving the prior state untouched.
    pub async fn update_with_images(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProperty,
    ) -> Result<Option<(Property, Vec<PropertyImage>)>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE properties SET \
                 title = $2, description = $3, price = $4, location = $5, \
                 type = $6, operation = $7, bedrooms = $8, bathrooms = $9, \
                 area = $10, featured = $11, status = $12, main_image = $13 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        let Some(property) = sqlx::query_as::<_, Property>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.price)
            .bind(&input.location)
            .bind(input.property_type)
            .bind(input.operation)
            .bind(input.bedrooms)
            .bind(input.bathrooms)
            .bind(input.area)
            .bind(input.featured)
            .bind(input.status)
            .bind(&input.main_image)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        sqlx::query("DELETE FROM property_images WHERE property_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let images = insert_images(&mut tx, id, &input.images).await?;

        tx.commit().await?;
        Ok(Some((property, images)))
    }

    /// Delete a property by ID. Returns `true` if a row was removed.
    ///
    /// Images and the favorite flag cascade; inquiries survive with their
    /// property reference cleared.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM properties WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Insert one image row per URL, preserving list order.
async fn insert_images(
    tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    property_id: DbId,
    urls: &[String],
) -> Result<Vec<PropertyImage>, sqlx::Error> {
    let query = format!(
        "INSERT INTO property_images (property_id, url) VALUES ($1, $2) \
         RETURNING {IMAGE_COLUMNS}"
    );
    let mut images = Vec::with_capacity(urls.len());
    for url in urls {
        let image = sqlx::query_as::<_, PropertyImage>(&query)
            .bind(property_id)
            .bind(url)
            .fetch_one(&mut **tx)
            .await?;
        images.push(image);
    }
    Ok(images)
}

// ---------------------------------------------------------------------------
// Internal helpers for dynamic query building
// ---------------------------------------------------------------------------

/// Typed bind value for dynamically-built property list queries.
enum BindValue {
    Type(PropertyType),
    Operation(OperationType),
    Price(f64),
}

/// Build a WHERE clause and bind values from the optional filter criteria.
///
/// The `where_clause` is empty if no filters are active, or starts with
/// `WHERE `. Values are always bound positionally, never interpolated.
fn build_property_filter(filter: &PropertyFilter) -> (String, Vec<BindValue>) {
    let mut conditions: Vec<String> = Vec::new();
    let mut bind_idx = 1u32;
    let mut bind_values: Vec<BindValue> = Vec::new();

    if let Some(property_type) = filter.property_type {
        conditions.push(format!("type = ${bind_idx}"));
        bind_idx += 1;
        bind_values.push(BindValue::Type(property_type));
    }

    if let Some(operation) = filter.operation {
        conditions.push(format!("operation = ${bind_idx}"));
        bind_idx += 1;
        bind_values.push(BindValue::Operation(operation));
    }

    if let Some(min_price) = filter.min_price {
        conditions.push(format!("price >= ${bind_idx}"));
        bind_idx += 1;
        bind_values.push(BindValue::Price(min_price));
    }

    if let Some(max_price) = filter.max_price {
        conditions.push(format!("price <= ${bind_idx}"));
        bind_values.push(BindValue::Price(max_price));
    }

    let where_clause = if conditions.is_empty() {
        String::new()
    } else {
        format!("WHERE {}", conditions.join(" AND "))
    };

    (where_clause, bind_values)
}

/// Bind a slice of `BindValue` to a sqlx `QueryAs`.
fn bind_filter_values<'q, O>(
    mut q: sqlx::query::QueryAs<'q, sqlx::Postgres, O, sqlx::postgres::PgArguments>,
    bind_values: &'q [BindValue],
) -> sqlx::query::QueryAs<'q, sqlx::Postgres, O, sqlx::postgres::PgArguments> {
    for val in bind_values {
        match val {
            BindValue::Type(v) => q = q.bind(*v),
            BindValue::Operation(v) => q = q.bind(*v),
            BindValue::Price(v) => q = q.bind(*v),
        }
    }
    q
}

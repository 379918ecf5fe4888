//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - Where the resource supports it, an update DTO for full overwrites

pub mod inquiry;
pub mod property;
pub mod stats;

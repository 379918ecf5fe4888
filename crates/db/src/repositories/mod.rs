//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod favorite_repo;
pub mod inquiry_repo;
pub mod property_repo;
pub mod stats_repo;

pub use favorite_repo::FavoriteRepo;
pub use inquiry_repo::InquiryRepo;
pub use property_repo::PropertyRepo;
pub use stats_repo::StatsRepo;

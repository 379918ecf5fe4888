//! Request handlers, one module per resource.

pub mod favorite;
pub mod inquiry;
pub mod property;
pub mod stats;

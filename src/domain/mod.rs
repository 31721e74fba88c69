//! Domain types exposed by the list view layer.

pub mod account;
pub mod metadata;
pub mod types;

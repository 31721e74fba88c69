//! DTO modules that bridge the list view with the rendering layer.

pub mod list_view;

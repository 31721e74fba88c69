//! Filterable, searchable, paginated account list with a reusable paginator
//! control.

pub mod domain;
pub mod dto;
pub mod forms;
pub mod list_view;
pub mod models;
pub mod pagination;
pub mod repository;
pub mod services;

pub const DEFAULT_PAGE_SIZE: usize = 25;

//! Side effects requested by the list view. The caller performs them and
//! feeds the outcome back.

use serde::Serialize;

use crate::domain::metadata::FilterField;
use crate::domain::types::RecordTypeId;
use crate::repository::AccountListQuery;

/// Which collaborator endpoint serves a fetch.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FetchSource {
    Filters,
    Search,
}

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct FetchRequest {
    /// Increases with every dispatch; hand it back with the result.
    pub sequence: u64,
    pub source: FetchSource,
    pub query: AccountListQuery,
}

#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ToastVariant {
    Success,
    Error,
}

/// Dismissible user notification.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub message: String,
    pub variant: ToastVariant,
}

impl Toast {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            title: "Error!".to_string(),
            message: message.into(),
            variant: ToastVariant::Error,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            title: "Success!".to_string(),
            message: message.into(),
            variant: ToastVariant::Success,
        }
    }
}

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum Effect {
    Fetch(FetchRequest),
    Notify(Toast),
    LoadObjectInfo,
    LoadPicklist {
        record_type_id: RecordTypeId,
        field: FilterField,
    },
}

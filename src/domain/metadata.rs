//! Object schema and picklist reference data used to label columns and
//! populate the filter comboboxes.

use std::collections::HashMap;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::domain::types::RecordTypeId;

pub const ID_FIELD: &str = "Id";
pub const NAME_FIELD: &str = "Name";
pub const PHONE_FIELD: &str = "Phone";
pub const TYPE_FIELD: &str = "Type";
pub const INDUSTRY_FIELD: &str = "Industry";

/// Value of the synthetic option that disables a filter.
pub const ALL_VALUE: &str = "__all__";
pub const ALL_LABEL: &str = "All";

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldInfo {
    pub label: String,
}

/// Describes the account object: field labels and the default record type.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ObjectInfo {
    pub default_record_type_id: RecordTypeId,
    pub fields: HashMap<String, FieldInfo>,
}

impl ObjectInfo {
    /// Label of the field, if the schema knows it.
    pub fn label(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(|info| info.label.as_str())
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PicklistOption {
    pub label: String,
    pub value: String,
}

impl PicklistOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }

    /// The option that clears a filter.
    pub fn all() -> Self {
        Self::new(ALL_LABEL, ALL_VALUE)
    }
}

/// Picklist-backed fields the list can be filtered by.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum FilterField {
    Type,
    Industry,
}

impl FilterField {
    pub const ALL: [FilterField; 2] = [FilterField::Type, FilterField::Industry];

    /// API name of the underlying field.
    pub const fn api_name(self) -> &'static str {
        match self {
            FilterField::Type => TYPE_FIELD,
            FilterField::Industry => INDUSTRY_FIELD,
        }
    }
}

impl Display for FilterField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.api_name())
    }
}

/// Builds combobox options with the `All` option in front.
pub fn filter_options(values: Vec<PicklistOption>) -> Vec<PicklistOption> {
    std::iter::once(PicklistOption::all())
        .chain(values)
        .collect()
}

/// Maps a combobox value to a filter: the `All` option means no filter.
pub fn selected_filter(value: &str) -> Option<String> {
    if value == ALL_VALUE || value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

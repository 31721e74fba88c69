use serde::Serialize;

use crate::domain::account::{AccountRow, RECORD_URL_FIELD};
use crate::domain::metadata::{
    INDUSTRY_FIELD, NAME_FIELD, ObjectInfo, PHONE_FIELD, PicklistOption, TYPE_FIELD,
};
use crate::pagination::PaginatorView;

/// Link rendering settings of a `url` column.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UrlTypeAttributes {
    /// Row field holding the link text.
    pub label_field: String,
    pub target: String,
}

/// Table column definition.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    /// Field label from the object schema; missing until it has loaded.
    pub label: Option<String>,
    pub field_name: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub column_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_attributes: Option<UrlTypeAttributes>,
}

impl Column {
    fn text(info: Option<&ObjectInfo>, field: &str) -> Self {
        Self {
            label: label(info, field),
            field_name: field.to_string(),
            column_type: None,
            type_attributes: None,
        }
    }
}

fn label(info: Option<&ObjectInfo>, field: &str) -> Option<String> {
    info.and_then(|info| info.label(field)).map(str::to_string)
}

/// Name (linking to the record), phone, type and industry.
pub fn account_columns(info: Option<&ObjectInfo>) -> Vec<Column> {
    vec![
        Column {
            label: label(info, NAME_FIELD),
            field_name: RECORD_URL_FIELD.to_string(),
            column_type: Some("url".to_string()),
            type_attributes: Some(UrlTypeAttributes {
                label_field: "name".to_string(),
                target: "_blank".to_string(),
            }),
        },
        Column::text(info, PHONE_FIELD),
        Column::text(info, TYPE_FIELD),
        Column::text(info, INDUSTRY_FIELD),
    ]
}

/// Data required to render the list view.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListViewPageData {
    pub columns: Vec<Column>,
    pub rows: Vec<AccountRow>,
    pub paginator: PaginatorView,
    pub type_options: Vec<PicklistOption>,
    pub industry_options: Vec<PicklistOption>,
    pub selected_type: Option<String>,
    pub selected_industry: Option<String>,
    /// Validation message shown on the search input.
    pub search_validation: Option<String>,
    pub show_spinner: bool,
    pub show_no_data: bool,
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::domain::metadata::FieldInfo;
    use crate::domain::types::RecordTypeId;

    #[test]
    fn columns_use_schema_labels_once_loaded() {
        assert!(account_columns(None).iter().all(|c| c.label.is_none()));

        let info = ObjectInfo {
            default_record_type_id: RecordTypeId::new("012A").unwrap(),
            fields: HashMap::from([(
                NAME_FIELD.to_string(),
                FieldInfo {
                    label: "Account Name".to_string(),
                },
            )]),
        };

        let columns = account_columns(Some(&info));

        assert_eq!(columns[0].label.as_deref(), Some("Account Name"));
        assert_eq!(columns[0].field_name, RECORD_URL_FIELD);
        assert_eq!(columns[1].label, None);
    }
}

//! Configuration model loaded from external sources.

use std::time::Duration;

use serde::Deserialize;

use crate::domain::types::PageSize;
use crate::list_view::ListViewOptions;
use crate::pagination::DEFAULT_MAX_BUTTONS;

fn default_max_buttons() -> usize {
    DEFAULT_MAX_BUTTONS
}

fn default_search_debounce_ms() -> u64 {
    250
}

fn default_seed_path() -> String {
    "config/accounts.json".to_string()
}

#[derive(Clone, Debug, Deserialize)]
/// Settings of the list view and of the demo data source.
pub struct ListViewConfig {
    #[serde(default)]
    pub page_size: PageSize,
    #[serde(default = "default_max_buttons")]
    pub max_buttons: usize,
    #[serde(default = "default_search_debounce_ms")]
    pub search_debounce_ms: u64,
    #[serde(default)]
    pub discard_stale_results: bool,
    /// JSON file with the accounts served by the in-memory repository.
    #[serde(default = "default_seed_path")]
    pub seed_path: String,
}

impl ListViewConfig {
    pub fn options(&self) -> ListViewOptions {
        ListViewOptions {
            page_size: self.page_size,
            max_buttons: self.max_buttons,
            search_debounce: Duration::from_millis(self.search_debounce_ms),
            discard_stale_results: self.discard_stale_results,
        }
    }
}

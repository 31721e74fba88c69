//! Paginator control: page strip generation, pagination state and the
//! events the control emits.

use serde::{Deserialize, Serialize};

pub mod sequence;
pub mod state;

pub use sequence::{DEFAULT_MAX_BUTTONS, ELLIPSIS, PageButton, get_pages};
pub use state::PaginationState;

/// Notifications emitted by the paginator control.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "name", content = "detail", rename_all = "lowercase")]
pub enum PaginatorEvent {
    Previous,
    Next,
    GoToFirst,
    GoToLast,
    GoToPage {
        #[serde(rename = "pageNumber")]
        page_number: usize,
    },
    ItemsOnPageChanged {
        value: String,
    },
}

/// Everything needed to draw the paginator for one render.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PaginatorView {
    pub buttons: Vec<PageButton>,
    pub page_counter_info: String,
    pub is_first_page: bool,
    pub is_last_page: bool,
    pub items_on_page: usize,
}

impl PaginatorView {
    pub fn new(state: &PaginationState, max_buttons: usize) -> Self {
        Self {
            buttons: state.buttons(max_buttons),
            page_counter_info: state.page_counter_info(),
            is_first_page: state.is_first_page(),
            is_last_page: state.is_last_page(),
            items_on_page: state.page_size().get(),
        }
    }

    /// Event for a click on the button at `index`.
    pub fn button_event(&self, index: usize) -> Option<PaginatorEvent> {
        self.buttons
            .get(index)
            .map(|button| PaginatorEvent::GoToPage {
                page_number: button.page_number,
            })
    }

    pub fn items_on_page_changed(&mut self, value: impl Into<String>) -> PaginatorEvent {
        let value = value.into();
        if let Ok(size) = value.trim().parse() {
            self.items_on_page = size;
        }
        PaginatorEvent::ItemsOnPageChanged { value }
    }
}

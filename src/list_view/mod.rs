//! Filterable, searchable, paginated account list.
//!
//! [`ListView`] owns the filter, search and pagination state. Commands
//! mutate that state and return the [`Effect`]s the caller has to perform:
//! fetches, notifications and metadata loads. Outcomes are handed back
//! through the `apply_*` methods. Fetch results may come back in any order;
//! by default the last one to arrive wins.

use std::time::{Duration, Instant};

use crate::domain::account::{AccountPage, AccountRow};
use crate::domain::metadata::{
    FilterField, ObjectInfo, PicklistOption, filter_options, selected_filter,
};
use crate::domain::types::{PageSize, SearchTerm};
use crate::dto::list_view::{ListViewPageData, account_columns};
use crate::forms::search::{SearchForm, SearchInput};
use crate::pagination::{DEFAULT_MAX_BUTTONS, PaginationState, PaginatorEvent, PaginatorView};
use crate::repository::AccountListQuery;
use crate::repository::errors::RepositoryResult;

pub mod debounce;
pub mod effects;

pub use debounce::Debouncer;
pub use effects::{Effect, FetchRequest, FetchSource, Toast, ToastVariant};

pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(250);
pub const ACCOUNT_CREATED_MESSAGE: &str = "Account created successfully.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListViewOptions {
    pub page_size: PageSize,
    pub max_buttons: usize,
    pub search_debounce: Duration,
    /// Ignore fetch results that are not answers to the latest dispatch.
    pub discard_stale_results: bool,
}

impl Default for ListViewOptions {
    fn default() -> Self {
        Self {
            page_size: PageSize::default(),
            max_buttons: DEFAULT_MAX_BUTTONS,
            search_debounce: SEARCH_DEBOUNCE,
            discard_stale_results: false,
        }
    }
}

#[derive(Debug)]
pub struct ListView {
    options: ListViewOptions,
    pagination: PaginationState,
    selected_type: Option<String>,
    selected_industry: Option<String>,
    search_term: Option<SearchTerm>,
    search_validation: Option<String>,
    rows: Vec<AccountRow>,
    object_info: Option<ObjectInfo>,
    type_options: Vec<PicklistOption>,
    industry_options: Vec<PicklistOption>,
    show_spinner: bool,
    search_debounce: Debouncer,
    last_sequence: u64,
}

impl Default for ListView {
    fn default() -> Self {
        Self::new(ListViewOptions::default())
    }
}

impl ListView {
    pub fn new(options: ListViewOptions) -> Self {
        Self {
            options,
            pagination: PaginationState::new(options.page_size),
            selected_type: None,
            selected_industry: None,
            search_term: None,
            search_validation: None,
            rows: Vec::new(),
            object_info: None,
            type_options: Vec::new(),
            industry_options: Vec::new(),
            show_spinner: true,
            search_debounce: Debouncer::new(options.search_debounce),
            last_sequence: 0,
        }
    }

    pub fn options(&self) -> &ListViewOptions {
        &self.options
    }

    pub fn pagination(&self) -> &PaginationState {
        &self.pagination
    }

    pub fn rows(&self) -> &[AccountRow] {
        &self.rows
    }

    pub fn selected_type(&self) -> Option<&str> {
        self.selected_type.as_deref()
    }

    pub fn selected_industry(&self) -> Option<&str> {
        self.selected_industry.as_deref()
    }

    /// Search term currently applied to fetches.
    pub fn search_term(&self) -> Option<&SearchTerm> {
        self.search_term.as_ref()
    }

    pub fn search_validation(&self) -> Option<&str> {
        self.search_validation.as_deref()
    }

    pub fn is_busy(&self) -> bool {
        self.show_spinner
    }

    pub fn object_info(&self) -> Option<&ObjectInfo> {
        self.object_info.as_ref()
    }

    pub fn type_options(&self) -> &[PicklistOption] {
        &self.type_options
    }

    pub fn industry_options(&self) -> &[PicklistOption] {
        &self.industry_options
    }

    /// When the pending debounced search fetch is due, if any.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.search_debounce.deadline()
    }

    /// Query for the current page and filters.
    pub fn query(&self) -> AccountListQuery {
        AccountListQuery::new()
            .paginate(self.pagination.current_page(), self.pagination.page_size())
            .filter_type(self.selected_type.clone())
            .filter_industry(self.selected_industry.clone())
            .search(self.search_term.clone())
    }

    /// Requests the schema and the first page.
    pub fn mount(&mut self) -> Vec<Effect> {
        vec![Effect::LoadObjectInfo, self.fetch()]
    }

    /// Cancels the pending debounced fetch.
    pub fn teardown(&mut self) {
        if self.search_debounce.cancel() {
            log::debug!("Cancelled pending search fetch on teardown");
        }
    }

    pub fn handle_paginator_event(&mut self, event: PaginatorEvent) -> Vec<Effect> {
        match event {
            PaginatorEvent::Previous => self.handle_previous(),
            PaginatorEvent::Next => self.handle_next(),
            PaginatorEvent::GoToFirst => self.handle_first(),
            PaginatorEvent::GoToLast => self.handle_last(),
            PaginatorEvent::GoToPage { page_number } => self.handle_go_to_page(page_number),
            PaginatorEvent::ItemsOnPageChanged { value } => self.handle_page_size_change(&value),
        }
    }

    pub fn handle_previous(&mut self) -> Vec<Effect> {
        let moved = self.pagination.go_previous();
        self.fetch_if(moved)
    }

    pub fn handle_next(&mut self) -> Vec<Effect> {
        let moved = self.pagination.go_next();
        self.fetch_if(moved)
    }

    pub fn handle_first(&mut self) -> Vec<Effect> {
        let moved = self.pagination.go_first();
        self.fetch_if(moved)
    }

    pub fn handle_last(&mut self) -> Vec<Effect> {
        let moved = self.pagination.go_last();
        self.fetch_if(moved)
    }

    pub fn handle_go_to_page(&mut self, page: usize) -> Vec<Effect> {
        let moved = self.pagination.go_to_page(page);
        self.fetch_if(moved)
    }

    /// Applies a value picked in the items-per-page combobox.
    pub fn handle_page_size_change(&mut self, value: &str) -> Vec<Effect> {
        match value.parse::<PageSize>() {
            Ok(page_size) => {
                let changed = self.pagination.set_page_size(page_size);
                self.fetch_if(changed)
            }
            Err(err) => {
                log::warn!("Ignoring page size {value:?}: {err}");
                vec![Effect::Notify(Toast::error(err.to_string()))]
            }
        }
    }

    pub fn handle_type_change(&mut self, value: &str) -> Vec<Effect> {
        self.selected_type = selected_filter(value);
        self.pagination.go_first();
        vec![self.fetch()]
    }

    pub fn handle_industry_change(&mut self, value: &str) -> Vec<Effect> {
        self.selected_industry = selected_filter(value);
        self.pagination.go_first();
        vec![self.fetch()]
    }

    /// Handles a change of the search input at `now`.
    ///
    /// Nothing is fetched right away: valid input (a term of three or more
    /// characters, or an empty box) restarts the debounce window and
    /// [`Self::tick`] dispatches the fetch once it has elapsed. Shorter
    /// input drops the active term and flags the input without touching the
    /// window, so an already pending fetch still runs, without the term.
    /// The current page is kept.
    pub fn handle_search(&mut self, text: &str, now: Instant) {
        match SearchInput::try_from(SearchForm::new(text)) {
            Ok(SearchInput::Cleared) => {
                self.search_term = None;
                self.search_validation = None;
                self.search_debounce.schedule(now);
            }
            Ok(SearchInput::Term(term)) => {
                self.search_validation = None;
                self.search_term = Some(term);
                self.search_debounce.schedule(now);
            }
            Err(err) => {
                log::debug!("Search input {text:?} rejected: {err}");
                self.search_term = None;
                self.search_validation = Some(err.user_message());
            }
        }
    }

    /// Dispatches the debounced search fetch once its window has elapsed.
    pub fn tick(&mut self, now: Instant) -> Vec<Effect> {
        if self.search_debounce.fire(now) {
            vec![self.fetch()]
        } else {
            Vec::new()
        }
    }

    /// Applies the outcome of the fetch dispatched with `sequence`.
    pub fn apply_fetch_result(
        &mut self,
        sequence: u64,
        result: RepositoryResult<AccountPage>,
    ) -> Vec<Effect> {
        if self.options.discard_stale_results && sequence != self.last_sequence {
            log::debug!(
                "Discarding result of fetch #{sequence}, latest is #{}",
                self.last_sequence
            );
            return Vec::new();
        }

        self.show_spinner = false;

        match result {
            Ok(page) => {
                self.rows = page.records.into_iter().map(AccountRow::from).collect();
                if self.pagination.set_total_item_count(page.total_records) {
                    log::warn!(
                        "Page out of range for {} records, moving to page {}",
                        page.total_records,
                        self.pagination.current_page()
                    );
                    return vec![self.fetch()];
                }
                Vec::new()
            }
            Err(err) => {
                log::error!("Failed to fetch accounts: {err}");
                vec![Effect::Notify(Toast::error(err.to_string()))]
            }
        }
    }

    /// Handles the closing of the create-account form. `Some(true)` means a
    /// record was created.
    pub fn handle_account_created(&mut self, outcome: Option<bool>) -> Vec<Effect> {
        if outcome != Some(true) {
            return Vec::new();
        }
        vec![
            Effect::Notify(Toast::success(ACCOUNT_CREATED_MESSAGE)),
            self.fetch(),
        ]
    }

    pub fn apply_object_info(&mut self, result: RepositoryResult<ObjectInfo>) -> Vec<Effect> {
        match result {
            Ok(info) => {
                let effects = FilterField::ALL
                    .into_iter()
                    .map(|field| Effect::LoadPicklist {
                        record_type_id: info.default_record_type_id.clone(),
                        field,
                    })
                    .collect();
                self.object_info = Some(info);
                effects
            }
            Err(err) => {
                log::error!("Failed to load account schema: {err}");
                vec![Effect::Notify(Toast::error(err.to_string()))]
            }
        }
    }

    pub fn apply_picklist(
        &mut self,
        field: FilterField,
        result: RepositoryResult<Vec<PicklistOption>>,
    ) -> Vec<Effect> {
        match result {
            Ok(values) => {
                let options = filter_options(values);
                match field {
                    FilterField::Type => self.type_options = options,
                    FilterField::Industry => self.industry_options = options,
                }
                Vec::new()
            }
            Err(err) => {
                log::error!("Failed to load {field} picklist: {err}");
                vec![Effect::Notify(Toast::error(err.to_string()))]
            }
        }
    }

    pub fn render(&self) -> ListViewPageData {
        ListViewPageData {
            columns: account_columns(self.object_info.as_ref()),
            rows: self.rows.clone(),
            paginator: PaginatorView::new(&self.pagination, self.options.max_buttons),
            type_options: self.type_options.clone(),
            industry_options: self.industry_options.clone(),
            selected_type: self.selected_type.clone(),
            selected_industry: self.selected_industry.clone(),
            search_validation: self.search_validation.clone(),
            show_spinner: self.show_spinner,
            show_no_data: self.rows.is_empty(),
        }
    }

    fn fetch_if(&mut self, condition: bool) -> Vec<Effect> {
        if condition {
            vec![self.fetch()]
        } else {
            Vec::new()
        }
    }

    fn fetch(&mut self) -> Effect {
        self.show_spinner = true;
        self.last_sequence += 1;

        let source = if self.search_term.is_some() {
            FetchSource::Search
        } else {
            FetchSource::Filters
        };
        let query = self.query();
        log::debug!(
            "Dispatching fetch #{} ({source:?}): {query:?}",
            self.last_sequence
        );

        Effect::Fetch(FetchRequest {
            sequence: self.last_sequence,
            source,
            query,
        })
    }
}

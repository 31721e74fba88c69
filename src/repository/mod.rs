use serde::Serialize;

use crate::domain::account::AccountPage;
use crate::domain::metadata::{FilterField, ObjectInfo, PicklistOption};
use crate::domain::types::{PageSize, RecordTypeId, SearchTerm};
use crate::repository::errors::RepositoryResult;

pub mod errors;
pub mod memory;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

pub use memory::InMemoryAccountRepository;

/// Parameters of one page request: offset/limit plus the active filters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountListQuery {
    #[serde(rename = "recordLimit")]
    pub limit: usize,
    #[serde(rename = "recordOffset")]
    pub offset: usize,
    pub filter_type: Option<String>,
    pub filter_industry: Option<String>,
    pub search_term: Option<SearchTerm>,
}

impl Default for AccountListQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl AccountListQuery {
    pub fn new() -> Self {
        Self {
            limit: PageSize::default().get(),
            offset: 0,
            filter_type: None,
            filter_industry: None,
            search_term: None,
        }
    }

    /// Requests the one-based `page` of `per_page` records.
    pub fn paginate(mut self, page: usize, per_page: PageSize) -> Self {
        self.limit = per_page.get();
        self.offset = page.saturating_sub(1) * per_page.get();
        self
    }

    pub fn filter_type(mut self, value: Option<String>) -> Self {
        self.filter_type = value;
        self
    }

    pub fn filter_industry(mut self, value: Option<String>) -> Self {
        self.filter_industry = value;
        self
    }

    pub fn search(mut self, term: Option<SearchTerm>) -> Self {
        self.search_term = term;
        self
    }
}

pub trait AccountReader {
    /// Filtered, paged listing.
    fn list_accounts(&self, query: &AccountListQuery) -> RepositoryResult<AccountPage>;
    /// Name search; accepts the same query shape as [`Self::list_accounts`].
    fn search_accounts(&self, query: &AccountListQuery) -> RepositoryResult<AccountPage>;
}

pub trait MetadataReader {
    fn object_info(&self) -> RepositoryResult<ObjectInfo>;
    fn picklist_values(
        &self,
        record_type_id: &RecordTypeId,
        field: FilterField,
    ) -> RepositoryResult<Vec<PicklistOption>>;
}

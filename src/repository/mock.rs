//! Mock repository implementations for isolating the list view in tests.

use mockall::mock;

use crate::domain::account::AccountPage;
use crate::domain::metadata::{FilterField, ObjectInfo, PicklistOption};
use crate::domain::types::RecordTypeId;
use crate::repository::errors::RepositoryResult;
use crate::repository::{AccountListQuery, AccountReader, MetadataReader};

mock! {
    pub Repository {}

    impl AccountReader for Repository {
        fn list_accounts(&self, query: &AccountListQuery) -> RepositoryResult<AccountPage>;
        fn search_accounts(&self, query: &AccountListQuery) -> RepositoryResult<AccountPage>;
    }

    impl MetadataReader for Repository {
        fn object_info(&self) -> RepositoryResult<ObjectInfo>;
        fn picklist_values(
            &self,
            record_type_id: &RecordTypeId,
            field: FilterField,
        ) -> RepositoryResult<Vec<PicklistOption>>;
    }
}

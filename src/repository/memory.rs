//! Repository serving accounts from an in-memory seed, used by the demo
//! binary and by integration tests.

use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use serde::Deserialize;

use crate::domain::account::{Account, AccountPage};
use crate::domain::metadata::{
    FieldInfo, FilterField, INDUSTRY_FIELD, NAME_FIELD, ObjectInfo, PHONE_FIELD, PicklistOption,
    TYPE_FIELD,
};
use crate::domain::types::{RecordTypeId, TypeConstraintError};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{AccountListQuery, AccountReader, MetadataReader};

const DEFAULT_RECORD_TYPE_ID: &str = "012000000000000AAA";

/// Contents of a seed file.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountSeed {
    pub object: ObjectInfo,
    /// Picklist values keyed by field API name. Fields missing here get the
    /// distinct values found in `accounts`.
    #[serde(default)]
    pub picklists: HashMap<String, Vec<PicklistOption>>,
    pub accounts: Vec<Account>,
}

#[derive(Debug, Clone)]
pub struct InMemoryAccountRepository {
    seed: AccountSeed,
}

impl InMemoryAccountRepository {
    pub fn new(seed: AccountSeed) -> Self {
        Self { seed }
    }

    /// Builds a repository with default field labels around `accounts`.
    pub fn with_accounts(accounts: Vec<Account>) -> Result<Self, TypeConstraintError> {
        let fields = [
            (NAME_FIELD, "Account Name"),
            (PHONE_FIELD, "Account Phone"),
            (TYPE_FIELD, "Type"),
            (INDUSTRY_FIELD, "Industry"),
        ]
        .into_iter()
        .map(|(field, label)| {
            (
                field.to_string(),
                FieldInfo {
                    label: label.to_string(),
                },
            )
        })
        .collect();

        Ok(Self::new(AccountSeed {
            object: ObjectInfo {
                default_record_type_id: RecordTypeId::new(DEFAULT_RECORD_TYPE_ID)?,
                fields,
            },
            picklists: HashMap::new(),
            accounts,
        }))
    }

    pub fn from_json_str(json: &str) -> RepositoryResult<Self> {
        let seed: AccountSeed = serde_json::from_str(json)?;
        Ok(Self::new(seed))
    }

    pub fn from_path(path: impl AsRef<Path>) -> RepositoryResult<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&json)
    }

    pub fn accounts(&self) -> &[Account] {
        &self.seed.accounts
    }

    fn matching<'a>(
        &'a self,
        query: &'a AccountListQuery,
        search: Option<String>,
    ) -> impl Iterator<Item = &'a Account> + 'a {
        self.seed.accounts.iter().filter(move |account| {
            let type_matches = query
                .filter_type
                .as_ref()
                .is_none_or(|value| account.account_type.as_ref() == Some(value));
            let industry_matches = query
                .filter_industry
                .as_ref()
                .is_none_or(|value| account.industry.as_ref() == Some(value));
            let name_matches = search
                .as_ref()
                .is_none_or(|term| account.name.to_lowercase().contains(term));

            type_matches && industry_matches && name_matches
        })
    }

    fn page(&self, query: &AccountListQuery, search: Option<String>) -> AccountPage {
        let mut matching: Vec<&Account> = self.matching(query, search).collect();
        matching.sort_by(|a, b| a.name.cmp(&b.name));

        let total_records = matching.len();
        let records = matching
            .into_iter()
            .skip(query.offset)
            .take(query.limit)
            .cloned()
            .collect();

        AccountPage {
            records,
            total_records,
        }
    }
}

impl AccountReader for InMemoryAccountRepository {
    fn list_accounts(&self, query: &AccountListQuery) -> RepositoryResult<AccountPage> {
        Ok(self.page(query, None))
    }

    fn search_accounts(&self, query: &AccountListQuery) -> RepositoryResult<AccountPage> {
        let term = query
            .search_term
            .as_ref()
            .map(|term| term.as_str().to_lowercase());
        Ok(self.page(query, term))
    }
}

impl MetadataReader for InMemoryAccountRepository {
    fn object_info(&self) -> RepositoryResult<ObjectInfo> {
        Ok(self.seed.object.clone())
    }

    fn picklist_values(
        &self,
        record_type_id: &RecordTypeId,
        field: FilterField,
    ) -> RepositoryResult<Vec<PicklistOption>> {
        if record_type_id != &self.seed.object.default_record_type_id {
            return Err(RepositoryError::NotFound);
        }

        if let Some(values) = self.seed.picklists.get(field.api_name()) {
            return Ok(values.clone());
        }

        let values: BTreeSet<&String> = self
            .seed
            .accounts
            .iter()
            .filter_map(|account| match field {
                FilterField::Type => account.account_type.as_ref(),
                FilterField::Industry => account.industry.as_ref(),
            })
            .collect();

        Ok(values
            .into_iter()
            .map(|value| PicklistOption::new(value.clone(), value.clone()))
            .collect())
    }
}

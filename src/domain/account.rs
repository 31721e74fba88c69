use serde::{Deserialize, Serialize};

use crate::domain::types::{AccountId, AccountName};

/// Field holding the link to the record page in a rendered row.
pub const RECORD_URL_FIELD: &str = "recordUrl";

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Account {
    pub id: AccountId,
    pub name: AccountName,
    pub phone: Option<String>,
    /// Picklist value of the account type (e.g. `Customer - Direct`).
    #[serde(rename = "type")]
    pub account_type: Option<String>,
    pub industry: Option<String>,
}

impl Account {
    #[must_use]
    pub fn new(
        id: AccountId,
        name: AccountName,
        phone: Option<String>,
        account_type: Option<String>,
        industry: Option<String>,
    ) -> Self {
        Self {
            id,
            name,
            phone: phone
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            account_type: account_type.filter(|s| !s.is_empty()),
            industry: industry.filter(|s| !s.is_empty()),
        }
    }

    /// Relative link to the record detail page.
    pub fn record_url(&self) -> String {
        format!("/{}", self.id)
    }
}

/// An account as shown in the table, with its display link resolved.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct AccountRow {
    #[serde(flatten)]
    pub account: Account,
    #[serde(rename = "recordUrl")]
    pub record_url: String,
}

impl From<Account> for AccountRow {
    fn from(account: Account) -> Self {
        let record_url = account.record_url();
        Self {
            account,
            record_url,
        }
    }
}

/// One page of accounts together with the total number of matches.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccountPage {
    pub records: Vec<Account>,
    pub total_records: usize,
}

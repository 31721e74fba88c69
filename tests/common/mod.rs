use std::cell::RefCell;

use accounts_list_view::domain::account::Account;
use accounts_list_view::domain::types::{AccountId, AccountName};
use accounts_list_view::list_view::Toast;
use accounts_list_view::repository::InMemoryAccountRepository;
use accounts_list_view::services::Notifier;

const TYPES: [&str; 3] = ["Prospect", "Customer - Direct", "Other"];
const INDUSTRIES: [&str; 4] = ["Banking", "Energy", "Media", "Retail"];

/// Repository holding `count` accounts named `Account 0001`, `Account 0002`, ...
/// with types and industries assigned round-robin.
pub fn repository(count: usize) -> InMemoryAccountRepository {
    let accounts = (1..=count)
        .map(|i| {
            Account::new(
                AccountId::new(format!("001{i:05}")).unwrap(),
                AccountName::new(format!("Account {i:04}")).unwrap(),
                Some(format!("555-{i:04}")),
                Some(TYPES[i % TYPES.len()].to_string()),
                Some(INDUSTRIES[i % INDUSTRIES.len()].to_string()),
            )
        })
        .collect();
    InMemoryAccountRepository::with_accounts(accounts).unwrap()
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub toasts: RefCell<Vec<Toast>>,
}

impl Notifier for RecordingNotifier {
    fn notify(&self, toast: &Toast) {
        self.toasts.borrow_mut().push(toast.clone());
    }
}

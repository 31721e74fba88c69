use std::io::Write;
use std::path::Path;
use std::time::{Duration, Instant};

use accounts_list_view::domain::metadata::ALL_VALUE;
use accounts_list_view::forms::search::SEARCH_TERM_TOO_SHORT;
use accounts_list_view::list_view::{ListView, ListViewOptions, SEARCH_DEBOUNCE};
use accounts_list_view::pagination::PaginatorEvent;
use accounts_list_view::repository::InMemoryAccountRepository;
use accounts_list_view::services::list_view::ListViewSession;

mod common;

use common::RecordingNotifier;

fn session(count: usize) -> ListViewSession<InMemoryAccountRepository, RecordingNotifier> {
    ListViewSession::mount(
        ListView::default(),
        common::repository(count),
        RecordingNotifier::default(),
    )
}

fn first_row_name(session: &ListViewSession<InMemoryAccountRepository, RecordingNotifier>) -> String {
    session.render().rows[0].account.name.as_str().to_string()
}

#[test]
fn browses_237_accounts_in_pages_of_25() {
    let mut session = session(237);

    let data = session.render();
    assert_eq!(data.rows.len(), 25);
    assert_eq!(data.paginator.page_counter_info, "Page 1 of 10 • 25 items per page");
    assert!(data.paginator.is_first_page);
    assert_eq!(data.rows[0].record_url, "/00100001");

    session.paginator_event(PaginatorEvent::GoToLast);

    let data = session.render();
    assert_eq!(session.view().pagination().current_page(), 10);
    assert_eq!(data.rows.len(), 12);
    assert_eq!(first_row_name(&session), "Account 0226");
    assert!(data.paginator.is_last_page);

    session.paginator_event(PaginatorEvent::Next);
    assert_eq!(session.view().pagination().current_page(), 10);

    session.paginator_event(PaginatorEvent::Previous);
    assert_eq!(first_row_name(&session), "Account 0201");
}

#[test]
fn changing_page_size_starts_over() {
    let mut session = session(237);
    session.paginator_event(PaginatorEvent::GoToPage { page_number: 4 });

    session.paginator_event(PaginatorEvent::ItemsOnPageChanged {
        value: "100".to_string(),
    });

    let data = session.render();
    assert_eq!(data.rows.len(), 100);
    assert_eq!(first_row_name(&session), "Account 0001");
    assert_eq!(data.paginator.page_counter_info, "Page 1 of 3 • 100 items per page");
}

#[test]
fn type_filter_resets_to_first_page() {
    let mut session = session(237);
    session.paginator_event(PaginatorEvent::GoToPage { page_number: 3 });

    session.change_type("Prospect");

    assert_eq!(session.view().pagination().current_page(), 1);
    assert_eq!(session.view().pagination().total_item_count(), 79);
    assert!(
        session
            .render()
            .rows
            .iter()
            .all(|row| row.account.account_type.as_deref() == Some("Prospect"))
    );

    session.change_type(ALL_VALUE);
    assert_eq!(session.view().pagination().total_item_count(), 237);
}

#[test]
fn filters_combine() {
    let mut session = session(240);

    session.change_type("Prospect");
    session.change_industry("Banking");

    // i % 3 == 0 and i % 4 == 0
    assert_eq!(session.view().pagination().total_item_count(), 20);
}

#[test]
fn search_runs_after_the_quiet_window() {
    let mut session = session(237);
    let start = Instant::now();

    session.search("Account 01", start);
    session.tick(start + Duration::from_millis(10));
    assert_eq!(session.view().pagination().total_item_count(), 237);

    session.tick(start + SEARCH_DEBOUNCE);

    assert_eq!(session.view().pagination().total_item_count(), 100);
    assert_eq!(first_row_name(&session), "Account 0100");
}

#[test]
fn short_search_is_flagged() {
    let mut session = session(237);
    let start = Instant::now();

    session.search("Ac", start);
    session.tick(start + SEARCH_DEBOUNCE);

    let data = session.render();
    assert_eq!(data.search_validation.as_deref(), Some(SEARCH_TERM_TOO_SHORT));
    assert_eq!(session.view().search_term(), None);
    assert_eq!(session.view().pagination().total_item_count(), 237);
}

#[test]
fn search_keeps_the_current_page() {
    let mut session = session(237);
    session.paginator_event(PaginatorEvent::GoToPage { page_number: 2 });
    let start = Instant::now();

    session.search("Account 00", start);
    session.tick(start + SEARCH_DEBOUNCE);

    // 99 matches, still on page 2.
    assert_eq!(session.view().pagination().current_page(), 2);
    assert_eq!(first_row_name(&session), "Account 0026");
}

#[test]
fn seed_file_drives_the_whole_view() {
    let seed = Path::new(env!("CARGO_MANIFEST_DIR")).join("config/accounts.json");
    let repo = InMemoryAccountRepository::from_path(seed).unwrap();
    let count = repo.accounts().len();

    let session = ListViewSession::mount(
        ListView::new(ListViewOptions::default()),
        repo,
        RecordingNotifier::default(),
    );

    let data = session.render();
    assert_eq!(data.type_options.len(), 8);
    assert_eq!(data.type_options[0].value, ALL_VALUE);
    assert_eq!(data.industry_options.len(), 21);
    assert_eq!(data.columns[0].label.as_deref(), Some("Account Name"));
    assert_eq!(session.view().pagination().total_item_count(), count);
    assert!(session.notifier().toasts.borrow().is_empty());
}

#[test]
fn seed_can_be_loaded_from_any_path() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "object": {{ "default_record_type_id": "012A", "fields": {{}} }},
            "accounts": [
                {{ "id": "001A", "name": "Acme", "type": "Prospect", "industry": null }}
            ]
        }}"#
    )
    .unwrap();

    let repo = InMemoryAccountRepository::from_path(file.path()).unwrap();
    let session = ListViewSession::mount(ListView::default(), repo, RecordingNotifier::default());

    let data = session.render();
    assert_eq!(data.rows.len(), 1);
    assert_eq!(data.type_options.len(), 2);
    assert_eq!(data.industry_options.len(), 1);
}

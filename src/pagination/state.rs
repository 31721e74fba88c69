use serde::Serialize;

use crate::domain::types::PageSize;
use crate::pagination::sequence::{PageButton, get_pages};

/// Current page, page size and total item count of a paginated list.
///
/// Every transition returns `true` when the page that should be displayed
/// needs to be fetched again.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct PaginationState {
    current_page: usize,
    page_size: PageSize,
    total_item_count: usize,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new(PageSize::default())
    }
}

impl PaginationState {
    pub fn new(page_size: PageSize) -> Self {
        Self {
            current_page: 1,
            page_size,
            total_item_count: 0,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    pub fn total_item_count(&self) -> usize {
        self.total_item_count
    }

    pub fn total_pages(&self) -> usize {
        self.total_item_count.div_ceil(self.page_size.get())
    }

    /// Page number shown to the user; zero when there is nothing to show.
    pub fn display_page_number(&self) -> usize {
        if self.total_item_count == 0 {
            0
        } else {
            self.current_page
        }
    }

    pub fn is_first_page(&self) -> bool {
        self.current_page <= 1
    }

    pub fn is_last_page(&self) -> bool {
        let total_pages = self.total_pages();
        total_pages == 0 || self.current_page == total_pages
    }

    /// Number of records to skip to reach the current page.
    pub fn offset(&self) -> usize {
        (self.current_page - 1) * self.page_size.get()
    }

    pub fn limit(&self) -> usize {
        self.page_size.get()
    }

    pub fn page_counter_info(&self) -> String {
        format!(
            "Page {} of {} • {} items per page",
            self.display_page_number(),
            self.total_pages(),
            self.page_size
        )
    }

    /// Buttons of the page strip for the current state.
    pub fn buttons(&self, max_buttons: usize) -> Vec<PageButton> {
        get_pages(self.current_page, self.total_pages(), max_buttons)
    }

    pub fn go_first(&mut self) -> bool {
        self.current_page = 1;
        true
    }

    pub fn go_last(&mut self) -> bool {
        self.current_page = self.total_pages().max(1);
        true
    }

    pub fn go_previous(&mut self) -> bool {
        if self.current_page > 1 {
            self.current_page -= 1;
            true
        } else {
            false
        }
    }

    pub fn go_next(&mut self) -> bool {
        if self.current_page * self.page_size.get() < self.total_item_count {
            self.current_page += 1;
            true
        } else {
            false
        }
    }

    /// Jumps to `page`, clamped into the range of known pages.
    pub fn go_to_page(&mut self, page: usize) -> bool {
        let last_page = self.total_pages().max(1);
        let target = page.clamp(1, last_page);
        if target != page {
            log::warn!("Requested page {page} is outside 1..={last_page}, using {target}");
        }
        self.current_page = target;
        true
    }

    pub fn set_page_size(&mut self, page_size: PageSize) -> bool {
        self.page_size = page_size;
        self.current_page = 1;
        true
    }

    /// Records the total reported by the last fetch.
    ///
    /// Returns `true` when the current page fell out of range and was moved
    /// back to the last page.
    pub fn set_total_item_count(&mut self, total_item_count: usize) -> bool {
        self.total_item_count = total_item_count;
        let last_page = self.total_pages().max(1);
        if self.current_page > last_page {
            self.current_page = last_page;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(page_size: usize, total: usize) -> PaginationState {
        let mut state = PaginationState::new(PageSize::new(page_size).unwrap());
        state.set_total_item_count(total);
        state
    }

    #[test]
    fn starts_on_first_page_with_default_size() {
        let state = PaginationState::default();

        assert_eq!(state.current_page(), 1);
        assert_eq!(state.limit(), 25);
        assert_eq!(state.offset(), 0);
        assert_eq!(state.total_pages(), 0);
        assert!(state.is_first_page());
        assert!(state.is_last_page());
        assert_eq!(state.display_page_number(), 0);
    }

    #[test]
    fn go_last_on_237_records() {
        let mut state = state(25, 237);

        assert_eq!(state.total_pages(), 10);
        assert!(state.go_last());
        assert_eq!(state.current_page(), 10);
        assert_eq!(state.offset(), 225);
        assert_eq!(state.limit(), 25);
        assert!(state.is_last_page());
        assert!(!state.is_first_page());
    }

    #[test]
    fn go_last_with_no_records_stays_on_first_page() {
        let mut state = state(25, 0);

        state.go_last();

        assert_eq!(state.current_page(), 1);
        assert_eq!(state.offset(), 0);
    }

    #[test]
    fn go_previous_is_noop_on_first_page() {
        let mut state = state(25, 100);

        assert!(!state.go_previous());
        assert_eq!(state.current_page(), 1);

        state.go_to_page(3);
        assert!(state.go_previous());
        assert_eq!(state.current_page(), 2);
    }

    #[test]
    fn go_next_stops_when_page_covers_the_total() {
        let mut state = state(25, 50);

        assert!(state.go_next());
        assert_eq!(state.current_page(), 2);
        assert!(!state.go_next());
        assert_eq!(state.current_page(), 2);
    }

    #[test]
    fn go_next_is_noop_without_records() {
        let mut state = state(25, 0);

        assert!(!state.go_next());
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn go_to_page_is_clamped() {
        let mut state = state(10, 95);

        state.go_to_page(7);
        assert_eq!(state.current_page(), 7);
        state.go_to_page(42);
        assert_eq!(state.current_page(), 10);
        state.go_to_page(0);
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn set_page_size_resets_to_first_page() {
        let mut state = state(10, 95);
        state.go_to_page(5);

        assert!(state.set_page_size(PageSize::new(50).unwrap()));

        assert_eq!(state.current_page(), 1);
        assert_eq!(state.limit(), 50);
        assert_eq!(state.total_pages(), 2);
    }

    #[test]
    fn shrinking_total_pulls_current_page_back() {
        let mut state = state(10, 95);
        state.go_last();

        assert!(state.set_total_item_count(31));
        assert_eq!(state.current_page(), 4);
        assert!(!state.set_total_item_count(40));
        assert_eq!(state.current_page(), 4);
    }

    #[test]
    fn counter_info_shows_zero_for_empty_lists() {
        assert_eq!(
            state(25, 0).page_counter_info(),
            "Page 0 of 0 • 25 items per page"
        );
        assert_eq!(
            state(25, 237).page_counter_info(),
            "Page 1 of 10 • 25 items per page"
        );
    }
}

use std::collections::VecDeque;
use std::time::Instant;

use crate::domain::account::AccountPage;
use crate::dto::list_view::ListViewPageData;
use crate::list_view::{Effect, FetchRequest, FetchSource, ListView};
use crate::pagination::PaginatorEvent;
use crate::repository::errors::RepositoryResult;
use crate::repository::{AccountReader, MetadataReader};
use crate::services::{CreateAccountForm, Notifier};

/// Runs a fetch against the endpoint chosen by the request.
pub fn fetch_page<R>(repo: &R, request: &FetchRequest) -> RepositoryResult<AccountPage>
where
    R: AccountReader + ?Sized,
{
    match request.source {
        FetchSource::Filters => repo.list_accounts(&request.query),
        FetchSource::Search => repo.search_accounts(&request.query),
    }
}

/// A mounted list view wired to a repository and a notifier.
///
/// Every command drains the effects it causes before returning, so fetches
/// resolve in dispatch order.
pub struct ListViewSession<R, N> {
    view: ListView,
    repo: R,
    notifier: N,
}

impl<R, N> ListViewSession<R, N>
where
    R: AccountReader + MetadataReader,
    N: Notifier,
{
    /// Mounts `view`: loads metadata and the first page.
    pub fn mount(mut view: ListView, repo: R, notifier: N) -> Self {
        let effects = view.mount();
        let mut session = Self {
            view,
            repo,
            notifier,
        };
        session.run(effects);
        session
    }

    pub fn view(&self) -> &ListView {
        &self.view
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn render(&self) -> ListViewPageData {
        self.view.render()
    }

    pub fn paginator_event(&mut self, event: PaginatorEvent) {
        let effects = self.view.handle_paginator_event(event);
        self.run(effects);
    }

    /// Click on the page strip button at `index`.
    pub fn click_page_button(&mut self, index: usize) {
        let event = self.render().paginator.button_event(index);
        match event {
            Some(event) => self.paginator_event(event),
            None => log::warn!("No page button at index {index}"),
        }
    }

    pub fn change_type(&mut self, value: &str) {
        let effects = self.view.handle_type_change(value);
        self.run(effects);
    }

    pub fn change_industry(&mut self, value: &str) {
        let effects = self.view.handle_industry_change(value);
        self.run(effects);
    }

    pub fn search(&mut self, text: &str, now: Instant) {
        self.view.handle_search(text, now);
    }

    /// Runs the debounced search fetch when it is due.
    pub fn tick(&mut self, now: Instant) {
        let effects = self.view.tick(now);
        self.run(effects);
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.view.next_deadline()
    }

    pub fn create_account<F>(&mut self, form: &mut F)
    where
        F: CreateAccountForm + ?Sized,
    {
        let outcome = form.open();
        let effects = self.view.handle_account_created(outcome);
        self.run(effects);
    }

    /// Unmounts the view, cancelling any pending search.
    pub fn teardown(mut self) -> (R, N) {
        self.view.teardown();
        (self.repo, self.notifier)
    }

    fn run(&mut self, effects: Vec<Effect>) {
        let mut queue = VecDeque::from(effects);
        while let Some(effect) = queue.pop_front() {
            queue.extend(self.execute(effect));
        }
    }

    fn execute(&mut self, effect: Effect) -> Vec<Effect> {
        match effect {
            Effect::Fetch(request) => {
                let result = fetch_page(&self.repo, &request);
                self.view.apply_fetch_result(request.sequence, result)
            }
            Effect::Notify(toast) => {
                self.notifier.notify(&toast);
                Vec::new()
            }
            Effect::LoadObjectInfo => {
                let result = self.repo.object_info();
                self.view.apply_object_info(result)
            }
            Effect::LoadPicklist {
                record_type_id,
                field,
            } => {
                let result = self.repo.picklist_values(&record_type_id, field);
                self.view.apply_picklist(field, result)
            }
        }
    }
}

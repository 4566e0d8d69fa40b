//! View state for the user directory page.
//!
//! Everything the page shows is derived from [`UserListState`]: the pagination
//! position, the search text, the sort order, and the records of the last page
//! that finished loading. The page's records are replaced wholesale on every
//! applied fetch.

use std::any::Any;

use chrono::{DateTime, Utc};
use log::debug;
use roster_states::{State, snapshot_clone};

use super::pagination::Pagination;
use super::search;
use super::sort::SortOrder;
use super::table::{TableBody, project_table};
use crate::{UserPage, UserRecord};

/// Identifies one issued page request. Only the newest tag is authoritative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTag {
    pub page: u32,
    pub generation: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchStatus {
    /// Nothing requested for the current page yet.
    #[default]
    Idle,
    Loading(RequestTag),
    Loaded,
    Failed { page: u32, message: String },
}

#[derive(Debug, Clone)]
pub struct UserListState {
    pagination: Pagination,
    search: String,
    sort: SortOrder,
    records: Vec<UserRecord>,
    status: FetchStatus,
    generation: u64,
    last_fetch: Option<DateTime<Utc>>,
}

impl Default for UserListState {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_PAGE_SIZE)
    }
}

impl UserListState {
    /// Page 1, neutral sort, empty search.
    pub fn new(page_size: u32) -> Self {
        Self {
            pagination: Pagination::new(page_size),
            search: String::new(),
            sort: SortOrder::Neutral,
            records: Vec::new(),
            status: FetchStatus::Idle,
            generation: 0,
            last_fetch: None,
        }
    }

    pub fn page(&self) -> u32 {
        self.pagination.page()
    }

    pub fn total_pages(&self) -> u32 {
        self.pagination.total_pages()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
    }

    pub fn sort(&self) -> SortOrder {
        self.sort
    }

    pub fn advance_sort(&mut self) -> SortOrder {
        self.sort = self.sort.advance();
        self.sort
    }

    pub fn status(&self) -> &FetchStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.status, FetchStatus::Loading(_))
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            FetchStatus::Failed { message, .. } => Some(message.as_str()),
            _ => None,
        }
    }

    /// Records of the last applied page, in fetch order.
    pub fn records(&self) -> &[UserRecord] {
        &self.records
    }

    pub fn last_fetch(&self) -> Option<DateTime<Utc>> {
        self.last_fetch
    }

    pub fn can_prev(&self) -> bool {
        self.pagination.can_prev()
    }

    pub fn can_next(&self) -> bool {
        self.pagination.can_next()
    }

    /// Move to the next page. The caller issues the fetch when this returns `true`.
    pub fn next(&mut self) -> bool {
        self.pagination.next()
    }

    /// Move to the previous page. The caller issues the fetch when this returns `true`.
    pub fn prev(&mut self) -> bool {
        self.pagination.prev()
    }

    /// Mark a request for the current page as in flight and return its tag.
    ///
    /// Any earlier tag stops being authoritative.
    pub fn begin_fetch(&mut self) -> RequestTag {
        self.generation += 1;
        let tag = RequestTag {
            page: self.page(),
            generation: self.generation,
        };
        self.status = FetchStatus::Loading(tag);
        tag
    }

    /// The request whose result will be accepted, if one is in flight.
    pub fn pending_request(&self) -> Option<RequestTag> {
        match self.status {
            FetchStatus::Loading(tag) => Some(tag),
            _ => None,
        }
    }

    /// Apply a finished request. Returns `false` (and changes nothing) when `tag`
    /// is not the in-flight request for the current page.
    pub fn apply_fetch(
        &mut self,
        tag: RequestTag,
        result: Result<UserPage, String>,
        now: DateTime<Utc>,
    ) -> bool {
        if self.pending_request() != Some(tag) || tag.page != self.page() {
            debug!(
                "Discarding stale result for page {} (generation {}), current page is {}",
                tag.page,
                tag.generation,
                self.page()
            );
            return false;
        }

        match result {
            Ok(page) => {
                self.records = page.records;
                self.last_fetch = Some(now);
                self.pagination.set_total_count(page.total_count);
                self.status = if self.page() == tag.page {
                    FetchStatus::Loaded
                } else {
                    // Total shrank under us; the records belong to a page that no longer exists.
                    FetchStatus::Idle
                };
            }
            Err(message) => {
                self.status = FetchStatus::Failed {
                    page: tag.page,
                    message,
                };
            }
        }
        true
    }

    /// Record a request that could not be issued at all.
    pub fn fail_pending(&mut self, message: impl Into<String>) {
        self.status = FetchStatus::Failed {
            page: self.page(),
            message: message.into(),
        };
    }

    /// Sorted, then filtered, records of the current page.
    pub fn visible_records(&self) -> Vec<&UserRecord> {
        search::filter(self.sort.apply(&self.records), &self.search)
    }

    pub fn table(&self) -> TableBody<'_> {
        project_table(self.is_loading(), self.error(), self.visible_records())
    }

    pub fn page_label(&self) -> String {
        format!("Page {} of {}", self.page(), self.total_pages())
    }
}

impl State for UserListState {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        snapshot_clone(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: u32, name: &str) -> UserRecord {
        UserRecord {
            id,
            name: name.to_owned(),
            username: name.to_lowercase(),
            email: format!("{}@example.com", name.to_lowercase()),
            website: "example.com".to_owned(),
        }
    }

    fn page(page: u32, ids: std::ops::RangeInclusive<u32>, total_count: u32) -> UserPage {
        UserPage {
            page,
            records: ids.map(|id| user(id, &format!("User {id}"))).collect(),
            total_count,
        }
    }

    fn loaded_first_page() -> UserListState {
        let mut state = UserListState::new(5);
        let tag = state.begin_fetch();
        assert!(state.apply_fetch(tag, Ok(page(1, 1..=5, 10)), Utc::now()));
        state
    }

    #[test]
    fn starts_on_page_one_neutral_and_unfiltered() {
        let state = UserListState::default();
        assert_eq!(state.page(), 1);
        assert_eq!(state.total_pages(), 0);
        assert_eq!(state.search(), "");
        assert_eq!(state.sort(), SortOrder::Neutral);
        assert!(!state.is_loading());
        assert_eq!(state.status(), &FetchStatus::Idle);
    }

    #[test]
    fn applying_first_page_derives_total_pages() {
        let state = loaded_first_page();
        assert_eq!(state.total_pages(), 2);
        assert_eq!(state.records().len(), 5);
        assert_eq!(state.status(), &FetchStatus::Loaded);
        assert!(state.last_fetch().is_some());
        assert_eq!(state.page_label(), "Page 1 of 2");
    }

    #[test]
    fn loading_keeps_previous_records() {
        let mut state = loaded_first_page();
        assert!(state.next());
        let tag = state.begin_fetch();

        assert!(state.is_loading());
        assert_eq!(tag.page, 2);
        assert_eq!(state.records()[0].id, 1, "still showing page 1 records");
    }

    #[test]
    fn stale_page_result_is_discarded() {
        let mut state = loaded_first_page();

        assert!(state.next());
        let page_two = state.begin_fetch();
        assert!(state.prev());
        let page_one = state.begin_fetch();

        // Page 2 resolves late; current page is 1.
        assert!(!state.apply_fetch(page_two, Ok(page(2, 6..=10, 10)), Utc::now()));
        assert!(state.is_loading());
        assert_eq!(state.records()[0].id, 1);

        assert!(state.apply_fetch(page_one, Ok(page(1, 1..=5, 10)), Utc::now()));
        assert!(!state.is_loading());
    }

    #[test]
    fn superseded_request_for_same_page_is_discarded() {
        let mut state = UserListState::new(5);
        let first = state.begin_fetch();
        let second = state.begin_fetch();
        assert_eq!(first.page, second.page);

        assert!(!state.apply_fetch(first, Ok(page(1, 1..=5, 10)), Utc::now()));
        assert_eq!(state.pending_request(), Some(second));
    }

    #[test]
    fn failure_surfaces_error_and_clears_loading() {
        let mut state = UserListState::new(5);
        let tag = state.begin_fetch();

        assert!(state.apply_fetch(tag, Err("API returned status: 500".to_owned()), Utc::now()));
        assert!(!state.is_loading());
        assert_eq!(state.error(), Some("API returned status: 500"));
        assert!(matches!(state.table(), TableBody::Failed { .. }));

        // Retry goes back to loading and clears the error.
        let retry = state.begin_fetch();
        assert_eq!(retry.page, 1);
        assert!(state.error().is_none());
    }

    #[test]
    fn shrinking_total_moves_back_and_requests_refetch() {
        let mut state = loaded_first_page();
        assert!(state.next());
        let tag = state.begin_fetch();

        // Upstream now says only 5 users exist.
        assert!(state.apply_fetch(tag, Ok(page(2, 1..=0, 5)), Utc::now()));
        assert_eq!(state.page(), 1);
        assert_eq!(state.status(), &FetchStatus::Idle);
    }

    #[test]
    fn visible_records_sort_then_filter() {
        let mut state = UserListState::new(5);
        let tag = state.begin_fetch();
        let records = vec![user(1, "Bob"), user(2, "Amy"), user(3, "Pam")];
        assert!(state.apply_fetch(
            tag,
            Ok(UserPage {
                page: 1,
                records,
                total_count: 3,
            }),
            Utc::now()
        ));

        state.advance_sort();
        let names: Vec<&str> = state
            .visible_records()
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, ["Amy", "Bob", "Pam"]);

        state.set_search("AM");
        let names: Vec<&str> = state
            .visible_records()
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, ["Amy", "Pam"]);

        // Back to neutral keeps the filter but restores fetch order.
        state.advance_sort();
        state.advance_sort();
        let ids: Vec<u32> = state.visible_records().iter().map(|r| r.id).collect();
        assert_eq!(ids, [2, 3]);
    }

    #[test]
    fn fail_pending_records_current_page() {
        let mut state = loaded_first_page();
        assert!(state.next());
        state.begin_fetch();
        state.fail_pending("no runtime");
        assert_eq!(
            state.status(),
            &FetchStatus::Failed {
                page: 2,
                message: "no runtime".to_owned()
            }
        );
    }
}

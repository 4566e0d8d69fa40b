//! User directory domain module.
//!
//! State, the fetch command and the pure projections live here; UI code under
//! `ui/src/widgets/**` only reads [`UserListState`] and calls the actions below.
//! Every action that changes the page issues the fetch itself, so there is no
//! implicit "page changed" dependency to track.

pub mod fetch_command;
pub mod pagination;
pub mod search;
pub mod sort;
pub mod state;
pub mod table;

use log::error;
use roster_states::{Error, StateCtx};

pub use fetch_command::FetchUserPageCommand;
pub use pagination::Pagination;
pub use sort::SortOrder;
pub use state::{FetchStatus, RequestTag, UserListState};
pub use table::{COLUMNS, RowView, SKELETON_ROWS, TableBody};

/// Register the directory's state and command.
pub fn install(ctx: &mut StateCtx, page_size: u32) {
    ctx.add_state(UserListState::new(page_size));
    ctx.record_command(FetchUserPageCommand);
}

/// Tag a request for the current page and dispatch the fetch.
pub fn request_page(ctx: &mut StateCtx) -> Result<RequestTag, Error> {
    let tag = ctx.try_state_mut::<UserListState>()?.begin_fetch();
    if let Err(err) = ctx.dispatch::<FetchUserPageCommand>() {
        error!("Could not dispatch page {} fetch: {err}", tag.page);
        ctx.try_state_mut::<UserListState>()?
            .fail_pending(err.to_string());
        return Err(err);
    }
    Ok(tag)
}

/// Issue the fetch for the current page if none has been made yet.
pub fn ensure_loaded(ctx: &mut StateCtx) -> Result<Option<RequestTag>, Error> {
    let idle = matches!(ctx.try_state::<UserListState>()?.status(), FetchStatus::Idle);
    if idle {
        request_page(ctx).map(Some)
    } else {
        Ok(None)
    }
}

/// Go forward one page and fetch it. `Ok(None)` when already on the last page.
pub fn next_page(ctx: &mut StateCtx) -> Result<Option<RequestTag>, Error> {
    if ctx.try_state_mut::<UserListState>()?.next() {
        request_page(ctx).map(Some)
    } else {
        Ok(None)
    }
}

/// Go back one page and fetch it. `Ok(None)` when already on the first page.
pub fn prev_page(ctx: &mut StateCtx) -> Result<Option<RequestTag>, Error> {
    if ctx.try_state_mut::<UserListState>()?.prev() {
        request_page(ctx).map(Some)
    } else {
        Ok(None)
    }
}

/// Manual retry after a failed fetch.
pub fn retry(ctx: &mut StateCtx) -> Result<RequestTag, Error> {
    request_page(ctx)
}

pub fn toggle_sort(ctx: &mut StateCtx) -> Result<SortOrder, Error> {
    Ok(ctx.try_state_mut::<UserListState>()?.advance_sort())
}

pub fn set_search(ctx: &mut StateCtx, query: impl Into<String>) -> Result<(), Error> {
    ctx.try_state_mut::<UserListState>()?.set_search(query);
    Ok(())
}

//! Page fetch command.
//!
//! Fetching is a side effect, so it lives in a manual-only command rather than
//! running implicitly on state change. [`super::request_page`] tags the request on
//! [`UserListState`], dispatches this command, and the command reports the result
//! back through the `Updater`; `UserListState::apply_fetch` then drops it unless the
//! tag is still the authoritative one for the current page.

use chrono::Utc;
use log::{error, info, warn};
use roster_states::{CancellationToken, Command, CommandFuture, CommandSnapshot, Updater};

use super::state::UserListState;
use crate::BusinessConfig;
use crate::user_api;

#[derive(Default, Debug)]
pub struct FetchUserPageCommand;

impl Command for FetchUserPageCommand {
    fn run(
        &self,
        snap: CommandSnapshot,
        updater: Updater,
        _cancel: CancellationToken,
    ) -> CommandFuture {
        let tag = match snap.state::<UserListState>() {
            Ok(list) => list.pending_request(),
            Err(err) => {
                error!("FetchUserPageCommand: {err}");
                None
            }
        };
        let config = snap.state::<BusinessConfig>();

        Box::pin(async move {
            let Some(tag) = tag else {
                warn!("FetchUserPageCommand: no pending page request, nothing to fetch");
                return;
            };

            let result = match config {
                Ok(config) => {
                    info!(
                        "FetchUserPageCommand: fetching page {} (generation {})",
                        tag.page, tag.generation
                    );
                    user_api::fetch_page(&config, tag.page).await
                }
                Err(err) => Err(user_api::UserApiError::Config(err.to_string())),
            };

            let result = match result {
                Ok(page) => {
                    info!(
                        "FetchUserPageCommand: page {} returned {} users of {}",
                        page.page,
                        page.records.len(),
                        page.total_count
                    );
                    Ok(page)
                }
                Err(err) => {
                    error!("FetchUserPageCommand: page {} failed: {err}", tag.page);
                    Err(err.to_string())
                }
            };

            let now = Utc::now();
            updater.update::<UserListState, _>(move |state| {
                state.apply_fetch(tag, result, now);
            });
        })
    }
}

//! Client for the upstream paginated `/users` collection.
//!
//! One request per page: `GET {base}/users?_page={page}&_limit={page_size}`.
//! The collection size comes from the `X-Total-Count` header when the upstream
//! sends it, and from [`BusinessConfig::fallback_total_count`] otherwise.

use log::{debug, warn};
use thiserror::Error;

use crate::BusinessConfig;
use crate::UserPage;
use crate::UserRecord;
use crate::http::{Client, HttpError, Response};
use crate::user_list::pagination::expected_len;

pub const TOTAL_COUNT_HEADER: &str = "x-total-count";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserApiError {
    #[error(transparent)]
    Http(#[from] HttpError),
    #[error("API returned status: {0}")]
    Status(u16),
    #[error("Failed to parse users: {0}")]
    Parse(String),
    #[error("Configuration unavailable: {0}")]
    Config(String),
}

pub type ApiResult<T> = Result<T, UserApiError>;

/// GET one page of users.
pub async fn fetch_page(config: &BusinessConfig, page: u32) -> ApiResult<UserPage> {
    let url = config.users_url();
    let limit = config.page_size;

    let response = Client::get(url.as_str())
        .query("_page", page)
        .query("_limit", limit)
        .header("accept", "application/json")
        .send()
        .await?;

    if !response.is_success() {
        return Err(UserApiError::Status(response.status));
    }

    let mut records: Vec<UserRecord> = response
        .json()
        .map_err(|e| UserApiError::Parse(e.to_string()))?;

    let total_count = match total_count(&response) {
        Some(count) => count,
        None => {
            debug!(
                "No usable {TOTAL_COUNT_HEADER} header, assuming {} users",
                config.fallback_total_count
            );
            config.fallback_total_count
        }
    };

    let limit_len = usize::try_from(limit).unwrap_or(usize::MAX);
    if records.len() > limit_len {
        warn!(
            "Upstream returned {} users for page {page}, keeping the first {limit}",
            records.len()
        );
        records.truncate(limit_len);
    }

    let expected = expected_len(page, limit, total_count);
    if usize::try_from(expected).is_ok_and(|expected| records.len() != expected) {
        debug!(
            "Page {page} holds {} users, {expected} expected from a total of {total_count}",
            records.len()
        );
    }

    Ok(UserPage {
        page,
        records,
        total_count,
    })
}

fn total_count(response: &Response) -> Option<u32> {
    response.header(TOTAL_COUNT_HEADER)?.trim().parse().ok()
}

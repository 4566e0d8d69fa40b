mod config;
pub mod http;
pub mod user_api;
mod user;
pub mod user_list;

pub use config::{
    BusinessConfig, DEFAULT_API_BASE_URL, DEFAULT_FALLBACK_TOTAL_COUNT, DEFAULT_PAGE_SIZE,
};
pub use user::{UserPage, UserRecord};
pub use user_api::{ApiResult, UserApiError};
pub use user_list::{
    FetchStatus, FetchUserPageCommand, RequestTag, SortOrder, TableBody, UserListState,
};

pub mod user_list;

pub use user_list::{UserListAction, user_list_page};

//! User directory page.
//!
//! Rendering only reads [`UserListState`](roster_business::UserListState); every
//! interaction is collected as a [`UserListAction`] and applied once the frame's
//! widgets are laid out.

mod panel;
pub mod table;

pub use panel::{UserListAction, apply_action, user_list_page};

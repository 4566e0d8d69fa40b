//! Table components for the user directory.
//!
//! - `columns`: Column definitions and widths
//! - `header`: Header row, including the name sort toggle
//! - `row`: Data rows and skeleton rows
//! - `cells`: Cell rendering functions

mod cells;
pub mod columns;
pub mod header;
pub mod row;

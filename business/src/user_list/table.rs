//! Pure projection of the page state into table rows.

use crate::UserRecord;

/// Placeholder rows shown while a page is loading.
pub const SKELETON_ROWS: usize = 5;

pub const COLUMNS: [&str; 5] = ["ID", "Name", "Username", "Email", "Website"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView<'a> {
    pub record: &'a UserRecord,
    /// Even ids get the alternate background.
    pub striped: bool,
}

impl<'a> RowView<'a> {
    pub fn new(record: &'a UserRecord) -> Self {
        Self {
            record,
            striped: record.id % 2 == 0,
        }
    }

    /// Cell texts in [`COLUMNS`] order.
    pub fn cells(&self) -> [String; 5] {
        [
            self.record.id.to_string(),
            self.record.name.clone(),
            self.record.username.clone(),
            self.record.email.clone(),
            self.record.website.clone(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableBody<'a> {
    Skeleton { rows: usize },
    Failed { message: &'a str },
    /// Nothing survived the filter (or the page was empty).
    Empty,
    Rows(Vec<RowView<'a>>),
}

/// Loading wins over everything, then an error, then the records.
pub fn project_table<'a>(
    loading: bool,
    error: Option<&'a str>,
    records: Vec<&'a UserRecord>,
) -> TableBody<'a> {
    if loading {
        return TableBody::Skeleton {
            rows: SKELETON_ROWS,
        };
    }
    if let Some(message) = error {
        return TableBody::Failed { message };
    }
    if records.is_empty() {
        return TableBody::Empty;
    }
    TableBody::Rows(records.into_iter().map(RowView::new).collect())
}

//! Case-insensitive name/username filter over the current page.

use crate::UserRecord;

/// `true` when `query` is empty or is a case-insensitive substring of the
/// record's name or username.
pub fn matches(record: &UserRecord, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    record.name.to_lowercase().contains(&needle) || record.username.to_lowercase().contains(&needle)
}

/// Keep the records that [`matches`] `query`, preserving their order.
pub fn filter<'a>(
    records: impl IntoIterator<Item = &'a UserRecord>,
    query: &str,
) -> Vec<&'a UserRecord> {
    records
        .into_iter()
        .filter(|record| matches(record, query))
        .collect()
}

use serde::Deserialize;

/// One entry of the upstream `/users` collection.
///
/// Only the columns the directory shows are kept; other upstream fields
/// (address, phone, company, ...) are ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserRecord {
    pub id: u32,
    pub name: String,
    pub username: String,
    pub email: String,
    pub website: String,
}

/// One fetched page plus the collection size the upstream reported for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserPage {
    pub page: u32,
    pub records: Vec<UserRecord>,
    pub total_count: u32,
}

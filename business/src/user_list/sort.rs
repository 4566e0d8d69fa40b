//! Three-state name sort applied to the current page.

use std::cmp::Ordering;

use feruca::Collator;

use crate::UserRecord;

/// `Neutral → Ascending → Descending → Neutral → …`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Keep fetch order.
    #[default]
    Neutral,
    Ascending,
    Descending,
}

impl SortOrder {
    #[must_use]
    pub fn advance(self) -> Self {
        match self {
            Self::Neutral => Self::Ascending,
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Neutral,
        }
    }

    /// Order `records` by name. Recomputed from the full list on every call; the
    /// input order is never modified, so `Neutral` always means fetch order.
    pub fn apply(self, records: &[UserRecord]) -> Vec<&UserRecord> {
        let mut sorted: Vec<&UserRecord> = records.iter().collect();
        if self == Self::Neutral {
            return sorted;
        }

        let mut collator = Collator::default();
        sorted.sort_by(|a, b| {
            let ordering = collator.collate(a.name.as_str(), b.name.as_str());
            if self == Self::Descending {
                ordering.reverse()
            } else {
                ordering
            }
        });
        sorted
    }
}

/// Unicode collation with the CLDR root ordering: base letters first, then
/// accents, then case (lowercase before uppercase).
pub fn collate(a: &str, b: &str) -> Ordering {
    Collator::default().collate(a, b)
}

//! Page bookkeeping for the user directory.

use std::ops::RangeInclusive;

/// Current page and page count. `page` is 1-based and stays within
/// `1..=max(total_pages, 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: u32,
    total_pages: u32,
    page_size: u32,
}

impl Pagination {
    /// Page 1 of an unknown (zero) number of pages. A zero `page_size` is treated as 1.
    pub fn new(page_size: u32) -> Self {
        Self {
            page: 1,
            total_pages: 0,
            page_size: page_size.max(1),
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn can_prev(&self) -> bool {
        self.page > 1
    }

    pub fn can_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Move forward one page. Returns whether the page changed.
    pub fn next(&mut self) -> bool {
        if self.can_next() {
            self.page += 1;
            true
        } else {
            false
        }
    }

    /// Move back one page. Returns whether the page changed.
    pub fn prev(&mut self) -> bool {
        if self.can_prev() {
            self.page -= 1;
            true
        } else {
            false
        }
    }

    /// Derive the page count from the collection size and pull `page` back in range.
    pub fn set_total_count(&mut self, total_count: u32) {
        self.total_pages = total_pages(total_count, self.page_size);
        self.page = self.page.clamp(1, self.total_pages.max(1));
    }

    /// 1-based ids covered by the current page.
    pub fn record_range(&self) -> RangeInclusive<u32> {
        record_range(self.page, self.page_size)
    }
}

/// `ceil(total_count / page_size)`
pub fn total_pages(total_count: u32, page_size: u32) -> u32 {
    total_count.div_ceil(page_size.max(1))
}

/// `(page-1)*page_size+1 ..= page*page_size`
pub fn record_range(page: u32, page_size: u32) -> RangeInclusive<u32> {
    let start = page.saturating_sub(1).saturating_mul(page_size) + 1;
    let end = page.saturating_mul(page_size);
    start..=end
}

/// How many records page `page` can hold at most, given the collection size.
pub fn expected_len(page: u32, page_size: u32, total_count: u32) -> u32 {
    let before = page.saturating_sub(1).saturating_mul(page_size);
    total_count.saturating_sub(before).min(page_size)
}

/// Page size is fixed; clients only choose the page number.
pub const PAGE_SIZE: u64 = 50;

/// Row window for a 1-based page number: offset = (page - 1) * PAGE_SIZE.
#[must_use]
pub fn page_window(page: u64) -> (u64, u64) {
    (page.saturating_sub(1) * PAGE_SIZE, PAGE_SIZE)
}

/// ceil(total_count / PAGE_SIZE); zero when nothing matched.
#[must_use]
pub fn total_pages(total_count: u64) -> u64 {
    total_count.div_ceil(PAGE_SIZE)
}

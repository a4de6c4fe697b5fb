use serde::Serialize;

use crate::employee::{normalize_dob, EmployeeRecord};

/// Page sizes offered by the listing.
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [5, 10, 15, 20];
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Zero-based page index and page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: usize,
    pub page_size: usize,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub page_size: usize,
    pub total: usize,
}

impl<T> Page<T> {
    pub fn total_pages(&self) -> usize {
        if self.page_size == 0 {
            return 0;
        }
        self.total.div_ceil(self.page_size)
    }
}

/// Prepares fetched records for display: `dob` cut to a calendar date and
/// rows ordered by identifier, descending, compared as strings.
///
/// Records without an identifier sort last.
pub fn sort_for_listing(mut records: Vec<EmployeeRecord>) -> Vec<EmployeeRecord> {
    for record in &mut records {
        record.dob = normalize_dob(&record.dob);
    }
    records.sort_by(|a, b| b.id.cmp(&a.id));
    records
}

/// Slices `items` into the requested page. A zero page size is treated as
/// the default; pages past the end are empty.
pub fn paginate<T: Clone>(items: &[T], request: PageRequest) -> Page<T> {
    let page_size = if request.page_size == 0 {
        DEFAULT_PAGE_SIZE
    } else {
        request.page_size
    };
    let start = request.page.saturating_mul(page_size).min(items.len());
    let end = start.saturating_add(page_size).min(items.len());
    Page {
        items: items[start..end].to_vec(),
        page: request.page,
        page_size,
        total: items.len(),
    }
}

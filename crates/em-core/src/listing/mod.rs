//! Employee listing: ordering, pagination and delimited export.

pub mod export;
pub mod page;

pub use export::{to_delimited, EXPORT_HEADERS};
pub use page::{paginate, sort_for_listing, Page, PageRequest, PAGE_SIZE_OPTIONS};

// ScanShelf - core/paginate.rs
//
// Cuts an ordered catalog into pages.
// Core layer: pure logic, no I/O.

use crate::core::model::{Page, PageRequest, ProfileRecord};

/// Number of pages needed for `total_items` at `page_size`; never less than 1.
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    total_items.div_ceil(page_size.max(1)).max(1)
}

/// Return the requested page of `ordered`.
///
/// The page starts at `(page_number - 1) * page_size` and holds at most
/// `page_size` records. A page past the end is empty rather than an error.
pub fn paginate(ordered: Vec<ProfileRecord>, request: PageRequest) -> Page {
    let total_items = ordered.len();
    let items: Vec<ProfileRecord> = ordered
        .into_iter()
        .skip(request.offset())
        .take(request.page_size())
        .collect();

    Page {
        items,
        total_items,
        total_pages: total_pages(total_items, request.page_size()),
        page_number: request.page_number(),
        page_size: request.page_size(),
    }
}

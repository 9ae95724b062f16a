//! Fixed-size pagination over the filtered result list
//!
//! Pure functions for slicing results into pages of [`PAGE_SIZE`] and for
//! describing the current page. Pages are 1-indexed. A page outside
//! `1..=total_pages` is not clamped here; it simply yields an empty slice.

use serde::Serialize;

/// Restaurants shown per page
pub const PAGE_SIZE: usize = 9;

/// Number of pages needed for `total_items`
///
/// Zero items, or a zero `page_size`, means zero pages.
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total_items.div_ceil(page_size)
}

/// Calculate the `[start, end)` bounds of `page`
///
/// Returns `None` when the page is below 1 or starts past the last item.
pub fn page_bounds(total_items: usize, page: usize, page_size: usize) -> Option<(usize, usize)> {
    if page == 0 {
        return None;
    }

    let start = (page - 1).checked_mul(page_size)?;
    if start >= total_items {
        return None;
    }

    let end = (start + page_size).min(total_items);
    Some((start, end))
}

/// Items on `page`, at most `page_size` of them
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    match page_bounds(items.len(), page, page_size) {
        Some((start, end)) => &items[start..end],
        None => &[],
    }
}

/// Pagination metadata for a results page
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub page_size: usize,
    pub next_page_command: Option<String>,
    pub prev_page_command: Option<String>,
}

/// Build page metadata with navigation hints
///
/// `command` is the shell command that reproduces the current search; the
/// hints append `--page N` to it. Hints are only given for pages that exist.
pub fn page_info(total_items: usize, page: usize, page_size: usize, command: &str) -> PageInfo {
    let total_pages = total_pages(total_items, page_size);

    let next_page = if page < total_pages {
        Some(format!("{command} --page {}", page + 1))
    } else {
        None
    };

    let prev_page = if page > 1 && page <= total_pages {
        Some(format!("{command} --page {}", page - 1))
    } else {
        None
    };

    PageInfo {
        current_page: page,
        total_pages,
        total_items,
        page_size,
        next_page_command: next_page,
        prev_page_command: prev_page,
    }
}

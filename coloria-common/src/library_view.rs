//! Derived library views: filter and paginate.
//!
//! These are recomputed from the snapshot on every read and never stored.

/// Anything the library search box can match against.
pub trait Searchable {
    fn id(&self) -> &str;
    fn prompt(&self) -> &str;
}

/// Case-insensitive substring match on prompt or id, preserving order.
/// An empty query returns every item.
pub fn filter_items<'a, T: Searchable>(items: &'a [T], query: &str) -> Vec<&'a T> {
    if query.is_empty() {
        return items.iter().collect();
    }

    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| {
            item.prompt().to_lowercase().contains(&needle)
                || item.id().to_lowercase().contains(&needle)
        })
        .collect()
}

/// Number of pages needed for `len` items (0 when there are no items).
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// Clamp a 1-based page number into `[1, max(total_pages, 1)]`.
pub fn clamp_page(page: usize, len: usize, page_size: usize) -> usize {
    page.clamp(1, total_pages(len, page_size).max(1))
}

/// The slice `[(page-1)*size, page*size)`, truncated to the sequence.
///
/// Out-of-range pages yield an empty slice; callers clamp first.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

//! Shared query parameter types for API handlers.

use envelope_core::pagination::Page;
use serde::Deserialize;

/// Generic pagination parameters (`?limit=&offset=`).
///
/// Raw values are clamped when turned into a [`Page`].
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl PaginationParams {
    /// Page window for a listing of `total` items.
    pub fn page(&self, total: i64) -> Page {
        Page::new(self.limit, self.offset, total)
    }

    /// Range of item indices covered by this window, bounded by `len`.
    pub fn window(&self, len: usize) -> std::ops::Range<usize> {
        let page = self.page(len as i64);
        let start = (page.offset as usize).min(len);
        let end = start.saturating_add(page.limit as usize).min(len);
        start..end
    }
}

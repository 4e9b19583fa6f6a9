//! Pagination metadata for collection envelopes.

use serde::Serialize;

/// Default page size when the client does not send `limit`.
pub const DEFAULT_PAGE_LIMIT: i64 = 25;

/// Largest page size a client may request.
pub const MAX_PAGE_LIMIT: i64 = 100;

/// Metadata key under which [`Page`] is stored in `meta`.
pub const PAGINATION_KEY: &str = "pagination";

/// Clamp a user-provided limit to `[1, max]`, falling back to `default`.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).max(1).min(max)
}

/// Clamp a user-provided offset to non-negative.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}

/// Window of a paginated listing, serialized into `meta.pagination`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Page {
    pub limit: i64,
    pub offset: i64,
    pub total: i64,
}

impl Page {
    /// Build a page from raw query values, clamping them.
    pub fn new(limit: Option<i64>, offset: Option<i64>, total: i64) -> Self {
        Self {
            limit: clamp_limit(limit, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT),
            offset: clamp_offset(offset),
            total: total.max(0),
        }
    }

    /// Whether items exist past this page.
    pub fn has_more(&self) -> bool {
        self.offset.saturating_add(self.limit) < self.total
    }
}

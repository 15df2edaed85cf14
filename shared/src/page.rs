//! List pagination and dual-shape normalization.
//!
//! Older list endpoints return a bare JSON array; newer ones return
//! `{"items": [...], "total": N, ...}`. [`ListPayload`] accepts both and
//! [`ListPayload::into_page`] produces the one canonical shape the rest of
//! the client works with.

use serde::{Deserialize, Serialize};

/// Default page size used by every list view.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Pagination plus free-form filters, serialized to query parameters.
///
/// The backend paginates with `skip`/`limit`; filters are flat string pairs
/// (search text, enum choice, date bounds) forwarded verbatim.
#[derive(Debug, Clone, Serialize)]
pub struct ListQuery {
    pub skip: u32,
    pub limit: u32,
    #[serde(flatten)]
    pub filters: std::collections::BTreeMap<String, String>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_PAGE_SIZE,
            filters: Default::default(),
        }
    }
}

impl ListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// 1-based page number derived from the current offset.
    pub fn page(&self) -> u32 {
        if self.limit == 0 { 1 } else { self.skip / self.limit + 1 }
    }

    /// Move to a 1-based page, keeping the page size.
    pub fn with_page(mut self, page: u32) -> Self {
        self.skip = page.saturating_sub(1) * self.limit;
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Set a filter field. Filter changes reset to the first page.
    pub fn with_filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.insert(key.into(), value.into());
        self.skip = 0;
        self
    }

    pub fn clear_filters(&mut self) {
        self.filters.clear();
        self.skip = 0;
    }
}

/// A list response in either of the two shapes the backend produces.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ListPayload<T> {
    /// Paginated envelope. `skip`/`limit` echoes are ignored.
    Paged { items: Vec<T>, total: Option<u64> },
    /// Legacy bare array.
    Bare(Vec<T>),
}

impl<T> ListPayload<T> {
    /// Normalize to one canonical page.
    ///
    /// The reported total is trusted over the local item count; the bare
    /// shape falls back to the array length.
    pub fn into_page(self) -> ResourcePage<T> {
        match self {
            ListPayload::Paged { items, total } => {
                let fallback = items.len() as u64;
                ResourcePage {
                    items,
                    total: total.unwrap_or(fallback),
                }
            }
            ListPayload::Bare(items) => {
                let total = items.len() as u64;
                ResourcePage { items, total }
            }
        }
    }
}

/// Canonical list page: items plus the backend-reported total.
#[derive(Debug, Clone)]
pub struct ResourcePage<T> {
    pub items: Vec<T>,
    pub total: u64,
}

impl<T> Default for ResourcePage<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
        }
    }
}

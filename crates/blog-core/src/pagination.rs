//! Length-aware pagination primitives.

/// Default number of items per page.
pub const DEFAULT_PER_PAGE: u64 = 15;

/// Upper bound on items per page.
pub const MAX_PER_PAGE: u64 = 100;

/// Pagination parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-based page index.
    pub page: u64,
    /// Items per page.
    pub per_page: u64,
}

impl PageRequest {
    pub fn new(page: u64, per_page: u64) -> Self {
        Self { page, per_page }.normalize()
    }

    /// Clamp to sane values: page 0 becomes 1, per_page stays within `1..=MAX_PER_PAGE`.
    pub fn normalize(self) -> Self {
        Self {
            page: self.page.max(1),
            per_page: self.per_page.clamp(1, MAX_PER_PAGE),
        }
    }

    /// Zero-based page index.
    pub fn index(&self) -> u64 {
        self.page.saturating_sub(1)
    }

    /// Number of items to skip.
    pub fn offset(&self) -> u64 {
        self.index().saturating_mul(self.per_page)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

/// One page of results plus the total count across all pages.
#[derive(Clone, Debug, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: u64, request: PageRequest) -> Self {
        Self {
            items,
            total,
            page: request.page,
            per_page: request.per_page,
        }
    }

    /// Last page number; an empty collection still has page 1.
    pub fn last_page(&self) -> u64 {
        self.total.div_ceil(self.per_page.max(1)).max(1)
    }

    /// 1-based position of the first item on this page.
    pub fn from(&self) -> Option<u64> {
        (!self.items.is_empty()).then(|| self.page.saturating_sub(1) * self.per_page + 1)
    }

    /// 1-based position of the last item on this page.
    pub fn to(&self) -> Option<u64> {
        self.from().map(|from| from + self.items.len() as u64 - 1)
    }
}

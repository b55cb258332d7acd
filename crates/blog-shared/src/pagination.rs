//! Length-aware paginated envelope for list endpoints.

use serde::{Deserialize, Serialize};

/// Page of `data` with the metadata clients need to walk the collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub current_page: u64,
    pub data: Vec<T>,
    pub first_page_url: String,
    pub from: Option<u64>,
    pub last_page: u64,
    pub last_page_url: String,
    pub next_page_url: Option<String>,
    pub path: String,
    pub per_page: u64,
    pub prev_page_url: Option<String>,
    pub to: Option<u64>,
    pub total: u64,
}

/// Page coordinates as computed by the domain page type.
#[derive(Debug, Clone, Copy)]
pub struct PageMeta {
    pub current_page: u64,
    pub per_page: u64,
    pub total: u64,
    pub last_page: u64,
    pub from: Option<u64>,
    pub to: Option<u64>,
}

impl<T> Paginated<T> {
    /// Build the envelope; `path` is the absolute URL of the collection without a query.
    pub fn new(data: Vec<T>, meta: PageMeta, path: impl Into<String>) -> Self {
        let path = path.into();
        let last_page = meta.last_page;
        let page_url = |page: u64| format!("{path}?page={page}");

        Self {
            current_page: meta.current_page,
            first_page_url: page_url(1),
            from: meta.from,
            last_page,
            last_page_url: page_url(last_page),
            next_page_url: (meta.current_page < last_page).then(|| page_url(meta.current_page + 1)),
            prev_page_url: (meta.current_page > 1).then(|| page_url(meta.current_page - 1)),
            per_page: meta.per_page,
            to: meta.to,
            total: meta.total,
            data,
            path,
        }
    }
}

//! Data Transfer Objects - collection query parameters and paged results.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Response header carrying the total number of rows behind a paged query.
pub const TOTAL_COUNT_HEADER: &str = "X-Total-Count";

/// Sort direction for a `sort=field,direction` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Asc => write!(f, "asc"),
            SortDirection::Desc => write!(f, "desc"),
        }
    }
}

/// Optional criteria for a collection query.
///
/// An empty criteria sends no query string at all and lets the backend
/// apply its defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryCriteria {
    pub page: Option<u32>,
    pub size: Option<u32>,
    pub sort: Vec<String>,
    pub eagerload: Option<bool>,
}

impl QueryCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }

    pub fn sort(mut self, field: impl Into<String>, direction: SortDirection) -> Self {
        self.sort.push(format!("{},{}", field.into(), direction));
        self
    }

    pub fn eagerload(mut self, eagerload: bool) -> Self {
        self.eagerload = Some(eagerload);
        self
    }

    /// Query-string pairs in a stable order. `sort` may repeat.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(size) = self.size {
            pairs.push(("size", size.to_string()));
        }
        for sort in &self.sort {
            pairs.push(("sort", sort.clone()));
        }
        if let Some(eagerload) = self.eagerload {
            pairs.push(("eagerload", eagerload.to_string()));
        }
        pairs
    }
}

/// One page of a collection query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Total rows on the backend, when it reported them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_count: Option<u64>,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total_count: Option<u64>) -> Self {
        Self { items, total_count }
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> From<Vec<T>> for Page<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items, None)
    }
}

/// Parse the `X-Total-Count` header value.
pub fn parse_total_count(raw: &str) -> Option<u64> {
    raw.trim().parse().ok()
}

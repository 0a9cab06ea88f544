/// Pagination support for catalog queries
///
/// Standard pagination model used across all bounded contexts. Pages are
/// 1-based and sized by `perPage`, exactly as the catalog API expects.
use serde::{Deserialize, Serialize};

/// Pagination parameters for queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationParams {
    pub page: u32,
    pub per_page: u32,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 25,
        }
    }
}

impl PaginationParams {
    pub fn new(page: u32, per_page: u32) -> Self {
        Self { page, per_page }
    }

    pub fn first(per_page: u32) -> Self {
        Self::new(1, per_page)
    }

    /// Parameters for the page after this one
    pub fn next(&self) -> Self {
        Self::new(self.page + 1, self.per_page)
    }
}

/// Server-side pagination metadata, reproduced verbatim from the response
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PageInfo {
    pub total: Option<i32>,
    pub per_page: Option<i32>,
    pub current_page: Option<i32>,
    pub last_page: Option<i32>,
    pub has_next_page: bool,
}

/// One server-paginated batch of results
///
/// `data` keeps the order the server returned. `page_info` is absent when the
/// server did not send one; it is never synthesized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub page_info: Option<PageInfo>,
    pub data: Vec<T>,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> Page<T> {
    pub fn new(page_info: Option<PageInfo>, data: Vec<T>) -> Self {
        Self { page_info, data }
    }

    pub fn empty() -> Self {
        Self {
            page_info: None,
            data: Vec::new(),
        }
    }

    /// `false` once the server reports the last page, or when no page info came back
    pub fn has_next_page(&self) -> bool {
        self.page_info
            .as_ref()
            .map(|info| info.has_next_page)
            .unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            page_info: self.page_info,
            data: self.data.into_iter().map(f).collect(),
        }
    }
}

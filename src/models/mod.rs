pub mod portfolio;
pub mod users;

use serde::{Deserialize, Serialize};

/// Query string for the public portfolio listing.
///
/// `page` and `limit` are clamped to sane values; page numbering is 1-based.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    pub search: Option<String>,
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

impl ListQuery {
    pub fn page(&self) -> u64 {
        self.page.unwrap_or(1).max(1)
    }

    pub fn limit(&self) -> u64 {
        self.limit.unwrap_or(12).clamp(1, 100)
    }

    /// The search term with surrounding whitespace stripped; an empty or
    /// blank string counts as no search.
    pub fn search(&self) -> Option<&str> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub page: u64,
    pub limit: u64,
    pub total: u64,
    pub pages: u64,
}

impl Pagination {
    /// `pages` is the ceiling of `total / limit`; zero matches mean zero
    /// pages, not one.
    pub fn new(page: u64, limit: u64, total: u64) -> Self {
        Self {
            page,
            limit,
            total,
            pages: total.div_ceil(limit),
        }
    }
}

/// Standard paginated response envelope.
#[derive(Debug, Clone, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pagination: Pagination,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_query_defaults() {
        let query = ListQuery::default();
        assert_eq!(query.page(), 1);
        assert_eq!(query.limit(), 12);
        assert_eq!(query.search(), None);
    }

    #[test]
    fn list_query_clamps_out_of_range_values() {
        let query = ListQuery {
            search: None,
            page: Some(0),
            limit: Some(0),
        };
        assert_eq!(query.page(), 1);
        assert_eq!(query.limit(), 1);

        let query = ListQuery {
            search: None,
            page: Some(7),
            limit: Some(5000),
        };
        assert_eq!(query.page(), 7);
        assert_eq!(query.limit(), 100);
    }

    #[test]
    fn blank_search_counts_as_none() {
        let query = ListQuery {
            search: Some("   ".into()),
            page: None,
            limit: None,
        };
        assert_eq!(query.search(), None);

        let query = ListQuery {
            search: Some("  nell ".into()),
            page: None,
            limit: None,
        };
        assert_eq!(query.search(), Some("nell"));
    }

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(Pagination::new(1, 12, 0).pages, 0);
        assert_eq!(Pagination::new(1, 12, 1).pages, 1);
        assert_eq!(Pagination::new(1, 12, 12).pages, 1);
        assert_eq!(Pagination::new(1, 12, 13).pages, 2);
        assert_eq!(Pagination::new(1, 2, 3).pages, 2);
    }
}

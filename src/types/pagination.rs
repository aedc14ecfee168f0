//! Pagination types for list endpoints.

use serde::Serialize;
use utoipa::ToSchema;

use crate::config::{DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE, MAX_PAGE_NUMBER, MAX_PAGE_SIZE};

/// Pagination query parameters, 1-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationParams {
    pub page: u64,
    pub limit: u64,
}

impl PaginationParams {
    /// Build from raw query values. Unparsable values fall back to defaults,
    /// `page` is clamped to `1..=MAX_PAGE_NUMBER` and `limit` to
    /// `1..=MAX_PAGE_SIZE`.
    pub fn from_query(page: Option<&str>, limit: Option<&str>) -> Self {
        let page = page
            .and_then(|p| p.trim().parse::<u64>().ok())
            .unwrap_or(DEFAULT_PAGE_NUMBER)
            .clamp(1, MAX_PAGE_NUMBER);
        let limit = limit
            .and_then(|l| l.trim().parse::<u64>().ok())
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE);
        Self { page, limit }
    }

    /// Zero-based page index
    pub fn page_index(&self) -> u64 {
        self.page.saturating_sub(1)
    }
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE_NUMBER,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Paginated response wrapper: `{data, total, page, limit}`
#[derive(Debug, Serialize, ToSchema)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub limit: u64,
}

impl<T> Paginated<T> {
    pub fn new(data: Vec<T>, total: u64, params: PaginationParams) -> Self {
        Self {
            data,
            total,
            page: params.page,
            limit: params.limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_missing() {
        let params = PaginationParams::from_query(None, None);
        assert_eq!(params, PaginationParams { page: 1, limit: 20 });
        assert_eq!(params.page_index(), 0);
    }

    #[test]
    fn test_page_index_is_zero_based() {
        let params = PaginationParams::from_query(Some(" 3 "), Some("15"));
        assert_eq!(params.page_index(), 2);
        assert_eq!(params.limit, 15);
    }

    #[test]
    fn test_out_of_range_values_are_clamped() {
        let params = PaginationParams::from_query(Some("0"), Some("5000"));
        assert_eq!(params.page, 1);
        assert_eq!(params.limit, MAX_PAGE_SIZE);

        let params = PaginationParams::from_query(Some("abc"), Some("0"));
        assert_eq!(params.page, 1);
        assert_eq!(params.limit, 1);
    }

    #[test]
    fn test_huge_page_keeps_offset_within_i64() {
        let params = PaginationParams::from_query(Some("18446744073709551615"), Some("100"));
        assert_eq!(params.page, MAX_PAGE_NUMBER);

        let offset = params.page_index().checked_mul(params.limit);
        assert!(offset.is_some_and(|o| i64::try_from(o).is_ok()));
    }
}

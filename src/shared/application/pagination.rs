/// Pagination support for queries
///
/// Pages are 1-based.
use serde::{Deserialize, Serialize};

/// Pagination parameters for queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationParams {
    pub page: u32,
    pub page_size: u32,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 10,
        }
    }
}

impl PaginationParams {
    pub fn new(page: u32, page_size: u32) -> Self {
        Self { page, page_size }
    }

    /// Number of items to skip
    pub fn offset(&self) -> usize {
        (self.page.saturating_sub(1) as usize) * self.page_size as usize
    }

    /// Maximum number of items on the page
    pub fn limit(&self) -> usize {
        self.page_size as usize
    }
}

/// Paginated result wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResult<T> {
    pub items: Vec<T>,
    pub total_count: u64,
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u32,
}

impl<T> PaginatedResult<T> {
    pub fn new(items: Vec<T>, total_count: u64, params: &PaginationParams) -> Self {
        let total_pages = if params.page_size == 0 {
            0
        } else {
            total_count.div_ceil(params.page_size as u64) as u32
        };

        Self {
            items,
            total_count,
            page: params.page,
            page_size: params.page_size,
            total_pages,
        }
    }

    /// Slice one page out of an already ordered collection
    pub fn from_ordered(all: Vec<T>, params: &PaginationParams) -> Self {
        let total_count = all.len() as u64;
        let items = all
            .into_iter()
            .skip(params.offset())
            .take(params.limit())
            .collect();

        Self::new(items, total_count, params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_is_one_based() {
        assert_eq!(PaginationParams::new(1, 10).offset(), 0);
        assert_eq!(PaginationParams::new(3, 10).offset(), 20);
    }

    #[test]
    fn from_ordered_slices_requested_page() {
        let params = PaginationParams::new(2, 2);
        let page = PaginatedResult::from_ordered(vec![1, 2, 3, 4, 5], &params);

        assert_eq!(page.items, vec![3, 4]);
        assert_eq!(page.total_count, 5);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let params = PaginationParams::new(4, 2);
        let page = PaginatedResult::from_ordered(vec![1, 2, 3], &params);

        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 2);
    }
}

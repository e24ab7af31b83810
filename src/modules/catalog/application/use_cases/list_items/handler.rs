use async_trait::async_trait;
use std::cmp::Ordering;
use std::sync::Arc;

use crate::modules::catalog::application::dto::ItemSummary;
use crate::modules::catalog::domain::ItemRepository;
use crate::shared::{
    application::{pagination::PaginatedResult, use_case::Query},
    errors::AppResult,
    utils::Validator,
};

use super::{query::ListItemsQuery, result::ListItemsResult};

/// Lists items of one type, best rated first. Ties keep store order.
pub struct ListItemsHandler {
    item_repository: Arc<dyn ItemRepository>,
    max_page_size: u32,
}

impl ListItemsHandler {
    pub fn new(item_repository: Arc<dyn ItemRepository>, max_page_size: u32) -> Self {
        Self {
            item_repository,
            max_page_size,
        }
    }
}

#[async_trait]
impl Query<ListItemsQuery, ListItemsResult> for ListItemsHandler {
    async fn execute(&self, query: ListItemsQuery) -> AppResult<ListItemsResult> {
        Validator::validate_pagination(&query.pagination, self.max_page_size)?;

        let items = self.item_repository.find_by_type(query.item_type).await?;
        let mut summaries: Vec<ItemSummary> = items.iter().map(ItemSummary::from).collect();

        // sort_by is stable
        summaries.sort_by(|a, b| {
            b.average_rating
                .partial_cmp(&a.average_rating)
                .unwrap_or(Ordering::Equal)
        });

        Ok(PaginatedResult::from_ordered(summaries, &query.pagination))
    }
}

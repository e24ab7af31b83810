use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::catalog::application::dto::ItemSummary;
use crate::modules::catalog::domain::{ItemRepository, SearchFilter};
use crate::shared::{
    application::use_case::Query,
    errors::AppResult,
    utils::{LogContext, TimedOperation},
};

use super::{query::SearchItemsQuery, result::SearchItemsResult};

/// Query handler for free-text search.
///
/// The query is classified into exactly one [`SearchFilter`] and that single
/// predicate is applied to every item. A blank query matches nothing.
pub struct SearchItemsHandler {
    item_repository: Arc<dyn ItemRepository>,
}

impl SearchItemsHandler {
    pub fn new(item_repository: Arc<dyn ItemRepository>) -> Self {
        Self { item_repository }
    }
}

#[async_trait]
impl Query<SearchItemsQuery, SearchItemsResult> for SearchItemsHandler {
    async fn execute(&self, query: SearchItemsQuery) -> AppResult<SearchItemsResult> {
        let Some(filter) = SearchFilter::parse(&query.search_term) else {
            LogContext::search_operation(&query.search_term, None, Some(0));
            return Ok(Vec::new());
        };

        LogContext::search_operation(&query.search_term, Some(filter.family()), None);
        let timer = TimedOperation::new("Catalog search");

        let items = self.item_repository.find_all().await?;
        let matches: Vec<ItemSummary> = items
            .iter()
            .filter(|item| filter.matches(item))
            .map(ItemSummary::from)
            .collect();

        timer.finish_with_info(&filter.to_string());
        LogContext::search_operation(
            &query.search_term,
            Some(filter.family()),
            Some(matches.len()),
        );

        Ok(matches)
    }
}

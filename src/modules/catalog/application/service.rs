use std::sync::Arc;
use uuid::Uuid;

use crate::modules::catalog::application::dto::ItemSummary;
use crate::modules::catalog::domain::{ItemRepository, ItemType};
use crate::shared::{
    application::{PaginationParams, Query},
    errors::AppResult,
    infrastructure::AppConfig,
};

use super::use_cases::{
    ListItemsHandler, ListItemsQuery, ListItemsResult, SearchItemsHandler, SearchItemsQuery,
    SearchItemsResult,
};

/// Read side of the catalog: free-text search and top-rated listings
pub struct CatalogService {
    item_repository: Arc<dyn ItemRepository>,
    search: SearchItemsHandler,
    list: ListItemsHandler,
    default_page_size: u32,
}

impl CatalogService {
    pub fn new(item_repository: Arc<dyn ItemRepository>, config: &AppConfig) -> Self {
        Self {
            search: SearchItemsHandler::new(item_repository.clone()),
            list: ListItemsHandler::new(item_repository.clone(), config.max_page_size),
            item_repository,
            default_page_size: config.default_page_size,
        }
    }

    pub async fn get_item(&self, id: Uuid) -> AppResult<Option<ItemSummary>> {
        let item = self.item_repository.find_by_id(id).await?;
        Ok(item.as_ref().map(ItemSummary::from))
    }

    pub async fn search(&self, query: &str) -> AppResult<SearchItemsResult> {
        self.search.execute(SearchItemsQuery::new(query)).await
    }

    /// Items of one type, best rated first. Missing paging values fall back to
    /// the first page and the configured default page size.
    pub async fn list_items(
        &self,
        item_type: ItemType,
        page: Option<u32>,
        page_size: Option<u32>,
    ) -> AppResult<ListItemsResult> {
        let pagination = PaginationParams::new(
            page.unwrap_or(1),
            page_size.unwrap_or(self.default_page_size),
        );

        self.list
            .execute(ListItemsQuery::new(item_type, pagination))
            .await
    }
}

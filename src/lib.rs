pub mod modules;
pub mod shared;

use modules::{
    booking::{BookingService, ScreeningRepositoryImpl, TicketRepositoryImpl},
    catalog::{CatalogService, ItemRepository, ItemRepositoryImpl},
    identity::IdentityProvider,
    rating::{RatingRepositoryImpl, RatingService},
};
use shared::{
    domain::{Clock, SystemClock},
    infrastructure::{AppConfig, CatalogStore},
};
use std::sync::Arc;

/// The three services of the core, wired over one catalog store
pub struct AppServices {
    pub catalog: CatalogService,
    pub ratings: RatingService,
    pub booking: BookingService,
}

impl AppServices {
    /// Wire every service against `store`, using the wall clock
    pub fn new(
        store: Arc<CatalogStore>,
        identity: Arc<dyn IdentityProvider>,
        config: &AppConfig,
    ) -> Self {
        Self::with_clock(store, identity, Arc::new(SystemClock), config)
    }

    pub fn with_clock(
        store: Arc<CatalogStore>,
        identity: Arc<dyn IdentityProvider>,
        clock: Arc<dyn Clock>,
        config: &AppConfig,
    ) -> Self {
        let item_repo: Arc<dyn ItemRepository> = Arc::new(ItemRepositoryImpl::new(store.clone()));
        let rating_repo = Arc::new(RatingRepositoryImpl::new(store.clone()));
        let screening_repo = Arc::new(ScreeningRepositoryImpl::new(store.clone()));
        let ticket_repo = Arc::new(TicketRepositoryImpl::new(store));

        Self {
            catalog: CatalogService::new(item_repo.clone(), config),
            ratings: RatingService::new(identity.clone(), item_repo, rating_repo),
            booking: BookingService::new(identity, screening_repo, ticket_repo, clock),
        }
    }
}

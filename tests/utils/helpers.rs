/// Test helper functions and service builders
use chrono::{DateTime, TimeZone, Utc};
use marquee_lib::modules::{
    catalog::domain::Item,
    identity::{CallerIdentity, StaticIdentityProvider, User},
};
use marquee_lib::shared::{
    domain::FixedClock,
    infrastructure::{AppConfig, CatalogStore},
};
use marquee_lib::AppServices;
use std::sync::Arc;

pub struct TestServices {
    pub store: Arc<CatalogStore>,
    pub services: AppServices,
    pub caller: User,
}

/// Fixed "now" shared by time-dependent tests
pub fn test_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 18, 0, 0).unwrap()
}

/// Store seeded with `items` and one signed-in user
pub async fn build_test_services(items: Vec<Item>) -> TestServices {
    let store = Arc::new(CatalogStore::new());
    for item in items {
        store.add_item(item).await;
    }

    let caller = User::new("user").with_name("User", "User");
    store.add_user(caller.clone()).await;

    let identity = Arc::new(StaticIdentityProvider::signed_in(CallerIdentity::from(&caller)));
    let services = AppServices::with_clock(
        store.clone(),
        identity,
        Arc::new(FixedClock::at(test_now())),
        &AppConfig::default(),
    );

    TestServices {
        store,
        services,
        caller,
    }
}

use marquee_lib::modules::identity::{CallerIdentity, StaticIdentityProvider, User};
use marquee_lib::shared::{
    errors::AppError,
    infrastructure::{AppConfig, CatalogStore},
};
use marquee_lib::AppServices;
use std::sync::Arc;
use uuid::Uuid;

mod utils;
use utils::factories::{godfather, godfather_part_two, shawshank};
use utils::helpers::build_test_services;

async fn rated_catalog() -> (utils::helpers::TestServices, Uuid) {
    let admin = Uuid::new_v4();
    let item = shawshank().rated_by(admin, 4.6).rated_by(admin, 4.0).build();
    let item_id = item.id;
    let ctx = build_test_services(vec![
        item,
        godfather().rated_by(admin, 2.6).build(),
        godfather_part_two().rated_by(admin, 3.6).build(),
    ])
    .await;
    (ctx, item_id)
}

#[tokio::test]
async fn test_valid_rating_is_added() {
    let (ctx, item_id) = rated_catalog().await;

    let response = ctx.services.ratings.add_rating(item_id, 4.1).await.unwrap();

    assert!(response.success);
    assert_eq!(response.message, "Successfully added rating");

    let average = ctx
        .services
        .ratings
        .average_rating(item_id)
        .await
        .unwrap()
        .unwrap();
    assert!((average - 4.3).abs() < 0.1);

    let stored = ctx
        .store
        .read(|s| s.item(item_id).unwrap().has_rating_by(ctx.caller.id))
        .await;
    assert!(stored);
}

#[tokio::test]
async fn test_second_rating_by_same_user_is_refused() {
    let (ctx, item_id) = rated_catalog().await;

    let first = ctx.services.ratings.add_rating(item_id, 4.1).await.unwrap();
    let second = ctx.services.ratings.add_rating(item_id, 4.1).await.unwrap();

    assert!(first.success);
    assert_eq!(first.message, "Successfully added rating");
    assert!(!second.success);
    assert_eq!(second.message, "You already rated this item");

    let count = ctx
        .store
        .read(|s| s.item(item_id).unwrap().ratings.len())
        .await;
    assert_eq!(count, 3);
}

#[tokio::test]
async fn test_refused_ratings_do_not_move_average() {
    let (ctx, item_id) = rated_catalog().await;
    let before = ctx.services.ratings.average_rating(item_id).await.unwrap();

    let out_of_range = ctx.services.ratings.add_rating(item_id, 7.5).await.unwrap();
    assert!(!out_of_range.success);
    assert_eq!(out_of_range.message, "Rating must be between 0 and 5");
    assert_eq!(
        ctx.services.ratings.average_rating(item_id).await.unwrap(),
        before
    );

    ctx.services.ratings.add_rating(item_id, 4.1).await.unwrap();
    let accepted = ctx.services.ratings.average_rating(item_id).await.unwrap();

    let duplicate = ctx.services.ratings.add_rating(item_id, 0.0).await.unwrap();
    assert!(!duplicate.success);
    assert_eq!(
        ctx.services.ratings.average_rating(item_id).await.unwrap(),
        accepted
    );
}

#[tokio::test]
async fn test_unknown_item_is_refused() {
    let (ctx, _) = rated_catalog().await;

    let response = ctx
        .services
        .ratings
        .add_rating(Uuid::new_v4(), 3.0)
        .await
        .unwrap();

    assert!(!response.success);
    assert_eq!(response.message, "Item does not exist");
}

#[tokio::test]
async fn test_rating_becomes_visible_to_search() {
    let (ctx, _) = rated_catalog().await;
    let godfather_id = ctx
        .store
        .read(|s| s.items.iter().find(|i| i.title == "The Godfather").unwrap().id)
        .await;

    // 2.6 alone, then (2.6 + 3.4) / 2 = 3.0
    ctx.services
        .ratings
        .add_rating(godfather_id, 3.4)
        .await
        .unwrap();

    let results = ctx.services.catalog.search("3 stars").await.unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, godfather_id);
}

#[tokio::test]
async fn test_different_users_may_rate_same_item() {
    let store = Arc::new(CatalogStore::new());
    let item_id = store.add_item(godfather().build()).await;
    let config = AppConfig::default();

    for name in ["alice", "bob"] {
        let user = User::new(name);
        store.add_user(user.clone()).await;
        let services = AppServices::new(
            store.clone(),
            Arc::new(StaticIdentityProvider::signed_in(CallerIdentity::from(&user))),
            &config,
        );

        let response = services.ratings.add_rating(item_id, 5.0).await.unwrap();
        assert!(response.success, "{} should be able to rate", name);
    }

    let count = store.read(|s| s.item(item_id).unwrap().ratings.len()).await;
    assert_eq!(count, 2);
}

#[tokio::test]
async fn test_anonymous_rating_is_a_fault() {
    let store = Arc::new(CatalogStore::new());
    let item_id = store.add_item(godfather().build()).await;
    let services = AppServices::new(
        store,
        Arc::new(StaticIdentityProvider::anonymous()),
        &AppConfig::default(),
    );

    let result = services.ratings.add_rating(item_id, 3.0).await;
    assert!(matches!(result, Err(AppError::Unauthorized(_))));
}

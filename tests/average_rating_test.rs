use marquee_lib::modules::catalog::ItemType;

mod utils;
use utils::factories::{godfather, godfather_part_two, shawshank};
use utils::helpers::build_test_services;

async fn catalog() -> utils::helpers::TestServices {
    build_test_services(vec![
        shawshank().rated(4.6).rated(3.6).rated(4.1).build(),
        godfather().rated(4.4).build(),
        godfather_part_two().build(),
    ])
    .await
}

#[tokio::test]
async fn test_average_of_three_ratings() {
    let ctx = catalog().await;

    let page = ctx
        .services
        .catalog
        .list_items(ItemType::Movie, None, None)
        .await
        .unwrap();
    let shawshank = page
        .items
        .iter()
        .find(|i| i.title == "The Shawshank Redemption")
        .unwrap();

    assert!((shawshank.average_rating - 4.1).abs() < 0.1);
}

#[tokio::test]
async fn test_unrated_item_averages_zero() {
    let ctx = catalog().await;

    let page = ctx
        .services
        .catalog
        .list_items(ItemType::Movie, None, None)
        .await
        .unwrap();
    let unrated = page
        .items
        .iter()
        .find(|i| i.title == "The Godfather: Part II")
        .unwrap();

    assert_eq!(unrated.average_rating, 0.0);
}

#[tokio::test]
async fn test_every_average_within_bounds() {
    let ctx = build_test_services(vec![
        shawshank().rated(5.0).rated(5.0).build(),
        godfather().rated(0.0).build(),
        godfather_part_two().build(),
    ])
    .await;

    let page = ctx
        .services
        .catalog
        .list_items(ItemType::Movie, None, None)
        .await
        .unwrap();

    assert_eq!(page.items.len(), 3);
    for item in &page.items {
        assert!(
            (0.0..=5.0).contains(&item.average_rating),
            "{} out of range",
            item.title
        );
    }
}

#[tokio::test]
async fn test_listing_is_best_rated_first() {
    let ctx = catalog().await;

    let page = ctx
        .services
        .catalog
        .list_items(ItemType::Movie, Some(1), Some(2))
        .await
        .unwrap();
    let titles: Vec<&str> = page.items.iter().map(|i| i.title.as_str()).collect();

    assert_eq!(titles, vec!["The Godfather", "The Shawshank Redemption"]);
    assert_eq!(page.total_count, 3);
    assert_eq!(page.total_pages, 2);
}

#[tokio::test]
async fn test_shows_listed_separately() {
    let ctx = build_test_services(vec![
        godfather().rated(4.0).build(),
        utils::factories::ItemFactory::new()
            .title("Breaking Bad")
            .show()
            .rated(4.9)
            .build(),
    ])
    .await;

    let shows = ctx
        .services
        .catalog
        .list_items(ItemType::Show, None, None)
        .await
        .unwrap();

    assert_eq!(shows.items.len(), 1);
    assert_eq!(shows.items[0].title, "Breaking Bad");
}

use chrono::NaiveDate;
use subtrack_storage::subscriptions;
use uuid::Uuid;

mod test_helpers;
use test_helpers::{new_subscription, setup_test_db, unique_user_id};

#[tokio::test]
async fn test_create_returns_generated_fields() {
    let Some(pool) = setup_test_db().await else {
        return;
    };
    let user_id = unique_user_id();

    let created = subscriptions::create(&pool, new_subscription(&user_id, "Netflix", 400))
        .await
        .unwrap();

    assert!(!created.id.is_nil());
    assert_eq!(created.service_name, "Netflix");
    assert_eq!(created.price, 400);
    assert_eq!(created.user_id, user_id);
    assert_eq!(
        created.start_date,
        NaiveDate::from_ymd_opt(2025, 7, 1).unwrap()
    );
    assert!(created.end_date.is_none());
    assert_eq!(created.created_at, created.updated_at);
}

#[tokio::test]
async fn test_get_by_id_roundtrip() {
    let Some(pool) = setup_test_db().await else {
        return;
    };
    let user_id = unique_user_id();

    let created = subscriptions::create(&pool, new_subscription(&user_id, "Spotify", 299))
        .await
        .unwrap();

    let fetched = subscriptions::get_by_id(&pool, created.id)
        .await
        .unwrap()
        .expect("created subscription should be fetchable");

    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_get_by_id_miss_returns_none() {
    let Some(pool) = setup_test_db().await else {
        return;
    };

    let missing = subscriptions::get_by_id(&pool, Uuid::new_v4()).await.unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_update_overwrites_mutable_fields() {
    let Some(pool) = setup_test_db().await else {
        return;
    };
    let user_id = unique_user_id();

    let mut created = subscriptions::create(&pool, new_subscription(&user_id, "Netflix", 400))
        .await
        .unwrap();

    created.price = 500;
    created.end_date = NaiveDate::from_ymd_opt(2025, 12, 1);
    subscriptions::update(&pool, &created).await.unwrap();

    let fetched = subscriptions::get_by_id(&pool, created.id)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(fetched.price, 500);
    assert_eq!(fetched.end_date, NaiveDate::from_ymd_opt(2025, 12, 1));
    assert_eq!(fetched.service_name, "Netflix");
    // updated_at is refreshed by the statement itself
    assert!(fetched.updated_at >= fetched.created_at);
}

#[tokio::test]
async fn test_update_missing_row_is_silent_noop() {
    let Some(pool) = setup_test_db().await else {
        return;
    };
    let user_id = unique_user_id();

    let mut ghost = subscriptions::create(&pool, new_subscription(&user_id, "Netflix", 400))
        .await
        .unwrap();
    subscriptions::delete(&pool, ghost.id).await.unwrap();

    ghost.price = 999;
    subscriptions::update(&pool, &ghost).await.unwrap();
}

#[tokio::test]
async fn test_delete_removes_row() {
    let Some(pool) = setup_test_db().await else {
        return;
    };
    let user_id = unique_user_id();

    let created = subscriptions::create(&pool, new_subscription(&user_id, "Netflix", 400))
        .await
        .unwrap();

    subscriptions::delete(&pool, created.id).await.unwrap();

    let fetched = subscriptions::get_by_id(&pool, created.id).await.unwrap();
    assert!(fetched.is_none());
}

#[tokio::test]
async fn test_delete_missing_row_is_silent_noop() {
    let Some(pool) = setup_test_db().await else {
        return;
    };

    subscriptions::delete(&pool, Uuid::new_v4()).await.unwrap();
}

#[tokio::test]
async fn test_list_scopes_to_user() {
    let Some(pool) = setup_test_db().await else {
        return;
    };
    let user_a = unique_user_id();
    let user_b = unique_user_id();

    subscriptions::create(&pool, new_subscription(&user_a, "Netflix", 400))
        .await
        .unwrap();
    subscriptions::create(&pool, new_subscription(&user_a, "Spotify", 299))
        .await
        .unwrap();
    subscriptions::create(&pool, new_subscription(&user_b, "Netflix", 400))
        .await
        .unwrap();

    let listed = subscriptions::list_for_user(&pool, &user_a, None)
        .await
        .unwrap();

    assert_eq!(listed.len(), 2);
    assert!(listed.iter().all(|s| s.user_id == user_a));
}

#[tokio::test]
async fn test_list_with_service_name_filter() {
    let Some(pool) = setup_test_db().await else {
        return;
    };
    let user_id = unique_user_id();

    subscriptions::create(&pool, new_subscription(&user_id, "Netflix", 400))
        .await
        .unwrap();
    subscriptions::create(&pool, new_subscription(&user_id, "Spotify", 299))
        .await
        .unwrap();

    let filtered = subscriptions::list_for_user(&pool, &user_id, Some("Spotify"))
        .await
        .unwrap();

    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].service_name, "Spotify");
}

#[tokio::test]
async fn test_sum_prices_over_inclusive_range() {
    let Some(pool) = setup_test_db().await else {
        return;
    };
    let user_id = unique_user_id();

    // July, August, December
    for (month, price) in [(7, 400), (8, 300), (12, 200)] {
        let mut sub = new_subscription(&user_id, "Netflix", price);
        sub.start_date = NaiveDate::from_ymd_opt(2025, month, 1).unwrap();
        subscriptions::create(&pool, sub).await.unwrap();
    }

    // [07-2025, 08-2025] catches both boundary months
    let sum = subscriptions::sum_prices(
        &pool,
        &user_id,
        None,
        NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
        NaiveDate::from_ymd_opt(2025, 8, 1).unwrap(),
    )
    .await
    .unwrap();

    assert_eq!(sum, 700);
}

#[tokio::test]
async fn test_sum_prices_empty_set_is_zero() {
    let Some(pool) = setup_test_db().await else {
        return;
    };

    let sum = subscriptions::sum_prices(
        &pool,
        &unique_user_id(),
        None,
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2025, 12, 1).unwrap(),
    )
    .await
    .unwrap();

    assert_eq!(sum, 0);
}

#[tokio::test]
async fn test_sum_prices_filtered_never_exceeds_unfiltered() {
    let Some(pool) = setup_test_db().await else {
        return;
    };
    let user_id = unique_user_id();

    subscriptions::create(&pool, new_subscription(&user_id, "Netflix", 400))
        .await
        .unwrap();
    subscriptions::create(&pool, new_subscription(&user_id, "Spotify", 299))
        .await
        .unwrap();

    let from = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    let to = NaiveDate::from_ymd_opt(2025, 12, 1).unwrap();

    let unfiltered = subscriptions::sum_prices(&pool, &user_id, None, from, to)
        .await
        .unwrap();
    let filtered = subscriptions::sum_prices(&pool, &user_id, Some("Netflix"), from, to)
        .await
        .unwrap();

    assert_eq!(unfiltered, 699);
    assert_eq!(filtered, 400);
    assert!(filtered <= unfiltered);
}

//! These tests start a Redis container and need a container runtime.
//! Run them with `cargo test -- --ignored`.

use redis::AsyncCommands;
use shortify_storage::{ReadStore, RedisStore, StorageError, Store};
use shortify_test_infra::redis::RedisContainer;

async fn fixture() -> (RedisContainer, RedisStore) {
    let redis = RedisContainer::start()
        .await
        .expect("Failed to start Redis container");
    let url = redis.url().await.expect("Failed to get Redis URL");
    let store = RedisStore::connect(&url)
        .await
        .expect("Failed to connect to Redis");
    (redis, store)
}

#[tokio::test]
#[ignore = "requires a container runtime"]
async fn set_then_get() {
    let (_redis, store) = fixture().await;

    store
        .set("shortify:slug:g8", "https://example.com/long/path")
        .await
        .unwrap();

    let value = store.get("shortify:slug:g8").await.unwrap();
    assert_eq!(value.as_deref(), Some("https://example.com/long/path"));
}

#[tokio::test]
#[ignore = "requires a container runtime"]
async fn get_missing_key() {
    let (_redis, store) = fixture().await;

    assert!(store.get("shortify:slug:zz9").await.unwrap().is_none());
}

#[tokio::test]
#[ignore = "requires a container runtime"]
async fn incr_counts_from_one() {
    let (_redis, store) = fixture().await;

    assert_eq!(store.incr("shortify:counter").await.unwrap(), 1);
    assert_eq!(store.incr("shortify:counter").await.unwrap(), 2);
}

#[tokio::test]
#[ignore = "requires a container runtime"]
async fn negative_counter_is_invalid_data() {
    let (redis, store) = fixture().await;
    let mut conn = redis.connection().await.unwrap();
    conn.set::<_, _, ()>("shortify:counter", -10_i64)
        .await
        .unwrap();

    let err = store.incr("shortify:counter").await.unwrap_err();
    assert!(matches!(err, StorageError::InvalidData(_)));
}

#[tokio::test]
#[ignore = "requires a container runtime"]
async fn incr_on_url_value_fails() {
    let (_redis, store) = fixture().await;
    store
        .set("shortify:slug:g8", "https://example.com")
        .await
        .unwrap();

    assert!(store.incr("shortify:slug:g8").await.is_err());
}

use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, HOST, LOCATION};
use axum::http::{Request, StatusCode};
use axum::Router;
use shortify_gateway::{App, AppState};
use shortify_redirector::RedirectorService;
use shortify_shortener::ShortenerService;
use shortify_storage::{RestStore, RestStoreSettings};
use shortify_test_infra::rest::{Behavior, FakeRestStore};
use std::sync::Arc;
use tower::ServiceExt;

const TOKEN: &str = "gateway-token";

async fn fixture() -> (FakeRestStore, Router) {
    let fake = FakeRestStore::start(TOKEN)
        .await
        .expect("Failed to start fake REST store");
    let store = Arc::new(RestStore::new(
        RestStoreSettings::builder()
            .url(fake.url())
            .token(TOKEN)
            .build(),
    ));
    let state = AppState::new(
        Arc::new(ShortenerService::new(Arc::clone(&store))),
        Arc::new(RedirectorService::new(store)),
        None,
    );
    (fake, App::router(state))
}

fn redirect_request(slug: &str) -> Request<Body> {
    Request::builder()
        .uri(format!("/api/redirect?slug={slug}"))
        .header(HOST, "sho.rt")
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn redirects_through_rest_store() {
    let (fake, app) = fixture().await;
    fake.insert("shortify:slug:g8", "https://example.com/long/path");

    let response = app.oneshot(redirect_request("g8")).await.unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.headers()[LOCATION], "https://example.com/long/path");
    assert_eq!(fake.request_count(), 1);
}

#[tokio::test]
async fn store_errors_fall_back_to_origin_root() {
    let (fake, app) = fixture().await;
    fake.insert("shortify:slug:g8", "https://example.com/long/path");

    for behavior in [
        Behavior::Status(StatusCode::INTERNAL_SERVER_ERROR),
        Behavior::MalformedBody,
    ] {
        fake.set_behavior(behavior);

        let response = app.clone().oneshot(redirect_request("g8")).await.unwrap();

        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(response.headers()[LOCATION], "http://sho.rt/");
    }
}

#[tokio::test]
async fn creation_writes_counter_and_mapping() {
    let (fake, app) = fixture().await;
    fake.insert("shortify:counter", "999");

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/shorten")
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"url":"https://example.com/long/path"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(fake.value("shortify:counter").as_deref(), Some("1000"));
    assert_eq!(
        fake.value("shortify:slug:g8").as_deref(),
        Some("https://example.com/long/path")
    );
}

#[tokio::test]
async fn creation_with_failing_store_is_unavailable() {
    let (fake, app) = fixture().await;
    fake.set_behavior(Behavior::Status(StatusCode::INTERNAL_SERVER_ERROR));

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/shorten")
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"url":"https://example.com"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

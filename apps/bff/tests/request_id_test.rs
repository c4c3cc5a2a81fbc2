//! # Request ID とキャッシュ制御レイヤーのテスト
//!
//! 本番と同じ `build_router` のレイヤー構成で、全レスポンスに
//! `X-Request-Id` と `Cache-Control: no-store` が付くことを検証する。

mod common;

use common::{StubConnector, get, login_request, send, test_app};
use http::{Request, StatusCode, header};
use rstest::rstest;

#[rstest]
#[case::liveness("/health/live", StatusCode::OK)]
#[case::status("/status", StatusCode::OK)]
#[case::未ログインのゲート("/activities", StatusCode::UNAUTHORIZED)]
#[tokio::test]
async fn test_全レスポンスにx_request_idとno_storeが含まれる(
    #[case] uri: &str,
    #[case] expected_status: StatusCode,
) {
    let (app, _log) = test_app(StubConnector::new());

    let response = send(&app, get(uri)).await;

    assert_eq!(response.status(), expected_status);
    assert!(
        response.headers().contains_key("x-request-id"),
        "レスポンスに x-request-id ヘッダーが含まれること"
    );
    assert_eq!(response.headers()[header::CACHE_CONTROL], "no-store");
}

#[tokio::test]
async fn test_ログインのレスポンスにもx_request_idが含まれる() {
    let (app, _log) = test_app(StubConnector::new());

    let response = send(&app, login_request()).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn test_クライアント提供のx_request_idがそのまま返される() {
    let (app, _log) = test_app(StubConnector::new());
    let custom_id = "client-provided-request-id-123";

    let response = send(
        &app,
        Request::builder()
            .uri("/status")
            .header("x-request-id", custom_id)
            .body(axum::body::Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(
        response
            .headers()
            .get("x-request-id")
            .unwrap()
            .to_str()
            .unwrap(),
        custom_id,
        "クライアント提供の Request ID がそのまま返されること"
    );
}

#[tokio::test]
async fn test_自動生成のx_request_idはuuid_v7形式() {
    let (app, _log) = test_app(StubConnector::new());

    let response = send(&app, get("/health/live")).await;

    let request_id = response
        .headers()
        .get("x-request-id")
        .unwrap()
        .to_str()
        .unwrap();
    let uuid = uuid::Uuid::parse_str(request_id).expect("UUID 形式であること");
    assert_eq!(uuid.get_version(), Some(uuid::Version::SortRand));
}

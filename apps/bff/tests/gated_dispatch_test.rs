//! # セッションゲート付き転送の統合テスト
//!
//! データ取得系エンドポイント（一覧・詳細・ダウンロード・ヘルスサマリー）を検証する。
//!
//! ## テストケース
//!
//! - 未ログイン時は 401 でリモートを呼ばない（不正なパラメータでも 401）
//! - 成功時はリモートの結果をそのまま返す
//! - パラメータはそのままリモートへ渡る（省略時はデフォルト値）
//! - リモートの失敗は 500 のエラーエンベロープになり、スロットは変化しない
//! - 不正なパラメータは 400

mod common;

use common::{
    FIT_BYTES,
    StubConnector,
    TODAY,
    body_bytes,
    body_json,
    get,
    log_in,
    send,
    test_app,
};
use fitbridge_bff::client::FitnessServiceError;
use http::{StatusCode, header};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;

// ===== 未ログイン =====

#[rstest]
#[case("/activities")]
#[case("/activities?start=0&limit=2")]
#[case("/activities?start=oops")]
#[case("/activity_detail/123")]
#[case("/activity_detail/not-a-number")]
#[case("/activity_download/456")]
#[case("/health")]
#[case("/health?cdate=2025-09-22")]
#[case("/health?cdate=yesterday")]
#[tokio::test]
async fn test_未ログインでは401でリモートを呼ばない(#[case] uri: &str) {
    // Given
    let (app, log) = test_app(StubConnector::new());

    // When
    let response = send(&app, get(uri)).await;

    // Then
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        body_json(response).await,
        json!({ "status": "error", "kind": "unauthenticated", "message": "Not logged in" })
    );
    assert!(log.calls().is_empty(), "リモートが呼ばれないこと");
}

#[tokio::test]
async fn test_ログアウト後は再び401になる() {
    let (app, _log) = test_app(StubConnector::new());
    log_in(&app).await;
    send(&app, common::post_empty("/logout")).await;

    let response = send(&app, get("/activity_detail/123")).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ===== アクティビティ一覧 =====

#[tokio::test]
async fn test_アクティビティ一覧をそのまま返す() {
    // Given
    let (app, log) = test_app(StubConnector::new());
    log_in(&app).await;

    // When
    let response = send(&app, get("/activities?start=0&limit=2")).await;

    // Then
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let activities = json.as_array().expect("JSON 配列であること");
    assert_eq!(activities.len(), 2);
    assert_eq!(activities[0]["activityId"], 1);
    assert!(log.calls().contains(&"get_activities(0, 2)".to_string()));
}

#[rstest]
#[case("/activities", "get_activities(0, 10)")]
#[case("/activities?start=20", "get_activities(20, 10)")]
#[case("/activities?limit=5", "get_activities(0, 5)")]
#[tokio::test]
async fn test_省略したページングはデフォルト値で渡る(#[case] uri: &str, #[case] expected_call: &str) {
    let (app, log) = test_app(StubConnector::new());
    log_in(&app).await;

    let response = send(&app, get(uri)).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(log.calls().last().map(String::as_str), Some(expected_call));
}

#[rstest]
#[case("/activities?start=abc&limit=2", "get_activities(0, 2)")]
#[case("/activities?start=oops", "get_activities(0, 10)")]
#[case("/activities?limit=-1", "get_activities(0, 10)")]
#[case("/activities?start=3&limit=ten", "get_activities(3, 10)")]
#[tokio::test]
async fn test_整数として読めないページングは既定値で渡る(
    #[case] uri: &str,
    #[case] expected_call: &str,
) {
    // Given
    let (app, log) = test_app(StubConnector::new());
    log_in(&app).await;

    // When
    let response = send(&app, get(uri)).await;

    // Then
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(log.calls().last().map(String::as_str), Some(expected_call));
}

// ===== アクティビティ詳細 =====

#[tokio::test]
async fn test_アクティビティ詳細をそのまま返す() {
    let (app, log) = test_app(StubConnector::new());
    log_in(&app).await;

    let response = send(&app, get("/activity_detail/123")).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({ "activityId": 123, "detail": "Mock details for 123" })
    );
    assert!(log.calls().contains(&"get_activity_details(123)".to_string()));
}

#[tokio::test]
async fn test_負のアクティビティidもそのまま転送する() {
    let (app, log) = test_app(StubConnector::new());
    log_in(&app).await;

    let response = send(&app, get("/activity_detail/-5")).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        log.calls().last().map(String::as_str),
        Some("get_activity_details(-5)")
    );
}

#[tokio::test]
async fn test_数値でないアクティビティidは400() {
    let (app, _log) = test_app(StubConnector::new());
    log_in(&app).await;

    let response = send(&app, get("/activity_detail/abc")).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["kind"], "validation-error");
}

// ===== アクティビティダウンロード =====

#[tokio::test]
async fn test_fitファイルを添付ファイルとして返す() {
    // Given
    let (app, log) = test_app(StubConnector::new());
    log_in(&app).await;

    // When
    let response = send(&app, get("/activity_download/456")).await;

    // Then
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/octet-stream"
    );
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=activity_456.fit"
    );
    assert_eq!(body_bytes(response).await.as_ref(), FIT_BYTES);
    assert!(log.calls().contains(&"download_activity(456, fit)".to_string()));
}

// ===== ヘルスサマリー =====

#[tokio::test]
async fn test_指定日のヘルスサマリーを返す() {
    let (app, log) = test_app(StubConnector::new());
    log_in(&app).await;

    let response = send(&app, get("/health?cdate=2025-09-22")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["cdate"], "2025-09-22");
    assert_eq!(json["summary"]["totalSteps"], 8042);
    assert!(log.calls().contains(&"get_daily_summary(2025-09-22)".to_string()));
}

#[tokio::test]
async fn test_cdate省略時は今日になる() {
    let (app, log) = test_app(StubConnector::new());
    log_in(&app).await;

    let response = send(&app, get("/health")).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["cdate"], TODAY);
    assert!(log.calls().contains(&format!("get_daily_summary({TODAY})")));
}

#[rstest]
#[case("/health?cdate=yesterday")]
#[case("/health?cdate=2025-9-22")]
#[case("/health?cdate=2025-02-30")]
#[case("/health?cdate=")]
#[tokio::test]
async fn test_不正な日付は400(#[case] uri: &str) {
    let (app, _log) = test_app(StubConnector::new());
    log_in(&app).await;

    let response = send(&app, get(uri)).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["kind"], "validation-error");
}

// ===== リモートの失敗 =====

#[rstest]
#[case("/activities")]
#[case("/activity_detail/123")]
#[case("/activity_download/456")]
#[case("/health?cdate=2025-09-22")]
#[tokio::test]
async fn test_リモートの失敗は500でスロットは変化しない(#[case] uri: &str) {
    // Given
    let (app, _log) = test_app(
        StubConnector::new()
            .with_data_error(FitnessServiceError::TooManyRequests("status 429: slow down".to_string())),
    );
    log_in(&app).await;

    // When
    let response = send(&app, get(uri)).await;

    // Then
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(response).await,
        json!({
            "status": "error",
            "kind": "upstream-error",
            "message": "too many requests: status 429: slow down"
        })
    );
    let response = send(&app, get("/status")).await;
    assert_eq!(body_json(response).await["status"], "logged_in");
}

// ===== ゲート対象外 =====

#[tokio::test]
async fn test_helloはログイン不要() {
    let (app, _log) = test_app(StubConnector::new());

    let response = send(&app, get("/hello?name=Runner")).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_bytes(response).await.as_ref(),
        b"Hello, Runner from fitbridge!"
    );
}

#[tokio::test]
async fn test_hello名前省略時はworld() {
    let (app, _log) = test_app(StubConnector::new());

    let response = send(&app, get("/hello")).await;

    assert_eq!(body_bytes(response).await.as_ref(), b"Hello, World from fitbridge!");
}

#[tokio::test]
async fn test_livenessはログイン不要() {
    let (app, _log) = test_app(StubConnector::new());

    let response = send(&app, get("/health/live")).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "healthy");
}

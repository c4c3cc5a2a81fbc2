//! 統合テスト共通のスタブとヘルパー
//!
//! リモートのフィットネスサービスを呼び出し記録付きのスタブに置き換え、
//! 本番と同じ `build_router` でルーターを組み立てる。

#![allow(dead_code)]

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use axum::{
    Router,
    body::{Body, Bytes, to_bytes},
    http::{Method, Request, Response},
};
use chrono::{TimeZone, Utc};
use fitbridge_bff::{
    app_builder::build_router,
    client::{FitnessServiceClient, FitnessServiceConnector, FitnessServiceError},
    session::SessionStore,
};
use fitbridge_domain::{
    activity::{ActivityId, ActivityPage, DownloadFormat},
    calendar::CalendarDate,
    clock::FixedClock,
    credentials::Credentials,
};
use serde_json::{Value, json};
use tower::ServiceExt;

/// スタブがダウンロードで返すバイト列
pub const FIT_BYTES: &[u8] = b"\x0e\x10\x2e\x46.FIT-stub-data";

/// スタブのログイン成功時の表示名
pub const STUB_DISPLAY_NAME: &str = "mockuser";

/// 固定時刻の日付（`cdate` 省略時の今日）
pub const TODAY: &str = "2025-09-22";

/// リモート呼び出しの記録
#[derive(Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<String>>>);

impl CallLog {
    fn record(&self, call: impl Into<String>) {
        self.0.lock().unwrap().push(call.into());
    }

    pub fn calls(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

/// スタブのクライアント
struct StubClient {
    display_name: String,
    log:          CallLog,
    data_error:   Option<FitnessServiceError>,
    logout_error: Option<FitnessServiceError>,
}

impl StubClient {
    fn fail_or<T>(&self, value: T) -> Result<T, FitnessServiceError> {
        match &self.data_error {
            Some(e) => Err(e.clone()),
            None => Ok(value),
        }
    }
}

#[async_trait]
impl FitnessServiceClient for StubClient {
    fn display_name(&self) -> &str {
        &self.display_name
    }

    async fn get_activities(&self, page: ActivityPage) -> Result<Value, FitnessServiceError> {
        self.log
            .record(format!("get_activities({}, {})", page.start, page.limit));
        self.fail_or(json!([
            { "activityId": 1, "activityName": "Mock Activity 1" },
            { "activityId": 2, "activityName": "Mock Activity 2" }
        ]))
    }

    async fn get_activity_details(
        &self,
        activity_id: ActivityId,
    ) -> Result<Value, FitnessServiceError> {
        self.log.record(format!("get_activity_details({})", activity_id));
        self.fail_or(json!({
            "activityId": activity_id.as_i64(),
            "detail": format!("Mock details for {}", activity_id)
        }))
    }

    async fn download_activity(
        &self,
        activity_id: ActivityId,
        format: DownloadFormat,
    ) -> Result<Bytes, FitnessServiceError> {
        self.log
            .record(format!("download_activity({}, {})", activity_id, format));
        self.fail_or(Bytes::from_static(FIT_BYTES))
    }

    async fn get_daily_summary(&self, date: CalendarDate) -> Result<Value, FitnessServiceError> {
        self.log.record(format!("get_daily_summary({})", date));
        self.fail_or(json!({ "calendarDate": date.to_string(), "totalSteps": 8042 }))
    }

    async fn get_full_name(&self) -> Result<Option<String>, FitnessServiceError> {
        self.log.record("get_full_name");
        self.fail_or(Some("Mock User".to_string()))
    }

    async fn get_last_activity(&self) -> Result<Option<Value>, FitnessServiceError> {
        self.log.record("get_last_activity");
        self.fail_or(None)
    }

    async fn logout(&self) -> Result<(), FitnessServiceError> {
        self.log.record("logout");
        match &self.logout_error {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }
}

/// スタブのコネクタ
///
/// `connect` の結果をキューから順に返す。キューが空なら表示名 `mockuser` で成功する。
#[derive(Default)]
pub struct StubConnector {
    login_results: Mutex<VecDeque<Result<String, FitnessServiceError>>>,
    data_error:    Option<FitnessServiceError>,
    logout_error:  Option<FitnessServiceError>,
    log:           CallLog,
}

impl StubConnector {
    pub fn new() -> Self {
        Self::default()
    }

    /// 次の `connect` の結果を積む
    pub fn then_login(self, result: Result<&str, FitnessServiceError>) -> Self {
        self.login_results
            .lock()
            .unwrap()
            .push_back(result.map(str::to_string));
        self
    }

    /// データ取得系の呼び出しをすべて失敗させる
    pub fn with_data_error(mut self, error: FitnessServiceError) -> Self {
        self.data_error = Some(error);
        self
    }

    /// リモートのログアウトを失敗させる
    pub fn with_logout_error(mut self, error: FitnessServiceError) -> Self {
        self.logout_error = Some(error);
        self
    }

    pub fn log(&self) -> CallLog {
        self.log.clone()
    }
}

#[async_trait]
impl FitnessServiceConnector for StubConnector {
    async fn connect(
        &self,
        credentials: &Credentials,
    ) -> Result<Arc<dyn FitnessServiceClient>, FitnessServiceError> {
        self.log.record(format!("connect({})", credentials.username()));
        let next = self
            .login_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(STUB_DISPLAY_NAME.to_string()));

        let display_name = next?;
        Ok(Arc::new(StubClient {
            display_name,
            log: self.log.clone(),
            data_error: self.data_error.clone(),
            logout_error: self.logout_error.clone(),
        }))
    }
}

/// スタブと固定時刻（2025-09-22T08:30:00Z）でルーターを構築する
///
/// 呼び出し記録は戻り値の `CallLog` で確認する。
pub fn test_app(connector: StubConnector) -> (Router, CallLog) {
    let log = connector.log();
    let session_store = Arc::new(SessionStore::new(Arc::new(connector)));
    let clock = Arc::new(FixedClock::new(
        Utc.with_ymd_and_hms(2025, 9, 22, 8, 30, 0).unwrap(),
    ));
    (build_router(session_store, clock), log)
}

/// リクエストを 1 件送る
pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn post_empty(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn login_request() -> Request<Body> {
    post_json(
        "/login",
        &json!({ "username": "test@example.com", "password": "password" }),
    )
}

/// ログイン済みにする
pub async fn log_in(app: &Router) {
    let response = send(app, login_request()).await;
    assert_eq!(response.status(), 200, "ログインに成功すること");
}

pub async fn body_bytes(response: Response<Body>) -> Bytes {
    to_bytes(response.into_body(), usize::MAX).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

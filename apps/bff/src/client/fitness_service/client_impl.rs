//! コネクタと認証済みクライアントの reqwest 実装

use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use fitbridge_domain::{
    activity::{ActivityId, ActivityPage, DownloadFormat},
    calendar::CalendarDate,
    credentials::Credentials,
};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{
    FitnessServiceClient,
    FitnessServiceConnector,
    error::FitnessServiceError,
    response::{handle_bytes, handle_empty, handle_json},
};
use crate::client::WithRequestContext;

/// ログインリクエスト
#[derive(Serialize)]
struct LoginRequestBody<'a> {
    username: &'a str,
    password: &'a str,
}

/// ログインレスポンス
#[derive(Deserialize)]
struct LoginResponseBody {
    access_token: String,
    #[serde(default)]
    display_name: Option<String>,
}

/// プロフィールレスポンス（必要なフィールドのみ）
#[derive(Deserialize)]
struct SocialProfileBody {
    #[serde(rename = "fullName", default)]
    full_name: Option<String>,
}

/// フィットネスサービスコネクタ実装
///
/// 1 つの `reqwest::Client`（コネクションプール）を保持し、
/// 作成する全クライアントハンドルで共有する。
#[derive(Clone)]
pub struct FitnessServiceConnectorImpl {
    base_url: String,
    client:   reqwest::Client,
}

impl FitnessServiceConnectorImpl {
    /// 新しいコネクタを作成する
    ///
    /// # 引数
    ///
    /// - `base_url`: リモートサービスのベース URL（例: `https://connect.example.com`）
    /// - `user_agent`: 全リクエストに付与する User-Agent
    pub fn new(base_url: &str, user_agent: &str) -> Result<Self, FitnessServiceError> {
        let client = reqwest::Client::builder().user_agent(user_agent).build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }
}

#[async_trait]
impl FitnessServiceConnector for FitnessServiceConnectorImpl {
    async fn connect(
        &self,
        credentials: &Credentials,
    ) -> Result<Arc<dyn FitnessServiceClient>, FitnessServiceError> {
        let url = format!("{}/auth/login", self.base_url);
        let body = LoginRequestBody {
            username: credentials.username(),
            password: credentials.password(),
        };

        let response = self
            .client
            .post(&url)
            .json(&body)
            .with_request_context()
            .send()
            .await?;
        let login: LoginResponseBody = handle_json(response).await?;

        let display_name = login
            .display_name
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| credentials.username().to_string());

        Ok(Arc::new(FitnessServiceClientImpl {
            base_url: self.base_url.clone(),
            client: self.client.clone(),
            access_token: login.access_token,
            display_name,
        }))
    }
}

/// 認証済みフィットネスサービスクライアント実装
#[derive(Clone)]
pub struct FitnessServiceClientImpl {
    base_url:     String,
    client:       reqwest::Client,
    access_token: String,
    display_name: String,
}

impl std::fmt::Debug for FitnessServiceClientImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FitnessServiceClientImpl")
            .field("base_url", &self.base_url)
            .field("display_name", &self.display_name)
            .finish_non_exhaustive()
    }
}

impl FitnessServiceClientImpl {
    /// Bearer トークンと Request ID を付与したリクエストビルダーを作る
    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client
            .request(method, url)
            .bearer_auth(&self.access_token)
            .with_request_context()
    }

    fn activities_request(&self, page: ActivityPage) -> reqwest::RequestBuilder {
        self.request(
            Method::GET,
            "/activitylist-service/activities/search/activities",
        )
        .query(&[("start", page.start), ("limit", page.limit)])
    }
}

/// ダウンロード形式ごとのリモートパス
///
/// FIT はデバイスが生成したオリジナルファイル、それ以外はエクスポート API を使う。
fn download_path(activity_id: ActivityId, format: DownloadFormat) -> String {
    match format {
        DownloadFormat::Fit => format!("/download-service/files/activity/{}", activity_id),
        other => format!(
            "/download-service/export/{}/activity/{}",
            other.file_extension(),
            activity_id
        ),
    }
}

#[async_trait]
impl FitnessServiceClient for FitnessServiceClientImpl {
    fn display_name(&self) -> &str {
        &self.display_name
    }

    async fn get_activities(&self, page: ActivityPage) -> Result<Value, FitnessServiceError> {
        let response = self.activities_request(page).send().await?;
        handle_json(response).await
    }

    async fn get_activity_details(
        &self,
        activity_id: ActivityId,
    ) -> Result<Value, FitnessServiceError> {
        let path = format!("/activity-service/activity/{}/details", activity_id);
        let response = self.request(Method::GET, &path).send().await?;
        handle_json(response).await
    }

    async fn download_activity(
        &self,
        activity_id: ActivityId,
        format: DownloadFormat,
    ) -> Result<Bytes, FitnessServiceError> {
        let path = download_path(activity_id, format);
        let response = self.request(Method::GET, &path).send().await?;
        handle_bytes(response).await
    }

    async fn get_daily_summary(&self, date: CalendarDate) -> Result<Value, FitnessServiceError> {
        let path = format!(
            "/usersummary-service/usersummary/daily/{}",
            urlencoding::encode(&self.display_name)
        );
        let response = self
            .request(Method::GET, &path)
            .query(&[("calendarDate", date.to_string())])
            .send()
            .await?;
        handle_json(response).await
    }

    async fn get_full_name(&self) -> Result<Option<String>, FitnessServiceError> {
        let response = self
            .request(Method::GET, "/userprofile-service/socialProfile")
            .send()
            .await?;
        let profile: SocialProfileBody = handle_json(response).await?;
        Ok(profile.full_name)
    }

    async fn get_last_activity(&self) -> Result<Option<Value>, FitnessServiceError> {
        let activities = self.get_activities(ActivityPage::new(Some(0), Some(1))).await?;
        Ok(activities
            .as_array()
            .and_then(|items| items.first())
            .cloned())
    }

    async fn logout(&self) -> Result<(), FitnessServiceError> {
        let response = self.request(Method::POST, "/auth/logout").send().await?;
        handle_empty(response).await
    }
}

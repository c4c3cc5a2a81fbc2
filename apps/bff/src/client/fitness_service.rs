//! # フィットネスサービスクライアント
//!
//! facade からリモートのフィットネスサービスへの通信を担当する。
//!
//! 接続（認証）と認証済みハンドルを別トレイトに分ける。
//! [`FitnessServiceConnector`] は資格情報からハンドルを作るだけで状態を持たず、
//! [`FitnessServiceClient`] はログイン済みのトークンと表示名を保持する。
//!
//! ## エンドポイント
//!
//! - `POST /auth/login` - ログインしてアクセストークンを得る
//! - `POST /auth/logout` - トークンを無効化する
//! - `GET /activitylist-service/activities/search/activities` - アクティビティ一覧
//! - `GET /activity-service/activity/{id}/details` - アクティビティ詳細
//! - `GET /download-service/files/activity/{id}` - オリジナル FIT ファイル
//! - `GET /download-service/export/{format}/activity/{id}` - その他形式のエクスポート
//! - `GET /usersummary-service/usersummary/daily/{display_name}` - 日次ヘルスサマリー
//! - `GET /userprofile-service/socialProfile` - プロフィール（フルネーム）

mod client_impl;
mod error;
mod response;

use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
pub use client_impl::{FitnessServiceClientImpl, FitnessServiceConnectorImpl};
pub use error::FitnessServiceError;
use fitbridge_domain::{
    activity::{ActivityId, ActivityPage, DownloadFormat},
    calendar::CalendarDate,
    credentials::Credentials,
};
use serde_json::Value;

/// 資格情報でログインし、認証済みクライアントを作るトレイト
#[async_trait]
pub trait FitnessServiceConnector: Send + Sync {
    /// リモート認証を行い、認証済みハンドルを返す
    ///
    /// 認証拒否は [`FitnessServiceError::AuthenticationFailed`]、
    /// 通信失敗は [`FitnessServiceError::Connection`] を返す。
    async fn connect(
        &self,
        credentials: &Credentials,
    ) -> Result<Arc<dyn FitnessServiceClient>, FitnessServiceError>;
}

/// 認証済みのフィットネスサービスクライアント
///
/// 戻り値の JSON はリモートの応答をそのまま保持し、facade では解釈しない。
#[async_trait]
pub trait FitnessServiceClient: Send + Sync {
    /// セッションの識別名（日次サマリーのパスにも使う）
    fn display_name(&self) -> &str;

    /// アクティビティ一覧を取得する
    async fn get_activities(&self, page: ActivityPage) -> Result<Value, FitnessServiceError>;

    /// アクティビティ詳細を取得する
    async fn get_activity_details(&self, activity_id: ActivityId)
    -> Result<Value, FitnessServiceError>;

    /// アクティビティファイルをダウンロードする
    async fn download_activity(
        &self,
        activity_id: ActivityId,
        format: DownloadFormat,
    ) -> Result<Bytes, FitnessServiceError>;

    /// 指定日の日次ヘルスサマリーを取得する
    async fn get_daily_summary(&self, date: CalendarDate) -> Result<Value, FitnessServiceError>;

    /// プロフィールのフルネームを取得する（未設定なら `None`）
    async fn get_full_name(&self) -> Result<Option<String>, FitnessServiceError>;

    /// 最新のアクティビティを 1 件取得する（アクティビティがなければ `None`）
    async fn get_last_activity(&self) -> Result<Option<Value>, FitnessServiceError>;

    /// リモート側のセッションを無効化する
    async fn logout(&self) -> Result<(), FitnessServiceError>;
}

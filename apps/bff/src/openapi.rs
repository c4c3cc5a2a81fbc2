//! # OpenAPI 仕様定義
//!
//! utoipa で facade の OpenAPI 仕様を Rust の型から生成する。
//! `ApiDoc::openapi()` で OpenAPI ドキュメントを取得できる。

use utoipa::OpenApi;

use crate::handler::{activity, auth, health, hello, wellness};

#[derive(OpenApi)]
#[openapi(
   info(
      title = "fitbridge API",
      version = "0.1.0",
      description = "フィットネスサービスへの薄い HTTP facade。データ取得系はログイン済みセッションが必要。"
   ),
   paths(
      // health
      health::health_check,
      hello::hello,
      // auth
      auth::login,
      auth::logout,
      auth::status,
      // activities
      activity::list_activities,
      activity::get_activity_detail,
      activity::download_activity,
      // wellness
      wellness::get_health_summary,
   ),
   tags(
      (name = "health", description = "稼働確認"),
      (name = "auth", description = "セッション管理"),
      (name = "activities", description = "アクティビティ（要ログイン）"),
      (name = "wellness", description = "日次ヘルスサマリー（要ログイン）"),
   )
)]
pub struct ApiDoc;

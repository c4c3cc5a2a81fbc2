//! # ヘルスチェックハンドラ
//!
//! facade 自身の Liveness Check。`/health` は日次ヘルスサマリーの転送に使うため `/health/live` に置く。
//!
//! レスポンス型は [`fitbridge_shared::HealthResponse`] を参照。

use axum::Json;
use fitbridge_shared::HealthResponse;

/// Liveness Check エンドポイント
///
/// セッションの有無に関わらず常に `"healthy"` を返す。
#[utoipa::path(
   get,
   path = "/health/live",
   tag = "health",
   responses(
      (status = 200, description = "サーバー稼働中", body = HealthResponse)
   )
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::live(
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
    ))
}

//! # ウェルネスハンドラ
//!
//! 日次ヘルスサマリーの転送を行う。セッションゲートの内側にある。

use std::sync::Arc;

use axum::{
    Extension,
    Json,
    extract::{Query, State, rejection::QueryRejection},
    response::{IntoResponse, Response},
};
use fitbridge_domain::{calendar::CalendarDate, clock::Clock};
use fitbridge_shared::ErrorResponse;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::{IntoParams, ToSchema};

use crate::{
    error::{domain_error_response, log_and_convert_rejection, log_and_convert_service_error},
    session::ActiveSession,
};

/// ウェルネスハンドラの共有状態
pub struct WellnessState {
    /// 対象日省略時の「今日」を決める
    pub clock: Arc<dyn Clock>,
}

/// ヘルスサマリーのクエリパラメータ
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct HealthSummaryQuery {
    /// 対象日（`YYYY-MM-DD`、省略時は今日）
    pub cdate: Option<String>,
}

/// ヘルスサマリーレスポンス
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthSummaryResponse {
    /// 対象日
    #[schema(value_type = String, format = Date, example = "2025-09-22")]
    pub cdate:   CalendarDate,
    /// リモートの日次サマリー（そのまま）
    #[schema(value_type = Object)]
    pub summary: Value,
}

/// GET /health
#[utoipa::path(
   get,
   path = "/health",
   tag = "wellness",
   params(HealthSummaryQuery),
   responses(
      (status = 200, description = "日次ヘルスサマリー", body = HealthSummaryResponse),
      (status = 400, description = "不正な日付", body = ErrorResponse),
      (status = 401, description = "未ログイン", body = ErrorResponse),
      (status = 500, description = "リモート呼び出しの失敗", body = ErrorResponse)
   )
)]
#[tracing::instrument(skip_all)]
pub async fn get_health_summary(
    State(state): State<Arc<WellnessState>>,
    Extension(session): Extension<Arc<ActiveSession>>,
    query: Result<Query<HealthSummaryQuery>, QueryRejection>,
) -> Response {
    let Query(query) = match query {
        Ok(query) => query,
        Err(rejection) => {
            return log_and_convert_rejection("ヘルスサマリー取得", rejection.body_text());
        }
    };

    let cdate = match CalendarDate::parse_or_today(query.cdate.as_deref(), state.clock.as_ref()) {
        Ok(date) => date,
        Err(e) => return domain_error_response(e),
    };

    match session.client().get_daily_summary(cdate).await {
        Ok(summary) => Json(HealthSummaryResponse { cdate, summary }).into_response(),
        Err(e) => log_and_convert_service_error("ヘルスサマリー取得", e),
    }
}

//! # アクティビティハンドラ
//!
//! リモートのアクティビティ API への転送を行う。全ルートがセッションゲートの内側にある。
//!
//! ## エンドポイント
//!
//! - `GET /activities` - アクティビティ一覧（JSON 配列をそのまま返す）
//! - `GET /activity_detail/{id}` - アクティビティ詳細（JSON をそのまま返す）
//! - `GET /activity_download/{id}` - FIT ファイルを添付ファイルとして返す

use std::sync::Arc;

use axum::{
    Extension,
    Json,
    extract::{
        Path,
        Query,
        rejection::{PathRejection, QueryRejection},
    },
    http::header,
    response::{IntoResponse, Response},
};
use fitbridge_domain::activity::{ActivityId, ActivityPage, DownloadFormat};
use fitbridge_shared::ErrorResponse;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    error::{log_and_convert_rejection, log_and_convert_service_error},
    session::ActiveSession,
};

/// HTTP 面でダウンロードに使う形式
const DOWNLOAD_FORMAT: DownloadFormat = DownloadFormat::Fit;

/// アクティビティ一覧のクエリパラメータ
///
/// 文字列で受け取り、整数として読めない値は既定値に倒す。
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListActivitiesQuery {
    /// 先頭からのオフセット（省略時・不正値は 0）
    #[param(value_type = Option<u32>)]
    pub start: Option<String>,
    /// 最大件数（省略時・不正値は 10）
    #[param(value_type = Option<u32>)]
    pub limit: Option<String>,
}

/// GET /activities
#[utoipa::path(
   get,
   path = "/activities",
   tag = "activities",
   params(ListActivitiesQuery),
   responses(
      (status = 200, description = "アクティビティ一覧（リモートの JSON 配列）"),
      (status = 401, description = "未ログイン", body = ErrorResponse),
      (status = 500, description = "リモート呼び出しの失敗", body = ErrorResponse)
   )
)]
#[tracing::instrument(skip_all)]
pub async fn list_activities(
    Extension(session): Extension<Arc<ActiveSession>>,
    query: Result<Query<ListActivitiesQuery>, QueryRejection>,
) -> Response {
    let Query(query) = match query {
        Ok(query) => query,
        Err(rejection) => {
            return log_and_convert_rejection("アクティビティ一覧取得", rejection.body_text());
        }
    };
    let page = ActivityPage::from_query(query.start.as_deref(), query.limit.as_deref());

    match session.client().get_activities(page).await {
        Ok(activities) => Json(activities).into_response(),
        Err(e) => log_and_convert_service_error("アクティビティ一覧取得", e),
    }
}

/// GET /activity_detail/{id}
#[utoipa::path(
   get,
   path = "/activity_detail/{id}",
   tag = "activities",
   params(("id" = i64, Path, description = "アクティビティ ID")),
   responses(
      (status = 200, description = "アクティビティ詳細（リモートの JSON）"),
      (status = 400, description = "不正な ID", body = ErrorResponse),
      (status = 401, description = "未ログイン", body = ErrorResponse),
      (status = 500, description = "リモート呼び出しの失敗", body = ErrorResponse)
   )
)]
#[tracing::instrument(skip_all)]
pub async fn get_activity_detail(
    Extension(session): Extension<Arc<ActiveSession>>,
    path: Result<Path<i64>, PathRejection>,
) -> Response {
    let activity_id = match path {
        Ok(Path(id)) => ActivityId::new(id),
        Err(rejection) => {
            return log_and_convert_rejection("アクティビティ詳細取得", rejection.body_text());
        }
    };

    match session.client().get_activity_details(activity_id).await {
        Ok(details) => Json(details).into_response(),
        Err(e) => log_and_convert_service_error("アクティビティ詳細取得", e),
    }
}

/// GET /activity_download/{id}
///
/// リモートから FIT ファイルを取得し、`activity_<id>.fit` という名前の添付ファイルとして返す。
#[utoipa::path(
   get,
   path = "/activity_download/{id}",
   tag = "activities",
   params(("id" = i64, Path, description = "アクティビティ ID")),
   responses(
      (status = 200, description = "FIT ファイル（application/octet-stream の添付ファイル）"),
      (status = 400, description = "不正な ID", body = ErrorResponse),
      (status = 401, description = "未ログイン", body = ErrorResponse),
      (status = 500, description = "リモート呼び出しの失敗", body = ErrorResponse)
   )
)]
#[tracing::instrument(skip_all)]
pub async fn download_activity(
    Extension(session): Extension<Arc<ActiveSession>>,
    path: Result<Path<i64>, PathRejection>,
) -> Response {
    let activity_id = match path {
        Ok(Path(id)) => ActivityId::new(id),
        Err(rejection) => {
            return log_and_convert_rejection("アクティビティダウンロード", rejection.body_text());
        }
    };

    match session
        .client()
        .download_activity(activity_id, DOWNLOAD_FORMAT)
        .await
    {
        Ok(data) => {
            let disposition = format!(
                "attachment; filename={}",
                DOWNLOAD_FORMAT.attachment_filename(activity_id)
            );
            (
                [
                    (header::CONTENT_TYPE, "application/octet-stream".to_string()),
                    (header::CONTENT_DISPOSITION, disposition),
                ],
                data,
            )
                .into_response()
        }
        Err(e) => log_and_convert_service_error("アクティビティダウンロード", e),
    }
}

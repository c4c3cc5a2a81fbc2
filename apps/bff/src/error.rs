//! # BFF エラーハンドリング
//!
//! 失敗をエラーエンベロープ付きの axum レスポンスへ変換するヘルパーを集約する。
//!
//! | 分類 | ステータス | `kind` |
//! |------|-----------|--------|
//! | 入力不備 | 400 | `validation-error` |
//! | リモートでの認証拒否 | 401 | `authentication-failed` |
//! | セッションなし | 401 | `unauthenticated` |
//! | リモート呼び出しの失敗 | 500 | `upstream-error` |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use fitbridge_domain::DomainError;
use fitbridge_shared::{ErrorResponse, event_log::error};

use crate::client::FitnessServiceError;

// --- ログ付き変換 ---

/// ドメイン規則違反を 400 レスポンスに変換する
pub fn domain_error_response(err: DomainError) -> Response {
    validation_error_response(&err.to_string())
}

/// ゲート付き操作のリモート失敗をログ付きで 500 レスポンスに変換する
///
/// 種別に関わらず原因の文字列表現をそのまま `message` に入れる。
pub fn log_and_convert_service_error(operation: &str, err: FitnessServiceError) -> Response {
    tracing::error!(
        error.category = error::category::EXTERNAL_SERVICE,
        error.kind = error::kind::SERVICE_COMMUNICATION,
        error.cause = err.kind(),
        operation,
        "{}で失敗: {}",
        operation,
        err
    );
    upstream_error_response(&err.to_string())
}

/// 抽出（JSON ボディ・クエリ・パス）の拒否をログ付きで 400 レスポンスに変換する
pub fn log_and_convert_rejection(operation: &str, rejection: impl std::fmt::Display) -> Response {
    tracing::warn!(
        error.category = error::category::VALIDATION,
        error.kind = error::kind::REQUEST_REJECTED,
        operation,
        "{}でリクエストを拒否: {}",
        operation,
        rejection
    );
    validation_error_response(&rejection.to_string())
}

// --- レスポンスヘルパー ---

/// 入力不備レスポンス
pub fn validation_error_response(message: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::validation_error(message)),
    )
        .into_response()
}

/// リモート認証失敗レスポンス
pub fn authentication_failed_response(message: &str) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(ErrorResponse::authentication_failed(message)),
    )
        .into_response()
}

/// 未ログインレスポンス
pub fn unauthenticated_response() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(ErrorResponse::unauthenticated()),
    )
        .into_response()
}

/// 上流障害レスポンス
pub fn upstream_error_response(message: &str) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::upstream_error(message)),
    )
        .into_response()
}

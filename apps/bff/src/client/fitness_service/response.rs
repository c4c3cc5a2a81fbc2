//! フィットネスサービスレスポンスの共通ハンドリング

use bytes::Bytes;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use super::error::FitnessServiceError;

/// 非成功ステータスを `FitnessServiceError` に変換する
///
/// 成功時はレスポンスをそのまま返す。失敗時はボディをテキストで読み、
/// `status {code}: {body}` の形でメッセージに残す。
pub(super) async fn ensure_success(
    response: reqwest::Response,
) -> Result<reqwest::Response, FitnessServiceError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let variant = match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => FitnessServiceError::AuthenticationFailed,
        StatusCode::TOO_MANY_REQUESTS => FitnessServiceError::TooManyRequests,
        _ => FitnessServiceError::Unexpected,
    };
    let body = response.text().await.unwrap_or_default();

    Err(variant(format!("status {status}: {body}")))
}

/// 成功レスポンスを JSON としてデシリアライズする
pub(super) async fn handle_json<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, FitnessServiceError> {
    let response = ensure_success(response).await?;
    Ok(response.json::<T>().await?)
}

/// 成功レスポンスをバイナリとして読み出す
pub(super) async fn handle_bytes(response: reqwest::Response) -> Result<Bytes, FitnessServiceError> {
    let response = ensure_success(response).await?;
    Ok(response.bytes().await?)
}

/// ボディを読まずにステータスだけ確認する
pub(super) async fn handle_empty(response: reqwest::Response) -> Result<(), FitnessServiceError> {
    ensure_success(response).await.map(|_| ())
}

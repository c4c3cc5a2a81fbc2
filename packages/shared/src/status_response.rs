//! # 成功エンベロープ
//!
//! login / logout のように本文を持たない操作の成功レスポンス `{ "status": "success", "message": ... }`。

use serde::{Deserialize, Serialize};

/// 操作成功レスポンス
///
/// ## 使用例
///
/// ```
/// use fitbridge_shared::StatusResponse;
///
/// let response = StatusResponse::success("Login successful");
/// assert_eq!(response.status, "success");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct StatusResponse {
    /// 常に `"success"`
    pub status:  String,
    pub message: String,
}

impl StatusResponse {
    /// 成功レスポンスを作成する
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status:  "success".to_string(),
            message: message.into(),
        }
    }
}

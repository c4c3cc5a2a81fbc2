//! # エラーレスポンス
//!
//! facade の全エンドポイントで共通のエラーエンベロープを提供する。
//!
//! ```json
//! { "status": "error", "kind": "upstream-error", "message": "..." }
//! ```
//!
//! ## 設計
//!
//! - `ErrorResponse` は純粋なデータ構造（`Serialize` / `Deserialize` のみ）
//! - `status` は常に `"error"`。クライアントは成功エンベロープと同じキーで判別できる
//! - `kind` はエラー分類（validation / 認証 / 未ログイン / 上流障害）を表す

use serde::{Deserialize, Serialize};

/// エンベロープの `status` 値
const ERROR_STATUS: &str = "error";

/// エラーレスポンス
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ErrorResponse {
    /// 常に `"error"`
    pub status:  String,
    /// エラー分類
    pub kind:    String,
    /// 人間が読めるエラー内容
    pub message: String,
}

impl ErrorResponse {
    /// 汎用コンストラクタ
    pub fn new(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status:  ERROR_STATUS.to_string(),
            kind:    kind.into(),
            message: message.into(),
        }
    }

    /// 400 入力不備
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("validation-error", message)
    }

    /// 401 リモートサービスでの認証失敗
    pub fn authentication_failed(message: impl Into<String>) -> Self {
        Self::new("authentication-failed", message)
    }

    /// 401 有効なセッションなし
    pub fn unauthenticated() -> Self {
        Self::new("unauthenticated", "Not logged in")
    }

    /// 500 リモートサービス呼び出しの失敗
    ///
    /// message には失敗原因の文字列表現をそのまま入れる。
    pub fn upstream_error(message: impl Into<String>) -> Self {
        Self::new("upstream-error", message)
    }
}

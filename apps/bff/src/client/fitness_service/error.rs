//! フィットネスサービスクライアントのエラー型

use thiserror::Error;

/// フィットネスサービスクライアントエラー
///
/// 表示文字列はそのままエラーエンベロープの `message` になる。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FitnessServiceError {
    /// 資格情報またはトークンが拒否された（401 / 403）
    #[error("authentication failed: {0}")]
    AuthenticationFailed(String),

    /// レート制限（429）
    #[error("too many requests: {0}")]
    TooManyRequests(String),

    /// 接続失敗・タイムアウト
    #[error("connection error: {0}")]
    Connection(String),

    /// 予期しないステータスやデコードできないボディ
    #[error("unexpected response: {0}")]
    Unexpected(String),
}

impl FitnessServiceError {
    /// ログ用のエラー種別名
    pub fn kind(&self) -> &'static str {
        match self {
            Self::AuthenticationFailed(_) => "authentication_failed",
            Self::TooManyRequests(_) => "too_many_requests",
            Self::Connection(_) => "connection",
            Self::Unexpected(_) => "unexpected",
        }
    }
}

impl From<reqwest::Error> for FitnessServiceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() || err.is_request() {
            FitnessServiceError::Connection(err.to_string())
        } else {
            FitnessServiceError::Unexpected(err.to_string())
        }
    }
}

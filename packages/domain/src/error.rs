//! # ドメイン層エラー定義
//!
//! 呼び出し元から受け取った値が規則に合わない場合のエラー型。
//! bff 層でこのエラーを受け取り、400 Bad Request に変換する。

use thiserror::Error;

/// ドメイン層で発生するエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// 必須の資格情報が欠けている
    #[error("Username and password required")]
    MissingCredentials,

    /// 日付文字列が `YYYY-MM-DD` 形式でない
    #[error("invalid calendar date {0:?}: expected YYYY-MM-DD")]
    InvalidCalendarDate(String),
}

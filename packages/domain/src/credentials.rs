//! # ログイン資格情報

use std::fmt;

use crate::DomainError;

/// リモートサービスへのログイン資格情報
///
/// パスワードはログに出ないよう `Debug` 出力で伏せる。
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    /// 資格情報を作成する
    ///
    /// どちらかが欠けている、または空文字列の場合は [`DomainError::MissingCredentials`]。
    pub fn new(username: Option<String>, password: Option<String>) -> Result<Self, DomainError> {
        match (username, password) {
            (Some(username), Some(password)) if !username.is_empty() && !password.is_empty() => {
                Ok(Self { username, password })
            }
            _ => Err(DomainError::MissingCredentials),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

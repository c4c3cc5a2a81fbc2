//! # セッションスロット
//!
//! プロセス全体で高々 1 つの認証済みセッションを保持する。
//!
//! ## 状態遷移
//!
//! ```text
//! LoggedOut --login 成功--> LoggedIn
//! LoggedOut / LoggedIn --login 失敗--> LoggedOut
//! LoggedIn --logout--> LoggedOut
//! LoggedOut --logout--> LoggedOut
//! ```
//!
//! スロットは `RwLock` で保護し、アプリケーション State から明示的に渡す。
//! リモート呼び出しはロックを保持せずに行い、結果の反映だけを書き込みロック下で行う。

use std::sync::Arc;

use fitbridge_domain::credentials::Credentials;
use tokio::sync::RwLock;

use crate::client::{FitnessServiceClient, FitnessServiceConnector, FitnessServiceError};

/// 認証済みセッション
pub struct ActiveSession {
    client:   Arc<dyn FitnessServiceClient>,
    identity: String,
}

impl ActiveSession {
    /// 認証済みクライアント
    pub fn client(&self) -> &dyn FitnessServiceClient {
        self.client.as_ref()
    }

    /// セッションの識別名
    pub fn identity(&self) -> &str {
        &self.identity
    }
}

impl std::fmt::Debug for ActiveSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActiveSession")
            .field("identity", &self.identity)
            .finish_non_exhaustive()
    }
}

/// スロットの状態
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionStatus {
    LoggedIn { identity: String },
    LoggedOut,
}

/// ログアウトの結果
#[derive(Debug)]
pub enum LogoutOutcome {
    /// セッションがなかった（リモート呼び出しなし）
    NotLoggedIn,
    /// リモート側も無効化できた
    LoggedOut,
    /// リモートのログアウトは失敗したが、スロットはクリア済み
    RemoteLogoutFailed(FitnessServiceError),
}

/// セッションスロット
pub struct SessionStore {
    connector: Arc<dyn FitnessServiceConnector>,
    slot:      RwLock<Option<Arc<ActiveSession>>>,
}

impl SessionStore {
    /// 空のスロットを作成する
    pub fn new(connector: Arc<dyn FitnessServiceConnector>) -> Self {
        Self {
            connector,
            slot: RwLock::new(None),
        }
    }

    /// ログインしてスロットを置き換える
    ///
    /// 失敗時はスロットを空にしてからエラーを返す。リトライはしない。
    pub async fn login(
        &self,
        credentials: &Credentials,
    ) -> Result<Arc<ActiveSession>, FitnessServiceError> {
        let result = self
            .connector
            .connect(credentials)
            .await
            .and_then(|client| {
                let identity = client.display_name().to_string();
                if identity.is_empty() {
                    return Err(FitnessServiceError::Unexpected(
                        "remote service returned an empty display name".to_string(),
                    ));
                }
                Ok(Arc::new(ActiveSession { client, identity }))
            });

        let mut slot = self.slot.write().await;
        match result {
            Ok(session) => {
                *slot = Some(Arc::clone(&session));
                Ok(session)
            }
            Err(e) => {
                *slot = None;
                Err(e)
            }
        }
    }

    /// スロットを空にし、リモート側のセッションも無効化する
    ///
    /// セッションがなければ何もしない。
    pub async fn logout(&self) -> LogoutOutcome {
        let previous = self.slot.write().await.take();

        match previous {
            None => LogoutOutcome::NotLoggedIn,
            Some(session) => match session.client.logout().await {
                Ok(()) => LogoutOutcome::LoggedOut,
                Err(e) => LogoutOutcome::RemoteLogoutFailed(e),
            },
        }
    }

    /// 現在の状態
    pub async fn status(&self) -> SessionStatus {
        match self.slot.read().await.as_ref() {
            Some(session) => SessionStatus::LoggedIn {
                identity: session.identity.clone(),
            },
            None => SessionStatus::LoggedOut,
        }
    }

    /// 現在のセッション
    pub async fn current(&self) -> Option<Arc<ActiveSession>> {
        self.slot.read().await.clone()
    }
}

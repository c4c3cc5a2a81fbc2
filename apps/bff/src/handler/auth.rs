//! # 認証ハンドラ
//!
//! セッションスロットを操作するエンドポイントを提供する。
//!
//! ## エンドポイント
//!
//! - `POST /login` - リモートサービスにログインし、セッションを保持する
//! - `POST /logout` - セッションを破棄する（未ログインでも成功）
//! - `GET /status` - 現在のセッション状態

use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::{IntoResponse, Response},
};
use fitbridge_domain::credentials::Credentials;
use fitbridge_shared::{
    ErrorResponse,
    StatusResponse,
    event_log::{error, event},
    log_business_event,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    error::{authentication_failed_response, domain_error_response, log_and_convert_rejection},
    session::{LogoutOutcome, SessionStatus, SessionStore},
};

/// 認証ハンドラの共有状態
pub struct AuthState {
    pub session_store: Arc<SessionStore>,
}

// --- リクエスト/レスポンス型 ---

/// ログインリクエスト
///
/// 欠けたフィールドを 400 として扱うため、どちらも `Option` で受ける。
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// セッション状態レスポンス
///
/// ```json
/// { "status": "logged_in", "identity": "runner42" }
/// { "status": "logged_out" }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct SessionStatusResponse {
    /// `"logged_in"` または `"logged_out"`
    pub status:   String,
    /// ログイン中のみ
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity: Option<String>,
}

impl From<SessionStatus> for SessionStatusResponse {
    fn from(status: SessionStatus) -> Self {
        match status {
            SessionStatus::LoggedIn { identity } => Self {
                status:   "logged_in".to_string(),
                identity: Some(identity),
            },
            SessionStatus::LoggedOut => Self {
                status:   "logged_out".to_string(),
                identity: None,
            },
        }
    }
}

// --- ハンドラ ---

/// POST /login
///
/// 資格情報でリモートサービスにログインし、プロセス全体のセッションとして保持する。
///
/// リモート側の失敗は種別に関わらず 401 とし、スロットは空になる。
/// 資格情報が欠けている場合はリモートを呼ばず、スロットにも触れない。
#[utoipa::path(
   post,
   path = "/login",
   tag = "auth",
   request_body = LoginRequest,
   responses(
      (status = 200, description = "ログイン成功", body = StatusResponse),
      (status = 400, description = "資格情報の欠落または不正なボディ", body = ErrorResponse),
      (status = 401, description = "リモートでの認証失敗", body = ErrorResponse)
   )
)]
#[tracing::instrument(skip_all)]
pub async fn login(
    State(state): State<Arc<AuthState>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return log_and_convert_rejection("ログイン", rejection.body_text()),
    };

    let credentials = match Credentials::new(req.username, req.password) {
        Ok(credentials) => credentials,
        Err(e) => {
            tracing::warn!(
                error.category = error::category::VALIDATION,
                "ログインを拒否: {}",
                e
            );
            return domain_error_response(e);
        }
    };

    match state.session_store.login(&credentials).await {
        Ok(session) => {
            log_business_event!(
                event.category = event::category::AUTH,
                event.action = event::action::LOGIN_SUCCESS,
                event.entity_type = event::entity_type::SESSION,
                event.entity_id = %session.identity(),
                event.result = event::result::SUCCESS,
                "ログイン成功"
            );
            Json(StatusResponse::success("Login successful")).into_response()
        }
        Err(e) => {
            log_business_event!(
                event.category = event::category::AUTH,
                event.action = event::action::LOGIN_FAILURE,
                event.entity_type = event::entity_type::SESSION,
                event.result = event::result::FAILURE,
                event.reason = e.kind(),
                "ログイン失敗"
            );
            tracing::warn!(
                error.category = error::category::EXTERNAL_SERVICE,
                error.kind = error::kind::AUTHENTICATION,
                "リモートへのログインに失敗: {}",
                e
            );
            authentication_failed_response(&e.to_string())
        }
    }
}

/// POST /logout
///
/// セッションを破棄する。リモート側のログアウトが失敗してもログに残すだけで成功を返す。
#[utoipa::path(
   post,
   path = "/logout",
   tag = "auth",
   responses(
      (status = 200, description = "ログアウト成功（未ログイン時も同じ）", body = StatusResponse)
   )
)]
#[tracing::instrument(skip_all)]
pub async fn logout(State(state): State<Arc<AuthState>>) -> Json<StatusResponse> {
    match state.session_store.logout().await {
        LogoutOutcome::NotLoggedIn => {
            tracing::debug!("未ログインのためログアウト処理をスキップ");
        }
        LogoutOutcome::LoggedOut => {
            log_business_event!(
                event.category = event::category::AUTH,
                event.action = event::action::LOGOUT,
                event.entity_type = event::entity_type::SESSION,
                event.result = event::result::SUCCESS,
                "ログアウト"
            );
        }
        LogoutOutcome::RemoteLogoutFailed(e) => {
            tracing::warn!(
                error.category = error::category::EXTERNAL_SERVICE,
                error.kind = error::kind::LOGOUT,
                "リモートのログアウトに失敗（セッションは破棄済み）: {}",
                e
            );
            log_business_event!(
                event.category = event::category::AUTH,
                event.action = event::action::LOGOUT,
                event.entity_type = event::entity_type::SESSION,
                event.result = event::result::FAILURE,
                "ログアウト（リモート無効化に失敗）"
            );
        }
    }

    Json(StatusResponse::success("Logout successful"))
}

/// GET /status
///
/// スロットを読むだけで、リモートは呼ばない。
#[utoipa::path(
   get,
   path = "/status",
   tag = "auth",
   responses(
      (status = 200, description = "現在のセッション状態", body = SessionStatusResponse)
   )
)]
pub async fn status(State(state): State<Arc<AuthState>>) -> Json<SessionStatusResponse> {
    Json(state.session_store.status().await.into())
}

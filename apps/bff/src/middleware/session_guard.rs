//! # セッションゲートミドルウェア
//!
//! データ取得系ルートに `route_layer` で適用し、ログイン済みでなければ
//! ハンドラ（とリモート呼び出し）を実行せずに 401 を返す。
//!
//! ```rust,ignore
//! Router::new()
//!     .route("/activities", get(list_activities))
//!     .route_layer(from_fn_with_state(session_store.clone(), require_session))
//! ```
//!
//! 抽出より前に判定するため、未ログイン時は不正なクエリやパスでも 401 になる。

use std::sync::Arc;

use axum::{body::Body, extract::State, http::Request, middleware::Next, response::Response};

use crate::{error::unauthenticated_response, session::SessionStore};

/// ログイン済みセッションを要求するミドルウェア
///
/// 成功時は `Arc<ActiveSession>` をリクエスト extensions に入れる。
/// ハンドラは `Extension<Arc<ActiveSession>>` で受け取る。
pub async fn require_session(
    State(store): State<Arc<SessionStore>>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let Some(session) = store.current().await else {
        tracing::debug!(path = %request.uri().path(), "未ログインのためリクエストを拒否");
        return unauthenticated_response();
    };

    request.extensions_mut().insert(session);
    next.run(request).await
}

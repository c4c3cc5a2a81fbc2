//! # BFF アプリケーション構築
//!
//! 依存（コネクタ・セッションスロット・時刻）から State を組み立て、ルーターを構築する。
//! `main.rs` は設定読み込みとサーバー起動に集中する。

use std::sync::Arc;

use axum::{
    Router,
    middleware::{from_fn, from_fn_with_state},
    routing::{get, post},
};
use fitbridge_domain::clock::{Clock, SystemClock};
use fitbridge_shared::observability::{MakeRequestUuidV7, make_request_span};
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::{
    client::{FitnessServiceConnectorImpl, FitnessServiceError},
    config::BffConfig,
    handler::{
        AuthState,
        WellnessState,
        download_activity,
        get_activity_detail,
        get_health_summary,
        health_check,
        hello,
        list_activities,
        login,
        logout,
        status,
    },
    middleware::{no_cache, require_session, with_request_context},
    session::SessionStore,
};

/// 設定から本番用の依存を組み立ててルーターを返す
///
/// `reqwest::Client` はここで 1 つだけ作られ、全セッションで共有される。
pub fn build_app(config: &BffConfig) -> Result<Router, FitnessServiceError> {
    let connector = Arc::new(FitnessServiceConnectorImpl::new(
        &config.connect_api_url,
        &config.user_agent,
    )?);
    let session_store = Arc::new(SessionStore::new(connector));

    Ok(build_router(session_store, Arc::new(SystemClock)))
}

/// ルーター定義
///
/// テストではスタブのコネクタを持つ `SessionStore` と固定時刻を渡す。
pub fn build_router(session_store: Arc<SessionStore>, clock: Arc<dyn Clock>) -> Router {
    let auth_state = Arc::new(AuthState {
        session_store: session_store.clone(),
    });
    let wellness_state = Arc::new(WellnessState { clock });

    // データ取得系: セッションゲートを route_layer で適用し、
    // マッチしたルートだけを対象にする（未定義パスは 404 のまま）
    let gated = Router::new()
        .route("/activities", get(list_activities))
        .route("/activity_detail/{id}", get(get_activity_detail))
        .route("/activity_download/{id}", get(download_activity))
        .route("/health", get(get_health_summary))
        .with_state(wellness_state)
        .route_layer(from_fn_with_state(session_store, require_session));

    Router::new()
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/status", get(status))
        .with_state(auth_state)
        .route("/health/live", get(health_check))
        .route("/hello", get(hello))
        .merge(gated)
        .layer(from_fn(no_cache))
        // Request ID レイヤー（下に書いたものが外側）
        // 1. SetRequestIdLayer（最外）: UUID v7 を生成（またはクライアント提供値を使用）
        // 2. TraceLayer: スパンに request_id を含める
        // 3. PropagateRequestIdLayer: レスポンスヘッダーに X-Request-Id をコピー
        // 4. with_request_context: リモート呼び出しに Request ID を引き継ぐ
        .layer(from_fn(with_request_context))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}

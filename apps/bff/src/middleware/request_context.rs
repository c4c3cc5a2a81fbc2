//! # リクエスト文脈ミドルウェア
//!
//! `SetRequestIdLayer` が付けた Request ID を [`RequestContext`] に載せて後段を実行する。
//! ID が無いリクエスト（レイヤー未適用のテストルーターなど）は文脈なしで通す。

use axum::{body::Body, http::Request, middleware::Next, response::Response};
use tower_http::request_id::RequestId;

use crate::client::RequestContext;

pub async fn with_request_context(request: Request<Body>, next: Next) -> Response {
    let context = request
        .extensions()
        .get::<RequestId>()
        .and_then(|id| id.header_value().to_str().ok())
        .map(RequestContext::new);

    match context {
        Some(context) => context.scope(next.run(request)).await,
        None => next.run(request).await,
    }
}

//! # キャッシュ制御ミドルウェア
//!
//! facade はリモートの最新状態をそのまま返すため、全レスポンスに
//! `Cache-Control: no-store` を付けて中間キャッシュでの再利用を禁止する。

use axum::{
    extract::Request,
    http::{HeaderValue, header},
    middleware::Next,
    response::Response,
};

/// レスポンスに `Cache-Control: no-store` を付与する
///
/// ハンドラが独自に設定した値も上書きする。
pub async fn no_cache(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    response
        .headers_mut()
        .insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
    response
}

//! # 挨拶ハンドラ
//!
//! 疎通確認用。セッション不要。

use axum::extract::Query;
use serde::Deserialize;
use utoipa::IntoParams;

/// 挨拶のクエリパラメータ
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct HelloQuery {
    /// 挨拶する相手（省略時 `World`）
    pub name: Option<String>,
}

/// GET /hello
#[utoipa::path(
   get,
   path = "/hello",
   tag = "health",
   params(HelloQuery),
   responses(
      (status = 200, description = "挨拶文", body = String, content_type = "text/plain")
   )
)]
pub async fn hello(Query(query): Query<HelloQuery>) -> String {
    let name = query.name.as_deref().unwrap_or("World");
    format!("Hello, {} from fitbridge!", name)
}

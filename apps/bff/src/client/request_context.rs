//! # リモート呼び出しのリクエスト文脈
//!
//! 受信リクエストの Request ID を、そのリクエストを処理するタスクの間だけ保持し、
//! フィットネスサービスへの送信時に `X-Request-Id` として付け直す。
//!
//! クライアントトレイトの引数を増やさずに済むよう task-local で運ぶ。
//! 文脈の外（プローブ CLI、単体テスト）ではヘッダーを付けない。

use std::future::Future;

use fitbridge_shared::observability::REQUEST_ID_HEADER;

tokio::task_local! {
    static CONTEXT: RequestContext;
}

/// 1 件の受信リクエストに紐づく文脈
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    request_id: String,
}

impl RequestContext {
    pub fn new(request_id: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
        }
    }

    pub fn request_id(&self) -> &str {
        &self.request_id
    }

    /// 実行中タスクの文脈
    pub fn current() -> Option<Self> {
        CONTEXT.try_with(Self::clone).ok()
    }

    /// `future` の実行中だけこの文脈を有効にする
    pub async fn scope<F: Future>(self, future: F) -> F::Output {
        CONTEXT.scope(self, future).await
    }
}

/// reqwest のリクエストに現在の文脈を反映する
pub(crate) trait WithRequestContext {
    fn with_request_context(self) -> Self;
}

impl WithRequestContext for reqwest::RequestBuilder {
    fn with_request_context(self) -> Self {
        match RequestContext::current() {
            Some(context) => self.header(REQUEST_ID_HEADER, context.request_id),
            None => self,
        }
    }
}

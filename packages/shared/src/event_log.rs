//! # 構造化ログのフィールド定数
//!
//! セッション操作の監査ログ（ビジネスイベント）と、
//! エラーログに付ける分類フィールドの値をここで一元管理する。
//!
//! フィールド名はドット区切り（`event.action`、`error.kind`）。
//! JSON 出力ではそのままフラットなキーになる。

/// セッション操作などのビジネスイベントを `info` レベルで出力する
///
/// `event.kind = "business_event"` を自動で付けるので、
/// JSON ログから `select(.["event.kind"] == "business_event")` で抽出できる。
/// 呼び出し側は `event.category` / `event.action` / `event.result` を渡す。
#[macro_export]
macro_rules! log_business_event {
    ($($args:tt)*) => {
        ::tracing::info!(
            event.kind = "business_event",
            $($args)*
        )
    };
}

pub mod event {
    pub mod category {
        pub const AUTH: &str = "auth";
    }

    pub mod action {
        pub const LOGIN_SUCCESS: &str = "session.login_success";
        pub const LOGIN_FAILURE: &str = "session.login_failure";
        pub const LOGOUT: &str = "session.logout";
    }

    pub mod entity_type {
        /// facade が保持する唯一のリモートセッション
        pub const SESSION: &str = "remote_session";
    }

    pub mod result {
        pub const SUCCESS: &str = "success";
        pub const FAILURE: &str = "failure";
    }
}

/// `tracing::error!` / `warn!` に付ける `error.category` と `error.kind`
pub mod error {
    pub mod category {
        /// リモートのフィットネスサービスとの通信
        pub const EXTERNAL_SERVICE: &str = "external_service";
        /// クエリ・パス・ボディの検証
        pub const VALIDATION: &str = "validation";
    }

    pub mod kind {
        pub const AUTHENTICATION: &str = "authentication";
        pub const SERVICE_COMMUNICATION: &str = "service_communication";
        pub const LOGOUT: &str = "logout";
        pub const REQUEST_REJECTED: &str = "request_rejected";
    }
}

//! # fitbridge 共有ユーティリティ
//!
//! fitbridge の各クレートで共通して使うレスポンス型と観測性ユーティリティを提供する。
//!
//! ## 設計方針
//!
//! - 他のすべてのクレート（domain, bff）から依存される
//! - ビジネスロジックを含まない純粋なユーティリティのみを配置
//! - axum への依存は持たない（`IntoResponse` 変換は bff の責務）

pub mod error_response;
pub mod event_log;
pub mod health;
pub mod observability;
pub mod status_response;

pub use error_response::ErrorResponse;
pub use health::HealthResponse;
pub use status_response::StatusResponse;

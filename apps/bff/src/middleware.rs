//! # ミドルウェア
//!
//! BFF 用のミドルウェアを提供する。

mod cache_control;
mod request_context;
mod session_guard;

pub use cache_control::no_cache;
pub use request_context::with_request_context;
pub use session_guard::require_session;

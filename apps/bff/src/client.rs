//! # 外部 API クライアント
//!
//! リモートのフィットネスサービスとの通信を担当する。

pub mod fitness_service;
mod request_context;

pub use fitness_service::{
    FitnessServiceClient,
    FitnessServiceClientImpl,
    FitnessServiceConnector,
    FitnessServiceConnectorImpl,
    FitnessServiceError,
};
pub use request_context::RequestContext;
pub(crate) use request_context::WithRequestContext;

//! # 稼働確認レスポンス
//!
//! facade 自身が生きているかを返す `/health/live` の本文。
//! リモートサービスへの疎通やセッション状態は含めない。

use serde::Serialize;

/// 稼働確認レスポンス
///
/// ```
/// use fitbridge_shared::HealthResponse;
///
/// let response = HealthResponse::live("fitbridge-bff", "0.1.0");
/// assert_eq!(response.status, "healthy");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct HealthResponse {
    /// 常に `"healthy"`
    pub status:  String,
    pub service: String,
    pub version: String,
}

impl HealthResponse {
    pub fn live(service: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            status:  "healthy".to_string(),
            service: service.into(),
            version: version.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_liveはhealthyとサービス名を返す() {
        let json = serde_json::to_value(HealthResponse::live("fitbridge-bff", "1.2.3")).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "status": "healthy",
                "service": "fitbridge-bff",
                "version": "1.2.3"
            })
        );
    }
}

//! # BFF 設定
//!
//! 環境変数から facade サーバーとリモートサービス接続の設定を読み込む。

use std::env;

use thiserror::Error;

/// `CONNECT_USER_AGENT` 未設定時の User-Agent
pub const DEFAULT_USER_AGENT: &str = "com.garmin.android.apps.connectmobile";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5001;

/// 設定読み込みエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// 必須の環境変数が未設定
    #[error("{0} が設定されていません")]
    Missing(&'static str),

    /// 値の形式が不正
    #[error("{name} の値が不正です: {value}")]
    Invalid { name: &'static str, value: String },
}

/// BFF サーバーの設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BffConfig {
    /// バインドアドレス
    pub host:            String,
    /// ポート番号
    pub port:            u16,
    /// リモートフィットネスサービスのベース URL
    pub connect_api_url: String,
    /// リモートサービスへ送る User-Agent
    pub user_agent:      String,
}

impl BffConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// 任意の参照関数から設定を読み込む
    ///
    /// 空文字列は未設定として扱う。
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let port = match get("BFF_PORT") {
            Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid {
                name: "BFF_PORT",
                value,
            })?,
            None => DEFAULT_PORT,
        };

        let connect_api_url = get("CONNECT_API_URL").ok_or(ConfigError::Missing("CONNECT_API_URL"))?;
        if !connect_api_url.starts_with("http://") && !connect_api_url.starts_with("https://") {
            return Err(ConfigError::Invalid {
                name:  "CONNECT_API_URL",
                value: connect_api_url,
            });
        }

        Ok(Self {
            host: get("BFF_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            connect_api_url,
            user_agent: get("CONNECT_USER_AGENT").unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
        })
    }
}

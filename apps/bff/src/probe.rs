//! # 資格情報プローブ
//!
//! サーバーを起動せずに、資格情報でリモートにログインできるかを確かめる。
//! `fitbridge-probe` バイナリから使う。
//!
//! ログイン → フルネーム取得 → 最新アクティビティ取得 → ログアウトの順に実行し、
//! 結果を逐次 `out` に書き出す。途中で失敗した場合はそこで止まる。

use std::io::Write;

use fitbridge_domain::credentials::Credentials;
use thiserror::Error;

use crate::client::{FitnessServiceConnector, FitnessServiceError};

/// プローブの失敗
#[derive(Debug, Error)]
pub enum ProbeError {
    /// リモートとの通信失敗
    #[error(transparent)]
    Service(#[from] FitnessServiceError),

    /// 結果の書き出し失敗
    #[error("出力に失敗しました: {0}")]
    Output(#[from] std::io::Error),
}

/// プローブを実行する
pub async fn run_probe<W: Write>(
    connector: &dyn FitnessServiceConnector,
    credentials: &Credentials,
    out: &mut W,
) -> Result<(), ProbeError> {
    let client = connector.connect(credentials).await?;
    writeln!(out, "Login successful: {}", client.display_name())?;

    let full_name = client.get_full_name().await?;
    writeln!(out, "Full name: {}", full_name.as_deref().unwrap_or("(not set)"))?;

    match client.get_last_activity().await? {
        Some(activity) => {
            let pretty =
                serde_json::to_string_pretty(&activity).unwrap_or_else(|_| activity.to_string());
            writeln!(out, "Last activity:\n{}", pretty)?;
        }
        None => writeln!(out, "Last activity: (none)")?,
    }

    client.logout().await?;
    writeln!(out, "Logout successful.")?;

    Ok(())
}

//! # 資格情報プローブ CLI
//!
//! 環境変数 `EMAIL` / `PASSWORD` の資格情報でリモートにログインし、
//! フルネームと最新アクティビティを表示してからログアウトする。
//!
//! ## 使い方
//!
//! ```bash
//! EMAIL=runner@example.com PASSWORD=... CONNECT_API_URL=https://connect.example.com \
//!   cargo run --bin fitbridge-probe -p fitbridge-bff
//! ```
//!
//! 資格情報か設定が欠けている場合は終了コード 1。
//! 通信エラーはログに出すだけで、終了コードは 0 のまま。

use std::process::ExitCode;

use fitbridge_bff::{
    client::FitnessServiceConnectorImpl,
    config::BffConfig,
    probe::{ProbeError, run_probe},
};
use fitbridge_domain::credentials::Credentials;
use fitbridge_shared::{
    event_log::error,
    observability::{TracingConfig, init_tracing},
};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let _app_span = init_tracing(
        TracingConfig::from_env("probe").with_default_filter("warn,fitbridge_bff=info"),
    );

    let credentials = match Credentials::new(std::env::var("EMAIL").ok(), std::env::var("PASSWORD").ok())
    {
        Ok(credentials) => credentials,
        Err(_) => {
            eprintln!("Error: EMAIL and PASSWORD environment variables must be set.");
            return ExitCode::FAILURE;
        }
    };

    let config = match BffConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let connector = match FitnessServiceConnectorImpl::new(&config.connect_api_url, &config.user_agent)
    {
        Ok(connector) => connector,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut stdout = std::io::stdout().lock();
    match run_probe(&connector, &credentials, &mut stdout).await {
        Ok(()) => {}
        Err(ProbeError::Service(e)) => {
            tracing::error!(
                error.category = error::category::EXTERNAL_SERVICE,
                error.kind = error::kind::SERVICE_COMMUNICATION,
                error.cause = e.kind(),
                "リモートとの通信でエラーが発生しました: {}",
                e
            );
        }
        Err(ProbeError::Output(e)) => {
            tracing::error!("結果の出力に失敗しました: {}", e);
        }
    }

    ExitCode::SUCCESS
}

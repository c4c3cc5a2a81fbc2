//! # fitbridge BFF サーバー
//!
//! リモートのフィットネスサービスへの薄い HTTP facade。
//!
//! ## 役割
//!
//! - **セッション保持**: プロセス全体で 1 つの認証済みセッションを保持する
//! - **ゲート付き転送**: ログイン済みの場合のみ、アクティビティとヘルスサマリーをリモートから転送する
//! - **エラー変換**: リモートの失敗を共通のエラーエンベロープに変換する
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────────┐
//! │    Client    │────▶│  fitbridge   │────▶│ Fitness Service  │
//! │              │     │  port: 5001  │     │   (remote)       │
//! └──────────────┘     └──────────────┘     └──────────────────┘
//! ```
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `BFF_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `BFF_PORT` | No | ポート番号（デフォルト: `5001`） |
//! | `CONNECT_API_URL` | **Yes** | リモートサービスのベース URL |
//! | `CONNECT_USER_AGENT` | No | リモートへ送る User-Agent |
//! | `LOG_FORMAT` | No | `json` / `pretty`（デフォルト: `pretty`） |
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境（.env ファイルを使用）
//! cargo run -p fitbridge-bff
//!
//! # 環境変数を直接指定
//! CONNECT_API_URL=https://connect.example.com cargo run -p fitbridge-bff --release
//! ```

use std::net::SocketAddr;

use anyhow::Context;
use fitbridge_bff::{app_builder::build_app, config::BffConfig};
use fitbridge_shared::observability::{TracingConfig, init_tracing};
use tokio::net::TcpListener;

/// BFF サーバーのエントリーポイント
///
/// 1. 環境変数の読み込み（.env ファイル）
/// 2. トレーシングの初期化
/// 3. アプリケーション設定の読み込み
/// 4. ルーターの構築
/// 5. HTTP サーバーの起動
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    let _app_span = init_tracing(TracingConfig::from_env("bff"));

    let config = BffConfig::from_env().context("設定の読み込みに失敗しました")?;

    tracing::info!(
        "BFF サーバーを起動します: {}:{} (remote: {})",
        config.host,
        config.port,
        config.connect_api_url
    );

    let app = build_app(&config).context("HTTP クライアントの初期化に失敗しました")?;

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("アドレスのパースに失敗しました")?;

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("BFF サーバーが起動しました: {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

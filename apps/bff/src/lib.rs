//! # fitbridge BFF ライブラリ
//!
//! フィットネスサービスの前段に置く薄い HTTP facade のコアモジュール。
//!
//! ## モジュール構成
//!
//! - `app_builder`: State の組み立てとルーター構築
//! - `client`: リモートフィットネスサービスのクライアント（トレイト + reqwest 実装）
//! - `config`: 環境変数からの設定読み込み
//! - `error`: エラーエンベロープへの変換ヘルパー
//! - `handler`: HTTP ハンドラ
//! - `middleware`: セッションゲート、キャッシュ制御、Request ID 伝播
//! - `openapi`: OpenAPI ドキュメント定義
//! - `probe`: 資格情報プローブ（`fitbridge-probe` バイナリ）
//! - `session`: プロセス全体で 1 つのセッションスロット

pub mod app_builder;
pub mod client;
pub mod config;
pub mod error;
pub mod handler;
pub mod middleware;
pub mod openapi;
pub mod probe;
pub mod session;

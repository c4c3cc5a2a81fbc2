//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## 設計方針
//!
//! - 各ハンドラはサブモジュールに配置し、親モジュールで re-export する
//! - ハンドラは薄く保ち、リモート呼び出しはクライアントトレイトに委譲する
//! - データ取得系ハンドラはセッションゲート通過後にのみ実行される
//!
//! ## ハンドラ一覧
//!
//! - `auth`: ログイン・ログアウト・状態確認
//! - `activity`: アクティビティ一覧・詳細・ダウンロード
//! - `wellness`: 日次ヘルスサマリー
//! - `health`: facade 自身の稼働確認
//! - `hello`: 疎通確認用の挨拶

pub mod activity;
pub mod auth;
pub mod health;
pub mod hello;
pub mod wellness;

pub use activity::{download_activity, get_activity_detail, list_activities};
pub use auth::{AuthState, login, logout, status};
pub use health::health_check;
pub use hello::hello;
pub use wellness::{WellnessState, get_health_summary};

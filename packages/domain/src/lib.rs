//! # fitbridge ドメイン層
//!
//! facade が扱う値オブジェクトを定義する。
//!
//! facade 自体はリモートのフィットネスサービスへの転送しか行わないため、
//! ここに置くのは「呼び出し元から受け取り、検証してからリモートへ渡す値」に限られる。
//!
//! ## モジュール構成
//!
//! - [`activity`] - アクティビティ ID、ダウンロード形式、一覧取得の範囲
//! - [`calendar`] - ヘルスサマリーの対象日
//! - [`clock`] - 現在時刻の抽象化（「今日」の既定値に使う）
//! - [`credentials`] - ログイン資格情報
//! - [`error`] - ドメイン層で発生するエラーの定義
//!
//! ## 依存関係の方向
//!
//! ```text
//! bff → domain
//!   └─→ shared
//! ```

pub mod activity;
pub mod calendar;
pub mod clock;
pub mod credentials;
pub mod error;

pub use error::DomainError;

//! # アクティビティ関連の値オブジェクト
//!
//! | 型 | ラップ対象 | 用途 |
//! |---|-----------|------|
//! | [`ActivityId`] | `i64` | リモートサービス上のアクティビティ識別子 |
//! | [`DownloadFormat`] | enum | アクティビティファイルのダウンロード形式 |
//! | [`ActivityPage`] | `start` + `limit` | 一覧取得の範囲 |
//!
//! ID は facade にとって不透明であり、検証せずそのままリモートへ渡す。

use derive_more::{Display, From};
use serde::{Deserialize, Serialize};

/// 一覧取得の件数（省略時）
pub const DEFAULT_ACTIVITY_LIMIT: u32 = 10;

/// アクティビティ ID
///
/// ```rust
/// use fitbridge_domain::activity::ActivityId;
///
/// let id = ActivityId::new(456);
/// assert_eq!(id.to_string(), "456");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, From)]
#[serde(transparent)]
pub struct ActivityId(i64);

impl ActivityId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

/// アクティビティファイルのダウンロード形式
///
/// HTTP 面で使うのは [`DownloadFormat::Fit`] のみ。
/// 表示形式（小文字）はそのままファイル拡張子とリモートのエクスポートパスに使う。
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum DownloadFormat {
    /// デバイス生成のオリジナル FIT ファイル
    Fit,
    Tcx,
    Gpx,
    Kml,
    Csv,
}

impl DownloadFormat {
    /// ファイル拡張子（ドットなし）
    pub fn file_extension(self) -> &'static str {
        self.into()
    }

    /// 添付ファイル名（`activity_<id>.<ext>`）
    pub fn attachment_filename(self, activity_id: ActivityId) -> String {
        format!("activity_{}.{}", activity_id, self.file_extension())
    }
}

/// アクティビティ一覧の取得範囲
///
/// `start` は先頭からのオフセット、`limit` は最大件数。
/// どちらも 0 以上であることを型で保証する。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityPage {
    pub start: u32,
    pub limit: u32,
}

impl ActivityPage {
    pub fn new(start: Option<u32>, limit: Option<u32>) -> Self {
        Self {
            start: start.unwrap_or(0),
            limit: limit.unwrap_or(DEFAULT_ACTIVITY_LIMIT),
        }
    }

    /// クエリ文字列の値から組み立てる
    ///
    /// 整数として読めない値（負数を含む）は省略と同じ扱いで既定値になる。
    pub fn from_query(start: Option<&str>, limit: Option<&str>) -> Self {
        let lenient = |value: Option<&str>| value.and_then(|v| v.trim().parse::<u32>().ok());
        Self::new(lenient(start), lenient(limit))
    }
}

impl Default for ActivityPage {
    fn default() -> Self {
        Self::new(None, None)
    }
}

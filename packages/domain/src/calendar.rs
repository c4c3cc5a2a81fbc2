//! # ヘルスサマリーの対象日
//!
//! 呼び出し元は `YYYY-MM-DD` 形式の文字列で日付を渡す。省略時は [`Clock`] が示す今日（UTC）。

use std::fmt;

use chrono::NaiveDate;
use serde::{Serialize, Serializer};

use crate::{DomainError, clock::Clock};

/// 日付の書式
const DATE_FORMAT: &str = "%Y-%m-%d";

/// カレンダー日付（値オブジェクト）
///
/// # 不変条件
///
/// - 実在する日付である
/// - 文字列表現は常にゼロ埋めの `YYYY-MM-DD`
///
/// ```rust
/// use fitbridge_domain::calendar::CalendarDate;
///
/// let date = CalendarDate::parse("2025-09-22").unwrap();
/// assert_eq!(date.to_string(), "2025-09-22");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// `YYYY-MM-DD` 形式の文字列からパースする
    ///
    /// chrono は月日の 1 桁表記も受け付けるため、長さで厳密な形式を強制する。
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        if value.len() != 10 {
            return Err(DomainError::InvalidCalendarDate(value.to_string()));
        }
        NaiveDate::parse_from_str(value, DATE_FORMAT)
            .map(Self)
            .map_err(|_| DomainError::InvalidCalendarDate(value.to_string()))
    }

    /// 時刻プロバイダから今日の日付を得る
    pub fn today(clock: &dyn Clock) -> Self {
        Self(clock.now().date_naive())
    }

    /// 省略可能な入力を解決する（省略時は今日）
    pub fn parse_or_today(value: Option<&str>, clock: &dyn Clock) -> Result<Self, DomainError> {
        match value {
            Some(v) => Self::parse(v),
            None => Ok(Self::today(clock)),
        }
    }

    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl Serialize for CalendarDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

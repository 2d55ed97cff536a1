//! Date ヘッダ値の解析
//!
//! HTTP の Date ヘッダは RFC 1123 形式（例: "Mon, 02 Jan 2006 15:04:05 MST"）。
//! chrono の RFC 2822 パーサがゾーン略称・数値オフセットの両方を受けるのでそれを使う。

use chrono::{DateTime, FixedOffset};

use super::FetchError;

/// Date ヘッダ値を解析する。失敗時は生の値を保持した DateParse を返す。
pub fn parse_date_header(raw: &str) -> Result<DateTime<FixedOffset>, FetchError> {
    DateTime::parse_from_rfc2822(raw).map_err(|_| FetchError::DateParse(raw.to_string()))
}

//! TimeFetcher: URL 1 件の照会（GET → Date 検証 → 解析 → ローカル変換）

use std::sync::Arc;

use chrono::{DateTime, Local};

use crate::domain::{parse_date_header, FetchError, TargetUrl};
use crate::ports::outbound::DateHeaderSource;

/// 1 URL の照会を行う。各呼び出しは独立・無状態。
pub struct TimeFetcher {
    source: Arc<dyn DateHeaderSource>,
}

impl TimeFetcher {
    pub fn new(source: Arc<dyn DateHeaderSource>) -> Self {
        Self { source }
    }

    /// GET を発行し、Date ヘッダをローカルタイムゾーンの時刻として返す。
    ///
    /// Date ヘッダがちょうど 1 個でないレスポンスはサーバ非準拠として扱い、
    /// 推測せずエラーにする。
    pub fn fetch_time(&self, url: &TargetUrl) -> Result<DateTime<Local>, FetchError> {
        let headers = self.source.date_headers(url)?;
        if headers.len() != 1 {
            return Err(FetchError::DateHeaderCount(headers.len()));
        }
        let parsed = parse_date_header(&headers[0])?;
        Ok(parsed.with_timezone(&Local))
    }
}

//! reqwest(blocking) で Date ヘッダを取得するアダプタ

use std::time::Duration;

use crate::domain::FetchError;
use crate::error::Error;
use crate::ports::outbound::DateHeaderSource;

/// reqwest::blocking による DateHeaderSource 実装
///
/// リダイレクトはクライアント既定に従う。timeout 未指定時も reqwest 既定（30 秒）が掛かる。
pub struct HttpDateSource {
    client: reqwest::blocking::Client,
}

impl HttpDateSource {
    pub fn new(timeout: Option<Duration>) -> Result<Self, Error> {
        let mut builder = reqwest::blocking::Client::builder();
        if let Some(t) = timeout {
            builder = builder.timeout(t);
        }
        let client = builder
            .build()
            .map_err(|e| Error::system(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { client })
    }
}

impl DateHeaderSource for HttpDateSource {
    fn date_headers(&self, url: &str) -> Result<Vec<String>, FetchError> {
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| FetchError::request(url, e.to_string()))?;
        // ヘッダ値は ASCII とは限らないので lossy に落とす（解析段で DateParse になる）
        let values = resp
            .headers()
            .get_all(reqwest::header::DATE)
            .iter()
            .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
            .collect();
        Ok(values)
    }
}

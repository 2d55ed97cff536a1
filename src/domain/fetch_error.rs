//! URL 照会 1 件分の失敗
//!
//! いずれも行単位で報告して次の URL へ進む。プロセスの終了コードには影響しない。

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// トランスポート層の失敗（接続拒否・DNS・TLS など）
    #[error("request to {url} failed: {detail}")]
    Request { url: String, detail: String },
    /// Date ヘッダがちょうど 1 個ではない（0 個も重複もサーバ非準拠として扱う）
    #[error("expected exactly one Date header, got {0}")]
    DateHeaderCount(usize),
    /// Date ヘッダが RFC 1123 形式として解析できない（生の値を保持する）
    #[error("cannot parse Date header {0:?}")]
    DateParse(String),
}

impl FetchError {
    pub fn request(url: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::Request {
            url: url.into(),
            detail: detail.into(),
        }
    }
}

//! HTTP から Date ヘッダを取得する Outbound ポート

use crate::domain::FetchError;

/// URL へ GET を発行し、レスポンスの Date ヘッダ値を全件返す。
///
/// 0 個・複数個の判定は usecase 側で行うため、実装は見えたものをそのまま返す。
/// トランスポート層の失敗は FetchError::Request にする。
pub trait DateHeaderSource: Send + Sync {
    fn date_headers(&self, url: &str) -> Result<Vec<String>, FetchError>;
}

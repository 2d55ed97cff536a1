//! Sink へ流す 1 URL 分の照会結果イベント

use chrono::{DateTime, Local};

use super::{FetchError, TargetUrl};

/// ProbeUseCase から ReportSink へ流すイベント
#[derive(Debug, Clone, PartialEq)]
pub enum ProbeEvent {
    /// 取得成功（ローカルタイムゾーンへ変換済み）
    Time {
        url: TargetUrl,
        local: DateTime<Local>,
    },
    /// 取得失敗（エラー詳細の表示は quiet で抑制され得る）
    Failed { url: TargetUrl, error: FetchError },
}

//! 照会結果を受け取る Sink Outbound ポート

use crate::domain::ProbeEvent;
use crate::error::Error;

/// ProbeEvent を受け取る Sink（1 URL = 1 イベント）
pub trait ReportSink: Send + Sync {
    /// 1 イベントを処理（表示等）
    fn on_event(&mut self, ev: &ProbeEvent) -> Result<(), Error>;
    /// 全 URL 処理後（オプションで flush 等）
    fn on_end(&mut self) -> Result<(), Error> {
        Ok(())
    }
}

/// 実行ごとに新しい Sink を生成するファクトリ
pub trait ReportSinkFactory: Send + Sync {
    fn create_sink(&self) -> Box<dyn ReportSink>;
}

//! ProbeUseCase: URL 列を順に照会し Sink へ流すドライバ

use std::sync::Arc;
use std::time::Instant;

use crate::domain::{ProbeEvent, TargetUrl};
use crate::error::Error;
use crate::ports::outbound::{now_iso8601, Log, LogLevel, LogRecord, ReportSinkFactory};
use crate::usecase::fetch::TimeFetcher;

/// URL 列の照会を実行する UseCase
///
/// 1 URL の失敗は他の URL に影響しない。行単位で Sink へ報告して続行する。
pub struct ProbeUseCase {
    fetcher: TimeFetcher,
    sink_factory: Arc<dyn ReportSinkFactory>,
    logger: Arc<dyn Log>,
}

impl ProbeUseCase {
    pub fn new(
        fetcher: TimeFetcher,
        sink_factory: Arc<dyn ReportSinkFactory>,
        logger: Arc<dyn Log>,
    ) -> Self {
        Self {
            fetcher,
            sink_factory,
            logger,
        }
    }

    /// URL を与えられた順に 1 件ずつ照会する。
    /// 照会の失敗は終了コードに影響しない（戻り値は常に 0）。
    pub fn run(&self, urls: &[TargetUrl]) -> Result<i32, Error> {
        let mut sink = self.sink_factory.create_sink();
        for url in urls {
            let started = Instant::now();
            let ev = match self.fetcher.fetch_time(url) {
                Ok(local) => ProbeEvent::Time {
                    url: url.clone(),
                    local,
                },
                Err(error) => ProbeEvent::Failed {
                    url: url.clone(),
                    error,
                },
            };
            self.log_probe(url, &ev, started.elapsed().as_millis() as u64);
            sink.on_event(&ev)?;
        }
        sink.on_end()?;
        Ok(0)
    }

    fn log_probe(&self, url: &TargetUrl, ev: &ProbeEvent, elapsed_ms: u64) {
        let (level, outcome) = match ev {
            ProbeEvent::Time { .. } => (LogLevel::Debug, "ok".to_string()),
            ProbeEvent::Failed { error, .. } => (LogLevel::Error, error.to_string()),
        };
        let _ = self.logger.log(&LogRecord {
            ts: now_iso8601(),
            level,
            message: "probe finished".to_string(),
            kind: Some("probe".to_string()),
            fields: {
                let mut m = std::collections::BTreeMap::new();
                m.insert("url".to_string(), serde_json::json!(url.as_ref()));
                m.insert("outcome".to_string(), serde_json::json!(outcome));
                m.insert("elapsed_ms".to_string(), serde_json::json!(elapsed_ms));
                Some(m)
            },
        });
    }
}

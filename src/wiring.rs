//! 配線: 標準アダプタで UseCase を組み立てる

use std::sync::Arc;
use std::time::Duration;

use crate::adapter::{
    color_enabled, FileJsonLog, HttpDateSource, NoopLog, StdReportSinkFactory, StderrJsonLog,
};
use crate::cli::Config;
use crate::error::Error;
use crate::ports::outbound::{Log, ReportSinkFactory};
use crate::usecase::{ProbeUseCase, TimeFetcher};

/// 組み立て済みアプリケーション
pub struct App {
    pub probe_use_case: ProbeUseCase,
    pub logger: Arc<dyn Log>,
}

/// HTIME_LOG があればファイルへ、-v なら stderr へ、それ以外は無出力
fn select_logger(verbose: bool) -> Arc<dyn Log> {
    if let Ok(path) = std::env::var("HTIME_LOG") {
        if !path.is_empty() {
            return Arc::new(FileJsonLog::new(path));
        }
    }
    if verbose {
        return Arc::new(StderrJsonLog);
    }
    Arc::new(NoopLog)
}

/// 配線: 標準アダプタで App を組み立てる
pub fn wire_htime(config: &Config) -> Result<App, Error> {
    let logger = select_logger(config.verbose);
    let timeout = config.timeout_secs.map(Duration::from_secs);
    let source = Arc::new(HttpDateSource::new(timeout)?);
    let fetcher = TimeFetcher::new(source);
    let sink_factory: Arc<dyn ReportSinkFactory> = Arc::new(StdReportSinkFactory::new(
        config.quiet,
        color_enabled(config.no_color),
    ));
    let probe_use_case = ProbeUseCase::new(fetcher, sink_factory, Arc::clone(&logger));
    Ok(App {
        probe_use_case,
        logger,
    })
}

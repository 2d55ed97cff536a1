//! Outbound ポート: アプリが外界（HTTP・端末出力・ログ）を使うための trait

pub mod color_picker;
pub mod date_source;
pub mod log;
pub mod report_sink;

pub use color_picker::ColorPicker;
pub use date_source::DateHeaderSource;
pub use log::{now_iso8601, Log, LogLevel, LogRecord};
pub use report_sink::{ReportSink, ReportSinkFactory};

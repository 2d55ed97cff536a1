//! Outbound ポートの標準実装

pub(crate) mod ansi;
pub(crate) mod clock_picker;
pub(crate) mod http_date_source;
pub(crate) mod json_log;
pub(crate) mod report_printer;
pub(crate) mod sink_factory;

pub(crate) use ansi::color_enabled;
pub(crate) use http_date_source::HttpDateSource;
pub(crate) use json_log::{FileJsonLog, NoopLog, StderrJsonLog};
pub(crate) use sink_factory::StdReportSinkFactory;

//! 実行設定から stdout 向け ReportPrinter を組み立てるファクトリ

use std::io;

use crate::adapter::ansi::AnsiStyle;
use crate::adapter::clock_picker::ClockSeededPicker;
use crate::adapter::report_printer::ReportPrinter;
use crate::ports::outbound::{ReportSink, ReportSinkFactory};

/// stdout へ書く ReportPrinter を生成する標準ファクトリ
pub struct StdReportSinkFactory {
    quiet: bool,
    color: bool,
}

impl StdReportSinkFactory {
    pub fn new(quiet: bool, color: bool) -> Self {
        Self { quiet, color }
    }
}

impl ReportSinkFactory for StdReportSinkFactory {
    fn create_sink(&self) -> Box<dyn ReportSink> {
        Box::new(ReportPrinter::new(
            io::stdout(),
            self.quiet,
            AnsiStyle::new(self.color),
            Box::new(ClockSeededPicker::new()),
        ))
    }
}

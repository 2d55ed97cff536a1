//! 照会結果を `<url>: <result>` 形式で書き出す Sink 実装

use std::io::Write;

use crate::adapter::ansi::AnsiStyle;
use crate::domain::ProbeEvent;
use crate::error::Error;
use crate::ports::outbound::{ColorPicker, ReportSink};

/// 書き込み先 W へ 1 URL = 1 行で出力する ReportSink 実装
///
/// quiet 時もエラー行は URL と区切りを出し、改行で終える（N URL = N 行を保つ）。
pub struct ReportPrinter<W: Write + Send + Sync> {
    out: W,
    quiet: bool,
    style: AnsiStyle,
    picker: Box<dyn ColorPicker>,
}

impl<W: Write + Send + Sync> ReportPrinter<W> {
    pub fn new(out: W, quiet: bool, style: AnsiStyle, picker: Box<dyn ColorPicker>) -> Self {
        Self {
            out,
            quiet,
            style,
            picker,
        }
    }

    fn write_url(&mut self, url: &str) -> Result<(), Error> {
        let idx = self.picker.pick(self.style.palette_len());
        write!(self.out, "{}: ", self.style.url(idx, url))
            .map_err(|e| Error::io_msg(format!("Failed to write report: {}", e)))
    }
}

impl<W: Write + Send + Sync> ReportSink for ReportPrinter<W> {
    fn on_event(&mut self, ev: &ProbeEvent) -> Result<(), Error> {
        match ev {
            ProbeEvent::Time { url, local } => {
                self.write_url(url)?;
                writeln!(self.out, "{}", local.format("%H:%M:%S"))
                    .map_err(|e| Error::io_msg(format!("Failed to write report: {}", e)))?;
            }
            ProbeEvent::Failed { url, error } => {
                self.write_url(url)?;
                if self.quiet {
                    writeln!(self.out)
                        .map_err(|e| Error::io_msg(format!("Failed to write report: {}", e)))?;
                } else {
                    writeln!(self.out, "{}", self.style.error(&error.to_string()))
                        .map_err(|e| Error::io_msg(format!("Failed to write report: {}", e)))?;
                }
            }
        }
        Ok(())
    }

    fn on_end(&mut self) -> Result<(), Error> {
        self.out
            .flush()
            .map_err(|e| Error::io_msg(format!("Failed to flush report: {}", e)))
    }
}

//! JSONL ロガーアダプタ（ファイル追記 / stderr / 無出力）

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::ports::outbound::{Log, LogRecord};

/// ファイルへ JSONL を追記する Log 実装（HTIME_LOG で選択）
///
/// 親ディレクトリが無ければ書き込み時に作成する。
pub struct FileJsonLog {
    path: PathBuf,
}

impl FileJsonLog {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl Log for FileJsonLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let line = serde_json::to_string(record).map_err(|e| Error::Json(e.to_string()))?;
        let mut f = OpenOptions::new().create(true).append(true).open(&self.path)?;
        f.write_all(line.as_bytes())?;
        f.write_all(b"\n")?;
        f.flush()?;
        Ok(())
    }
}

/// stderr へ JSONL を書き出す Log 実装（-v で選択）
#[derive(Debug, Clone, Default)]
pub struct StderrJsonLog;

impl Log for StderrJsonLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        let line = serde_json::to_string(record).map_err(|e| Error::Json(e.to_string()))?;
        eprintln!("{}", line);
        Ok(())
    }
}

/// 何も出力しない Log 実装（既定・テスト用）
#[derive(Debug, Clone, Default)]
pub struct NoopLog;

impl Log for NoopLog {
    fn log(&self, _record: &LogRecord) -> Result<(), Error> {
        Ok(())
    }
}

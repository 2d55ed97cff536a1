//! Inbound ポート: ドライバ（CLI）がアプリを呼び出すインターフェース

use crate::cli::Config;
use crate::error::Error;

/// main/cli はこの trait を実装した型の run を呼び出す。
pub trait UseCaseRunner: Send + Sync {
    fn run(&self, config: Config) -> Result<i32, Error>;
}

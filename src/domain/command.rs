//! CLI の Config から変換される実行コマンド

use super::TargetUrl;

#[derive(Debug, Clone, PartialEq)]
pub enum HtimeCommand {
    Help,
    /// URL 列を与えられた順に照会する
    Probe { urls: Vec<TargetUrl> },
}

//! エラーハンドリング
//!
//! プロセス終了コードは sysexits 準拠（64: usage, 70: software, 74: io）。
//! URL 照会 1 件分の失敗は domain::FetchError であり、この型には乗せない。

/// プロセスを終了させるエラー型（メッセージ + 終了コード）
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// コマンドライン引数の不正（EX_USAGE）
    #[error("{0}")]
    InvalidArgument(String),
    /// 内部エラー（EX_SOFTWARE）
    #[error("{0}")]
    System(String),
    /// JSON シリアライズ失敗（EX_SOFTWARE）
    #[error("{0}")]
    Json(String),
    /// I/O 失敗（EX_IOERR）
    #[error("{0}")]
    Io(String),
}

impl Error {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn system(msg: impl Into<String>) -> Self {
        Self::System(msg.into())
    }

    pub fn io_msg(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    /// sysexits 準拠の終了コード
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::InvalidArgument(_) => 64,
            Error::System(_) | Error::Json(_) => 70,
            Error::Io(_) => 74,
        }
    }

    /// usage 表示を伴うエラーか
    pub fn is_usage(&self) -> bool {
        matches!(self, Error::InvalidArgument(_))
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e.to_string())
    }
}

use thiserror::Error;

/// 復元処理のエラー
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// 入力列が空だった
    #[error("invalid input: the sequence must not be empty")]
    InvalidInput,
}

pub type Result<T> = std::result::Result<T, Error>;

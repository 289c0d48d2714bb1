//! 重なり付きの二重送信で壊れた列から元のメッセージを復元する

pub mod border;
pub mod error;
pub mod z;

pub use border::{recover, recover_str, shortest_split, Recovery};
pub use error::{Error, Result};

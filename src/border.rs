use super::error::{Error, Result};
use super::z::z;

/// 復元の結果
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Recovery<'a, T> {
    /// 列は`message`を重ねて2回送ったものとして説明できる
    Found {
        /// 元の列の中での`message`の長さ
        split: usize,
        /// 復元されたメッセージ. 入力列の接頭辞を借用する
        message: &'a [T],
    },
    /// そのような分割は存在しない
    NotFound,
}

impl<'a, T> Recovery<'a, T> {
    /// 復元に成功したかどうか
    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }

    /// 復元されたメッセージを返す
    #[must_use]
    pub fn message(&self) -> Option<&'a [T]> {
        match *self {
            Self::Found { message, .. } => Some(message),
            Self::NotFound => None,
        }
    }

    /// 分割位置を返す
    #[must_use]
    pub fn split(&self) -> Option<usize> {
        match *self {
            Self::Found { split, .. } => Some(split),
            Self::NotFound => None,
        }
    }
}

impl<T: Clone> Recovery<'_, T> {
    /// メッセージを周期として長さ`len`の列を作り直す
    ///
    /// `len <= 2 * split`なら, メッセージの後ろに長さ`len - split`の接頭辞を繋げたものと同じ.
    /// `NotFound`の場合と`len < split`の場合は`None`を返す.
    ///
    /// # Time complexity
    ///
    /// - *O*(`len`)
    #[must_use]
    pub fn reconstruct(&self, len: usize) -> Option<Vec<T>> {
        let message = self.message()?;
        if len < message.len() {
            return None;
        }
        Some(message.iter().cycle().take(len).cloned().collect())
    }
}

/// `z[i] > 0`かつ`z[i] + i == z.len()`を満たす最小の`i` (`1 <= i < z.len()`) を返す
///
/// # Time complexity
///
/// - *O*(*N*)
#[must_use]
pub fn shortest_split(z: &[usize]) -> Option<usize> {
    let n = z.len();
    (1..n).find(|&i| z[i] > 0 && z[i] + i == n)
}

/// 列を重なり付きで2回繰り返したものと見做せる最短のメッセージを探す
///
/// 空の列には`Error::InvalidInput`を返す.
///
/// # Time complexity
///
/// - *O*(*N*)
pub fn recover<T: Eq>(seq: &[T]) -> Result<Recovery<'_, T>> {
    if seq.is_empty() {
        return Err(Error::InvalidInput);
    }
    let recovery = match shortest_split(&z(seq)) {
        Some(split) => Recovery::Found {
            split,
            message: &seq[..split],
        },
        None => Recovery::NotFound,
    };
    tracing::trace!(len = seq.len(), split = ?recovery.split(), "border scan finished");
    Ok(recovery)
}

/// 文字列版の[`recover`]
///
/// バイト列として処理する. `s[i..]`が`s`の接頭辞と一致するなら`s[i]`は先頭バイトなので,
/// 分割位置は常に文字境界になる.
///
/// # Time complexity
///
/// - *O*(`s.len()`)
pub fn recover_str(s: &str) -> Result<Option<&str>> {
    Ok(recover(s.as_bytes())?.split().map(|split| &s[..split]))
}

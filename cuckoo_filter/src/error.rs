//! Error definitions.
//! 错误定义

use thiserror::Error;

/// Filter errors.
/// 过滤器错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
  /// Decode input has no bytes.
  /// 解码输入为空
  #[error("bytes can not be empty / 字节不能为空")]
  Empty,

  /// Decode input length is not a whole number of buckets.
  /// 解码输入长度不是整数个桶
  #[error("expected bytes to be multiple of 4, got {len} / 字节长度须为 4 的倍数，实际 {len}")]
  Misaligned {
    /// Input length in bytes.
    /// 输入字节长度
    len: usize,
  },

  /// The process-wide hasher was installed before.
  /// 进程级哈希器已安装
  #[error("default hasher already set / 默认哈希器已设置")]
  HasherAlreadySet,
}

/// Result with [`Error`].
/// 使用 [`Error`] 的 Result
pub type Result<T> = std::result::Result<T, Error>;

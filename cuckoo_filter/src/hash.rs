//! Pluggable 64-bit key hashing.
//! 可插拔的 64 位键哈希

use std::sync::OnceLock;

use gxhash::gxhash64;

use crate::{
  consts::DEFAULT_SEED,
  error::{Error, Result},
};

/// Hash a key into 64 bits.
/// 将键哈希为 64 位
///
/// Closures `Fn(&[u8]) -> u64` implement it too, handy for deterministic tests.
/// 闭包 `Fn(&[u8]) -> u64` 同样实现了该 trait，便于确定性测试
pub trait Hash64 {
  /// 64-bit hash of `data`.
  /// `data` 的 64 位哈希
  fn hash64(&self, data: &[u8]) -> u64;
}

impl<F: Fn(&[u8]) -> u64> Hash64 for F {
  #[inline(always)]
  fn hash64(&self, data: &[u8]) -> u64 {
    self(data)
  }
}

/// Seeded gxhash.
/// 带种子的 gxhash
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GxHash {
  /// gxhash seed.
  /// gxhash 种子
  pub seed: i64,
}

impl Default for GxHash {
  fn default() -> Self {
    Self { seed: DEFAULT_SEED }
  }
}

impl Hash64 for GxHash {
  #[inline(always)]
  fn hash64(&self, data: &[u8]) -> u64 {
    gxhash64(data, self.seed)
  }
}

static OVERRIDE: OnceLock<Box<dyn Hash64 + Send + Sync>> = OnceLock::new();

/// Install the process-wide hasher behind [`DefaultHasher`].
/// 安装 [`DefaultHasher`] 使用的进程级哈希器
///
/// Can be called once per process. Filters already built with [`DefaultHasher`]
/// switch to it as well, so install it before inserting anything.
/// 每个进程只能调用一次。已用 [`DefaultHasher`] 构建的过滤器也会切换，请在插入前安装
pub fn set_default_hasher<H: Hash64 + Send + Sync + 'static>(hasher: H) -> Result<()> {
  OVERRIDE
    .set(Box::new(hasher))
    .map_err(|_| Error::HasherAlreadySet)
}

/// Process-wide hasher: the installed override, else [`GxHash`] with the default seed.
/// 进程级哈希器：已安装的覆盖实现，否则为默认种子的 [`GxHash`]
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultHasher;

impl Hash64 for DefaultHasher {
  #[inline]
  fn hash64(&self, data: &[u8]) -> u64 {
    match OVERRIDE.get() {
      Some(hasher) => hasher.hash64(data),
      None => gxhash64(data, DEFAULT_SEED),
    }
  }
}

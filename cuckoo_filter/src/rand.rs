//! Random choices made during eviction.
//! 踢出过程中的随机选择

use crate::consts::BUCKET_SIZE;

/// Source of the two random choices of an eviction chain.
/// 踢出链中两种随机选择的来源
///
/// Implement it with a scripted sequence to replay a chain exactly.
/// 使用预设序列实现即可精确重放踢出链
pub trait Rand {
  /// Start from the primary bucket (`true`) or the alternate one.
  /// 从主桶（`true`）或备用桶开始
  fn coin(&mut self) -> bool;

  /// Slot to evict, in `0..BUCKET_SIZE`.
  /// 要踢出的槽位，范围 `0..BUCKET_SIZE`
  fn slot(&mut self) -> usize;
}

impl Rand for fastrand::Rng {
  #[inline]
  fn coin(&mut self) -> bool {
    self.bool()
  }

  #[inline]
  fn slot(&mut self) -> usize {
    self.usize(0..BUCKET_SIZE)
  }
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn seeded_is_reproducible() {
    let mut a = fastrand::Rng::with_seed(42);
    let mut b = fastrand::Rng::with_seed(42);
    for _ in 0..100 {
      assert_eq!(a.coin(), b.coin());
      let s = a.slot();
      assert!(s < BUCKET_SIZE);
      assert_eq!(s, b.slot());
    }
  }
}

//! Fixed four-slot fingerprint bucket.
//! 固定四槽的指纹桶

use crate::consts::{BUCKET_SIZE, NULL_FP};

/// Four inline fingerprint slots, `0` marks an empty slot.
/// 四个内联指纹槽，`0` 表示空槽
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bucket([u8; BUCKET_SIZE]);

impl Bucket {
  /// Bucket holding the given slots.
  /// 由给定槽构造桶
  #[inline]
  pub const fn from_bytes(slots: [u8; BUCKET_SIZE]) -> Self {
    Bucket(slots)
  }

  /// Raw slots, `0` for empty.
  /// 原始槽，`0` 为空
  #[inline]
  pub const fn as_bytes(&self) -> &[u8; BUCKET_SIZE] {
    &self.0
  }

  /// Write `fp` into the first empty slot.
  /// 将 `fp` 写入第一个空槽
  #[inline]
  pub fn insert(&mut self, fp: u8) -> bool {
    debug_assert_ne!(fp, NULL_FP);
    for slot in &mut self.0 {
      if *slot == NULL_FP {
        *slot = fp;
        return true;
      }
    }
    false
  }

  /// Clear the first slot holding `fp`.
  /// 清除第一个等于 `fp` 的槽
  #[inline]
  pub fn delete(&mut self, fp: u8) -> bool {
    match self.index_of(fp) {
      Some(i) => {
        self.0[i] = NULL_FP;
        true
      }
      None => false,
    }
  }

  /// First slot holding `fp`.
  /// 第一个等于 `fp` 的槽位
  #[inline]
  pub fn index_of(&self, fp: u8) -> Option<usize> {
    self.0.iter().position(|&slot| slot == fp)
  }

  /// Check if any slot holds `fp`.
  /// 检查是否有槽等于 `fp`
  #[inline]
  pub fn contains(&self, fp: u8) -> bool {
    // All four slots compared without early exit
    // 四个槽全部比较，不提前返回
    (self.0[0] == fp) | (self.0[1] == fp) | (self.0[2] == fp) | (self.0[3] == fp)
  }

  /// Put `fp` into `slot`, returning the previous resident.
  /// 将 `fp` 放入 `slot`，返回原有指纹
  ///
  /// Panics if `slot >= BUCKET_SIZE`.
  /// `slot >= BUCKET_SIZE` 时 panic
  #[inline]
  pub fn swap(&mut self, slot: usize, fp: u8) -> u8 {
    std::mem::replace(&mut self.0[slot], fp)
  }

  /// Clear all slots.
  /// 清空所有槽
  #[inline]
  pub fn reset(&mut self) {
    self.0 = [NULL_FP; BUCKET_SIZE];
  }

  /// Occupied slots.
  /// 已占用槽数
  #[inline]
  pub fn len(&self) -> usize {
    self.0.iter().filter(|&&slot| slot != NULL_FP).count()
  }

  /// Returns true if every slot is empty.
  /// 所有槽为空时返回 true
  #[inline]
  pub fn is_empty(&self) -> bool {
    self.0 == [NULL_FP; BUCKET_SIZE]
  }
}

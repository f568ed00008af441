//! Core cuckoo filter implementation.
//! 核心布谷鸟过滤器实现

use crate::{
  bucket::Bucket,
  builder::FilterBuilder,
  consts::BUCKET_SIZE,
  error::Result,
  hash::{DefaultHasher, Hash64},
  index::{alt_index, index_and_fp},
  rand::Rand,
};

/// Cuckoo filter over byte keys, four 8-bit fingerprints per bucket.
/// 以字节为键的布谷鸟过滤器，每桶四个 8 位指纹
///
/// A failed [`insert`](Self::insert) may still have moved fingerprints to their
/// other bucket and dropped the last one carried. Every remaining fingerprint stays
/// findable and [`count`](Self::count) stays exact, so treat it as a sign the
/// filter is too small.
/// 插入失败时可能已把指纹移到另一个桶并丢弃最后携带的指纹。剩余指纹仍可查到，
/// 计数仍准确，应视为过滤器容量不足
///
/// Not synchronized, wrap it in a lock to share across threads.
/// 无内部同步，跨线程共享请加锁
#[derive(Debug, Clone)]
pub struct Filter<H = DefaultHasher, R = fastrand::Rng> {
  buckets: Vec<Bucket>,
  count: usize,
  bucket_pow: u32,
  max_kicks: usize,
  hasher: H,
  rng: R,
}

impl Filter {
  /// Create filter for about `capacity` items with default settings.
  /// 使用默认设置创建约可容纳 `capacity` 个元素的过滤器
  ///
  /// ```
  /// use cuckoo_filter::Filter;
  ///
  /// let mut filter = Filter::new(1000);
  /// assert_eq!(filter.bucket_count(), 256);
  /// assert!(filter.insert(b"hello"));
  /// assert!(filter.lookup(b"hello"));
  /// assert!(filter.delete(b"hello"));
  /// assert!(!filter.lookup(b"hello"));
  /// ```
  pub fn new(capacity: usize) -> Self {
    FilterBuilder::new().capacity(capacity).finish()
  }

  /// Rebuild filter from [`encode`](Self::encode) output with default settings.
  /// 使用默认设置从 [`encode`](Self::encode) 输出重建过滤器
  pub fn decode(bytes: &[u8]) -> Result<Self> {
    FilterBuilder::new().decode(bytes)
  }
}

impl<H: Hash64, R: Rand> Filter<H, R> {
  pub(crate) fn from_parts(buckets: Vec<Bucket>, max_kicks: usize, hasher: H, rng: R) -> Self {
    debug_assert!(!buckets.is_empty());
    let count = buckets.iter().map(Bucket::len).sum();
    let bucket_pow = buckets.len().trailing_zeros();
    Filter {
      buckets,
      count,
      bucket_pow,
      max_kicks,
      hasher,
      rng,
    }
  }

  /// Returns stored fingerprint count.
  /// 返回已存储的指纹数量
  #[inline]
  pub fn count(&self) -> usize {
    self.count
  }

  /// Returns true if no fingerprint is stored.
  /// 未存储任何指纹时返回 true
  #[inline]
  pub fn is_empty(&self) -> bool {
    self.count == 0
  }

  /// Returns number of buckets, a power of two for built filters.
  /// 返回桶数量，构建出的过滤器总为 2 的幂
  #[inline]
  pub fn bucket_count(&self) -> usize {
    self.buckets.len()
  }

  /// Returns total fingerprint slots.
  /// 返回指纹槽总数
  #[inline]
  pub fn capacity(&self) -> usize {
    self.buckets.len() * BUCKET_SIZE
  }

  /// Returns occupied share of the slots.
  /// 返回已占用槽的比例
  #[inline]
  pub fn load_factor(&self) -> f64 {
    self.count as f64 / self.capacity() as f64
  }

  /// Returns eviction rounds allowed per insert.
  /// 返回每次插入允许的踢出轮数
  #[inline]
  pub fn max_kicks(&self) -> usize {
    self.max_kicks
  }

  /// Returns the key hasher.
  /// 返回键哈希器
  #[inline]
  pub fn hasher(&self) -> &H {
    &self.hasher
  }

  #[inline(always)]
  fn index_and_fp(&self, data: &[u8]) -> (usize, u8) {
    index_and_fp(self.hasher.hash64(data), self.bucket_pow)
  }

  /// Check if item may exist.
  /// 检查元素是否可能存在
  #[inline]
  pub fn lookup(&self, data: &[u8]) -> bool {
    let (i1, fp) = self.index_and_fp(data);
    // Most hits sit in the primary bucket, alt index only on a miss
    // 多数命中在主桶，未命中时才计算备用索引
    if self.buckets[i1].contains(fp) {
      return true;
    }
    let i2 = alt_index(fp, i1, self.bucket_pow);
    self.buckets[i2].contains(fp)
  }

  /// Insert item, false when no slot was found within the kick budget.
  /// 插入元素，踢出次数用尽仍无空槽时返回 false
  #[inline]
  pub fn insert(&mut self, data: &[u8]) -> bool {
    let (i1, fp) = self.index_and_fp(data);
    if self.insert_at(i1, fp) {
      return true;
    }
    let i2 = alt_index(fp, i1, self.bucket_pow);
    if self.insert_at(i2, fp) {
      return true;
    }
    let i = if self.rng.coin() { i1 } else { i2 };
    self.kick(i, fp)
  }

  /// Insert item unless it already looks present.
  /// 元素看似不存在时才插入
  ///
  /// Two keys sharing bucket and fingerprint look identical, so the second one is
  /// rejected too.
  /// 桶与指纹都相同的两个键无法区分，第二个键同样会被拒绝
  #[inline]
  pub fn insert_unique(&mut self, data: &[u8]) -> bool {
    if self.lookup(data) {
      return false;
    }
    self.insert(data)
  }

  /// Remove one fingerprint matching the item.
  /// 移除一个与元素匹配的指纹
  #[inline]
  pub fn delete(&mut self, data: &[u8]) -> bool {
    let (i1, fp) = self.index_and_fp(data);
    if self.delete_at(i1, fp) {
      return true;
    }
    let i2 = alt_index(fp, i1, self.bucket_pow);
    self.delete_at(i2, fp)
  }

  /// Clear every bucket.
  /// 清空所有桶
  pub fn reset(&mut self) {
    for bucket in &mut self.buckets {
      bucket.reset();
    }
    self.count = 0;
  }

  /// Flatten buckets into bytes, one per slot, `bucket_count() * 4` long.
  /// 将桶展开为字节，每槽一字节，长度为 `bucket_count() * 4`
  pub fn encode(&self) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(self.capacity());
    for bucket in &self.buckets {
      bytes.extend_from_slice(bucket.as_bytes());
    }
    bytes
  }

  #[inline]
  fn insert_at(&mut self, i: usize, fp: u8) -> bool {
    if self.buckets[i].insert(fp) {
      self.count += 1;
      return true;
    }
    false
  }

  #[inline]
  fn delete_at(&mut self, i: usize, fp: u8) -> bool {
    if self.buckets[i].delete(fp) {
      self.count = self.count.saturating_sub(1);
      return true;
    }
    false
  }

  /// Displace random residents until the carried fingerprint lands.
  /// 随机踢出常驻指纹，直到携带的指纹落位
  fn kick(&mut self, mut i: usize, mut fp: u8) -> bool {
    for _ in 0..self.max_kicks {
      // Custom sources may return any value, fold it into the bucket
      // 自定义随机源可能返回任意值，折叠到桶内
      let slot = self.rng.slot() % BUCKET_SIZE;
      fp = self.buckets[i].swap(slot, fp);
      i = alt_index(fp, i, self.bucket_pow);
      if self.insert_at(i, fp) {
        return true;
      }
    }
    log::debug!(
      "cuckoo kick exhausted after {} rounds, count {} / {}",
      self.max_kicks,
      self.count,
      self.capacity()
    );
    false
  }
}

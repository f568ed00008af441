//! Filter configuration.
//! 过滤器配置

use crate::{
  bucket::Bucket,
  consts::{BUCKET_SIZE, MAX_KICKS},
  error::{Error, Result},
  filter::Filter,
  hash::{DefaultHasher, Hash64},
  index::next_pow2,
  rand::Rand,
};

/// Builder for [`Filter`].
/// [`Filter`] 构建器
///
/// ```
/// use cuckoo_filter::{FilterBuilder, GxHash};
///
/// let mut filter = FilterBuilder::new()
///   .capacity(1000)
///   .hasher(GxHash { seed: 7 })
///   .seed(42)
///   .finish();
/// assert!(filter.insert(b"foo"));
/// assert!(filter.lookup(b"foo"));
/// ```
#[derive(Debug, Clone)]
pub struct FilterBuilder<H = DefaultHasher, R = fastrand::Rng> {
  capacity: usize,
  max_kicks: usize,
  hasher: H,
  rng: R,
}

impl FilterBuilder {
  /// Create new builder with defaults.
  /// 使用默认值创建新构建器
  pub fn new() -> Self {
    FilterBuilder {
      capacity: 1_000_000,
      max_kicks: MAX_KICKS,
      hasher: DefaultHasher,
      rng: fastrand::Rng::new(),
    }
  }
}

impl Default for FilterBuilder {
  fn default() -> Self {
    Self::new()
  }
}

impl<H: Hash64, R: Rand> FilterBuilder<H, R> {
  /// Set capacity hint, rounded up to a power of two.
  /// 设置容量提示，向上取整为 2 的幂
  #[must_use]
  pub fn capacity(mut self, capacity: usize) -> Self {
    self.capacity = capacity;
    self
  }

  /// Set eviction rounds before insert gives up.
  /// 设置插入放弃前的踢出轮数
  #[must_use]
  pub fn max_kicks(mut self, kicks: usize) -> Self {
    self.max_kicks = kicks;
    self
  }

  /// Set custom hasher.
  /// 设置自定义哈希器
  pub fn hasher<T: Hash64>(self, hasher: T) -> FilterBuilder<T, R> {
    FilterBuilder {
      capacity: self.capacity,
      max_kicks: self.max_kicks,
      hasher,
      rng: self.rng,
    }
  }

  /// Set custom eviction random source.
  /// 设置自定义踢出随机源
  pub fn rng<T: Rand>(self, rng: T) -> FilterBuilder<H, T> {
    FilterBuilder {
      capacity: self.capacity,
      max_kicks: self.max_kicks,
      hasher: self.hasher,
      rng,
    }
  }

  /// Seeded `fastrand` source, for reproducible eviction chains.
  /// 带种子的 `fastrand` 随机源，使踢出链可复现
  pub fn seed(self, seed: u64) -> FilterBuilder<H, fastrand::Rng> {
    self.rng(fastrand::Rng::with_seed(seed))
  }

  /// Build an empty filter.
  /// 构建空过滤器
  pub fn finish(self) -> Filter<H, R> {
    let len = (next_pow2(self.capacity) / BUCKET_SIZE).max(1);
    Filter::from_parts(vec![Bucket::default(); len], self.max_kicks, self.hasher, self.rng)
  }

  /// Rebuild a filter from [`Filter::encode`] output; the capacity hint is ignored.
  /// 从 [`Filter::encode`] 输出重建过滤器，忽略容量提示
  pub fn decode(self, bytes: &[u8]) -> Result<Filter<H, R>> {
    if bytes.is_empty() {
      return Err(Error::Empty);
    }
    if bytes.len() % BUCKET_SIZE != 0 {
      return Err(Error::Misaligned { len: bytes.len() });
    }
    let buckets: Vec<Bucket> = bytes
      .chunks_exact(BUCKET_SIZE)
      .map(|chunk| {
        let mut slots = [0u8; BUCKET_SIZE];
        slots.copy_from_slice(chunk);
        Bucket::from_bytes(slots)
      })
      .collect();
    if !buckets.len().is_power_of_two() {
      log::warn!(
        "decoded {} buckets, not a power of two, only the low {} are addressable",
        buckets.len(),
        1usize << buckets.len().trailing_zeros()
      );
    }
    Ok(Filter::from_parts(buckets, self.max_kicks, self.hasher, self.rng))
  }
}

//! Bucket index and fingerprint derivation.
//! 桶索引与指纹计算

use gxhash::gxhash64;

use crate::consts::DEFAULT_SEED;

const fn build_masks() -> [u64; 65] {
  let mut masks = [0u64; 65];
  let mut i = 0;
  while i < 64 {
    masks[i] = (1u64 << i) - 1;
    i += 1;
  }
  masks[64] = u64::MAX;
  masks
}

/// `MASKS[p] == (1 << p) - 1`
pub const MASKS: [u64; 65] = build_masks();

/// Per-fingerprint hash, XORed into an index to reach the partner bucket.
/// 每个指纹的哈希值，与索引异或得到另一个桶
#[static_init::dynamic]
static ALT_HASH: [u64; 256] = {
  let mut table = [0u64; 256];
  for (fp, slot) in table.iter_mut().enumerate() {
    *slot = gxhash64(&[fp as u8], DEFAULT_SEED);
  }
  table
};

/// Index mask for `bucket_pow` bits.
/// `bucket_pow` 位的索引掩码
#[inline(always)]
pub fn mask(bucket_pow: u32) -> usize {
  MASKS[bucket_pow as usize] as usize
}

/// Fingerprint in [1, 255] from the low part of the hash.
/// 由哈希计算 [1, 255] 内的指纹
#[inline(always)]
pub fn fingerprint(hash: u64) -> u8 {
  (hash % 255 + 1) as u8
}

/// Primary index from the high 32 bits, fingerprint from the full hash.
/// 高 32 位计算主索引，完整哈希计算指纹
#[inline]
pub fn index_and_fp(hash: u64, bucket_pow: u32) -> (usize, u8) {
  let i = (hash >> 32) as usize & mask(bucket_pow);
  (i, fingerprint(hash))
}

/// Partner bucket of `fp` seen from bucket `i`. Self-inverse for a fixed `fp`.
/// 指纹 `fp` 在桶 `i` 之外的另一个桶，对固定 `fp` 自反
#[inline]
pub fn alt_index(fp: u8, i: usize, bucket_pow: u32) -> usize {
  let mask = mask(bucket_pow);
  (i & mask) ^ (ALT_HASH[fp as usize] as usize & mask)
}

/// Smallest power of two >= `n`, saturating at the top bit.
/// 大于等于 `n` 的最小 2 的幂，溢出时取最高位
#[inline]
pub fn next_pow2(n: usize) -> usize {
  n.checked_next_power_of_two()
    .unwrap_or(1 << (usize::BITS - 1))
}

//! Property-based tests for Filter
//! Filter 属性测试

use cuckoo_filter::{Filter, FilterBuilder, alt_index, fingerprint, index_and_fp};
use proptest::prelude::*;

/// Operation on Filter
/// Filter 操作
#[derive(Debug, Clone)]
enum Op {
  Insert(u16),
  InsertUnique(u16),
  Delete(u16),
  Reset,
}

fn op() -> impl Strategy<Value = Op> {
  prop_oneof![
    6 => any::<u16>().prop_map(Op::Insert),
    2 => any::<u16>().prop_map(Op::InsertUnique),
    3 => any::<u16>().prop_map(Op::Delete),
    1 => Just(Op::Reset),
  ]
}

fn slots(bytes: &[u8]) -> usize {
  bytes.iter().filter(|&&b| b != 0).count()
}

proptest! {
  #![proptest_config(ProptestConfig::with_cases(64))]

  /// Alternate index is self-inverse / 备用索引自反
  #[test]
  fn prop_alt_index_symmetric(fp in 1..=255u8, i in any::<usize>(), pow in 0u32..=32) {
    let i = i & ((1usize << pow) - 1);
    let alt = alt_index(fp, i, pow);
    prop_assert!(alt < 1usize << pow);
    prop_assert_eq!(alt_index(fp, alt, pow), i);
  }

  /// Fingerprint never collides with the empty marker / 指纹不会等于空槽标记
  #[test]
  fn prop_fingerprint_in_range(hash in any::<u64>(), pow in 0u32..=32) {
    prop_assert_ne!(fingerprint(hash), 0);
    let (i, fp) = index_and_fp(hash, pow);
    prop_assert_eq!(fp, fingerprint(hash));
    prop_assert!(i < 1usize << pow);
  }

  /// Count equals occupied slots after any sequence / 任意操作序列后计数等于已占用槽数
  #[test]
  fn prop_count_matches_slots(
    ops in prop::collection::vec(op(), 1..300),
    seed in any::<u64>(),
  ) {
    let mut filter = FilterBuilder::new().capacity(64).seed(seed).finish();
    for op in ops {
      match op {
        Op::Insert(k) => {
          filter.insert(&k.to_le_bytes());
        }
        Op::InsertUnique(k) => {
          filter.insert_unique(&k.to_le_bytes());
        }
        Op::Delete(k) => {
          filter.delete(&k.to_le_bytes());
        }
        Op::Reset => filter.reset(),
      }
      prop_assert_eq!(filter.count(), slots(&filter.encode()));
    }
  }

  /// Decode of encode answers like the encoded filter / 编码再解码后的查询结果与原过滤器一致
  #[test]
  fn prop_encode_decode(
    keys in prop::collection::vec(any::<u32>(), 0..400),
    probes in prop::collection::vec(any::<u32>(), 0..200),
  ) {
    let mut filter = Filter::new(512);
    for k in &keys {
      filter.insert(&k.to_le_bytes());
    }
    let decoded = Filter::decode(&filter.encode()).unwrap();
    prop_assert_eq!(decoded.count(), filter.count());
    for k in keys.iter().chain(&probes) {
      let k = k.to_le_bytes();
      prop_assert_eq!(decoded.lookup(&k), filter.lookup(&k));
    }
  }

  /// Inserted keys are found until deleted / 已插入的键在删除前都能找到
  #[test]
  fn prop_no_false_negatives(keys in prop::collection::hash_set(any::<u64>(), 0..500)) {
    let mut filter = Filter::new(4096);
    for k in &keys {
      prop_assert!(filter.insert(&k.to_le_bytes()));
    }
    for k in &keys {
      prop_assert!(filter.lookup(&k.to_le_bytes()));
    }
  }
}

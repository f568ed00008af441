//! [Cuckoo Filter][cuckoo filter] with 8-bit fingerprints and four slots per bucket.
//! 8 位指纹、每桶四槽的布谷鸟过滤器
//!
//! Answers "is this key probably in the set?" with no false negatives for inserted
//! keys, and unlike a Bloom filter supports deletion. The table encodes to a flat
//! byte buffer, one byte per slot.
//! 回答"该键是否可能在集合中"，已插入的键不会漏判，且与布隆过滤器不同，支持删除。
//! 表可编码为扁平字节缓冲，每槽一字节。
//!
//! # Examples
//!
//! ```
//! use cuckoo_filter::Filter;
//!
//! let mut filter = Filter::new(1000);
//! assert!(!filter.lookup(b"foo"));
//! assert!(filter.insert(b"foo"));
//! assert!(filter.lookup(b"foo"));
//! assert!(!filter.insert_unique(b"foo"));
//! assert_eq!(filter.count(), 1);
//!
//! let bytes = filter.encode();
//! assert_eq!(bytes.len(), filter.bucket_count() * 4);
//! let decoded = Filter::decode(&bytes).unwrap();
//! assert!(decoded.lookup(b"foo"));
//! assert_eq!(decoded.count(), 1);
//! ```
//!
//! # References
//!
//! - [Cuckoo Filter: Practically Better Than Bloom][cuckoo filter]
//!
//! [cuckoo filter]: https://www.cs.cmu.edu/~dga/papers/cuckoo-conext2014.pdf
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]

mod bucket;
mod builder;
pub mod consts;
pub mod error;
mod filter;
mod hash;
mod index;
mod rand;
#[cfg(feature = "serde_support")]
mod serde_impl;

pub use bucket::Bucket;
pub use builder::FilterBuilder;
pub use error::{Error, Result};
pub use filter::Filter;
pub use hash::{DefaultHasher, GxHash, Hash64, set_default_hasher};
pub use index::{alt_index, fingerprint, index_and_fp, next_pow2};
pub use rand::Rand;

//! Serde support through the flat byte encoding.
//! 基于扁平字节编码的 serde 支持

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use serde_bytes::ByteBuf;

use crate::{filter::Filter, hash::Hash64, rand::Rand};

impl<H: Hash64, R: Rand> Serialize for Filter<H, R> {
  fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serde_bytes::serialize(&self.encode(), serializer)
  }
}

impl<'de> Deserialize<'de> for Filter {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
    let bytes = ByteBuf::deserialize(deserializer)?;
    Filter::decode(&bytes).map_err(de::Error::custom)
  }
}

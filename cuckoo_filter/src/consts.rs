//! Filter constants.
//! 过滤器常量

/// Fingerprint slots per bucket.
/// 每桶指纹槽数
pub const BUCKET_SIZE: usize = 4;

/// Empty slot marker, never a stored fingerprint.
/// 空槽标记，不会作为指纹存储
pub const NULL_FP: u8 = 0;

/// Eviction rounds before insert gives up.
/// 插入放弃前的最大踢出轮数
pub const MAX_KICKS: usize = 500;

/// Seed of the default gxhash hasher and of the alternate-index table.
/// 默认 gxhash 哈希器与备用索引表的种子
pub const DEFAULT_SEED: i64 = 1337;

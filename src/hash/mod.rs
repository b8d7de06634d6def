//! 哈希模块 - 由 `(键, 表大小)` 直接计算槽位
//!
//! 所有位置都是表大小的纯函数，表扩容后无需更新任何哈希状态。

pub mod double_hash;
pub mod linear_probe;

pub use double_hash::{locate_slots, primary_slot, secondary_slot};
pub use linear_probe::{probe_start, ProbeSequence};

use crate::types::Key;

/// 键参与哈希运算时的无符号表示
///
/// 按32位补码重新解释，负数键映射到 `[2^31, 2^32)`。
#[inline]
pub const fn key_bits(key: Key) -> usize {
    key as u32 as usize
}

/// 哈希工具函数
#[inline]
pub fn calculate_slot(hash: usize, capacity: usize) -> usize {
    hash % capacity
}

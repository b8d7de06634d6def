//! 双哈希函数 - Cuckoo表的两个候选位置
//!
//! - `h1(x) = x mod m`
//! - `h2(x) = floor(x / m) mod m`

use crate::{hash::{calculate_slot, key_bits}, types::Key};

/// 表1中的位置 `h1`
#[inline]
pub fn primary_slot(key: Key, capacity: usize) -> usize {
    calculate_slot(key_bits(key), capacity)
}

/// 表2中的位置 `h2`
#[inline]
pub fn secondary_slot(key: Key, capacity: usize) -> usize {
    calculate_slot(key_bits(key) / capacity, capacity)
}

/// 同时计算两个候选位置
#[inline]
pub fn locate_slots(key: Key, capacity: usize) -> (usize, usize) {
    (primary_slot(key, capacity), secondary_slot(key, capacity))
}

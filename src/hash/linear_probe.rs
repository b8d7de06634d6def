//! 线性探测序列 - 从 `h(x) = x mod m` 出发逐个后移

use crate::{hash::{calculate_slot, key_bits}, types::Key};

/// 探测起点 `h(x)`
#[inline]
pub fn probe_start(key: Key, capacity: usize) -> usize {
    calculate_slot(key_bits(key), capacity)
}

/// 线性探测序列
///
/// 依次产出 `h, h+1, ..., h+m-1 (mod m)`，每个槽位恰好访问一次，
/// 走完一整圈后结束。
#[derive(Debug, Clone)]
pub struct ProbeSequence {
    next: usize,
    remaining: usize,
    capacity: usize,
}

impl ProbeSequence {
    /// 为给定键创建探测序列
    pub fn new(key: Key, capacity: usize) -> Self {
        Self::from_start(probe_start(key, capacity), capacity)
    }

    /// 从指定位置开始
    pub fn from_start(start: usize, capacity: usize) -> Self {
        Self {
            next: start,
            remaining: capacity,
            capacity,
        }
    }
}

impl Iterator for ProbeSequence {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        let pos = self.next;
        self.next = (pos + 1) % self.capacity;
        self.remaining -= 1;
        Some(pos)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for ProbeSequence {}

impl std::iter::FusedIterator for ProbeSequence {}

//! 操作统计 - 跟踪哈希表的写操作、踢出与扩容次数

use crate::types::OperationType;

/// 操作计数器
///
/// 表为单一所有者访问，计数器随 `&mut self` 操作直接累加。
#[derive(Debug, Default, Clone)]
pub struct OperationCounters {
    insert_count: u64,
    remove_count: u64,
    kick_count: u64,
    rehash_count: u64,
}

impl OperationCounters {
    /// 创建新计数器
    pub fn new() -> Self {
        Self::default()
    }

    /// 记录一次操作
    pub fn record(&mut self, op_type: OperationType) {
        self.record_many(op_type, 1);
    }

    /// 批量记录同类操作
    pub fn record_many(&mut self, op_type: OperationType, count: u64) {
        let counter = match op_type {
            OperationType::Insert => &mut self.insert_count,
            OperationType::Remove => &mut self.remove_count,
            OperationType::Kick => &mut self.kick_count,
            OperationType::Rehash => &mut self.rehash_count,
        };
        *counter += count;
    }

    /// 获取操作统计快照
    pub fn snapshot(&self) -> OperationStatsSnapshot {
        OperationStatsSnapshot {
            insert_count: self.insert_count,
            remove_count: self.remove_count,
            kick_count: self.kick_count,
            rehash_count: self.rehash_count,
        }
    }

    /// 重置统计
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// 操作统计快照
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct OperationStatsSnapshot {
    /// 成功的插入（含重复键）
    pub insert_count: u64,
    /// 成功的删除
    pub remove_count: u64,
    /// 踢出次数
    pub kick_count: u64,
    /// 扩容轮数
    pub rehash_count: u64,
}

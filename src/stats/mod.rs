//! 统计模块 - 哈希表状态与操作指标

pub mod operation;

pub use operation::{OperationCounters, OperationStatsSnapshot};

/// 哈希表统计信息
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TableStats {
    /// 存活键数量
    pub size: usize,
    /// 槽位总数（Cuckoo表为两张表之和）
    pub capacity: usize,
    pub load_factor: f64,
    pub insert_count: u64,
    pub remove_count: u64,
    pub kick_count: u64,
    pub rehash_count: u64,
    /// 墓碑数量，Cuckoo表恒为0
    pub tombstones: usize,
}

impl TableStats {
    pub(crate) fn new(size: usize, capacity: usize, tombstones: usize, ops: OperationStatsSnapshot) -> Self {
        Self {
            size,
            capacity,
            load_factor: size as f64 / capacity as f64,
            insert_count: ops.insert_count,
            remove_count: ops.remove_count,
            kick_count: ops.kick_count,
            rehash_count: ops.rehash_count,
            tombstones,
        }
    }
}

//! 核心类型定义 - 键类型与槽位状态

/// 键类型 - 定宽整数
pub type Key = i32;

/// 槽位状态
///
/// `Tombstone` 只会出现在线性探测表中：被删除的槽位在逻辑上为空，
/// 但不能终止探测序列。Cuckoo表删除后直接回到 `Empty`。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Slot {
    #[default]
    Empty,
    Occupied(Key),
    Tombstone,
}

impl Slot {
    /// 是否为从未占用过的空槽位（墓碑不算）
    pub const fn is_empty(&self) -> bool {
        matches!(self, Slot::Empty)
    }

    /// 是否为墓碑
    pub const fn is_tombstone(&self) -> bool {
        matches!(self, Slot::Tombstone)
    }

    /// 是否存有键
    pub const fn is_occupied(&self) -> bool {
        matches!(self, Slot::Occupied(_))
    }

    /// 槽位中的键
    pub const fn key(&self) -> Option<Key> {
        match *self {
            Slot::Occupied(key) => Some(key),
            _ => None,
        }
    }

    /// 是否恰好存有给定键
    pub fn holds(&self, key: Key) -> bool {
        *self == Slot::Occupied(key)
    }

    /// 写入键，返回原先的槽位状态
    pub fn replace(&mut self, key: Key) -> Slot {
        std::mem::replace(self, Slot::Occupied(key))
    }

    /// 取出键并把槽位置为 `Empty`
    pub fn take(&mut self) -> Option<Key> {
        std::mem::take(self).key()
    }

    /// 取出键并把槽位置为墓碑
    pub fn bury(&mut self) -> Option<Key> {
        std::mem::replace(self, Slot::Tombstone).key()
    }
}

/// 操作类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationType {
    Insert,
    Remove,
    /// Cuckoo踢出链中的一次置换
    Kick,
    /// 一轮扩容重建
    Rehash,
}

/// 分配一段全部为空的槽位数组
pub(crate) fn empty_slots(len: usize) -> Vec<Slot> {
    vec![Slot::Empty; len]
}

//! 线性探测哈希表 - 开放寻址 + 惰性删除
//!
//! 删除只把槽位标记为墓碑，探测序列在墓碑处不会中断；
//! 扩容时重建整张表，墓碑随之全部清除。

use crate::{
    error::HashTableError,
    hash::ProbeSequence,
    map::{KeyTable, DEFAULT_LINEAR_CONFIG},
    stats::{OperationCounters, TableStats},
    types::{empty_slots, Key, OperationType, Slot},
};

/// 哈希表配置
#[derive(Clone, Debug)]
pub struct LinearTableConfig {
    /// 初始槽位数
    pub initial_size: usize,
    /// 插入前负载因子达到该值即扩容
    pub max_load_factor: f64,
}

impl Default for LinearTableConfig {
    fn default() -> Self {
        Self {
            initial_size: 16,
            max_load_factor: 0.75,
        }
    }
}

impl LinearTableConfig {
    /// 校验配置
    pub fn validate(&self) -> Result<(), HashTableError> {
        if self.initial_size == 0 {
            return Err(HashTableError::InvalidSize { size: self.initial_size });
        }
        let threshold = self.max_load_factor;
        if !threshold.is_finite() || threshold <= 0.0 || threshold > 1.0 {
            return Err(HashTableError::InvalidLoadFactor { threshold });
        }
        Ok(())
    }
}

/// 线性探测哈希表
pub struct LinearTable {
    size: usize,
    slots: Vec<Slot>,
    max_load_factor: f64,
    // 占用槽位数（不含墓碑）
    len: usize,
    tombstones: usize,
    counters: OperationCounters,
}

impl LinearTable {
    /// 创建指定初始大小与负载因子阈值的哈希表
    pub fn new(size: usize, max_load_factor: f64) -> Result<Self, HashTableError> {
        Self::with_config(LinearTableConfig {
            initial_size: size,
            max_load_factor,
        })
    }

    /// 按配置创建
    pub fn with_config(config: LinearTableConfig) -> Result<Self, HashTableError> {
        config.validate()?;
        Ok(Self::allocate(&config))
    }

    fn allocate(config: &LinearTableConfig) -> Self {
        Self {
            size: config.initial_size,
            slots: empty_slots(config.initial_size),
            max_load_factor: config.max_load_factor,
            len: 0,
            tombstones: 0,
            counters: OperationCounters::new(),
        }
    }

    /// 槽位数
    pub fn capacity(&self) -> usize {
        self.size
    }

    /// 存活键数量
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// 扩容阈值
    pub fn max_load_factor(&self) -> f64 {
        self.max_load_factor
    }

    /// 负载因子：占用槽位 / 槽位数，墓碑不计入
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.size as f64
    }

    /// 墓碑数量
    pub fn tombstones(&self) -> usize {
        self.tombstones
    }

    /// 插入键
    ///
    /// 负载因子达到阈值时反复翻倍，直到低于阈值，再从 `h(key)` 线性探测。
    /// 墓碑可被复用但不会终止扫描，后面的槽位可能已存有该键。
    pub fn insert(&mut self, key: Key) -> bool {
        while self.load_factor() >= self.max_load_factor {
            self.rehash();
        }

        let mut reusable = None;
        for pos in ProbeSequence::new(key, self.size) {
            match self.slots[pos] {
                Slot::Empty => {
                    self.place(reusable.unwrap_or(pos), key);
                    return true;
                }
                Slot::Occupied(resident) if resident == key => {
                    self.counters.record(OperationType::Insert);
                    return true;
                }
                Slot::Tombstone if reusable.is_none() => reusable = Some(pos),
                Slot::Tombstone | Slot::Occupied(_) => {}
            }
        }

        // 整圈没有空槽位：只剩墓碑可用
        if let Some(pos) = reusable {
            self.place(pos, key);
            return true;
        }

        log_error!(
            "linear table full: key {} found no free slot (size {}, len {})",
            key, self.size, self.len
        );
        debug_assert!(self.len < self.size, "负载因子阈值应保证插入前总有空闲槽位");
        false
    }

    /// 查询键是否存在
    pub fn search(&self, key: Key) -> bool {
        self.find(key).is_some()
    }

    /// 删除键，原槽位标记为墓碑
    pub fn remove(&mut self, key: Key) -> bool {
        match self.find(key) {
            Some(pos) => {
                self.slots[pos].bury();
                self.len -= 1;
                self.tombstones += 1;
                self.counters.record(OperationType::Remove);
                true
            }
            None => false,
        }
    }

    /// 翻倍扩容并重新插入所有存活键，同时清除全部墓碑
    pub fn rehash(&mut self) {
        let live: Vec<Key> = self.keys().collect();

        self.size *= 2;
        self.slots = empty_slots(self.size);
        self.tombstones = 0;

        for key in live {
            let free = ProbeSequence::new(key, self.size).find(|&pos| self.slots[pos].is_empty());
            debug_assert!(free.is_some(), "扩容后的表必然存在空槽位");
            if let Some(pos) = free {
                self.slots[pos] = Slot::Occupied(key);
            }
        }

        self.counters.record(OperationType::Rehash);
        log_info!(
            "linear table rehashed: size {} -> {}, {} keys",
            self.size / 2, self.size, self.len
        );
    }

    /// 遍历所有存活键（按槽位顺序）
    pub fn keys(&self) -> impl Iterator<Item = Key> + '_ {
        self.slots.iter().filter_map(Slot::key)
    }

    /// 统计快照
    pub fn stats(&self) -> TableStats {
        TableStats::new(self.len, self.size, self.tombstones, self.counters.snapshot())
    }

    /// 清零操作统计
    pub fn reset_stats(&mut self) {
        self.counters.reset();
    }

    /// 定位键所在槽位；遇到从未占用过的空槽位即停止
    fn find(&self, key: Key) -> Option<usize> {
        for pos in ProbeSequence::new(key, self.size) {
            match self.slots[pos] {
                Slot::Empty => return None,
                Slot::Occupied(resident) if resident == key => return Some(pos),
                Slot::Tombstone | Slot::Occupied(_) => {}
            }
        }
        None
    }

    fn place(&mut self, pos: usize, key: Key) {
        if self.slots[pos].replace(key).is_tombstone() {
            self.tombstones -= 1;
        }
        self.len += 1;
        self.counters.record(OperationType::Insert);
    }
}

impl Default for LinearTable {
    fn default() -> Self {
        Self::allocate(&DEFAULT_LINEAR_CONFIG)
    }
}

impl KeyTable for LinearTable {
    fn insert(&mut self, key: Key) -> bool {
        LinearTable::insert(self, key)
    }

    fn search(&self, key: Key) -> bool {
        LinearTable::search(self, key)
    }

    fn remove(&mut self, key: Key) -> bool {
        LinearTable::remove(self, key)
    }

    fn len(&self) -> usize {
        self.len
    }

    fn capacity(&self) -> usize {
        self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_table() -> LinearTable {
        LinearTable::new(4, 0.75).unwrap()
    }

    #[test]
    fn test_invalid_config_rejected() {
        assert_eq!(
            LinearTable::new(0, 0.75).err(),
            Some(HashTableError::InvalidSize { size: 0 })
        );
        for threshold in [0.0, -0.5, 1.5, f64::NAN, f64::INFINITY] {
            let err = LinearTable::new(4, threshold).err();
            assert!(
                matches!(err, Some(HashTableError::InvalidLoadFactor { .. })),
                "阈值 {} 应被拒绝",
                threshold
            );
        }
        assert!(LinearTable::new(4, 1.0).is_ok());
    }

    #[test]
    fn test_insert_and_search() {
        let mut table = create_test_table();
        assert!(table.insert(0));
        assert!(table.insert(1));
        assert!(table.search(0));
        assert!(table.search(1));
        assert!(!table.search(2));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_insert_duplicate() {
        let mut table = create_test_table();
        assert!(table.insert(6));
        assert!(table.insert(6));
        assert_eq!(table.len(), 1);
        assert_eq!(table.slots.iter().filter(|s| s.holds(6)).count(), 1);
    }

    #[test]
    fn test_collisions_probe_forward() {
        let mut table = LinearTable::new(8, 1.0).unwrap();
        // 1, 9, 17 的起点都是 1
        for key in [1, 9, 17] {
            assert!(table.insert(key));
        }
        assert_eq!(
            &table.slots[1..4],
            &[Slot::Occupied(1), Slot::Occupied(9), Slot::Occupied(17)]
        );
        assert!(table.search(17));
        assert!(!table.search(25));
    }

    #[test]
    fn test_tombstone_reuse() {
        let mut table = create_test_table();
        for key in [0, 1, 2] {
            assert!(table.insert(key));
        }
        assert!(table.remove(1));
        assert_eq!(table.slots[1], Slot::Tombstone);
        assert_eq!(table.tombstones(), 1);

        // 5 的起点为 1，复用墓碑
        assert!(table.insert(5));
        assert_eq!(table.slots[1], Slot::Occupied(5));
        assert_eq!(table.tombstones(), 0);
        assert!(!table.search(1));
        assert!(table.search(5));
        assert_eq!(table.capacity(), 4, "负载因子未达阈值，不应扩容");
    }

    #[test]
    fn test_tombstone_does_not_break_probe() {
        let mut table = LinearTable::new(8, 1.0).unwrap();
        for key in [1, 9, 17] {
            table.insert(key);
        }
        assert!(table.remove(9));
        // 17 位于墓碑之后，仍然可以找到
        assert!(table.search(17));
        assert!(table.remove(17));
        assert!(!table.search(17));
        assert!(table.search(1));
    }

    #[test]
    fn test_insert_after_tombstone_finds_existing_key() {
        let mut table = LinearTable::new(8, 1.0).unwrap();
        for key in [1, 9, 17] {
            table.insert(key);
        }
        table.remove(9);
        // 17 已经存在于墓碑之后，不能再写入墓碑
        assert!(table.insert(17));
        assert_eq!(table.len(), 2);
        assert_eq!(table.slots[2], Slot::Tombstone);
        assert_eq!(table.slots.iter().filter(|s| s.holds(17)).count(), 1);
    }

    #[test]
    fn test_remove_missing() {
        let mut table = create_test_table();
        assert!(!table.remove(3));
        table.insert(3);
        assert!(table.remove(3));
        assert!(!table.remove(3));
        assert!(table.is_empty());
    }

    #[test]
    fn test_full_cycle_of_tombstones() {
        // 所有槽位都是墓碑时，查找走完整圈后返回false，插入复用第一个墓碑
        let mut table = LinearTable::new(2, 1.0).unwrap();
        table.insert(0);
        table.insert(1);
        table.remove(0);
        table.remove(1);
        assert_eq!(table.slots, vec![Slot::Tombstone, Slot::Tombstone]);
        assert!(!table.search(0));
        assert!(!table.remove(5));

        assert!(table.insert(3));
        assert_eq!(table.slots, vec![Slot::Tombstone, Slot::Occupied(3)]);
    }

    #[test]
    fn test_rehash_clears_tombstones() {
        let mut table = LinearTable::new(8, 1.0).unwrap();
        for key in 0..6 {
            table.insert(key);
        }
        for key in [1, 3] {
            table.remove(key);
        }
        assert_eq!(table.tombstones(), 2);

        table.rehash();
        assert_eq!(table.capacity(), 16);
        assert_eq!(table.tombstones(), 0);
        assert!(table.slots.iter().all(|s| !s.is_tombstone()));
        for key in [0, 2, 4, 5] {
            assert!(table.search(key));
        }
        assert!(!table.search(1));
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn test_load_factor() {
        let mut table = create_test_table();
        assert_eq!(table.load_factor(), 0.0);
        table.insert(0);
        table.insert(1);
        assert_eq!(table.load_factor(), 0.5);
        table.remove(0);
        assert_eq!(table.load_factor(), 0.25, "墓碑不计入负载因子");
    }

    #[test]
    fn test_growth_before_insert() {
        let mut table = create_test_table();
        for key in 0..3 {
            table.insert(key);
        }
        assert_eq!(table.capacity(), 4);
        assert_eq!(table.load_factor(), 0.75);

        // 插入前负载因子达到阈值，先扩容
        assert!(table.insert(3));
        assert_eq!(table.capacity(), 8);
        assert_eq!(table.stats().rehash_count, 1);
        for key in 0..4 {
            assert!(table.search(key));
        }
    }

    #[test]
    fn test_small_threshold_grows_until_below() {
        // 一次翻倍只能把负载因子降到0.5，阈值更小时要连续扩容
        let mut table = LinearTable::new(1, 0.1).unwrap();
        for key in 0..20 {
            assert!(table.insert(key));
            let placed_at = (table.len() - 1) as f64 / table.capacity() as f64;
            assert!(placed_at < 0.1, "插入 {} 时负载因子 {} 未低于阈值", key, placed_at);
        }
        for key in 0..20 {
            assert!(table.search(key));
        }
        assert!(table.capacity().is_power_of_two());
    }

    #[test]
    fn test_reset_stats() {
        let mut table = create_test_table();
        for key in 0..5 {
            table.insert(key);
        }
        table.remove(0);
        assert!(table.stats().rehash_count > 0);

        table.reset_stats();
        let stats = table.stats();
        assert_eq!(stats.insert_count, 0);
        assert_eq!(stats.remove_count, 0);
        assert_eq!(stats.rehash_count, 0);
        assert_eq!(stats.size, 4, "清零统计不影响表内容");
    }

    #[test]
    fn test_negative_keys() {
        let mut table = create_test_table();
        for key in [-1, -4, i32::MIN] {
            assert!(table.insert(key));
        }
        for key in [-1, -4, i32::MIN] {
            assert!(table.search(key));
        }
        assert!(table.remove(-4));
        assert!(!table.search(-4));
    }
}

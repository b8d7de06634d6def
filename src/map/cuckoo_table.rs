//! Cuckoo哈希表核心实现
//!
//! 两张等长的槽位表，键 `k` 只可能位于 `table1[h1(k)]` 或 `table2[h2(k)]`。
//! 插入沿踢出链交替置换，踢出次数超过预算即视为成环，随后翻倍扩容并重建。

use crate::{
    error::HashTableError,
    hash::{locate_slots, primary_slot, secondary_slot},
    map::{KeyTable, DEFAULT_CUCKOO_CONFIG},
    stats::{OperationCounters, TableStats},
    types::{empty_slots, Key, OperationType, Slot},
};

/// 哈希表配置
#[derive(Clone, Debug)]
pub struct CuckooTableConfig {
    /// 初始表大小（每张表的槽位数）
    pub initial_size: usize,
}

impl Default for CuckooTableConfig {
    fn default() -> Self {
        Self { initial_size: 16 }
    }
}

impl CuckooTableConfig {
    /// 校验配置
    pub fn validate(&self) -> Result<(), HashTableError> {
        if self.initial_size == 0 {
            return Err(HashTableError::InvalidSize { size: self.initial_size });
        }
        Ok(())
    }
}

/// 踢出链结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Placement {
    /// 链上所有键都已落位
    Placed,
    /// 预算耗尽，携带仍未落位的键
    Stuck(Key),
}

/// 两张表中的哪一张
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Primary,
    Secondary,
}

impl Side {
    fn flip(self) -> Self {
        match self {
            Side::Primary => Side::Secondary,
            Side::Secondary => Side::Primary,
        }
    }
}

/// Cuckoo哈希表
pub struct CuckooTable {
    // 每张表的槽位数 m
    size: usize,
    table1: Vec<Slot>,
    table2: Vec<Slot>,
    // 存活键数量
    len: usize,
    counters: OperationCounters,
}

impl CuckooTable {
    /// 创建指定初始大小的哈希表
    pub fn new(size: usize) -> Result<Self, HashTableError> {
        Self::with_config(CuckooTableConfig { initial_size: size })
    }

    /// 按配置创建
    pub fn with_config(config: CuckooTableConfig) -> Result<Self, HashTableError> {
        config.validate()?;
        Ok(Self::allocate(config.initial_size))
    }

    fn allocate(size: usize) -> Self {
        Self {
            size,
            table1: empty_slots(size),
            table2: empty_slots(size),
            len: 0,
            counters: OperationCounters::new(),
        }
    }

    /// 每张表的槽位数
    pub fn table_size(&self) -> usize {
        self.size
    }

    /// 两张表的槽位总数
    pub fn capacity(&self) -> usize {
        self.size * 2
    }

    /// 存活键数量
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// 当前负载因子（存活键 / 槽位总数）
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.capacity() as f64
    }

    /// 单条踢出链的置换预算
    fn max_attempts(&self) -> usize {
        2 * self.size
    }

    /// 查询键是否存在
    pub fn search(&self, key: Key) -> bool {
        self.table1[primary_slot(key, self.size)].holds(key)
            || self.table2[secondary_slot(key, self.size)].holds(key)
    }

    /// 插入键
    ///
    /// 重复插入直接返回 `true`。踢出链成环时自动扩容重建，因此总是返回 `true`。
    pub fn insert(&mut self, key: Key) -> bool {
        if self.search(key) {
            self.counters.record(OperationType::Insert);
            return true;
        }

        // 整条链共享一个预算
        let budget = self.max_attempts();
        match self.eviction_chain(key, budget) {
            Placement::Placed => self.len += 1,
            Placement::Stuck(stuck) => {
                log_debug!(
                    "insert {}: eviction chain exhausted {} steps at size {}, stuck key {}",
                    key, budget, self.size, stuck
                );
                let mut keys: Vec<Key> = self.keys().collect();
                keys.push(stuck);
                keys.push(key);
                self.rehash_with(keys);
            }
        }
        self.counters.record(OperationType::Insert);
        self.search(key)
    }

    /// 删除键
    pub fn remove(&mut self, key: Key) -> bool {
        let (pos1, pos2) = locate_slots(key, self.size);
        let slot = if self.table1[pos1].holds(key) {
            &mut self.table1[pos1]
        } else if self.table2[pos2].holds(key) {
            &mut self.table2[pos2]
        } else {
            return false;
        };
        slot.take();
        self.len -= 1;
        self.counters.record(OperationType::Remove);
        true
    }

    /// 以翻倍大小重建当前内容
    pub fn rehash(&mut self) {
        let keys: Vec<Key> = self.keys().collect();
        self.rehash_with(keys);
    }

    /// 遍历所有存活键（先表1后表2）
    pub fn keys(&self) -> impl Iterator<Item = Key> + '_ {
        self.table1.iter().chain(self.table2.iter()).filter_map(Slot::key)
    }

    /// 统计快照
    pub fn stats(&self) -> TableStats {
        TableStats::new(self.len, self.capacity(), 0, self.counters.snapshot())
    }

    /// 清零操作统计
    pub fn reset_stats(&mut self) {
        self.counters.reset();
    }

    /// 从表1开始沿踢出链放置 `key`，最多置换 `budget` 次
    ///
    /// 成功时链上所有键都已落位；失败时返回手中尚未落位的键，
    /// 其余键仍各自位于合法的候选槽位。
    fn eviction_chain(&mut self, key: Key, budget: usize) -> Placement {
        let mut current = key;
        let mut side = Side::Primary;
        let mut kicks = 0;

        let placement = loop {
            if kicks == budget {
                break Placement::Stuck(current);
            }
            let slot = match side {
                Side::Primary => &mut self.table1[primary_slot(current, self.size)],
                Side::Secondary => &mut self.table2[secondary_slot(current, self.size)],
            };
            match slot.replace(current) {
                Slot::Occupied(evicted) => {
                    kicks += 1;
                    current = evicted;
                    side = side.flip();
                }
                Slot::Empty | Slot::Tombstone => break Placement::Placed,
            }
        };

        self.counters.record_many(OperationType::Kick, kicks as u64);
        placement
    }

    /// 用给定键集合扩容重建
    ///
    /// 每轮先翻倍表大小，再逐个插入（每个键独立享有 `2·m` 的预算）。
    /// 任一键失败则放弃本轮：把卡住的键和表内现存键并入集合后再翻倍重试，
    /// 直到某一轮全部落位。
    fn rehash_with(&mut self, keys: Vec<Key>) {
        let mut batch = dedup_keys(keys);

        loop {
            self.grow();

            match self.place_batch(&batch) {
                Ok(()) => break,
                Err(stuck) => {
                    log_debug!(
                        "rehash round failed at size {}: key {} could not be placed",
                        self.size, stuck
                    );
                    let mut next = batch;
                    next.push(stuck);
                    next.extend(self.keys());
                    batch = dedup_keys(next);
                }
            }
        }

        self.len = batch.len();
        log_info!(
            "cuckoo table rebuilt: size {}, {} keys, {} rebuild rounds so far",
            self.size, self.len, self.counters.snapshot().rehash_count
        );
    }

    /// 在当前（刚清空的）表中依次放置整批键
    fn place_batch(&mut self, batch: &[Key]) -> Result<(), Key> {
        for &key in batch {
            let budget = self.max_attempts();
            if let Placement::Stuck(stuck) = self.eviction_chain(key, budget) {
                return Err(stuck);
            }
        }
        Ok(())
    }

    /// 表大小翻倍并清空两张表
    fn grow(&mut self) {
        self.size *= 2;
        self.table1 = empty_slots(self.size);
        self.table2 = empty_slots(self.size);
        self.len = 0;
        self.counters.record(OperationType::Rehash);
    }
}

impl Default for CuckooTable {
    fn default() -> Self {
        Self::allocate(DEFAULT_CUCKOO_CONFIG.initial_size)
    }
}

impl KeyTable for CuckooTable {
    fn insert(&mut self, key: Key) -> bool {
        CuckooTable::insert(self, key)
    }

    fn search(&self, key: Key) -> bool {
        CuckooTable::search(self, key)
    }

    fn remove(&mut self, key: Key) -> bool {
        CuckooTable::remove(self, key)
    }

    fn len(&self) -> usize {
        self.len
    }

    fn capacity(&self) -> usize {
        CuckooTable::capacity(self)
    }
}

/// 排序去重，保证每轮重建的插入顺序确定
fn dedup_keys(mut keys: Vec<Key>) -> Vec<Key> {
    keys.sort_unstable();
    keys.dedup();
    keys
}

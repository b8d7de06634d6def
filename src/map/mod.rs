//! 哈希表核心模块 - Cuckoo表与线性探测表

pub mod cuckoo_table;
pub mod linear_table;

pub use cuckoo_table::{CuckooTable, CuckooTableConfig};
pub use linear_table::{LinearTable, LinearTableConfig};

use once_cell::sync::Lazy;

use crate::types::Key;

/// 全局默认配置
pub static DEFAULT_CUCKOO_CONFIG: Lazy<CuckooTableConfig> = Lazy::new(CuckooTableConfig::default);
pub static DEFAULT_LINEAR_CONFIG: Lazy<LinearTableConfig> = Lazy::new(LinearTableConfig::default);

/// 整数键集合的四个基本操作
///
/// 两种表各自独立实现，互不共享探测逻辑。
pub trait KeyTable {
    /// 插入键，重复插入视为成功
    fn insert(&mut self, key: Key) -> bool;

    /// 查询键是否存在
    fn search(&self, key: Key) -> bool;

    /// 删除键，键不存在时返回 `false`
    fn remove(&mut self, key: Key) -> bool;

    /// 存活键数量
    fn len(&self) -> usize;

    /// 槽位总数
    fn capacity(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

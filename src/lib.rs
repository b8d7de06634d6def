//! 整数键哈希表库
//!
//! 提供两种互相独立的整数键集合实现：
//!
//! - [`CuckooTable`]：双表Cuckoo哈希，踢出链有置换上限，成环后翻倍扩容重建
//! - [`LinearTable`]：线性探测开放寻址，惰性删除（墓碑），按负载因子阈值扩容
//!
//! ## 快速开始
//!
//! ```rust
//! use cuckoo_hashtable::*;
//!
//! let mut cuckoo = CuckooTable::new(2).expect("表大小必须大于0");
//! for key in 0..6 {
//!     assert!(cuckoo.insert(key));
//! }
//! assert!(cuckoo.search(5));
//! assert!(cuckoo.remove(5));
//! assert!(!cuckoo.search(5));
//!
//! let mut linear = LinearTable::new(4, 0.75).expect("配置无效");
//! linear.insert(0);
//! linear.insert(1);
//! linear.remove(1);
//! assert!(!linear.search(1));
//! println!("{:?}", linear.stats());
//! ```

#![warn(clippy::all)]

#[cfg(feature = "logging")]
#[doc(hidden)]
pub use log as __log;

#[cfg(feature = "logging")]
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        $crate::__log::debug!($($arg)*)
    };
}

#[cfg(feature = "logging")]
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        $crate::__log::info!($($arg)*)
    };
}

#[cfg(feature = "logging")]
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        $crate::__log::warn!($($arg)*)
    };
}

#[cfg(feature = "logging")]
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        $crate::__log::error!($($arg)*)
    };
}

#[cfg(not(feature = "logging"))]
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "logging"))]
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "logging"))]
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "logging"))]
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {};
}

// 核心模块导出
pub mod error;
pub mod types;
pub mod hash;
pub mod map;
pub mod stats;

// 公共接口导出
pub use crate::{
    error::{ErrorKind, HashTableError},
    map::{
        CuckooTable,
        CuckooTableConfig,
        KeyTable,
        LinearTable,
        LinearTableConfig,
        DEFAULT_CUCKOO_CONFIG,
        DEFAULT_LINEAR_CONFIG,
    },
    stats::TableStats,
    types::{Key, Slot},
};

impl std::fmt::Debug for CuckooTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let stats = self.stats();
        f.debug_struct("CuckooTable")
            .field("size", &stats.size)
            .field("capacity", &stats.capacity)
            .field("load_factor", &stats.load_factor)
            .finish()
    }
}

impl std::fmt::Debug for LinearTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let stats = self.stats();
        f.debug_struct("LinearTable")
            .field("size", &stats.size)
            .field("capacity", &stats.capacity)
            .field("load_factor", &stats.load_factor)
            .field("tombstones", &stats.tombstones)
            .finish()
    }
}

// 便捷功能函数

/// 批量插入，返回插入成功的键数
pub fn batch_insert<T: KeyTable + ?Sized>(table: &mut T, keys: impl IntoIterator<Item = Key>) -> usize {
    keys.into_iter().filter(|&key| table.insert(key)).count()
}

/// 批量查询，结果与输入顺序一致
pub fn batch_search<T: KeyTable + ?Sized>(table: &T, keys: impl IntoIterator<Item = Key>) -> Vec<bool> {
    keys.into_iter().map(|key| table.search(key)).collect()
}

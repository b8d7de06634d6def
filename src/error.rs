//! 统一错误处理 - 构造参数校验错误及其分类

/// 错误类别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// 调用方传入了非法参数
    InvalidArgument,
}

/// 哈希表可能发生的错误
///
/// 插入、查询、删除只以布尔值报告结果，这里的错误只出现在构造阶段。
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HashTableError {
    #[error("无效的表大小: {size} (必须 >= 1)")]
    InvalidSize {
        size: usize,
    },

    #[error("无效的负载因子阈值: {threshold} (必须位于 (0, 1] 区间)")]
    InvalidLoadFactor {
        threshold: f64,
    },
}

impl HashTableError {
    /// 错误类别
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidSize { .. } | Self::InvalidLoadFactor { .. } => ErrorKind::InvalidArgument,
        }
    }

    /// 获取错误恢复建议
    pub fn recovery_suggestion(&self) -> Option<&'static str> {
        match self {
            Self::InvalidSize { .. } => Some("使用至少为1的初始大小"),
            Self::InvalidLoadFactor { .. } => Some("选择 0 到 1 之间的阈值，例如 0.75"),
        }
    }

    /// 判断错误是否可恢复
    ///
    /// 参数错误只需修正参数后重新构造即可。
    pub fn is_recoverable(&self) -> bool {
        matches!(self.kind(), ErrorKind::InvalidArgument)
    }
}

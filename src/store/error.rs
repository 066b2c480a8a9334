// ==========================================
// 高校排课系统 - 存储层错误类型
// ==========================================

use thiserror::Error;

/// 存储层错误类型
#[derive(Error, Debug)]
pub enum StoreError {
    /// 摄入校验失败: 越界落位等, 整批拒绝, 原快照保持
    #[error("数据完整性错误: {0}")]
    DataIntegrity(String),

    #[error("资源未找到: {entity}(id={id})不存在")]
    NotFound { entity: String, id: i64 },
}

/// Result 类型别名
pub type StoreResult<T> = Result<T, StoreError>;

// ==========================================
// 高校排课系统 - 引擎层错误类型
// ==========================================
// 错误分类:
//   配置错误  - 输入不合法, 任何变更前拒绝, 原状态保持
//   数据完整性错误 - 落位超出固定网格等, 摄入时立即抛出, 不截断不丢弃
//   状态错误  - 编排器非法状态转换 / 重入
// ==========================================

use thiserror::Error;

/// 引擎层错误类型
#[derive(Error, Debug)]
pub enum EngineError {
    // ==========================================
    // 配置错误
    // ==========================================
    #[error("配置错误: {0}")]
    Configuration(String),

    /// 同一教学周同时落入考试段与假期段
    #[error("配置错误: 第{week_number}周同时命中考试段与假期段")]
    ConflictingWeekLabels { week_number: u32 },

    /// 日期区间倒置或为空
    #[error("配置错误: 日期区间非法 start={start} end={end}")]
    InvalidDateRange { start: String, end: String },

    // ==========================================
    // 数据完整性错误
    // ==========================================
    #[error("数据完整性错误: {0}")]
    DataIntegrity(String),

    /// 课次落位超出固定 5×7 网格
    #[error("数据完整性错误: 课次{lesson_id}落位越界 day={day} slot={slot}")]
    LessonOutOfGrid { lesson_id: i64, day: u8, slot: u8 },

    /// 课次引用的教学周不存在
    #[error("数据完整性错误: 课次{lesson_id}引用未知教学周 week={week_number}")]
    UnknownWeek { lesson_id: i64, week_number: u32 },

    // ==========================================
    // 编排器状态错误
    // ==========================================
    /// 重入: 已有生成请求在途, 新请求被拒绝而非排队
    #[error("生成请求已在进行中, 请等待当前请求结束")]
    GenerationInProgress,

    #[error("非法状态转换: from={from} to={to}")]
    InvalidStateTransition { from: String, to: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result 类型别名
pub type EngineResult<T> = Result<T, EngineError>;

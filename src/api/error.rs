// ==========================================
// 高校排课系统 - API层错误类型
// ==========================================
// 职责: 汇聚引擎/存储/传输错误, 转换为面向调用方的错误消息
// 错误分类遵循四类: 配置 / 数据完整性 / 业务失败 / 传输失败
// 本层不自动重试: 优化器相关错误一律上抛由调用方决策
// ==========================================

use crate::client::TransportError;
use crate::engine::error::EngineError;
use crate::store::error::StoreError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 配置错误: 任何变更前拒绝, 原状态保持
    // ==========================================
    #[error("配置错误: {0}")]
    Configuration(String),

    // ==========================================
    // 数据完整性错误: 摄入时立即抛出, 不截断不丢弃
    // ==========================================
    #[error("数据完整性错误: {0}")]
    DataIntegrity(String),

    /// 透视筛选引用了课次集合中不存在的实体
    #[error("数据完整性错误: 透视维度{dimension}下不存在实体\"{entity}\"")]
    UnknownEntity { dimension: String, entity: String },

    #[error("资源未找到: {0}")]
    NotFound(String),

    // ==========================================
    // 生成流程错误
    // ==========================================
    #[error("生成请求已在进行中, 请等待当前请求结束")]
    GenerationInProgress,

    #[error("非法状态转换: from={from} to={to}")]
    InvalidStateTransition { from: String, to: String },

    // ==========================================
    // 传输失败: 可重试, 与业务失败分开呈现
    // ==========================================
    #[error("传输失败: {0}")]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ==========================================
// 从 EngineError 转换
// ==========================================
impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::Configuration(msg) => ApiError::Configuration(msg),
            EngineError::ConflictingWeekLabels { week_number } => ApiError::Configuration(
                format!("第{}周同时命中考试段与假期段", week_number),
            ),
            EngineError::InvalidDateRange { start, end } => {
                ApiError::Configuration(format!("日期区间非法: start={} end={}", start, end))
            }
            EngineError::DataIntegrity(msg) => ApiError::DataIntegrity(msg),
            EngineError::LessonOutOfGrid { lesson_id, day, slot } => ApiError::DataIntegrity(
                format!("课次{}落位越界: day={} slot={}", lesson_id, day, slot),
            ),
            EngineError::UnknownWeek {
                lesson_id,
                week_number,
            } => ApiError::DataIntegrity(format!(
                "课次{}引用未知教学周: week={}",
                lesson_id, week_number
            )),
            EngineError::GenerationInProgress => ApiError::GenerationInProgress,
            EngineError::InvalidStateTransition { from, to } => {
                ApiError::InvalidStateTransition { from, to }
            }
            EngineError::Other(err) => ApiError::Other(err),
        }
    }
}

// ==========================================
// 从 StoreError 转换
// ==========================================
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DataIntegrity(msg) => ApiError::DataIntegrity(msg),
            StoreError::NotFound { entity, id } => {
                ApiError::NotFound(format!("{}(id={})不存在", entity, id))
            }
        }
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;

// ==========================================
// 高校排课系统 - 外部协作方契约
// ==========================================
// 职责: 定义优化器服务与课表读取接口的最小契约
// 说明: 核心层定义 trait, 传输层 (HTTP 等) 在外部实现
// 优化器本体 (遗传算法/约束搜索) 不在本核心范围内
// ==========================================

use crate::domain::conflict::Conflict;
use crate::domain::lesson::Lesson;
use crate::domain::schedule::Schedule;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

// ==========================================
// 生成请求
// ==========================================

/// 提交给优化器的生成请求
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub request_id: Uuid,        // 客户端请求标识
    pub semester_id: i64,        // 目标学期
    pub name: String,            // 课表名称
    /// 算法参数 (种群规模/代数/变异率等), 对本核心不透明
    pub parameters: serde_json::Value,
}

impl GenerationRequest {
    pub fn new(semester_id: i64, name: impl Into<String>, parameters: serde_json::Value) -> Self {
        Self {
            request_id: Uuid::new_v4(),
            semester_id,
            name: name.into(),
            parameters,
        }
    }
}

// ==========================================
// 生成应答
// ==========================================

/// 优化器应答
///
/// Unsatisfied 不是传输错误: 优化器在迭代预算内未能完全满足约束,
/// 属于预期内、可据此调参的业务结果
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum GenerationReply {
    /// 成功: 新课表已创建
    Completed {
        schedule_id: i64,   // 新建课表ID
        lessons_count: u32, // 课次数
        fitness: f64,       // 评分 [0,1]
        time_seconds: f64,  // 生成耗时
    },
    /// 声明性失败: 无 schedule_id, 携带诊断信息
    Unsatisfied {
        fitness: f64,            // 达到的最优评分
        iterations: u32,         // 已执行迭代数
        conflicts: Vec<Conflict>, // 残留冲突 (取首条作主诊断)
    },
}

// ==========================================
// 传输错误
// ==========================================

/// 与优化器/读取接口的传输层错误
///
/// 与 Unsatisfied 严格区分: 传输错误可直接重试,
/// 业务失败应先调整参数
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum TransportError {
    #[error("网络错误: {0}")]
    Network(String),

    #[error("请求超时: {timeout_secs}秒内未收到优化器应答")]
    Timeout { timeout_secs: u64 },

    #[error("应答格式非法: {0}")]
    MalformedReply(String),
}

// ==========================================
// 优化器服务契约
// ==========================================

/// 优化器服务 (消费方契约)
///
/// 一次提交一个请求, 无中途取消; awaiting 时长仅受传输层超时约束
#[async_trait]
pub trait OptimizerService: Send + Sync {
    /// 提交生成请求并等待终态应答
    async fn generate(&self, request: &GenerationRequest)
        -> Result<GenerationReply, TransportError>;
}

// ==========================================
// 课表读取契约
// ==========================================

/// 按教学周分桶的课次列表 (学期课表视图)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeekLessons {
    pub week_number: u32,     // 教学周序号
    pub lessons: Vec<Lesson>, // 该周课次
}

/// 课表读取接口 (消费方契约)
///
/// 本核心对返回数据仅做领域模型不变式校验 (摄入层 fail-closed),
/// 不做其他验证
#[async_trait]
pub trait ScheduleReader: Send + Sync {
    /// 课表元数据
    async fn fetch_schedule(&self, schedule_id: i64) -> Result<Schedule, TransportError>;

    /// 平铺课次列表
    async fn fetch_lessons(&self, schedule_id: i64) -> Result<Vec<Lesson>, TransportError>;

    /// 按教学周分桶的课次列表
    async fn fetch_semester_lessons(
        &self,
        schedule_id: i64,
    ) -> Result<Vec<WeekLessons>, TransportError>;
}

// ==========================================
// 高校排课系统 - 课表领域模型
// ==========================================
// Schedule 是课次的命名容器, 携带来源信息与质量评分
// fitness_score 由优化器给出, 本核心不重新计算
// ==========================================

use crate::domain::types::{GenerationMethod, ScheduleKind, ScheduleStatus};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

// ==========================================
// Schedule - 课表
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schedule {
    pub id: i64,                     // 课表ID
    pub name: String,                // 课表名称
    pub semester_label: String,      // 学期标签, 如 "fall 2024"
    pub academic_year: String,       // 学年, 如 "2024/2025"
    pub status: ScheduleStatus,      // draft/active/archived
    pub kind: ScheduleKind,          // flat/semester (后端显式判别标签)

    // ===== 生成来源信息 =====
    pub fitness_score: Option<f64>,  // 优化器评分 [0,1]
    pub generation_method: Option<GenerationMethod>, // 生成方法
    pub generation_time: Option<f64>, // 生成耗时 (秒)
    pub generation_params: Option<serde_json::Value>, // 生成参数快照
    pub conflicts_count: u32,        // 生成时的冲突数
    pub lessons_count: u32,          // 课次数

    // ===== 时间与作者 =====
    pub created_at: Option<NaiveDateTime>,   // 创建时间
    pub updated_at: Option<NaiveDateTime>,   // 更新时间
    pub activated_at: Option<NaiveDateTime>, // 激活时间
    pub created_by: Option<String>,          // 创建人
}

impl Schedule {
    /// 是否为激活课表
    pub fn is_active(&self) -> bool {
        self.status == ScheduleStatus::Active
    }

    /// 是否为草稿
    pub fn is_draft(&self) -> bool {
        self.status == ScheduleStatus::Draft
    }

    /// 是否已归档
    pub fn is_archived(&self) -> bool {
        self.status == ScheduleStatus::Archived
    }
}

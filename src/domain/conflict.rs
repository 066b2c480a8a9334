// ==========================================
// 高校排课系统 - 冲突领域模型
// ==========================================
// Conflict 是派生视图, 从当前课次集合按需重算, 永不持久化
// ==========================================

use crate::domain::lesson::Lesson;
use crate::domain::types::ConflictType;
use serde::{Deserialize, Serialize};

// ==========================================
// Conflict - 资源占用冲突
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conflict {
    pub conflict_type: ConflictType, // teacher/room/group
    pub entity: String,              // 冲突实体显示名称
    pub day: u8,                     // 天序号
    pub time_slot: u8,               // 节次序号
    pub week_number: Option<u32>,    // 显式周冲突时携带, 循环冲突为 None
    pub message: String,             // 人类可读描述
    pub lesson_ids: Vec<i64>,        // 涉及课次
}

impl Conflict {
    /// 稳定排序键: 类型 → 天 → 节次
    pub fn sort_key(&self) -> (ConflictType, u8, u8) {
        (self.conflict_type, self.day, self.time_slot)
    }

    /// 冲突是否涉及指定课次
    pub fn involves(&self, lesson: &Lesson) -> bool {
        self.lesson_ids.contains(&lesson.id)
    }
}

// ==========================================
// 高校排课系统 - 学年历领域模型
// ==========================================
// 实体: AcademicYear / Semester / Week / LabeledRange
// 教学周由 CalendarWeekGenerator 批量生成, 整批替换
// ==========================================

use crate::domain::types::{SemesterType, WeekKind};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

// ==========================================
// AcademicYear - 学年
// ==========================================
// 不变式: 任意时刻恰有一个学年 is_current (由外部管理端维护)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AcademicYear {
    pub id: i64,              // 学年ID
    pub name: String,         // 显示名称, 如 "2024/2025"
    pub start_date: NaiveDate, // 起始日期
    pub end_date: NaiveDate,   // 结束日期
    pub is_current: bool,      // 是否当前学年
}

// ==========================================
// Semester - 学期
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Semester {
    pub id: i64,                   // 学期ID
    pub academic_year_id: i64,     // 所属学年
    pub semester_type: SemesterType, // 秋季/春季
    pub start_date: NaiveDate,     // 起始日期
    pub end_date: NaiveDate,       // 结束日期
    pub created_at: Option<NaiveDateTime>, // 创建时间
}

// ==========================================
// Week - 教学周
// ==========================================
// week_number 从 1 开始连续无空洞, 按时间顺序排列
// end_date = start_date + 6天, 末周可被学期结束日截短
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Week {
    pub semester_id: i64,      // 所属学期
    pub week_number: u32,      // 周序号 (1-based)
    pub start_date: NaiveDate, // 周起始日期
    pub end_date: NaiveDate,   // 周结束日期
    pub is_session: bool,      // 考试周
    pub is_vacation: bool,     // 假期周
}

impl Week {
    /// 判断日期是否落在本周内
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// 周类型: 考试周/假期周/普通教学周
    pub fn kind(&self) -> WeekKind {
        // is_session 与 is_vacation 互斥, 由生成器保证
        if self.is_session {
            WeekKind::Session
        } else if self.is_vacation {
            WeekKind::Vacation
        } else {
            WeekKind::Study
        }
    }

    /// 日期区间是否与本周有交集 (含端点)
    pub fn overlaps(&self, start: NaiveDate, end: NaiveDate) -> bool {
        start <= self.end_date && end >= self.start_date
    }
}

// ==========================================
// LabeledRange - 标注区间
// ==========================================
// 周生成的输入: 将考试/假期日期段映射到落入的教学周
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledRange {
    pub kind: RangeLabel,      // 标注类型
    pub start_date: NaiveDate, // 区间起始
    pub end_date: NaiveDate,   // 区间结束
}

/// 标注类型: 考试周段或假期周段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangeLabel {
    Session,  // 考试段
    Vacation, // 假期段
}

impl LabeledRange {
    pub fn session(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            kind: RangeLabel::Session,
            start_date,
            end_date,
        }
    }

    pub fn vacation(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            kind: RangeLabel::Vacation,
            start_date,
            end_date,
        }
    }
}

// ==========================================
// 高校排课系统 - 学期历存储
// ==========================================
// 职责: 持有一个学期的教学周集合, 提供独占式整批再生成
// 不变式: 对外永不暴露半写状态; 校验失败时旧集合原样保留
// total_weeks 为读取时重算 (len(weeks)), 无独立存储字段可发散
// ==========================================

use crate::domain::calendar::{LabeledRange, Semester, Week};
use crate::engine::calendar_generator::CalendarWeekGenerator;
use crate::engine::error::EngineResult;
use chrono::NaiveDate;
use serde::Serialize;
use tracing::warn;

/// 再生成结果
#[derive(Debug, Clone, Serialize)]
pub struct RegenerationOutcome {
    pub total_weeks: u32,
    /// 替换掉了既有周集合; 为 true 时旧周序号键控的课次已失效,
    /// 调用方必须向用户发出破坏性操作警告
    pub replaced_previous: bool,
}

// ==========================================
// SemesterCalendar - 学期历
// ==========================================

#[derive(Debug, Clone)]
pub struct SemesterCalendar {
    semester: Semester,
    weeks: Vec<Week>,
}

impl SemesterCalendar {
    pub fn new(semester: Semester) -> Self {
        Self {
            semester,
            weeks: Vec::new(),
        }
    }

    pub fn semester(&self) -> &Semester {
        &self.semester
    }

    /// 教学周集合, 按 week_number 升序
    pub fn weeks(&self) -> &[Week] {
        &self.weeks
    }

    /// 周总数 (读取时重算)
    pub fn total_weeks(&self) -> u32 {
        self.weeks.len() as u32
    }

    /// 按序号取周
    pub fn week(&self, week_number: u32) -> Option<&Week> {
        // week_number 连续无空洞, 直接按下标定位
        if week_number == 0 {
            return None;
        }
        self.weeks.get((week_number - 1) as usize)
    }

    /// 包含指定日期的教学周 ("本周"定位)
    pub fn week_for(&self, date: NaiveDate) -> Option<&Week> {
        self.weeks.iter().find(|w| w.contains(date))
    }

    /// 整批再生成教学周
    ///
    /// 全有或全无: 生成器校验失败时返回错误, 旧集合原样保留;
    /// 成功时整批替换, 旧周序号键控的课次随之失效
    pub fn regenerate(
        &mut self,
        generator: &CalendarWeekGenerator,
        labeled_ranges: &[LabeledRange],
    ) -> EngineResult<RegenerationOutcome> {
        let weeks = generator.generate(
            self.semester.id,
            self.semester.start_date,
            self.semester.end_date,
            labeled_ranges,
        )?;

        let replaced_previous = !self.weeks.is_empty();
        if replaced_previous {
            warn!(
                semester_id = self.semester.id,
                old_total = self.weeks.len(),
                new_total = weeks.len(),
                "教学周整批替换: 旧周序号键控的课次已失效"
            );
        }

        self.weeks = weeks;
        Ok(RegenerationOutcome {
            total_weeks: self.total_weeks(),
            replaced_previous,
        })
    }
}

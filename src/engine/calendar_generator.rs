// ==========================================
// 高校排课系统 - 教学周生成器
// ==========================================
// 职责: 由学期日期区间推导有序教学周序列, 并标注考试/假期周
// 纯函数: 相同输入产出相同周集合 (重复生成幂等)
// 全有或全无: 校验失败时不产出任何周, 调用方保留旧集合
// ==========================================

use crate::domain::calendar::{LabeledRange, RangeLabel, Week};
use crate::engine::error::{EngineError, EngineResult};
use chrono::{Duration, NaiveDate};
use tracing::{debug, info};

// ==========================================
// CalendarWeekGenerator - 教学周生成器
// ==========================================

pub struct CalendarWeekGenerator;

impl CalendarWeekGenerator {
    pub fn new() -> Self {
        Self
    }

    /// 生成学期教学周
    ///
    /// 规则:
    /// - 第1周从 start_date 起算, 之后每周顺延7天
    /// - 周结束日 = 起始日+6天, 末周截短到学期结束日 (仍计为第N周, 不丢弃)
    /// - 周与任一标注区间有交集 (含部分交叠) 即打上对应标记
    /// - 同一周同时命中考试段与假期段视为配置错误, 整批拒绝
    pub fn generate(
        &self,
        semester_id: i64,
        start_date: NaiveDate,
        end_date: NaiveDate,
        labeled_ranges: &[LabeledRange],
    ) -> EngineResult<Vec<Week>> {
        if start_date > end_date {
            return Err(EngineError::InvalidDateRange {
                start: start_date.to_string(),
                end: end_date.to_string(),
            });
        }

        for range in labeled_ranges {
            if range.start_date > range.end_date {
                return Err(EngineError::InvalidDateRange {
                    start: range.start_date.to_string(),
                    end: range.end_date.to_string(),
                });
            }
        }

        let mut weeks = Vec::new();
        let mut current = start_date;
        let mut week_number: u32 = 1;

        while current <= end_date {
            let week_start = current;
            let week_end = (current + Duration::days(6)).min(end_date);

            let is_session = labeled_ranges.iter().any(|r| {
                r.kind == RangeLabel::Session
                    && overlaps(week_start, week_end, r.start_date, r.end_date)
            });
            let is_vacation = labeled_ranges.iter().any(|r| {
                r.kind == RangeLabel::Vacation
                    && overlaps(week_start, week_end, r.start_date, r.end_date)
            });

            // 互斥校验: 不做静默仲裁, 整批拒绝
            if is_session && is_vacation {
                return Err(EngineError::ConflictingWeekLabels { week_number });
            }

            debug!(
                week_number,
                start = %week_start,
                end = %week_end,
                is_session,
                is_vacation,
                "生成教学周"
            );

            weeks.push(Week {
                semester_id,
                week_number,
                start_date: week_start,
                end_date: week_end,
                is_session,
                is_vacation,
            });

            current += Duration::days(7);
            week_number += 1;
        }

        info!(
            semester_id,
            total_weeks = weeks.len(),
            start = %start_date,
            end = %end_date,
            "教学周生成完成"
        );

        Ok(weeks)
    }
}

impl Default for CalendarWeekGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// 闭区间交集判断
fn overlaps(a_start: NaiveDate, a_end: NaiveDate, b_start: NaiveDate, b_end: NaiveDate) -> bool {
    a_start <= b_end && b_start <= a_end
}

// ==========================================
// 高校排课系统 - 学年历接口
// ==========================================
// 职责: 面向呈现层的教学周生成/查询入口
// 再生成是独占的破坏性操作: 旧周序号键控的课次随之失效,
// 结果中的 replaced_previous 供调用方弹出警告
// ==========================================

use crate::api::error::ApiResult;
use crate::domain::calendar::{LabeledRange, Week};
use crate::engine::calendar_generator::CalendarWeekGenerator;
use crate::store::calendar_store::{RegenerationOutcome, SemesterCalendar};
use tracing::info;

/// 整批再生成学期教学周
///
/// 全有或全无: 校验失败时学期历保持原状
pub fn regenerate_weeks(
    calendar: &mut SemesterCalendar,
    labeled_ranges: &[LabeledRange],
) -> ApiResult<RegenerationOutcome> {
    let generator = CalendarWeekGenerator::new();
    let outcome = calendar.regenerate(&generator, labeled_ranges)?;

    info!(
        semester_id = calendar.semester().id,
        total_weeks = outcome.total_weeks,
        replaced_previous = outcome.replaced_previous,
        "教学周再生成完成"
    );
    Ok(outcome)
}

/// 学期教学周列表, 按 week_number 升序
pub fn list_weeks(calendar: &SemesterCalendar) -> &[Week] {
    calendar.weeks()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::error::ApiError;
    use crate::domain::calendar::Semester;
    use crate::domain::types::SemesterType;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn calendar() -> SemesterCalendar {
        SemesterCalendar::new(Semester {
            id: 1,
            academic_year_id: 1,
            semester_type: SemesterType::Fall,
            start_date: date(2024, 9, 1),
            end_date: date(2024, 10, 12),
            created_at: None,
        })
    }

    #[test]
    fn test_regenerate_and_list() {
        let mut calendar = calendar();
        let outcome = regenerate_weeks(&mut calendar, &[]).unwrap();
        assert_eq!(outcome.total_weeks, 6);

        let weeks = list_weeks(&calendar);
        assert_eq!(weeks.len(), 6);
        assert_eq!(weeks[0].week_number, 1);
    }

    #[test]
    fn test_conflicting_labels_become_configuration_error() {
        let mut calendar = calendar();
        let ranges = [
            LabeledRange::session(date(2024, 9, 1), date(2024, 9, 2)),
            LabeledRange::vacation(date(2024, 9, 3), date(2024, 9, 4)),
        ];
        let result = regenerate_weeks(&mut calendar, &ranges);
        assert!(matches!(result, Err(ApiError::Configuration(_))));
        assert!(list_weeks(&calendar).is_empty());
    }
}

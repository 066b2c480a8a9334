// ==========================================
// 高校排课系统 - 课表视图接口
// ==========================================
// 职责: 面向呈现层的矩阵装配/冲突检测/课表读取与激活入口
// 矩阵与冲突均为按需重算的派生视图, 调用方不做缓存也足够便宜;
// 若缓存, 键为 (课次版本, 透视, 筛选, 周), 课次替换后整体失效
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::client::ScheduleReader;
use crate::domain::conflict::Conflict;
use crate::domain::lesson::Lesson;
use crate::domain::schedule::Schedule;
use crate::domain::types::{PivotDimension, ScheduleKind};
use crate::engine::conflict_detector::ConflictDetector;
use crate::engine::grid::{pivot_value, GridAssembler, ScheduleGrid};
use crate::store::lesson_store::LessonStore;
use crate::store::schedule_registry::ScheduleRegistry;
use serde::Serialize;
use tracing::info;

/// 装配课表矩阵
///
/// filter_value 必须存在于当前课次集合的对应维度中,
/// 引用未知实体按数据完整性错误处理, 不静默返回空矩阵
pub fn assemble_grid(
    store: &LessonStore,
    pivot: PivotDimension,
    filter_value: Option<&str>,
    week_number: Option<u32>,
) -> ApiResult<ScheduleGrid> {
    if let Some(value) = filter_value {
        let known = store
            .lessons()
            .iter()
            .any(|l| pivot_value(l, pivot) == value);
        if !known {
            return Err(ApiError::UnknownEntity {
                dimension: pivot.to_string(),
                entity: value.to_string(),
            });
        }
    }

    let assembler = GridAssembler::new();
    Ok(assembler.assemble(store.lessons(), pivot, filter_value, week_number))
}

/// 检测当前课次集合中的资源冲突
pub fn detect_conflicts(store: &LessonStore) -> Vec<Conflict> {
    ConflictDetector::new().detect(store.lessons())
}

/// 指定课次涉及的冲突 (点选课次时联动高亮)
pub fn conflicts_involving(store: &LessonStore, lesson: &Lesson) -> Vec<Conflict> {
    detect_conflicts(store)
        .into_iter()
        .filter(|c| c.involves(lesson))
        .collect()
}

/// 激活课表, 同学期其余激活课表原子归档
pub fn activate_schedule<'a>(
    registry: &'a mut ScheduleRegistry,
    schedule_id: i64,
) -> ApiResult<&'a Schedule> {
    Ok(registry.activate(schedule_id)?)
}

/// 从读取接口加载课表及其课次
///
/// 按后端显式携带的 kind 判别标签分派平铺/学期视图,
/// 摄入校验失败时存储保持原快照 (fail-closed)
pub async fn load_schedule<R>(
    reader: &R,
    store: &mut LessonStore,
    registry: &mut ScheduleRegistry,
    schedule_id: i64,
    total_weeks: u32,
) -> ApiResult<Schedule>
where
    R: ScheduleReader,
{
    let schedule = reader.fetch_schedule(schedule_id).await?;

    match schedule.kind {
        ScheduleKind::Flat => {
            let lessons = reader.fetch_lessons(schedule_id).await?;
            store.load_flat(schedule_id, lessons, total_weeks)?;
        }
        ScheduleKind::Semester => {
            let buckets = reader.fetch_semester_lessons(schedule_id).await?;
            store.load_semester(schedule_id, buckets, total_weeks)?;
        }
    }

    info!(
        schedule_id,
        kind = %schedule.kind,
        lessons_count = store.lessons().len(),
        "课表已加载"
    );

    registry.upsert(schedule.clone());
    Ok(schedule)
}

// ==========================================
// 学期课表统计
// ==========================================

/// 学期视图概览数字
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleStatistics {
    pub total_lessons: usize,            // 课次总数
    pub lessons_per_week: Vec<(u32, usize)>, // (周序号, 课次数), 升序
    pub busiest_week: Option<u32>,       // 课次最多的周
}

/// 按教学周汇总课次数
///
/// 循环课计入每一周; 仅统计显式出现的周序号区间 1..=total_weeks
pub fn semester_statistics(store: &LessonStore, total_weeks: u32) -> ScheduleStatistics {
    let lessons = store.lessons();
    let recurring = lessons.iter().filter(|l| l.week_number.is_none()).count();

    let mut lessons_per_week = Vec::with_capacity(total_weeks as usize);
    for week in 1..=total_weeks {
        let explicit = lessons
            .iter()
            .filter(|l| l.week_number == Some(week))
            .count();
        lessons_per_week.push((week, explicit + recurring));
    }

    let busiest_week = lessons_per_week
        .iter()
        .filter(|entry| entry.1 > 0)
        .max_by_key(|entry| entry.1)
        .map(|entry| entry.0);

    ScheduleStatistics {
        total_lessons: lessons.len(),
        lessons_per_week,
        busiest_week,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::LessonTypeCode;

    fn lesson(id: i64, day: u8, slot: u8, week: Option<u32>, teacher: &str) -> Lesson {
        Lesson {
            id,
            schedule_id: 1,
            day,
            time_slot: slot,
            week_number: week,
            subject: "Math".to_string(),
            subject_id: 1,
            teacher: teacher.to_string(),
            teacher_id: 1,
            room: "101".to_string(),
            room_id: 1,
            group: "G-1".to_string(),
            group_id: 1,
            lesson_type: LessonTypeCode::Lecture,
            is_online: false,
            location: None,
        }
    }

    #[test]
    fn test_unknown_filter_entity_is_rejected() {
        let mut store = LessonStore::new();
        store
            .load_flat(1, vec![lesson(1, 0, 0, None, "Ivanov")], 16)
            .unwrap();

        let result = assemble_grid(&store, PivotDimension::Teacher, Some("Nobody"), None);
        match result {
            Err(ApiError::UnknownEntity { dimension, entity }) => {
                assert_eq!(dimension, "teacher");
                assert_eq!(entity, "Nobody");
            }
            other => panic!("Expected UnknownEntity, got {:?}", other.map(|_| ())),
        }

        // 已知实体正常装配
        let grid = assemble_grid(&store, PivotDimension::Teacher, Some("Ivanov"), None).unwrap();
        assert_eq!(grid.cell(0, 0).len(), 1);
    }

    #[test]
    fn test_grid_overload_matches_conflict_detector() {
        // 矩阵多课次单元格 ⟺ 对应维度冲突 (完备性/正确性联动)
        let mut store = LessonStore::new();
        store
            .load_flat(
                1,
                vec![lesson(1, 0, 2, None, "Ivanov"), lesson(2, 0, 2, None, "Ivanov")],
                16,
            )
            .unwrap();

        let grid =
            assemble_grid(&store, PivotDimension::Teacher, Some("Ivanov"), None).unwrap();
        assert!(grid.has_overloaded_cell());

        let conflicts = detect_conflicts(&store);
        assert!(conflicts
            .iter()
            .any(|c| c.entity == "Ivanov" && c.lesson_ids.len() >= 2));
    }

    #[test]
    fn test_conflicts_involving_filters_by_lesson() {
        let involved = lesson(1, 0, 2, None, "Ivanov");
        let bystander = lesson(3, 2, 4, None, "Petrov");
        let mut store = LessonStore::new();
        store
            .load_flat(
                1,
                vec![
                    involved.clone(),
                    lesson(2, 0, 2, None, "Ivanov"),
                    bystander.clone(),
                ],
                16,
            )
            .unwrap();

        // 课次1与课次2同教师/同教室/同班级 → 三个维度各一条
        let hits = conflicts_involving(&store, &involved);
        assert_eq!(hits.len(), 3);
        assert!(hits.iter().all(|c| c.lesson_ids.contains(&involved.id)));

        // 无冲突课次不命中任何记录
        assert!(conflicts_involving(&store, &bystander).is_empty());
    }

    #[test]
    fn test_semester_statistics_counts_recurring_every_week() {
        let mut store = LessonStore::new();
        store
            .load_flat(
                1,
                vec![
                    lesson(1, 0, 0, None, "Ivanov"),
                    lesson(2, 1, 1, Some(2), "Petrov"),
                ],
                3,
            )
            .unwrap();

        let stats = semester_statistics(&store, 3);
        assert_eq!(stats.total_lessons, 2);
        assert_eq!(stats.lessons_per_week, vec![(1, 1), (2, 2), (3, 1)]);
        assert_eq!(stats.busiest_week, Some(2));
    }
}

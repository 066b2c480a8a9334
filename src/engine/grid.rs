// ==========================================
// 高校排课系统 - 课表网格装配器
// ==========================================
// 职责: 将课次列表透视为 天×节次 矩阵
// 透视维度仅决定筛选字段与候选值枚举, 不改变矩阵轴
// 确定性: 相同输入与参数下矩阵与候选值列表逐字节一致
// ==========================================

use crate::domain::lesson::{Lesson, DAYS_PER_WEEK, SLOTS_PER_DAY};
use crate::domain::types::PivotDimension;
use serde::Serialize;
use tracing::debug;

// ==========================================
// ScheduleGrid - 装配结果
// ==========================================

/// 天×节次 课次矩阵与筛选候选值
///
/// 单元格可以合法地包含多个课次; 这是呈现层区别渲染的信号,
/// 也正是 ConflictDetector 对相应维度标记冲突的条件
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleGrid {
    /// cells[day][slot] → 该时段课次, 保持输入顺序
    pub cells: Vec<Vec<Vec<Lesson>>>,
    /// 当前透视维度下的去重候选值, 按显示名称字典序
    pub filter_values: Vec<String>,
    /// 装配参数回显
    pub pivot: PivotDimension,
    pub filter_value: Option<String>,
    pub week_number: Option<u32>,
}

impl ScheduleGrid {
    /// 指定单元格的课次
    pub fn cell(&self, day: usize, slot: usize) -> &[Lesson] {
        &self.cells[day][slot]
    }

    /// 矩阵内课次总数
    pub fn lessons_count(&self) -> usize {
        self.cells
            .iter()
            .flat_map(|day| day.iter())
            .map(|cell| cell.len())
            .sum()
    }

    /// 是否存在多课次单元格 (呈现层冲突高亮信号)
    pub fn has_overloaded_cell(&self) -> bool {
        self.cells
            .iter()
            .flat_map(|day| day.iter())
            .any(|cell| cell.len() > 1)
    }
}

// ==========================================
// GridAssembler - 网格装配器
// ==========================================

pub struct GridAssembler;

impl GridAssembler {
    pub fn new() -> Self {
        Self
    }

    /// 装配课表矩阵
    ///
    /// # 参数
    /// - lessons: 课次快照
    /// - pivot: 透视维度 (班级/教师/教室)
    /// - filter_value: 维度筛选值, None 表示不筛选
    /// - week_number: 周视图序号; Some 时包含命中该周的显式课次与全部循环课,
    ///   None 为平铺视图, 包含全部课次
    pub fn assemble(
        &self,
        lessons: &[Lesson],
        pivot: PivotDimension,
        filter_value: Option<&str>,
        week_number: Option<u32>,
    ) -> ScheduleGrid {
        // 候选值来自输入课次全集 (与周筛选/实体筛选无关)
        let mut filter_values: Vec<String> = lessons
            .iter()
            .map(|l| pivot_value(l, pivot).to_string())
            .collect();
        filter_values.sort();
        filter_values.dedup();

        let scoped: Vec<&Lesson> = lessons
            .iter()
            .filter(|l| l.visible_in_week(week_number))
            .collect();

        let mut cells =
            vec![vec![Vec::<Lesson>::new(); SLOTS_PER_DAY]; DAYS_PER_WEEK];

        for lesson in &scoped {
            if let Some(value) = filter_value {
                if pivot_value(lesson, pivot) != value {
                    continue;
                }
            }
            // 摄入层已保证落位在网格内
            cells[lesson.day as usize][lesson.time_slot as usize].push((*lesson).clone());
        }

        debug!(
            %pivot,
            filter_value = filter_value.unwrap_or("<all>"),
            week_number,
            input_count = lessons.len(),
            placed_count = cells
                .iter()
                .flat_map(|d| d.iter())
                .map(|c| c.len())
                .sum::<usize>(),
            "课表矩阵装配完成"
        );

        ScheduleGrid {
            cells,
            filter_values,
            pivot,
            filter_value: filter_value.map(str::to_string),
            week_number,
        }
    }
}

impl Default for GridAssembler {
    fn default() -> Self {
        Self::new()
    }
}

/// 课次在指定维度上的显示值
pub fn pivot_value(lesson: &Lesson, pivot: PivotDimension) -> &str {
    match pivot {
        PivotDimension::Group => &lesson.group,
        PivotDimension::Teacher => &lesson.teacher,
        PivotDimension::Room => &lesson.room,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::LessonTypeCode;

    fn lesson(
        id: i64,
        day: u8,
        time_slot: u8,
        week_number: Option<u32>,
        teacher: &str,
        room: &str,
        group: &str,
    ) -> Lesson {
        Lesson {
            id,
            schedule_id: 1,
            day,
            time_slot,
            week_number,
            subject: "Math".to_string(),
            subject_id: 1,
            teacher: teacher.to_string(),
            teacher_id: 0,
            room: room.to_string(),
            room_id: 0,
            group: group.to_string(),
            group_id: 0,
            lesson_type: LessonTypeCode::Lecture,
            is_online: false,
            location: None,
        }
    }

    #[test]
    fn test_axes_are_always_day_by_slot() {
        let assembler = GridAssembler::new();
        let grid = assembler.assemble(&[], PivotDimension::Teacher, None, None);

        assert_eq!(grid.cells.len(), DAYS_PER_WEEK);
        for day in &grid.cells {
            assert_eq!(day.len(), SLOTS_PER_DAY);
        }
        assert!(grid.filter_values.is_empty());
    }

    #[test]
    fn test_filter_values_sorted_and_distinct() {
        let lessons = vec![
            lesson(1, 0, 0, None, "Petrov", "101", "G-2"),
            lesson(2, 1, 1, None, "Ivanov", "102", "G-1"),
            lesson(3, 2, 2, None, "Petrov", "103", "G-3"),
        ];
        let assembler = GridAssembler::new();

        let grid = assembler.assemble(&lessons, PivotDimension::Teacher, None, None);
        assert_eq!(grid.filter_values, vec!["Ivanov", "Petrov"]);

        let grid = assembler.assemble(&lessons, PivotDimension::Group, None, None);
        assert_eq!(grid.filter_values, vec!["G-1", "G-2", "G-3"]);
    }

    #[test]
    fn test_entity_filter_prefilters_cells_not_values() {
        let lessons = vec![
            lesson(1, 0, 0, None, "Ivanov", "101", "G-1"),
            lesson(2, 0, 0, None, "Petrov", "102", "G-2"),
        ];
        let assembler = GridAssembler::new();
        let grid = assembler.assemble(&lessons, PivotDimension::Teacher, Some("Ivanov"), None);

        // 候选值枚举不受实体筛选影响
        assert_eq!(grid.filter_values, vec!["Ivanov", "Petrov"]);
        assert_eq!(grid.cell(0, 0).len(), 1);
        assert_eq!(grid.cell(0, 0)[0].teacher, "Ivanov");
    }

    #[test]
    fn test_week_view_includes_recurring_lessons() {
        let lessons = vec![
            lesson(1, 0, 2, None, "Ivanov", "101", "G-1"),    // 循环课
            lesson(2, 0, 2, Some(3), "Petrov", "102", "G-2"), // 仅第3周
        ];
        let assembler = GridAssembler::new();

        let week3 = assembler.assemble(&lessons, PivotDimension::Group, None, Some(3));
        assert_eq!(week3.cell(0, 2).len(), 2);

        let week5 = assembler.assemble(&lessons, PivotDimension::Group, None, Some(5));
        assert_eq!(week5.cell(0, 2).len(), 1);
        assert_eq!(week5.cell(0, 2)[0].id, 1);

        // 平铺视图包含全部
        let flat = assembler.assemble(&lessons, PivotDimension::Group, None, None);
        assert_eq!(flat.cell(0, 2).len(), 2);
    }

    #[test]
    fn test_overloaded_cell_is_kept_not_filtered() {
        let lessons = vec![
            lesson(1, 2, 4, None, "Ivanov", "101", "G-1"),
            lesson(2, 2, 4, None, "Ivanov", "102", "G-2"),
        ];
        let assembler = GridAssembler::new();
        let grid = assembler.assemble(&lessons, PivotDimension::Teacher, None, None);

        assert_eq!(grid.cell(2, 4).len(), 2);
        assert!(grid.has_overloaded_cell());
    }

    #[test]
    fn test_determinism_byte_identical() {
        let lessons = vec![
            lesson(3, 0, 0, Some(1), "Sidorov", "201", "G-3"),
            lesson(1, 0, 0, None, "Ivanov", "101", "G-1"),
            lesson(2, 4, 6, None, "Petrov", "102", "G-2"),
        ];
        let assembler = GridAssembler::new();

        let a = assembler.assemble(&lessons, PivotDimension::Room, Some("101"), Some(1));
        let b = assembler.assemble(&lessons, PivotDimension::Room, Some("101"), Some(1));

        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }
}

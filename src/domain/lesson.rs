// ==========================================
// 高校排课系统 - 课次领域模型
// ==========================================
// Lesson 为优化器产出的落位快照, 一经返回不可变
// 网格常量: 5天(周一-周五) × 每天7节, 节次时间为系统级约定
// ==========================================

use crate::domain::types::LessonTypeCode;
use serde::{Deserialize, Serialize};

// ==========================================
// 网格常量
// ==========================================
// 任何改动都是破坏性的结构变更 (矩阵与冲突逻辑均依赖)

/// 教学日数量 (周一至周五)
pub const DAYS_PER_WEEK: usize = 5;

/// 每天节次数量
pub const SLOTS_PER_DAY: usize = 7;

/// 教学日名称
pub const DAY_NAMES: [&str; DAYS_PER_WEEK] = ["Mon", "Tue", "Wed", "Thu", "Fri"];

/// 节次时间边界
pub const SLOT_TIMES: [&str; SLOTS_PER_DAY] = [
    "08:00-09:30",
    "09:40-11:10",
    "11:20-12:50",
    "13:30-15:00",
    "15:10-16:40",
    "16:50-18:20",
    "18:30-20:00",
];

// ==========================================
// LessonType - 课程类型参考数据
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LessonType {
    pub code: LessonTypeCode,       // 类型代码
    pub display_name: String,       // 显示名称
    pub color: String,              // 展示颜色 (十六进制)
    pub duration_hours: u32,        // 学时
    pub requires_special_room: bool, // 是否需要专用教室
    pub can_be_online: bool,        // 是否可线上进行
}

impl LessonType {
    fn entry(
        code: LessonTypeCode,
        display_name: &str,
        color: &str,
        duration_hours: u32,
        requires_special_room: bool,
        can_be_online: bool,
    ) -> Self {
        Self {
            code,
            display_name: display_name.to_string(),
            color: color.to_string(),
            duration_hours,
            requires_special_room,
            can_be_online,
        }
    }

    /// 课程类型参考目录 (展示层选择器与图例数据源)
    pub fn catalogue() -> Vec<LessonType> {
        use LessonTypeCode::*;
        vec![
            Self::entry(Lecture, "Lecture", "#3B82F6", 2, false, true),
            Self::entry(Seminar, "Seminar", "#10B981", 2, false, true),
            Self::entry(Lab, "Lab", "#8B5CF6", 2, true, false),
            Self::entry(Practice, "Practice", "#F59E0B", 2, false, true),
            Self::entry(FieldTrip, "Field trip", "#EF4444", 4, false, false),
            Self::entry(TrainingCenter, "Training center", "#EC4899", 4, false, false),
            Self::entry(ProductionVisit, "Production visit", "#14B8A6", 4, false, false),
            Self::entry(Exercises, "Exercises", "#6366F1", 6, false, false),
            Self::entry(Individual, "Individual session", "#78716C", 1, false, true),
            Self::entry(Exam, "Exam", "#DC2626", 3, false, false),
            Self::entry(Test, "Test", "#FBBF24", 2, false, false),
        ]
    }
}

// ==========================================
// Lesson - 课次落位
// ==========================================
// week_number 为 None 表示全学期循环课 (每周都上, 含考试/假期周)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lesson {
    pub id: i64,                     // 课次ID
    pub schedule_id: i64,            // 所属课表
    pub day: u8,                     // 天序号 0=周一..4=周五
    pub time_slot: u8,               // 节次序号 0..6
    pub week_number: Option<u32>,    // 教学周序号, None=循环课
    pub subject: String,             // 课程名称
    pub subject_id: i64,             // 课程ID
    pub teacher: String,             // 教师姓名
    pub teacher_id: i64,             // 教师ID
    pub room: String,                // 教室名称
    pub room_id: i64,                // 教室ID
    pub group: String,               // 班级名称
    pub group_id: i64,               // 班级ID
    pub lesson_type: LessonTypeCode, // 课程类型
    pub is_online: bool,             // 线上课
    pub location: Option<String>,    // 自由文本地点 (校外实习等)
}

impl Lesson {
    /// 教学日名称
    pub fn day_name(&self) -> &'static str {
        DAY_NAMES
            .get(self.day as usize)
            .copied()
            .unwrap_or("?")
    }

    /// 节次时间
    pub fn time_name(&self) -> &'static str {
        SLOT_TIMES
            .get(self.time_slot as usize)
            .copied()
            .unwrap_or("?")
    }

    /// 落位是否在固定网格内
    pub fn in_grid(&self) -> bool {
        (self.day as usize) < DAYS_PER_WEEK && (self.time_slot as usize) < SLOTS_PER_DAY
    }

    /// 课次是否出现在指定教学周视图中
    /// None 表示平铺视图, 包含全部课次
    pub fn visible_in_week(&self, week_number: Option<u32>) -> bool {
        match (week_number, self.week_number) {
            (None, _) => true,
            (Some(_), None) => true, // 循环课每周可见
            (Some(view), Some(own)) => view == own,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::LessonTypeCode;

    fn lesson(day: u8, time_slot: u8, week_number: Option<u32>) -> Lesson {
        Lesson {
            id: 1,
            schedule_id: 1,
            day,
            time_slot,
            week_number,
            subject: "Math".to_string(),
            subject_id: 1,
            teacher: "Ivanov".to_string(),
            teacher_id: 1,
            room: "101".to_string(),
            room_id: 1,
            group: "G-101".to_string(),
            group_id: 1,
            lesson_type: LessonTypeCode::Lecture,
            is_online: false,
            location: None,
        }
    }

    #[test]
    fn test_day_and_time_names() {
        let l = lesson(0, 2, None);
        assert_eq!(l.day_name(), "Mon");
        assert_eq!(l.time_name(), "11:20-12:50");

        // 越界落位不会 panic, 仅返回占位符
        let bad = lesson(9, 9, None);
        assert_eq!(bad.day_name(), "?");
        assert_eq!(bad.time_name(), "?");
        assert!(!bad.in_grid());
    }

    #[test]
    fn test_catalogue_covers_every_code_once() {
        let catalogue = LessonType::catalogue();
        assert_eq!(catalogue.len(), 11);

        let codes: std::collections::HashSet<LessonTypeCode> =
            catalogue.iter().map(|t| t.code).collect();
        assert_eq!(codes.len(), 11);

        // 需专用教室的类型不可线上进行
        for entry in &catalogue {
            assert!(!(entry.requires_special_room && entry.can_be_online));
            assert!(entry.duration_hours >= 1);
        }
    }

    #[test]
    fn test_visible_in_week() {
        let recurring = lesson(1, 1, None);
        let week3 = lesson(1, 1, Some(3));

        // 平铺视图包含全部
        assert!(recurring.visible_in_week(None));
        assert!(week3.visible_in_week(None));

        // 周视图: 循环课每周可见, 显式周仅在命中时可见
        assert!(recurring.visible_in_week(Some(5)));
        assert!(week3.visible_in_week(Some(3)));
        assert!(!week3.visible_in_week(Some(5)));
    }
}

// ==========================================
// 高校排课系统 - 冲突检测器
// ==========================================
// 职责: 扫描课次集合, 按教师/教室/班级三个维度独立检出资源重复占用
// 纯函数无状态: 相同课次集合产出顺序稳定的冲突列表
// 稳定顺序: 类型 {teacher, room, group} → 天 → 节次
// ==========================================

use crate::domain::conflict::Conflict;
use crate::domain::lesson::{Lesson, DAYS_PER_WEEK, SLOTS_PER_DAY};
use crate::domain::types::ConflictType;
use std::collections::BTreeMap;
use tracing::debug;

// ==========================================
// ConflictDetector - 冲突检测器
// ==========================================

pub struct ConflictDetector;

impl ConflictDetector {
    pub fn new() -> Self {
        Self
    }

    /// 检测课次集合中的资源占用冲突
    ///
    /// 周作用域规则:
    /// - 两个循环课 (week=None) 每周交叠 → 产出一条 week=None 冲突
    /// - 循环课与显式周课在该显式周交叠 → 产出一条 week=Some(N) 冲突
    /// - 两个显式周课仅在周序号相等时交叠
    ///
    /// 同一时段可同时产出多种类型的冲突 (如教师与教室同时被占),
    /// 它们是独立的冲突记录, 不做合并
    pub fn detect(&self, lessons: &[Lesson]) -> Vec<Conflict> {
        let mut conflicts = Vec::new();

        // 外层按类型迭代即天然满足稳定排序首键
        for conflict_type in [ConflictType::Teacher, ConflictType::Room, ConflictType::Group] {
            for day in 0..DAYS_PER_WEEK as u8 {
                for slot in 0..SLOTS_PER_DAY as u8 {
                    let bucket: Vec<&Lesson> = lessons
                        .iter()
                        .filter(|l| l.day == day && l.time_slot == slot)
                        .collect();
                    if bucket.len() < 2 {
                        continue;
                    }
                    self.detect_in_bucket(conflict_type, &bucket, &mut conflicts);
                }
            }
        }

        debug!(
            lessons_count = lessons.len(),
            conflicts_count = conflicts.len(),
            "冲突检测完成"
        );

        conflicts
    }

    /// 在单个 (天, 节次) 桶内按一个维度检测
    fn detect_in_bucket(
        &self,
        conflict_type: ConflictType,
        bucket: &[&Lesson],
        out: &mut Vec<Conflict>,
    ) {
        // 按资源标识分组, BTreeMap 保证实体遍历顺序稳定
        let mut by_entity: BTreeMap<(String, i64), Vec<&Lesson>> = BTreeMap::new();
        for lesson in bucket {
            let (name, id) = entity_of(lesson, conflict_type);
            by_entity
                .entry((name.to_string(), id))
                .or_default()
                .push(lesson);
        }

        for ((entity, _id), group) in by_entity {
            if group.len() < 2 {
                continue;
            }
            // 桶内课次共享同一 (天, 节次), 任取一条作展示用样本
            let sample: &Lesson = group[0];

            let recurring: Vec<&&Lesson> =
                group.iter().filter(|l| l.week_number.is_none()).collect();
            let mut explicit: BTreeMap<u32, Vec<&&Lesson>> = BTreeMap::new();
            for lesson in &group {
                if let Some(week) = lesson.week_number {
                    explicit.entry(week).or_default().push(lesson);
                }
            }

            // 循环课之间: 每周都交叠
            if recurring.len() >= 2 {
                out.push(self.build_conflict(
                    conflict_type,
                    &entity,
                    sample,
                    None,
                    recurring.iter().map(|l| l.id).collect(),
                ));
            }

            // 显式周: 同周课次加上全部循环课构成一个交叠组
            for (week, week_lessons) in explicit {
                if week_lessons.len() + recurring.len() < 2 {
                    continue;
                }
                let mut ids: Vec<i64> = week_lessons.iter().map(|l| l.id).collect();
                ids.extend(recurring.iter().map(|l| l.id));
                out.push(self.build_conflict(
                    conflict_type,
                    &entity,
                    sample,
                    Some(week),
                    ids,
                ));
            }
        }
    }

    fn build_conflict(
        &self,
        conflict_type: ConflictType,
        entity: &str,
        sample: &Lesson,
        week_number: Option<u32>,
        lesson_ids: Vec<i64>,
    ) -> Conflict {
        let noun = match conflict_type {
            ConflictType::Teacher => "教师",
            ConflictType::Room => "教室",
            ConflictType::Group => "班级",
        };
        let day_name = sample.day_name();
        let time_name = sample.time_name();
        let message = match week_number {
            Some(week) => format!(
                "{}{}在第{}周 {} {} 被重复安排 ({}门课)",
                noun,
                entity,
                week,
                day_name,
                time_name,
                lesson_ids.len()
            ),
            None => format!(
                "{}{}在每周 {} {} 被重复安排 ({}门课)",
                noun,
                entity,
                day_name,
                time_name,
                lesson_ids.len()
            ),
        };

        Conflict {
            conflict_type,
            entity: entity.to_string(),
            day: sample.day,
            time_slot: sample.time_slot,
            week_number,
            message,
            lesson_ids,
        }
    }
}

impl Default for ConflictDetector {
    fn default() -> Self {
        Self::new()
    }
}

/// 课次在指定冲突维度上的资源标识
fn entity_of(lesson: &Lesson, conflict_type: ConflictType) -> (&str, i64) {
    match conflict_type {
        ConflictType::Teacher => (&lesson.teacher, lesson.teacher_id),
        ConflictType::Room => (&lesson.room, lesson.room_id),
        ConflictType::Group => (&lesson.group, lesson.group_id),
    }
}

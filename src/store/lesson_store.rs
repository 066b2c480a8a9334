// ==========================================
// 高校排课系统 - 课次快照存储
// ==========================================
// 职责: 持有后端返回的课次列表 (平铺或按周分桶摄入)
// 除索引与摄入校验外不含业务逻辑
// 课次一经摄入不可变; 整批替换, 版本号单调递增供缓存键使用
// ==========================================

use crate::client::WeekLessons;
use crate::domain::lesson::Lesson;
use crate::store::error::{StoreError, StoreResult};
use tracing::{info, warn};

// ==========================================
// LessonStore - 课次快照存储
// ==========================================

#[derive(Debug, Default)]
pub struct LessonStore {
    schedule_id: Option<i64>,
    lessons: Vec<Lesson>,
    version: u64,
}

impl LessonStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 当前快照版本, 课次集合每次替换后递增
    /// 缓存 (课次版本, 透视, 筛选, 周) 键中的第一分量
    pub fn version(&self) -> u64 {
        self.version
    }

    /// 当前持有课次所属课表
    pub fn schedule_id(&self) -> Option<i64> {
        self.schedule_id
    }

    /// 课次快照
    pub fn lessons(&self) -> &[Lesson] {
        &self.lessons
    }

    /// 摄入平铺课次列表
    ///
    /// fail-closed: 任一课次落位超出固定 5×7 网格,
    /// 或显式周序号超出学期周数, 即整批拒绝, 原有快照保持不变
    pub fn load_flat(
        &mut self,
        schedule_id: i64,
        lessons: Vec<Lesson>,
        total_weeks: u32,
    ) -> StoreResult<()> {
        validate_lessons(&lessons, total_weeks)?;
        self.replace(schedule_id, lessons);
        Ok(())
    }

    /// 摄入按周分桶的学期视图
    ///
    /// 分桶被压平保存; 桶内缺失周序号的课次继承桶的周序号,
    /// 已带周序号的课次必须与所在桶一致
    pub fn load_semester(
        &mut self,
        schedule_id: i64,
        buckets: Vec<WeekLessons>,
        total_weeks: u32,
    ) -> StoreResult<()> {
        let mut flat = Vec::new();
        for bucket in buckets {
            if bucket.week_number == 0 || bucket.week_number > total_weeks {
                return Err(StoreError::DataIntegrity(format!(
                    "分桶周序号越界: week={} total_weeks={}",
                    bucket.week_number, total_weeks
                )));
            }
            for mut lesson in bucket.lessons {
                match lesson.week_number {
                    None => lesson.week_number = Some(bucket.week_number),
                    Some(own) if own != bucket.week_number => {
                        return Err(StoreError::DataIntegrity(format!(
                            "课次{}周序号与分桶不一致: own={} bucket={}",
                            lesson.id, own, bucket.week_number
                        )));
                    }
                    Some(_) => {}
                }
                flat.push(lesson);
            }
        }

        validate_lessons(&flat, total_weeks)?;
        self.replace(schedule_id, flat);
        Ok(())
    }

    /// 清空快照 (课表被删除后)
    pub fn clear(&mut self) {
        self.schedule_id = None;
        self.lessons.clear();
        self.version += 1;
        info!(version = self.version, "课次快照已清空");
    }

    fn replace(&mut self, schedule_id: i64, lessons: Vec<Lesson>) {
        self.schedule_id = Some(schedule_id);
        self.lessons = lessons;
        self.version += 1;
        info!(
            schedule_id,
            lessons_count = self.lessons.len(),
            version = self.version,
            "课次快照已替换"
        );
    }
}

/// 摄入校验: 落位必须在固定网格内, 显式周序号必须是已知教学周
fn validate_lessons(lessons: &[Lesson], total_weeks: u32) -> StoreResult<()> {
    for lesson in lessons {
        if !lesson.in_grid() {
            warn!(
                lesson_id = lesson.id,
                day = lesson.day,
                slot = lesson.time_slot,
                "课次落位越界, 整批拒绝"
            );
            return Err(StoreError::DataIntegrity(format!(
                "课次{}落位越界: day={} slot={}",
                lesson.id, lesson.day, lesson.time_slot
            )));
        }
        if let Some(week) = lesson.week_number {
            if week == 0 || week > total_weeks {
                warn!(
                    lesson_id = lesson.id,
                    week,
                    total_weeks,
                    "课次引用未知教学周, 整批拒绝"
                );
                return Err(StoreError::DataIntegrity(format!(
                    "课次{}引用未知教学周: week={} total_weeks={}",
                    lesson.id, week, total_weeks
                )));
            }
        }
    }
    Ok(())
}

// ==========================================
// 测试辅助函数与模拟协作方
// ==========================================

#![allow(dead_code)]

use async_trait::async_trait;
use campus_timetable::client::{
    GenerationReply, GenerationRequest, OptimizerService, ScheduleReader, TransportError,
    WeekLessons,
};
use campus_timetable::domain::calendar::Semester;
use campus_timetable::domain::lesson::Lesson;
use campus_timetable::domain::schedule::Schedule;
use campus_timetable::domain::types::{
    GenerationMethod, LessonTypeCode, ScheduleKind, ScheduleStatus, SemesterType,
};
use chrono::NaiveDate;
use std::sync::Mutex;
use tokio::sync::Notify;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// 创建测试用学期 (2024秋季, 9月2日-12月29日, 恰好17周)
pub fn test_semester() -> Semester {
    Semester {
        id: 1,
        academic_year_id: 1,
        semester_type: SemesterType::Fall,
        start_date: date(2024, 9, 2),
        end_date: date(2024, 12, 29),
        created_at: None,
    }
}

/// 创建测试用课次
pub fn test_lesson(
    id: i64,
    day: u8,
    slot: u8,
    week: Option<u32>,
    teacher: (&str, i64),
    room: (&str, i64),
    group: (&str, i64),
) -> Lesson {
    Lesson {
        id,
        schedule_id: 1,
        day,
        time_slot: slot,
        week_number: week,
        subject: "Math".to_string(),
        subject_id: 1,
        teacher: teacher.0.to_string(),
        teacher_id: teacher.1,
        room: room.0.to_string(),
        room_id: room.1,
        group: group.0.to_string(),
        group_id: group.1,
        lesson_type: LessonTypeCode::Lecture,
        is_online: false,
        location: None,
    }
}

/// 创建测试用课表元数据
pub fn test_schedule(id: i64, kind: ScheduleKind, status: ScheduleStatus) -> Schedule {
    Schedule {
        id,
        name: format!("Schedule {}", id),
        semester_label: "fall 2024".to_string(),
        academic_year: "2024/2025".to_string(),
        status,
        kind,
        fitness_score: Some(0.92),
        generation_method: Some(GenerationMethod::Genetic),
        generation_time: Some(30.0),
        generation_params: None,
        conflicts_count: 0,
        lessons_count: 0,
        created_at: None,
        updated_at: None,
        activated_at: None,
        created_by: Some("test_user".to_string()),
    }
}

// ==========================================
// 模拟优化器
// ==========================================

/// 立即返回脚本化应答的优化器
pub struct ScriptedOptimizer {
    replies: Mutex<Vec<Result<GenerationReply, TransportError>>>,
}

impl ScriptedOptimizer {
    pub fn new(replies: Vec<Result<GenerationReply, TransportError>>) -> Self {
        Self {
            replies: Mutex::new(replies),
        }
    }

    pub fn completed(schedule_id: i64, lessons_count: u32, fitness: f64) -> Self {
        Self::new(vec![Ok(GenerationReply::Completed {
            schedule_id,
            lessons_count,
            fitness,
            time_seconds: 12.5,
        })])
    }
}

#[async_trait]
impl OptimizerService for ScriptedOptimizer {
    async fn generate(
        &self,
        _request: &GenerationRequest,
    ) -> Result<GenerationReply, TransportError> {
        self.replies
            .lock()
            .expect("replies lock poisoned")
            .remove(0)
    }
}

/// 在放行信号前保持挂起的优化器 (重入测试用)
pub struct GatedOptimizer {
    pub release: Notify,
    reply: Mutex<Option<GenerationReply>>,
}

impl GatedOptimizer {
    pub fn new(reply: GenerationReply) -> Self {
        Self {
            release: Notify::new(),
            reply: Mutex::new(Some(reply)),
        }
    }
}

#[async_trait]
impl OptimizerService for GatedOptimizer {
    async fn generate(
        &self,
        _request: &GenerationRequest,
    ) -> Result<GenerationReply, TransportError> {
        self.release.notified().await;
        Ok(self
            .reply
            .lock()
            .expect("reply lock poisoned")
            .take()
            .expect("gated optimizer called twice"))
    }
}

/// 永不应答的优化器 (超时测试用)
pub struct SilentOptimizer;

#[async_trait]
impl OptimizerService for SilentOptimizer {
    async fn generate(
        &self,
        _request: &GenerationRequest,
    ) -> Result<GenerationReply, TransportError> {
        std::future::pending().await
    }
}

// ==========================================
// 模拟课表读取接口
// ==========================================

pub struct FixtureReader {
    pub schedule: Schedule,
    pub flat: Vec<Lesson>,
    pub buckets: Vec<WeekLessons>,
}

#[async_trait]
impl ScheduleReader for FixtureReader {
    async fn fetch_schedule(&self, _schedule_id: i64) -> Result<Schedule, TransportError> {
        Ok(self.schedule.clone())
    }

    async fn fetch_lessons(&self, _schedule_id: i64) -> Result<Vec<Lesson>, TransportError> {
        Ok(self.flat.clone())
    }

    async fn fetch_semester_lessons(
        &self,
        _schedule_id: i64,
    ) -> Result<Vec<WeekLessons>, TransportError> {
        Ok(self.buckets.clone())
    }
}

// ==========================================
// 高校排课系统 - 领域层
// ==========================================
// 职责: 实体与类型定义, 不含业务流程
// ==========================================

pub mod calendar;
pub mod conflict;
pub mod lesson;
pub mod schedule;
pub mod types;

pub use calendar::{AcademicYear, LabeledRange, RangeLabel, Semester, Week};
pub use conflict::Conflict;
pub use lesson::{
    Lesson, LessonType, DAYS_PER_WEEK, DAY_NAMES, SLOTS_PER_DAY, SLOT_TIMES,
};
pub use schedule::Schedule;
pub use types::{
    ConflictType, GenerationMethod, LessonTypeCode, PivotDimension, ScheduleKind,
    ScheduleStatus, SemesterType, WeekKind,
};

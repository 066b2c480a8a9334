// ==========================================
// 高校排课系统 - 存储层
// ==========================================
// 职责: 内存快照持有, 摄入校验, 缓存版本键
// 冲突与矩阵是派生视图, 永不落入存储
// ==========================================

pub mod calendar_store;
pub mod error;
pub mod lesson_store;
pub mod schedule_registry;

pub use calendar_store::{RegenerationOutcome, SemesterCalendar};
pub use error::{StoreError, StoreResult};
pub use lesson_store::LessonStore;
pub use schedule_registry::ScheduleRegistry;

// ==========================================
// 高校排课系统 - 引擎层
// ==========================================
// 四个核心组件:
//   CalendarWeekGenerator - 教学周推导
//   GridAssembler         - 课表矩阵装配
//   ConflictDetector      - 资源冲突检测
//   GenerationOrchestrator - 生成请求编排
// 除编排器外均为同步纯函数, 无内部状态, 按需重算
// ==========================================

pub mod calendar_generator;
pub mod conflict_detector;
pub mod error;
pub mod grid;
pub mod orchestrator;

pub use calendar_generator::CalendarWeekGenerator;
pub use conflict_detector::ConflictDetector;
pub use error::{EngineError, EngineResult};
pub use grid::{GridAssembler, ScheduleGrid};
pub use orchestrator::{
    GenerationFailure, GenerationOrchestrator, GenerationState, GenerationSummary,
};

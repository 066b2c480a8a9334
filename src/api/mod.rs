// ==========================================
// 高校排课系统 - API 层
// ==========================================
// 呈现层与核心的唯一交互面:
//   (1) 教学周生成     - calendar_api
//   (2) 矩阵装配/冲突  - timetable_api
//   (3) 生成流程       - generation_api
// 本层不触及路由/存储/渲染
// ==========================================

pub mod calendar_api;
pub mod error;
pub mod generation_api;
pub mod session;
pub mod timetable_api;

pub use error::{ApiError, ApiResult};
pub use session::SessionContext;
pub use timetable_api::ScheduleStatistics;

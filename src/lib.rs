// ==========================================
// 高校排课系统 - 课表编排核心库
// ==========================================
// 系统定位: 课表呈现与管理核心 (优化器为外部协作方)
// 三项核心能力: 教学周推导 / 多维课表透视 / 生成流程编排
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 存储层 - 内存快照与摄入校验
pub mod store;

// 引擎层 - 周生成/矩阵装配/冲突检测/生成编排
pub mod engine;

// 外部协作方契约 - 优化器服务与课表读取
pub mod client;

// 配置层 - 运行参数
pub mod config;

// 日志系统
pub mod logging;

// API 层 - 呈现层交互面
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{
    ConflictType, GenerationMethod, LessonTypeCode, PivotDimension, ScheduleKind,
    ScheduleStatus, SemesterType, WeekKind,
};

// 领域实体
pub use domain::{
    AcademicYear, Conflict, LabeledRange, Lesson, LessonType, Schedule, Semester, Week,
};

// 网格常量
pub use domain::lesson::{DAYS_PER_WEEK, DAY_NAMES, SLOTS_PER_DAY, SLOT_TIMES};

// 引擎组件
pub use engine::{
    CalendarWeekGenerator, ConflictDetector, GenerationFailure, GenerationOrchestrator,
    GenerationState, GenerationSummary, GridAssembler, ScheduleGrid,
};

// 存储组件
pub use store::{LessonStore, ScheduleRegistry, SemesterCalendar};

// 协作方契约
pub use client::{
    GenerationReply, GenerationRequest, OptimizerService, ScheduleReader, TransportError,
    WeekLessons,
};

// 配置
pub use config::CoreConfig;

// API
pub use api::{ApiError, ApiResult, SessionContext};

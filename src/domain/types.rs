// ==========================================
// 高校排课系统 - 领域类型定义
// ==========================================
// 序列化格式: snake_case (与后端接口一致)
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 学期类型 (Semester Type)
// ==========================================
// 秋季: 9月-1月; 春季: 2月-6月
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SemesterType {
    Fall,   // 秋季学期
    Spring, // 春季学期
}

impl fmt::Display for SemesterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SemesterType::Fall => write!(f, "fall"),
            SemesterType::Spring => write!(f, "spring"),
        }
    }
}

// ==========================================
// 教学周类型 (Week Kind)
// ==========================================
// 考试周与假期周互斥, 其余为普通教学周
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeekKind {
    Study,    // 普通教学周
    Session,  // 考试周
    Vacation, // 假期周
}

impl fmt::Display for WeekKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeekKind::Study => write!(f, "study"),
            WeekKind::Session => write!(f, "session"),
            WeekKind::Vacation => write!(f, "vacation"),
        }
    }
}

// ==========================================
// 课表状态 (Schedule Status)
// ==========================================
// 同一学期同时最多一份 active 课表
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScheduleStatus {
    Draft,    // 草稿
    Active,   // 激活
    Archived, // 归档
}

impl fmt::Display for ScheduleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleStatus::Draft => write!(f, "draft"),
            ScheduleStatus::Active => write!(f, "active"),
            ScheduleStatus::Archived => write!(f, "archived"),
        }
    }
}

// ==========================================
// 课表形态 (Schedule Kind)
// ==========================================
// 后端显式携带的判别标签, 取代旧版按对象形状猜测视图的做法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScheduleKind {
    Flat,     // 平铺课表 (不分周)
    Semester, // 学期课表 (按教学周分桶)
}

impl fmt::Display for ScheduleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleKind::Flat => write!(f, "flat"),
            ScheduleKind::Semester => write!(f, "semester"),
        }
    }
}

// ==========================================
// 冲突类型 (Conflict Type)
// ==========================================
// 仅资源占用驱动冲突: 教师/教室/班级
// 顺序即冲突列表的稳定排序首键
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictType {
    Teacher, // 教师同一时段被重复安排
    Room,    // 教室同一时段被重复占用
    Group,   // 班级同一时段有多门课
}

impl fmt::Display for ConflictType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConflictType::Teacher => write!(f, "teacher"),
            ConflictType::Room => write!(f, "room"),
            ConflictType::Group => write!(f, "group"),
        }
    }
}

// ==========================================
// 透视维度 (Pivot Dimension)
// ==========================================
// 课表矩阵的筛选/枚举维度, 不改变矩阵轴 (轴恒为 天×节次)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PivotDimension {
    Group,   // 按班级
    Teacher, // 按教师
    Room,    // 按教室
}

impl fmt::Display for PivotDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PivotDimension::Group => write!(f, "group"),
            PivotDimension::Teacher => write!(f, "teacher"),
            PivotDimension::Room => write!(f, "room"),
        }
    }
}

// ==========================================
// 生成方法 (Generation Method)
// ==========================================
// 仅作为来源信息记录, 本核心不实现任何搜索算法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationMethod {
    Genetic, // 遗传算法
    Csp,     // 约束满足
    Hybrid,  // 混合
}

impl fmt::Display for GenerationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationMethod::Genetic => write!(f, "genetic"),
            GenerationMethod::Csp => write!(f, "csp"),
            GenerationMethod::Hybrid => write!(f, "hybrid"),
        }
    }
}

// ==========================================
// 课程类型代码 (Lesson Type Code)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LessonTypeCode {
    Lecture,         // 讲授课
    Seminar,         // 研讨课
    Lab,             // 实验课
    Practice,        // 实践课
    FieldTrip,       // 野外实习
    TrainingCenter,  // 实训中心
    ProductionVisit, // 生产见习
    Exercises,       // 演练
    Individual,      // 个别辅导
    Exam,            // 考试
    Test,            // 测验
}

impl fmt::Display for LessonTypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LessonTypeCode::Lecture => write!(f, "lecture"),
            LessonTypeCode::Seminar => write!(f, "seminar"),
            LessonTypeCode::Lab => write!(f, "lab"),
            LessonTypeCode::Practice => write!(f, "practice"),
            LessonTypeCode::FieldTrip => write!(f, "field_trip"),
            LessonTypeCode::TrainingCenter => write!(f, "training_center"),
            LessonTypeCode::ProductionVisit => write!(f, "production_visit"),
            LessonTypeCode::Exercises => write!(f, "exercises"),
            LessonTypeCode::Individual => write!(f, "individual"),
            LessonTypeCode::Exam => write!(f, "exam"),
            LessonTypeCode::Test => write!(f, "test"),
        }
    }
}

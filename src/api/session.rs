// ==========================================
// 高校排课系统 - 会话上下文
// ==========================================
// 职责: 将"当前学年/学期历/课次快照/课表登记簿"收拢为显式上下文,
// 会话开始时创建, 切换学年时整体原子替换,
// 取代散落在各页面的隐式全局状态
// ==========================================

use crate::domain::calendar::AcademicYear;
use crate::store::calendar_store::SemesterCalendar;
use crate::store::lesson_store::LessonStore;
use crate::store::schedule_registry::ScheduleRegistry;
use tracing::info;

// ==========================================
// SessionContext - 会话上下文
// ==========================================

pub struct SessionContext {
    pub current_year: AcademicYear,
    pub calendar: SemesterCalendar,
    pub lessons: LessonStore,
    pub schedules: ScheduleRegistry,
}

impl SessionContext {
    /// 会话开始时创建
    pub fn new(current_year: AcademicYear, calendar: SemesterCalendar) -> Self {
        Self {
            current_year,
            calendar,
            lessons: LessonStore::new(),
            schedules: ScheduleRegistry::new(),
        }
    }

    /// 切换当前学年/学期: 整体原子替换, 旧快照全部失效
    pub fn switch(&mut self, current_year: AcademicYear, calendar: SemesterCalendar) {
        info!(
            old_year = %self.current_year.name,
            new_year = %current_year.name,
            new_semester = calendar.semester().id,
            "会话上下文切换"
        );
        self.current_year = current_year;
        self.calendar = calendar;
        self.lessons = LessonStore::new();
        self.schedules = ScheduleRegistry::new();
    }
}

// ==========================================
// 高校排课系统 - 课表登记簿
// ==========================================
// 职责: 持有课表元数据集合, 维护激活不变式:
// 同一学期同时最多一份 active 课表, 激活即归档其余
// ==========================================

use crate::domain::schedule::Schedule;
use crate::domain::types::ScheduleStatus;
use crate::store::error::{StoreError, StoreResult};
use chrono::Utc;
use tracing::info;

// ==========================================
// ScheduleRegistry - 课表登记簿
// ==========================================

#[derive(Debug, Default)]
pub struct ScheduleRegistry {
    schedules: Vec<Schedule>,
}

impl ScheduleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 全部课表, 保持插入顺序
    pub fn list(&self) -> &[Schedule] {
        &self.schedules
    }

    pub fn get(&self, schedule_id: i64) -> StoreResult<&Schedule> {
        self.schedules
            .iter()
            .find(|s| s.id == schedule_id)
            .ok_or_else(|| StoreError::NotFound {
                entity: "Schedule".to_string(),
                id: schedule_id,
            })
    }

    /// 新增或按ID替换课表元数据
    pub fn upsert(&mut self, schedule: Schedule) {
        match self.schedules.iter_mut().find(|s| s.id == schedule.id) {
            Some(existing) => *existing = schedule,
            None => self.schedules.push(schedule),
        }
    }

    /// 按ID删除
    pub fn remove(&mut self, schedule_id: i64) -> StoreResult<Schedule> {
        let pos = self
            .schedules
            .iter()
            .position(|s| s.id == schedule_id)
            .ok_or_else(|| StoreError::NotFound {
                entity: "Schedule".to_string(),
                id: schedule_id,
            })?;
        Ok(self.schedules.remove(pos))
    }

    /// 激活课表
    ///
    /// 同学期的其他 active 课表被原子地归档, 保证至多一份激活
    pub fn activate(&mut self, schedule_id: i64) -> StoreResult<&Schedule> {
        let semester_label = self.get(schedule_id)?.semester_label.clone();

        let mut archived = 0u32;
        for schedule in &mut self.schedules {
            if schedule.id != schedule_id
                && schedule.semester_label == semester_label
                && schedule.status == ScheduleStatus::Active
            {
                schedule.status = ScheduleStatus::Archived;
                schedule.updated_at = Some(Utc::now().naive_utc());
                archived += 1;
            }
        }

        let target = self
            .schedules
            .iter_mut()
            .find(|s| s.id == schedule_id)
            .expect("schedule existence checked above");
        target.status = ScheduleStatus::Active;
        let now = Utc::now().naive_utc();
        target.activated_at = Some(now);
        target.updated_at = Some(now);

        info!(
            schedule_id,
            semester_label = %semester_label,
            archived_count = archived,
            "课表已激活"
        );

        Ok(self.get(schedule_id)?)
    }

    /// 归档课表
    pub fn archive(&mut self, schedule_id: i64) -> StoreResult<&Schedule> {
        self.get(schedule_id)?;
        let schedule = self
            .schedules
            .iter_mut()
            .find(|s| s.id == schedule_id)
            .expect("schedule existence checked above");
        schedule.status = ScheduleStatus::Archived;
        schedule.updated_at = Some(Utc::now().naive_utc());
        Ok(self.get(schedule_id)?)
    }

    /// 某学期当前激活的课表
    pub fn active_for(&self, semester_label: &str) -> Option<&Schedule> {
        self.schedules
            .iter()
            .find(|s| s.semester_label == semester_label && s.status == ScheduleStatus::Active)
    }
}

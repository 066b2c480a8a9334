// ==========================================
// 高校排课系统 - 生成编排器
// ==========================================
// 职责: 驱动一次长耗时、可能失败的生成请求
// 状态机: idle → submitting → awaiting_result → {succeeded | failed} → idle
// 约束: 同时最多一个在途请求, 重入被拒绝而非排队
// 取消: 不支持中途取消优化器调用, 传输层超时是唯一上界
// ==========================================

use crate::client::{GenerationReply, GenerationRequest, OptimizerService, TransportError};
use crate::config::CoreConfig;
use crate::domain::conflict::Conflict;
use crate::engine::error::{EngineError, EngineResult};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;
use tracing::{info, warn};

// ==========================================
// 状态与结果类型
// ==========================================

/// 生成成功摘要
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationSummary {
    pub schedule_id: i64,   // 新建课表ID
    pub lessons_count: u32, // 课次数
    pub fitness: f64,       // 优化器评分
    pub time_seconds: f64,  // 生成耗时
}

/// 生成失败
///
/// 传输失败与业务失败分开呈现: 前者可直接重试,
/// 后者携带诊断信息供调参后再试
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "failure", rename_all = "snake_case")]
pub enum GenerationFailure {
    /// 传输失败 (网络/超时), 可重试
    Transport { error: TransportError },
    /// 业务失败: 优化器在迭代预算内未能满足约束
    Unsatisfied {
        fitness: f64,                      // 达到的最优评分
        iterations: u32,                   // 已执行迭代数
        conflicts_count: u32,              // 残留冲突数
        leading_conflict: Option<Conflict>, // 首要冲突
    },
}

impl GenerationFailure {
    /// 是否可直接重试 (无需调参)
    pub fn is_retryable(&self) -> bool {
        matches!(self, GenerationFailure::Transport { .. })
    }
}

/// 编排器状态
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum GenerationState {
    Idle,                             // 无在途请求
    Submitting,                       // 请求发出前
    AwaitingResult,                   // 等待优化器应答 (唯一挂起点)
    Succeeded(GenerationSummary),     // 终态: 成功
    Failed(GenerationFailure),        // 终态: 失败
}

impl GenerationState {
    pub fn name(&self) -> &'static str {
        match self {
            GenerationState::Idle => "idle",
            GenerationState::Submitting => "submitting",
            GenerationState::AwaitingResult => "awaiting_result",
            GenerationState::Succeeded(_) => "succeeded",
            GenerationState::Failed(_) => "failed",
        }
    }

    /// 是否有在途请求
    pub fn is_in_flight(&self) -> bool {
        matches!(
            self,
            GenerationState::Submitting | GenerationState::AwaitingResult
        )
    }

    /// 是否处于终态
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            GenerationState::Succeeded(_) | GenerationState::Failed(_)
        )
    }
}

// ==========================================
// GenerationOrchestrator - 生成编排器
// ==========================================

pub struct GenerationOrchestrator<S>
where
    S: OptimizerService,
{
    client: Arc<S>,
    config: CoreConfig,
    state: Mutex<GenerationState>,
    settle_cancel: Notify,
}

impl<S> GenerationOrchestrator<S>
where
    S: OptimizerService,
{
    pub fn new(client: Arc<S>, config: CoreConfig) -> Self {
        Self {
            client,
            config,
            state: Mutex::new(GenerationState::Idle),
            settle_cancel: Notify::new(),
        }
    }

    /// 当前状态快照
    pub fn state(&self) -> GenerationState {
        self.state.lock().expect("state lock poisoned").clone()
    }

    /// 提交生成请求并驱动到终态
    ///
    /// 在途期间的二次调用返回 GenerationInProgress, 原请求不受影响
    pub async fn start(&self, request: GenerationRequest) -> EngineResult<GenerationState> {
        {
            let mut state = self.state.lock().expect("state lock poisoned");
            if state.is_in_flight() {
                warn!(
                    request_id = %request.request_id,
                    current_state = state.name(),
                    "生成请求被拒绝: 已有请求在途"
                );
                return Err(EngineError::GenerationInProgress);
            }
            *state = GenerationState::Submitting;
        }

        info!(
            request_id = %request.request_id,
            semester_id = request.semester_id,
            name = %request.name,
            "提交生成请求"
        );

        // 进入唯一挂起点; awaiting 时长由传输层超时约束
        {
            let mut state = self.state.lock().expect("state lock poisoned");
            *state = GenerationState::AwaitingResult;
        }

        let timeout = self.config.optimizer_timeout();
        let reply = match tokio::time::timeout(timeout, self.client.generate(&request)).await {
            Ok(result) => result,
            Err(_) => Err(TransportError::Timeout {
                timeout_secs: self.config.optimizer_timeout_secs,
            }),
        };

        let terminal = match reply {
            Ok(GenerationReply::Completed {
                schedule_id,
                lessons_count,
                fitness,
                time_seconds,
            }) => {
                info!(
                    request_id = %request.request_id,
                    schedule_id,
                    lessons_count,
                    fitness,
                    time_seconds,
                    "生成成功"
                );
                GenerationState::Succeeded(GenerationSummary {
                    schedule_id,
                    lessons_count,
                    fitness,
                    time_seconds,
                })
            }
            Ok(GenerationReply::Unsatisfied {
                fitness,
                iterations,
                conflicts,
            }) => {
                warn!(
                    request_id = %request.request_id,
                    fitness,
                    iterations,
                    conflicts_count = conflicts.len(),
                    "生成未满足约束"
                );
                GenerationState::Failed(GenerationFailure::Unsatisfied {
                    fitness,
                    iterations,
                    conflicts_count: conflicts.len() as u32,
                    leading_conflict: conflicts.into_iter().next(),
                })
            }
            Err(error) => {
                warn!(
                    request_id = %request.request_id,
                    %error,
                    "生成请求传输失败"
                );
                GenerationState::Failed(GenerationFailure::Transport { error })
            }
        };

        let mut state = self.state.lock().expect("state lock poisoned");
        *state = terminal.clone();
        Ok(terminal)
    }

    /// 成功后的缓冲等待
    ///
    /// 返回 true 表示等待完成可跳转查看, false 表示被取消
    pub async fn await_settle(&self) -> bool {
        tokio::select! {
            _ = tokio::time::sleep(self.config.settle_delay()) => true,
            _ = self.settle_cancel.notified() => false,
        }
    }

    /// 取消跳转前的缓冲等待
    pub fn cancel_settle(&self) {
        self.settle_cancel.notify_waiters();
    }

    /// 确认终态, 回到 idle
    ///
    /// 终态与 idle 下幂等; 在途时拒绝
    pub fn acknowledge(&self) -> EngineResult<()> {
        let mut state = self.state.lock().expect("state lock poisoned");
        if state.is_in_flight() {
            return Err(EngineError::InvalidStateTransition {
                from: state.name().to_string(),
                to: "idle".to_string(),
            });
        }
        *state = GenerationState::Idle;
        Ok(())
    }
}

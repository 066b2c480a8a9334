// ==========================================
// 高校排课系统 - 生成流程接口
// ==========================================
// 职责: 面向呈现层的生成请求入口与状态查询
// 业务失败 (Unsatisfied) 不是异常: 作为结构化 failed 结果返回,
// 携带诊断信息供调参; 传输失败可直接重试
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::client::{GenerationRequest, OptimizerService};
use crate::engine::orchestrator::{GenerationOrchestrator, GenerationState};

/// 提交生成请求并等待终态
///
/// 重入 (在途期间的二次提交) 返回 GenerationInProgress, 原请求不受影响
pub async fn start_generation<S>(
    orchestrator: &GenerationOrchestrator<S>,
    request: GenerationRequest,
) -> ApiResult<GenerationState>
where
    S: OptimizerService,
{
    Ok(orchestrator.start(request).await?)
}

/// 当前生成状态 (含最近终态结果/错误)
pub fn generation_state<S>(orchestrator: &GenerationOrchestrator<S>) -> GenerationState
where
    S: OptimizerService,
{
    orchestrator.state()
}

/// 确认终态, 状态机回到 idle
pub fn acknowledge<S>(orchestrator: &GenerationOrchestrator<S>) -> ApiResult<()>
where
    S: OptimizerService,
{
    orchestrator.acknowledge().map_err(ApiError::from)
}

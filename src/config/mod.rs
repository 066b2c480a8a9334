// ==========================================
// 高校排课系统 - 配置层
// ==========================================
// 职责: 核心运行参数, 带缺省值, 可由宿主应用反序列化覆盖
// ==========================================

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// 核心配置
///
/// - optimizer_timeout_secs: 优化器调用的传输层超时,
///   是 awaiting_result 时长的唯一上界 (无中途取消)
/// - settle_delay_ms: 生成成功后跳转查看前的缓冲时长, 可取消
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreConfig {
    pub optimizer_timeout_secs: u64,
    pub settle_delay_ms: u64,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            optimizer_timeout_secs: 300,
            settle_delay_ms: 2000,
        }
    }
}

impl CoreConfig {
    pub fn optimizer_timeout(&self) -> Duration {
        Duration::from_secs(self.optimizer_timeout_secs)
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }
}

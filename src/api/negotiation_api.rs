// ==========================================
// 供应商谈判决策引擎 - 谈判计算 API
// ==========================================
// 职责: 加载快照与配置，运行引擎，返回带时间戳的报告
// 支持: 文件路径 / JSON 字符串 两种入口
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::config::{ConfigManager, NegotiationConfig};
use crate::domain::negotiation::NegotiationOutput;
use crate::engine::NegotiationEngine;
use crate::importer::KpiSnapshot;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Instant;

/// 谈判计算报告
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NegotiationReport {
    /// 生成时间（RFC 3339, UTC）
    pub generated_at: String,
    /// 计算耗时（毫秒）
    pub elapsed_ms: i64,
    #[serde(flatten)]
    pub output: NegotiationOutput,
}

// ==========================================
// NegotiationApi
// ==========================================
pub struct NegotiationApi {
    config_manager: ConfigManager,
}

impl NegotiationApi {
    pub fn new(config_manager: ConfigManager) -> Self {
        Self { config_manager }
    }

    /// 以环境变量 / 用户配置目录初始化
    pub fn from_env() -> Self {
        Self::new(ConfigManager::from_env())
    }

    /// 加载运行配置
    ///
    /// # 参数
    /// - `config_path`: 显式配置路径；None 时按环境变量 → 用户配置 → 默认值
    pub fn load_config(&self, config_path: Option<&Path>) -> ApiResult<NegotiationConfig> {
        Ok(self.config_manager.load(config_path)?)
    }

    /// 从文件运行
    ///
    /// # 参数
    /// - `snapshot_path`: KPI 快照 JSON 文件
    /// - `config_path`: 可选配置文件
    pub fn run_file(
        &self,
        snapshot_path: &Path,
        config_path: Option<&Path>,
    ) -> ApiResult<NegotiationReport> {
        if snapshot_path.as_os_str().is_empty() {
            return Err(ApiError::InvalidInput("快照路径为空".to_string()));
        }
        let snapshot = KpiSnapshot::load_from_path(snapshot_path)?;
        let config = self.load_config(config_path)?;
        Ok(Self::run_snapshot(&snapshot, config))
    }

    /// 从 JSON 字符串运行（配置为空白字符串时使用默认配置）
    pub fn run_str(&self, snapshot_json: &str, config_json: &str) -> ApiResult<NegotiationReport> {
        let snapshot = KpiSnapshot::from_json_str(snapshot_json)?;
        let config = ConfigManager::load_from_str(config_json)?;
        Ok(Self::run_snapshot(&snapshot, config))
    }

    /// 对已加载的快照运行
    pub fn run_snapshot(snapshot: &KpiSnapshot, config: NegotiationConfig) -> NegotiationReport {
        let start = Instant::now();
        let output = NegotiationEngine::new(config).run(snapshot);
        let elapsed_ms = start.elapsed().as_millis() as i64;

        tracing::info!(
            candidates = output.candidates.len(),
            elapsed_ms,
            "谈判计算报告已生成"
        );

        NegotiationReport {
            generated_at: Utc::now().to_rfc3339(),
            elapsed_ms,
            output,
        }
    }
}

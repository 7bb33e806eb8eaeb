// ==========================================
// 供应商谈判决策引擎 - API层错误类型
// ==========================================
// 职责: 汇总导入层 / 配置层错误，提供统一的 ApiResult
// ==========================================

use crate::config::error::ConfigError;
use crate::importer::error::SnapshotError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("快照加载失败: {0}")]
    Snapshot(#[from] SnapshotError),

    #[error("配置加载失败: {0}")]
    Config(#[from] ConfigError),

    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error("导出失败: {0}")]
    ExportError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<csv::Error> for ApiError {
    fn from(err: csv::Error) -> Self {
        ApiError::ExportError(err.to_string())
    }
}

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        ApiError::ExportError(err.to_string())
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;

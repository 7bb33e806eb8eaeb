// ==========================================
// 供应商谈判决策引擎 - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// 说明: 仅文件读取与 JSON 解析会失败；字段级问题在映射时回退默认值
// ==========================================

use thiserror::Error;

/// 快照导入错误类型
#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("快照文件不存在: {0}")]
    FileNotFound(String),

    #[error("快照文件读取失败 ({path}): {source}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("快照 JSON 解析失败: {0}")]
    JsonParseError(#[from] serde_json::Error),

    #[error("快照顶层必须是 JSON 对象，实际为: {0}")]
    NotAnObject(String),
}

/// 导入模块 Result 类型别名
pub type ImportResult<T> = Result<T, SnapshotError>;

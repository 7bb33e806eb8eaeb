// ==========================================
// 供应商谈判决策引擎 - API 层
// ==========================================
// 职责: 面向调用方（CLI / 渲染层）的入口，负责 I/O 与错误汇总
// ==========================================

pub mod error;
pub mod export;
pub mod negotiation_api;

// 重导出核心类型
pub use error::{ApiError, ApiResult};
pub use export::CandidateCsvExporter;
pub use negotiation_api::{NegotiationApi, NegotiationReport};

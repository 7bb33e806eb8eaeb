// ==========================================
// 供应商谈判决策引擎 - 导入层
// ==========================================
// 职责: KPI 快照读取、字段映射、文本清洗、派生字段
// 支持: 上游 KPI JSON 文件 / 已解析的 serde_json::Value
// ==========================================

// 模块声明
pub mod data_cleaner;
pub mod derivation;
pub mod error;
pub mod field_mapper;
pub mod snapshot;

// 重导出核心类型
pub use data_cleaner::{fallback_labels, DataCleaner};
pub use derivation::{DerivationService, ReportPeriod};
pub use error::{ImportResult, SnapshotError};
pub use field_mapper::{fields, parse_number, parse_text, FieldMapper};
pub use snapshot::{Dataset, KpiSnapshot};

// ==========================================
// 供应商谈判决策引擎 - 核心库
// ==========================================
// 输入: 上游 KPI 快照（Top-N 商品明细 + 门店部门汇总）
// 输出: 按谈判目标排序的供应商/商品候选 + 三档谈判方案
// 系统定位: 决策支持系统 (人工最终控制权)
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 计算规则
pub mod engine;

// 导入层 - KPI 快照
pub mod importer;

// 配置层 - 杠杆档位与运行配置
pub mod config;

// 日志系统
pub mod logging;

// API 层 - 文件 / 字符串入口与导出
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{Lever, Objective, PackageId, RiskDriver};

// 领域实体
pub use domain::{
    Candidate, FilterOptions, LeverValues, NegotiationOutput, NegotiationTotals, Package,
    RankedCandidate, SourceRow,
};

// 配置
pub use config::{ConfigManager, NegotiationConfig, SupplierOverride};

// 导入
pub use importer::KpiSnapshot;

// 引擎
pub use engine::{
    CandidateGrouper, NegotiationEngine, PackageSimulator, PriorityRanker, RiskScorer, RowMerger,
    StockRatioMapper,
};

// API
pub use api::{ApiError, ApiResult, CandidateCsvExporter, NegotiationApi, NegotiationReport};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "供应商谈判决策引擎";

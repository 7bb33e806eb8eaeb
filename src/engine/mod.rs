// ==========================================
// 供应商谈判决策引擎 - 引擎层
// ==========================================
// 职责: 纯计算的各阶段引擎，输入不可变、数据单向流动
// 红线: 引擎不做 I/O，不报错；缺失输入降级为空结果
// ==========================================

pub mod grouper;
pub mod orchestrator;
pub mod package_simulator;
pub mod priority;
pub mod row_merger;
pub mod scoring;
pub mod stock_ratio;

// 重导出核心引擎
pub use grouper::CandidateGrouper;
pub use orchestrator::NegotiationEngine;
pub use package_simulator::PackageSimulator;
pub use priority::{ObjectiveWeights, PriorityRanker};
pub use row_merger::{RowMerger, RowNormalizer};
pub use scoring::{CandidateScores, RiskScorer};
pub use stock_ratio::{StockRatioMap, StockRatioMapper};

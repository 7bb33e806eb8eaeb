// ==========================================
// 供应商谈判决策引擎 - 领域模型层
// ==========================================
// 职责: 定义源数据行、候选、方案、输出模型与枚举类型
// 红线: 不含文件读取逻辑,不含引擎逻辑
// ==========================================

pub mod candidate;
pub mod negotiation;
pub mod package;
pub mod source_row;
pub mod types;

// 重导出核心类型
pub use candidate::{Candidate, CandidateKey};
pub use negotiation::{FilterOptions, NegotiationOutput, NegotiationTotals, RankedCandidate};
pub use package::{LeverValues, Package};
pub use source_row::{SourceRow, SourceRowKey};
pub use types::{Lever, Objective, PackageId, RiskDriver};

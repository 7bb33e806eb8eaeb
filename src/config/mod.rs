// ==========================================
// 供应商谈判决策引擎 - 配置层
// ==========================================
// 职责: 杠杆档位预设、运行配置解析、配置文件定位
// ==========================================

pub mod config_manager;
pub mod error;
pub mod lever_profile;
pub mod negotiation_config;

// 重导出核心配置类型
pub use config_manager::{config_keys, ConfigManager};
pub use error::{ConfigError, ConfigResult};
pub use lever_profile::{
    scale_override, LeverProfile, AGGRESSIVE_PROFILE, BASE_PROFILE, LEVER_PROFILES,
    TARGET_PROFILE,
};
pub use negotiation_config::{CandidateFilter, NegotiationConfig, SupplierOverride};

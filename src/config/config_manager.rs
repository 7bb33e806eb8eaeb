// ==========================================
// 供应商谈判决策引擎 - 配置管理器
// ==========================================
// 职责: 配置文件定位、加载、环境变量覆写
// 查找顺序: 显式路径 > NEGOTIATION_CONFIG > 用户配置目录 > 内置默认值
// ==========================================

use crate::config::error::{ConfigError, ConfigResult};
use crate::config::negotiation_config::NegotiationConfig;
use crate::domain::types::Objective;
use std::path::{Path, PathBuf};

/// 配置键（环境变量 / 目录约定）
pub mod config_keys {
    /// 配置文件路径
    pub const ENV_CONFIG_PATH: &str = "NEGOTIATION_CONFIG";
    /// 排序目标覆写
    pub const ENV_PRIORITIZE_BY: &str = "NEGOTIATION_PRIORITIZE_BY";
    /// 用户配置目录下的子目录名
    pub const CONFIG_DIR_NAME: &str = "negotiation-engine";
    pub const CONFIG_FILE_NAME: &str = "config.json";
}

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct ConfigManager {
    env_config_path: Option<PathBuf>,
    prioritize_override: Option<String>,
    user_config_dir: Option<PathBuf>,
}

impl ConfigManager {
    /// 创建不读取任何环境的配置管理器（测试用）
    pub fn new() -> Self {
        Self::default()
    }

    /// 从进程环境创建配置管理器
    pub fn from_env() -> Self {
        Self {
            env_config_path: std::env::var_os(config_keys::ENV_CONFIG_PATH).map(PathBuf::from),
            prioritize_override: std::env::var(config_keys::ENV_PRIORITIZE_BY).ok(),
            user_config_dir: dirs::config_dir().map(|d| d.join(config_keys::CONFIG_DIR_NAME)),
        }
    }

    pub fn with_env_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.env_config_path = Some(path.into());
        self
    }

    pub fn with_prioritize_override(mut self, value: impl Into<String>) -> Self {
        self.prioritize_override = Some(value.into());
        self
    }

    pub fn with_user_config_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.user_config_dir = Some(dir.into());
        self
    }

    /// 定位配置文件
    ///
    /// # 返回
    /// - Some(path): 显式路径或环境变量路径（不检查存在性），或已存在的用户配置文件
    /// - None: 使用内置默认配置
    pub fn resolve_config_path(&self, explicit: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(path.to_path_buf());
        }
        if let Some(path) = &self.env_config_path {
            return Some(path.clone());
        }
        self.user_config_dir
            .as_ref()
            .map(|dir| dir.join(config_keys::CONFIG_FILE_NAME))
            .filter(|path| path.is_file())
    }

    /// 加载运行配置（含环境变量覆写）
    pub fn load(&self, explicit: Option<&Path>) -> ConfigResult<NegotiationConfig> {
        let config = match self.resolve_config_path(explicit) {
            Some(path) => {
                tracing::info!("加载配置文件: {}", path.display());
                Self::load_from_path(&path)?
            }
            None => {
                tracing::debug!("未找到配置文件，使用默认配置");
                NegotiationConfig::default()
            }
        };
        Ok(self.apply_overrides(config))
    }

    /// 从文件加载配置
    pub fn load_from_path(path: &Path) -> ConfigResult<NegotiationConfig> {
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::FileReadError {
            path: path.display().to_string(),
            source,
        })?;
        Self::load_from_str(&raw)
    }

    /// 从 JSON 字符串加载配置，空白字符串视为默认配置
    pub fn load_from_str(json: &str) -> ConfigResult<NegotiationConfig> {
        if json.trim().is_empty() {
            return Ok(NegotiationConfig::default());
        }
        let mut config: NegotiationConfig = serde_json::from_str(json)?;

        let before = config.supplier_overrides.len();
        config
            .supplier_overrides
            .retain(|o| !o.supplier.is_empty() && o.has_any_value());
        if config.supplier_overrides.len() < before {
            tracing::warn!(
                "忽略 {} 条无供应商名或无有效数值的覆写",
                before - config.supplier_overrides.len()
            );
        }
        Ok(config)
    }

    fn apply_overrides(&self, mut config: NegotiationConfig) -> NegotiationConfig {
        if let Some(raw) = &self.prioritize_override {
            match raw.parse::<Objective>() {
                Ok(objective) => {
                    tracing::debug!("环境变量覆写排序目标: {}", objective);
                    config.prioritize_by = objective;
                }
                Err(e) => tracing::warn!("{}，忽略环境变量覆写", e),
            }
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::Lever;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_load_defaults_without_any_source() {
        let manager = ConfigManager::new();
        let config = manager.load(None).unwrap();
        assert_eq!(config, NegotiationConfig::default());
    }

    #[test]
    fn test_load_from_explicit_path() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"selectedLevers":["price_lift"],"prioritizeBy":"tb","limit":5}}"#
        )
        .unwrap();

        let config = ConfigManager::new().load(Some(file.path())).unwrap();
        assert_eq!(config.enabled_lever_count(), 1);
        assert!(config.is_lever_enabled(Lever::PriceLift));
        assert_eq!(config.prioritize_by, Objective::Tb);
        assert_eq!(config.limit, Some(5));
    }

    #[test]
    fn test_missing_explicit_path_is_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.json");
        let err = ConfigManager::new().load(Some(&missing)).unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }

    #[test]
    fn test_invalid_json_is_error() {
        let err = ConfigManager::load_from_str("{not json").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_empty_overrides_are_dropped() {
        let config = ConfigManager::load_from_str(
            r#"{"supplierOverrides":[
                {"supplier":"Acme","apDaysGain":10},
                {"supplier":"Acme"},
                {"supplier":"  ","priceLiftPct":2}
            ]}"#,
        )
        .unwrap();
        assert_eq!(config.supplier_overrides.len(), 1);
        assert_eq!(
            config.override_for("acme").unwrap().ap_days_gain,
            Some(10.0)
        );
    }

    #[test]
    fn test_user_config_dir_is_used_when_file_exists() {
        let dir = TempDir::new().unwrap();
        let manager = ConfigManager::new().with_user_config_dir(dir.path());
        assert!(manager.resolve_config_path(None).is_none());

        std::fs::write(
            dir.path().join(config_keys::CONFIG_FILE_NAME),
            r#"{"prioritizeBy":"low_risk"}"#,
        )
        .unwrap();
        let config = manager.load(None).unwrap();
        assert_eq!(config.prioritize_by, Objective::LowRisk);
    }

    #[test]
    fn test_env_path_takes_precedence_over_user_dir() {
        let dir = TempDir::new().unwrap();
        let env_file = dir.path().join("env.json");
        std::fs::write(&env_file, r#"{"prioritizeBy":"cash"}"#).unwrap();

        let manager = ConfigManager::new()
            .with_user_config_dir(dir.path())
            .with_env_config_path(&env_file);
        assert_eq!(manager.resolve_config_path(None), Some(env_file));
        assert_eq!(manager.load(None).unwrap().prioritize_by, Objective::Cash);
    }

    #[test]
    fn test_prioritize_override() {
        let manager = ConfigManager::new().with_prioritize_override("low-risk");
        assert_eq!(manager.load(None).unwrap().prioritize_by, Objective::LowRisk);

        let manager = ConfigManager::new().with_prioritize_override("bogus");
        assert_eq!(manager.load(None).unwrap().prioritize_by, Objective::Balanced);
    }
}

// ==========================================
// 供应商谈判决策引擎 - 运行配置
// ==========================================
// 职责: 杠杆选择 / 排序目标 / 供应商覆写 / 筛选条件 / 截断条数
// 说明: 反序列化时宽松解析，非法值回退为默认值并记录 warn，不报错
// ==========================================

use crate::domain::source_row::SourceRow;
use crate::domain::types::{Lever, Objective};
use crate::importer::field_mapper::parse_number;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeSet;

/// 截断条数的允许范围
pub const LIMIT_MIN: usize = 1;
pub const LIMIT_MAX: usize = 200;

// ==========================================
// 覆写值取值范围
// ==========================================
pub const PURCHASE_COST_RANGE: (f64, f64) = (0.0, 20.0);
pub const PRICE_LIFT_RANGE: (f64, f64) = (-10.0, 20.0);
pub const AP_DAYS_RANGE: (f64, f64) = (0.0, 120.0);
pub const STOCK_RELEASE_RANGE: (f64, f64) = (0.0, 80.0);
pub const RETURN_REDUCTION_RANGE: (f64, f64) = (0.0, 90.0);

// ==========================================
// SupplierOverride - 供应商人工覆写
// ==========================================
/// 按 target 档位录入的杠杆幅度，每个字段要么是截断后的数值，要么缺省
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawSupplierOverride")]
pub struct SupplierOverride {
    pub supplier: String,
    pub purchase_cost_improvement_pct: Option<f64>,
    pub price_lift_pct: Option<f64>,
    pub ap_days_gain: Option<f64>,
    pub stock_release_pct: Option<f64>,
    pub return_reduction_pct: Option<f64>,
}

impl SupplierOverride {
    pub fn value_for(&self, lever: Lever) -> Option<f64> {
        match lever {
            Lever::PurchaseCost => self.purchase_cost_improvement_pct,
            Lever::PriceLift => self.price_lift_pct,
            Lever::PaymentTerms => self.ap_days_gain,
            Lever::MoqStock => self.stock_release_pct,
            Lever::Returns => self.return_reduction_pct,
        }
    }

    /// 将全部字段截断到允许范围，非有限值视为缺省
    pub fn clamped(self) -> Self {
        Self {
            supplier: self.supplier.trim().to_string(),
            purchase_cost_improvement_pct: clamp_field(
                self.purchase_cost_improvement_pct,
                PURCHASE_COST_RANGE,
            ),
            price_lift_pct: clamp_field(self.price_lift_pct, PRICE_LIFT_RANGE),
            ap_days_gain: clamp_field(self.ap_days_gain, AP_DAYS_RANGE),
            stock_release_pct: clamp_field(self.stock_release_pct, STOCK_RELEASE_RANGE),
            return_reduction_pct: clamp_field(self.return_reduction_pct, RETURN_REDUCTION_RANGE),
        }
    }

    /// 是否至少有一个字段被覆写
    pub fn has_any_value(&self) -> bool {
        Lever::ALL.iter().any(|lever| self.value_for(*lever).is_some())
    }
}

fn clamp_field(value: Option<f64>, range: (f64, f64)) -> Option<f64> {
    value
        .filter(|v| v.is_finite())
        .map(|v| v.clamp(range.0, range.1))
}

/// 外部表单参数的原始形态（数字或数字字符串均可）
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSupplierOverride {
    #[serde(default)]
    supplier: Value,
    #[serde(default)]
    purchase_cost_improvement_pct: Value,
    #[serde(default)]
    price_lift_pct: Value,
    #[serde(default)]
    ap_days_gain: Value,
    #[serde(default)]
    stock_release_pct: Value,
    #[serde(default)]
    return_reduction_pct: Value,
}

impl From<RawSupplierOverride> for SupplierOverride {
    fn from(raw: RawSupplierOverride) -> Self {
        SupplierOverride {
            supplier: raw.supplier.as_str().unwrap_or_default().to_string(),
            purchase_cost_improvement_pct: parse_number(&raw.purchase_cost_improvement_pct),
            price_lift_pct: parse_number(&raw.price_lift_pct),
            ap_days_gain: parse_number(&raw.ap_days_gain),
            stock_release_pct: parse_number(&raw.stock_release_pct),
            return_reduction_pct: parse_number(&raw.return_reduction_pct),
        }
        .clamped()
    }
}

// ==========================================
// CandidateFilter - 候选筛选条件
// ==========================================
/// 空列表表示不限制
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CandidateFilter {
    pub stores: Vec<String>,
    pub departments: Vec<String>,
    pub suppliers: Vec<String>,
    pub report_years: Vec<String>,
    pub month_numbers: Vec<u32>,
}

impl CandidateFilter {
    pub fn is_empty(&self) -> bool {
        self.stores.is_empty()
            && self.departments.is_empty()
            && self.suppliers.is_empty()
            && self.report_years.is_empty()
            && self.month_numbers.is_empty()
    }

    pub fn matches(&self, row: &SourceRow) -> bool {
        contains_label(&self.stores, &row.store)
            && contains_label(&self.departments, &row.department)
            && contains_label(&self.suppliers, &row.supplier)
            && contains_label(&self.report_years, &row.report_year)
            && (self.month_numbers.is_empty()
                || self.month_numbers.contains(&row.report_month_number))
    }
}

fn contains_label(selected: &[String], value: &str) -> bool {
    selected.is_empty()
        || selected
            .iter()
            .any(|s| s.trim().to_lowercase() == value.trim().to_lowercase())
}

// ==========================================
// NegotiationConfig - 运行配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NegotiationConfig {
    #[serde(default = "all_levers", deserialize_with = "deserialize_levers")]
    pub selected_levers: BTreeSet<Lever>,

    #[serde(default, deserialize_with = "deserialize_objective")]
    pub prioritize_by: Objective,

    #[serde(default)]
    pub supplier_overrides: Vec<SupplierOverride>,

    #[serde(default)]
    pub filter: CandidateFilter,

    #[serde(default)]
    pub limit: Option<usize>,
}

impl Default for NegotiationConfig {
    fn default() -> Self {
        Self {
            selected_levers: all_levers(),
            prioritize_by: Objective::default(),
            supplier_overrides: Vec::new(),
            filter: CandidateFilter::default(),
            limit: None,
        }
    }
}

impl NegotiationConfig {
    pub fn is_lever_enabled(&self, lever: Lever) -> bool {
        self.selected_levers.contains(&lever)
    }

    pub fn enabled_lever_count(&self) -> usize {
        self.selected_levers.len()
    }

    /// 查找供应商覆写（去空白、忽略大小写；同名多条时以最后一条为准）
    pub fn override_for(&self, supplier: &str) -> Option<&SupplierOverride> {
        let needle = supplier.trim().to_lowercase();
        self.supplier_overrides
            .iter()
            .rev()
            .find(|o| o.supplier.trim().to_lowercase() == needle)
    }

    /// 截断条数，限制在 [1, 200]
    pub fn effective_limit(&self) -> Option<usize> {
        self.limit.map(|l| l.clamp(LIMIT_MIN, LIMIT_MAX))
    }
}

fn all_levers() -> BTreeSet<Lever> {
    Lever::ALL.iter().copied().collect()
}

/// 解析杠杆列表: 支持数组或逗号分隔字符串，未知名称忽略
pub fn parse_levers(value: &Value) -> BTreeSet<Lever> {
    let names: Vec<String> = match value {
        Value::Array(items) => items
            .iter()
            .filter_map(|v| v.as_str().map(|s| s.to_string()))
            .collect(),
        Value::String(s) => s.split(',').map(|part| part.to_string()).collect(),
        Value::Null => return all_levers(),
        other => {
            tracing::warn!("杠杆列表格式无效，使用全部杠杆: {}", other);
            return all_levers();
        }
    };

    names
        .iter()
        .map(|name| name.trim())
        .filter(|name| !name.is_empty())
        .filter_map(|name| match name.parse::<Lever>() {
            Ok(lever) => Some(lever),
            Err(e) => {
                tracing::warn!("{}，已忽略", e);
                None
            }
        })
        .collect()
}

fn deserialize_levers<'de, D>(deserializer: D) -> Result<BTreeSet<Lever>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(parse_levers(&value))
}

fn deserialize_objective<'de, D>(deserializer: D) -> Result<Objective, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value
        .as_str()
        .and_then(|s| match s.parse::<Objective>() {
            Ok(objective) => Some(objective),
            Err(e) => {
                tracing::warn!("{}，使用默认目标 balanced", e);
                None
            }
        })
        .unwrap_or_default())
}

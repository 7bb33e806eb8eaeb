// ==========================================
// 供应商谈判决策引擎 - KPI 快照
// ==========================================
// 职责: 持有上游 KPI JSON 快照，按键提取数据集
// 回退: time_* 数据集缺失或为空时使用同名的非 time 数据集
// ==========================================

use crate::importer::error::{ImportResult, SnapshotError};
use crate::importer::field_mapper::{fields, parse_text};
use serde_json::{Map, Value};
use std::path::Path;

// ==========================================
// Dataset - 快照内数据集
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dataset {
    /// 门店 × 部门 明细（库存销售比来源）
    StoreDepartmentBreakdown,
    /// 低毛利高销售 Top-N
    LowMarginHighSales,
    /// 毛利风险 Top-N
    MarginRisk,
    /// 退货风险 Top-N
    ReturnRisk,
}

impl Dataset {
    /// 参与合并的 Top-N 数据集（合并顺序）
    pub const TOP_N: [Dataset; 3] = [
        Dataset::LowMarginHighSales,
        Dataset::MarginRisk,
        Dataset::ReturnRisk,
    ];

    pub fn time_key(&self) -> &'static str {
        match self {
            Dataset::StoreDepartmentBreakdown => "time_store_department_breakdown",
            Dataset::LowMarginHighSales => "time_low_margin_high_sales_top_n",
            Dataset::MarginRisk => "time_margin_risk_items_top_n",
            Dataset::ReturnRisk => "time_return_risk_items_top_n",
        }
    }

    pub fn fallback_key(&self) -> &'static str {
        match self {
            Dataset::StoreDepartmentBreakdown => "store_department_breakdown",
            Dataset::LowMarginHighSales => "low_margin_high_sales_top_n",
            Dataset::MarginRisk => "margin_risk_items_top_n",
            Dataset::ReturnRisk => "return_risk_items_top_n",
        }
    }
}

// ==========================================
// KpiSnapshot - KPI 快照
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct KpiSnapshot {
    root: Map<String, Value>,
}

impl KpiSnapshot {
    pub fn empty() -> Self {
        Self::default()
    }

    /// 从 JSON 值构造；非对象值视为空快照
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(root) => Self { root },
            Value::Null => Self::empty(),
            other => {
                tracing::warn!("快照顶层不是 JSON 对象，按空快照处理: {}", value_kind(&other));
                Self::empty()
            }
        }
    }

    /// 从 JSON 字符串解析（严格: 非对象报错）
    pub fn from_json_str(json: &str) -> ImportResult<Self> {
        let value: Value = serde_json::from_str(json)?;
        match value {
            Value::Object(root) => Ok(Self { root }),
            other => Err(SnapshotError::NotAnObject(value_kind(&other).to_string())),
        }
    }

    /// 从文件加载
    pub fn load_from_path(path: &Path) -> ImportResult<Self> {
        if !path.exists() {
            return Err(SnapshotError::FileNotFound(path.display().to_string()));
        }
        let raw = std::fs::read_to_string(path).map_err(|source| SnapshotError::FileReadError {
            path: path.display().to_string(),
            source,
        })?;
        let snapshot = Self::from_json_str(&raw)?;
        tracing::debug!(
            "快照已加载: {} (report_month={})",
            path.display(),
            snapshot.report_month()
        );
        Ok(snapshot)
    }

    /// 快照级报告月份（期间回退值）
    pub fn report_month(&self) -> String {
        self.root
            .get(fields::REPORT_MONTH)
            .and_then(parse_text)
            .unwrap_or_default()
    }

    /// 提取数据集行（仅保留对象行）
    pub fn dataset(&self, dataset: Dataset) -> Vec<&Map<String, Value>> {
        let rows = match self.rows_for_key(dataset.time_key()) {
            Some(rows) if !rows.is_empty() => rows,
            _ => {
                let fallback = self.rows_for_key(dataset.fallback_key()).unwrap_or(&[]);
                if !fallback.is_empty() {
                    tracing::debug!(
                        "数据集 {} 为空，回退到 {}",
                        dataset.time_key(),
                        dataset.fallback_key()
                    );
                }
                fallback
            }
        };
        rows.iter().filter_map(|row| row.as_object()).collect()
    }

    fn rows_for_key(&self, key: &str) -> Option<&[Value]> {
        self.root
            .get(key)
            .and_then(|v| v.as_array())
            .map(|rows| rows.as_slice())
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

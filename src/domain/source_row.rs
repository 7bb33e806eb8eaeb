// ==========================================
// 供应商谈判决策引擎 - 源数据行
// ==========================================
// 职责: 单期 × 门店 × 部门 × 供应商 × 商品 的一条观测记录
// 红线: 合并后每个标识元组只存在一行
// ==========================================

use crate::domain::candidate::CandidateKey;
use serde::{Deserialize, Serialize};

/// 毛利率原始值的允许范围（百分比）
pub const RAW_MARGIN_PERCENT_MIN: f64 = -100.0;
pub const RAW_MARGIN_PERCENT_MAX: f64 = 100.0;

// ==========================================
// SourceRowKey - 合并键
// ==========================================
/// (期间, 门店, 部门, 供应商, 货号, EAN)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SourceRowKey {
    pub report_month: String,
    pub store: String,
    pub department: String,
    pub supplier: String,
    pub article_number: String,
    pub ean: String,
}

// ==========================================
// SourceRow - 源数据行
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceRow {
    // ===== 标识 =====
    pub report_month: String,
    pub report_year: String,
    pub report_month_number: u32,
    pub store: String,
    pub department: String,
    pub supplier: String,
    pub article_number: String,
    pub ean: String,
    pub article_text: String,

    // ===== 财务流量 =====
    pub net_sales: f64,
    pub gross_profit: f64,
    pub gross_margin_percent: f64,

    // ===== 数量 =====
    pub units_sold: f64,
    pub return_units: f64,
    pub return_row_count: u64,
    pub negative_margin_row_count: u64,

    // ===== 库存敞口 =====
    pub stock_to_sales_ratio: f64,
    pub estimated_stock_value: f64,

    pub return_rate_percent: f64,
}

impl SourceRow {
    pub fn key(&self) -> SourceRowKey {
        SourceRowKey {
            report_month: self.report_month.clone(),
            store: self.store.clone(),
            department: self.department.clone(),
            supplier: self.supplier.clone(),
            article_number: self.article_number.clone(),
            ean: self.ean.clone(),
        }
    }

    /// 跨期分组键（不含期间）
    pub fn candidate_key(&self) -> CandidateKey {
        CandidateKey {
            store: self.store.clone(),
            department: self.department.clone(),
            supplier: self.supplier.clone(),
            article_number: self.article_number.clone(),
            ean: self.ean.clone(),
            article_text: self.article_text.clone(),
        }
    }
}

/// 毛利率: 净销售额为正时由毛利/净销售额重新计算，否则保留截断后的原始值
pub fn derive_margin_percent(net_sales: f64, gross_profit: f64, raw_percent: f64) -> f64 {
    if net_sales > 0.0 {
        gross_profit / net_sales * 100.0
    } else {
        clamp_raw_margin(raw_percent)
    }
}

pub fn clamp_raw_margin(raw_percent: f64) -> f64 {
    if !raw_percent.is_finite() {
        return 0.0;
    }
    raw_percent.clamp(RAW_MARGIN_PERCENT_MIN, RAW_MARGIN_PERCENT_MAX)
}

/// 退货率 = 退货件数 / (销售件数 + 退货件数) × 100，分母为 0 时为 0
pub fn return_rate_percent(units_sold: f64, return_units: f64) -> f64 {
    let denominator = units_sold + return_units;
    if denominator > 0.0 {
        return_units / denominator * 100.0
    } else {
        0.0
    }
}

/// 估算库存额 = max(0, 净销售额) × 库存销售比
pub fn estimated_stock_value(net_sales: f64, ratio: f64) -> f64 {
    net_sales.max(0.0) * ratio
}

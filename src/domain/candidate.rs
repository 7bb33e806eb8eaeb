// ==========================================
// 供应商谈判决策引擎 - 谈判候选
// ==========================================
// 职责: 门店 × 部门 × 供应商 × 商品 跨期聚合后的候选对象
// 红线: 流量指标求和，比率指标一律由聚合总量重算
// ==========================================

use serde::{Deserialize, Serialize};

/// 分组键: (门店, 部门, 供应商, 货号, EAN, 品名)，不含期间
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CandidateKey {
    pub store: String,
    pub department: String,
    pub supplier: String,
    pub article_number: String,
    pub ean: String,
    pub article_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub store: String,
    pub department: String,
    pub supplier: String,
    pub article_number: String,
    pub ean: String,
    pub article_text: String,

    /// 参与聚合的不同期间数
    pub periods: u32,

    pub net_sales: f64,
    pub gross_profit: f64,
    pub gross_margin_percent: f64,

    pub units_sold: f64,
    pub return_units: f64,
    pub return_row_count: u64,
    pub negative_margin_row_count: u64,

    pub stock_to_sales_ratio: f64,
    pub estimated_stock_value: f64,
    pub return_rate_percent: f64,
}

impl Candidate {
    /// 销货成本 = max(0, 净销售额 - 毛利)
    pub fn cogs(&self) -> f64 {
        (self.net_sales - self.gross_profit).max(0.0)
    }
}

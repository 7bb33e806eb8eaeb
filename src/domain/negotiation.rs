// ==========================================
// 供应商谈判决策引擎 - 引擎输出模型
// ==========================================
// 职责: 排序后的候选列表 + 汇总 + 筛选项，交给渲染层使用
// ==========================================

use crate::domain::candidate::Candidate;
use crate::domain::package::Package;
use crate::domain::types::{Lever, Objective, PackageId, RiskDriver};
use serde::{Deserialize, Serialize};

// ==========================================
// RankedCandidate - 已评分排序的候选
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedCandidate {
    #[serde(flatten)]
    pub candidate: Candidate,

    pub base_risk_score: u32,
    pub opportunity_score: u32,
    pub primary_driver: RiskDriver,

    /// 固定顺序: base / target / aggressive
    pub packages: Vec<Package>,
    pub recommended_package_id: PackageId,
    pub priority_score: f64,
}

impl RankedCandidate {
    pub fn package(&self, id: PackageId) -> Option<&Package> {
        self.packages.iter().find(|p| p.id == id)
    }

    pub fn target_package(&self) -> Option<&Package> {
        self.package(PackageId::Target)
    }
}

// ==========================================
// NegotiationTotals - 汇总
// ==========================================
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NegotiationTotals {
    pub candidate_count: usize,
    pub net_sales: f64,
    pub gross_profit: f64,
    pub target_tb_potential: f64,
    pub target_cash_potential: f64,
    pub target_total_potential: f64,
}

// ==========================================
// FilterOptions - 可选筛选项
// ==========================================
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    pub stores: Vec<String>,
    pub departments: Vec<String>,
    pub suppliers: Vec<String>,
    pub report_months: Vec<String>,
}

// ==========================================
// NegotiationOutput - 引擎输出
// ==========================================
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NegotiationOutput {
    pub report_month: String,
    pub prioritize_by: Objective,
    pub selected_levers: Vec<Lever>,
    pub candidates: Vec<RankedCandidate>,
    pub totals: NegotiationTotals,
    pub filter_options: FilterOptions,
}

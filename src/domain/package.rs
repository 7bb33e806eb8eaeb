// ==========================================
// 供应商谈判决策引擎 - 谈判方案
// ==========================================
// 职责: 单个候选在某一档位下的模拟结果
// ==========================================

use crate::domain::types::{Lever, PackageId};
use serde::{Deserialize, Serialize};

/// 五个杠杆的幅度
///
/// 未启用的杠杆幅度为 0。
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeverValues {
    /// 进价改善（%）
    pub purchase_cost_improvement_pct: f64,
    /// 售价提升（%）
    pub price_lift_pct: f64,
    /// 账期延长（天）
    pub ap_days_gain: f64,
    /// 库存释放（%）
    pub stock_release_pct: f64,
    /// 退货降低（%）
    pub return_reduction_pct: f64,
}

impl LeverValues {
    pub fn get(&self, lever: Lever) -> f64 {
        match lever {
            Lever::PurchaseCost => self.purchase_cost_improvement_pct,
            Lever::PriceLift => self.price_lift_pct,
            Lever::PaymentTerms => self.ap_days_gain,
            Lever::MoqStock => self.stock_release_pct,
            Lever::Returns => self.return_reduction_pct,
        }
    }

    pub fn set(&mut self, lever: Lever, value: f64) {
        match lever {
            Lever::PurchaseCost => self.purchase_cost_improvement_pct = value,
            Lever::PriceLift => self.price_lift_pct = value,
            Lever::PaymentTerms => self.ap_days_gain = value,
            Lever::MoqStock => self.stock_release_pct = value,
            Lever::Returns => self.return_reduction_pct = value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    pub id: PackageId,
    pub levers: LeverValues,
    /// 毛利提升（≥0）
    pub tb_lift: f64,
    /// 现金流提升（≥0）
    pub cash_lift: f64,
    pub total_impact: f64,
    /// 执行风险分 0-100
    pub risk_score: u32,
}

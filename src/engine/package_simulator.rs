// ==========================================
// 供应商谈判决策引擎 - 谈判方案模拟器
// ==========================================
// 职责: 对每个候选按 base / target / aggressive 三档模拟财务影响
// 输入: 候选 + 基础风险分 + 运行配置（启用杠杆 / 供应商覆写）
// 输出: 3 个 Package（固定顺序）
// ==========================================
// 计算口径:
// - cogs = max(0, 净销售额 - 毛利)
// - tb_lift = cogs×进价改善% + 净销售额×提价% + 退货销售额×毛利率×退货降低%
// - cash_lift = cogs/30×账期天数 + 库存额×库存释放%
// - risk = 基础风险×0.55 + 档位执行风险 + 复杂度惩罚
// ==========================================

use crate::config::lever_profile::{scale_override, LeverProfile, LEVER_PROFILES, TARGET_PROFILE};
use crate::config::negotiation_config::{NegotiationConfig, SupplierOverride};
use crate::domain::candidate::Candidate;
use crate::domain::package::{LeverValues, Package};
use crate::domain::types::Lever;

/// 毛利率上限（用于退货降低的毛利折算）
const MAX_MARGIN_RATIO: f64 = 0.95;
/// 基础风险分权重
const BASE_RISK_WEIGHT: f64 = 0.55;
/// 账期折算: 每天的销货成本
const DAYS_PER_PERIOD: f64 = 30.0;

/// 复杂度惩罚: ≥4 个杠杆 8 分，3 个 5 分，其余 2 分
pub fn complexity_penalty(enabled_levers: usize) -> f64 {
    match enabled_levers {
        n if n >= 4 => 8.0,
        3 => 5.0,
        _ => 2.0,
    }
}

// ==========================================
// PackageSimulator - 方案模拟器
// ==========================================
pub struct PackageSimulator<'a> {
    config: &'a NegotiationConfig,
}

impl<'a> PackageSimulator<'a> {
    pub fn new(config: &'a NegotiationConfig) -> Self {
        Self { config }
    }

    /// 模拟候选的全部三个档位
    pub fn simulate(&self, candidate: &Candidate, base_risk_score: u32) -> Vec<Package> {
        let supplier_override = self.config.override_for(&candidate.supplier);
        LEVER_PROFILES
            .iter()
            .map(|profile| {
                self.simulate_package(candidate, base_risk_score, profile, supplier_override)
            })
            .collect()
    }

    /// 解析档位实际生效的杠杆幅度
    ///
    /// - 未启用的杠杆: 0
    /// - 有覆写值: 覆写值 × (档位默认值 / target 默认值)
    /// - 无覆写值: 档位默认值
    pub fn resolve_levers(
        &self,
        profile: &LeverProfile,
        supplier_override: Option<&SupplierOverride>,
    ) -> LeverValues {
        let mut values = LeverValues::default();
        for lever in Lever::ALL {
            if !self.config.is_lever_enabled(lever) {
                continue;
            }
            let profile_default = profile.default_for(lever);
            let value = match supplier_override.and_then(|o| o.value_for(lever)) {
                Some(manual) => {
                    scale_override(manual, profile_default, TARGET_PROFILE.default_for(lever))
                }
                None => profile_default,
            };
            values.set(lever, value);
        }
        values
    }

    pub fn simulate_package(
        &self,
        candidate: &Candidate,
        base_risk_score: u32,
        profile: &LeverProfile,
        supplier_override: Option<&SupplierOverride>,
    ) -> Package {
        let levers = self.resolve_levers(profile, supplier_override);

        let net_sales = candidate.net_sales;
        let cogs = candidate.cogs();
        let margin_ratio = (candidate.gross_margin_percent / 100.0).clamp(0.0, MAX_MARGIN_RATIO);
        let estimated_return_sales = net_sales * candidate.return_rate_percent / 100.0;

        let tb_lift = non_negative(
            cogs * levers.purchase_cost_improvement_pct / 100.0
                + net_sales * levers.price_lift_pct / 100.0
                + estimated_return_sales * margin_ratio * levers.return_reduction_pct / 100.0,
        );
        let cash_lift = non_negative(
            cogs / DAYS_PER_PERIOD * levers.ap_days_gain
                + candidate.estimated_stock_value * levers.stock_release_pct / 100.0,
        );

        let raw_risk = base_risk_score as f64 * BASE_RISK_WEIGHT
            + profile.execution_risk
            + complexity_penalty(self.config.enabled_lever_count());
        let risk_score = raw_risk.clamp(0.0, 100.0).round() as u32;

        Package {
            id: profile.id,
            levers,
            tb_lift,
            cash_lift,
            total_impact: tb_lift + cash_lift,
            risk_score,
        }
    }
}

/// max(0, v)，非有限值为 0
fn non_negative(value: f64) -> f64 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}

// ==========================================
// 供应商谈判决策引擎 - 风险/机会评分
// ==========================================
// 职责: 对候选群体计算两个独立的 0-100 分
// - base_risk_score: 毛利风险 35% + 库存风险 25% + 退货风险 20% + 规模 20%
// - opportunity_score: 毛利缺口 40% + 库存压力 25% + 退货压力 20% + 规模 15%
// 红线: 纯数值、确定性，只依赖候选群体
// ==========================================

use crate::domain::candidate::Candidate;
use crate::domain::types::RiskDriver;

// ===== 风险分阈值 =====
const RISK_MARGIN_TARGET: f64 = 44.0;
const RISK_STOCK_FLOOR: f64 = 1.8;
const RISK_STOCK_SPAN: f64 = 2.2;
const RISK_RETURN_FLOOR: f64 = 8.0;
const RISK_RETURN_SPAN: f64 = 20.0;

// ===== 机会分阈值 =====
const OPP_MARGIN_TARGET: f64 = 46.0;
const OPP_STOCK_FLOOR: f64 = 1.6;
const OPP_STOCK_SPAN: f64 = 2.4;
const OPP_RETURN_FLOOR: f64 = 6.0;
const OPP_RETURN_SPAN: f64 = 24.0;

/// 截断到 [0, 100]，非有限值为 0
pub fn clamp_score(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 100.0)
    } else {
        0.0
    }
}

/// 单个候选的评分结果
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandidateScores {
    pub base_risk_score: u32,
    pub opportunity_score: u32,
    pub primary_driver: RiskDriver,
}

// ==========================================
// RiskScorer - 评分器
// ==========================================
pub struct RiskScorer {
    max_net_sales: f64,
}

impl RiskScorer {
    /// 以候选群体构建评分器（max_net_sales 下限为 1）
    pub fn for_cohort(candidates: &[Candidate]) -> Self {
        let max_net_sales = candidates
            .iter()
            .map(|c| c.net_sales)
            .filter(|v| v.is_finite())
            .fold(1.0_f64, f64::max);
        Self { max_net_sales }
    }

    pub fn max_net_sales(&self) -> f64 {
        self.max_net_sales
    }

    /// 对整个群体评分，顺序与输入一致
    pub fn score_cohort(candidates: &[Candidate]) -> Vec<CandidateScores> {
        let scorer = Self::for_cohort(candidates);
        candidates.iter().map(|c| scorer.score(c)).collect()
    }

    pub fn score(&self, candidate: &Candidate) -> CandidateScores {
        let weighted = self.weighted_risk_components(candidate);
        let base_risk: f64 = weighted.iter().map(|(_, v)| v).sum();

        CandidateScores {
            base_risk_score: base_risk.round() as u32,
            opportunity_score: self.opportunity(candidate).round() as u32,
            primary_driver: primary_driver(&weighted),
        }
    }

    /// 风险分各项的加权贡献（顺序: 毛利 / 库存 / 退货 / 规模）
    fn weighted_risk_components(&self, c: &Candidate) -> [(RiskDriver, f64); 4] {
        let margin_risk =
            clamp_score((RISK_MARGIN_TARGET - c.gross_margin_percent) / RISK_MARGIN_TARGET * 100.0);
        let stock_risk =
            clamp_score((c.stock_to_sales_ratio - RISK_STOCK_FLOOR) / RISK_STOCK_SPAN * 100.0);
        let return_risk =
            clamp_score((c.return_rate_percent - RISK_RETURN_FLOOR) / RISK_RETURN_SPAN * 100.0);
        let scale_risk = self.scale(c);

        [
            (RiskDriver::Margin, 0.35 * margin_risk),
            (RiskDriver::Stock, 0.25 * stock_risk),
            (RiskDriver::Returns, 0.20 * return_risk),
            (RiskDriver::Scale, 0.20 * scale_risk),
        ]
    }

    fn opportunity(&self, c: &Candidate) -> f64 {
        let margin_gap =
            clamp_score((OPP_MARGIN_TARGET - c.gross_margin_percent) / OPP_MARGIN_TARGET * 100.0);
        let stock_pressure =
            clamp_score((c.stock_to_sales_ratio - OPP_STOCK_FLOOR) / OPP_STOCK_SPAN * 100.0);
        let return_pressure =
            clamp_score((c.return_rate_percent - OPP_RETURN_FLOOR) / OPP_RETURN_SPAN * 100.0);
        let scale = self.scale(c);

        0.40 * margin_gap + 0.25 * stock_pressure + 0.20 * return_pressure + 0.15 * scale
    }

    fn scale(&self, c: &Candidate) -> f64 {
        clamp_score(c.net_sales / self.max_net_sales * 100.0)
    }
}

/// 加权贡献最大的一项；并列时按 毛利 > 库存 > 退货 > 规模
fn primary_driver(weighted: &[(RiskDriver, f64); 4]) -> RiskDriver {
    let mut best = weighted[0];
    for item in &weighted[1..] {
        if item.1 > best.1 {
            best = *item;
        }
    }
    best.0
}

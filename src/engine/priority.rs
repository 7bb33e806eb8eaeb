// ==========================================
// 供应商谈判决策引擎 - 优先级排序
// ==========================================
// 职责: 按谈判目标为候选打优先级分并排序，推荐档位，汇总群体
// 输入: 已模拟方案的候选列表 + 谈判目标
// 输出: 按 priority_score 降序（稳定）排列的候选 + 汇总
// ==========================================
// 归一化口径:
// - 群体排序: Target 方案的 tb/cash/total 除以群体最大值（下限 1）
// - 推荐档位: 三个方案的 tb/cash/total 除以该候选自身最大值（下限 1）
// ==========================================

mod scoring;

pub use scoring::{normalize, MetricMaxima, NormalizedMetrics, ObjectiveWeights};

use crate::domain::negotiation::{NegotiationTotals, RankedCandidate};
use crate::domain::package::Package;
use crate::domain::types::{Objective, PackageId};
use std::cmp::Ordering;

// ==========================================
// PriorityRanker - 优先级排序器
// ==========================================
pub struct PriorityRanker {
    objective: Objective,
    weights: ObjectiveWeights,
}

impl PriorityRanker {
    pub fn new(objective: Objective) -> Self {
        Self {
            objective,
            weights: ObjectiveWeights::for_objective(objective),
        }
    }

    /// 推荐档位
    ///
    /// # 参数
    /// - `packages`: 候选的三个方案（base / target / aggressive）
    /// - `opportunity_score`: 候选机会分
    ///
    /// # 返回
    /// 得分最高的档位；并列时取靠前者，方案为空时为 Target
    pub fn recommend(&self, packages: &[Package], opportunity_score: u32) -> PackageId {
        let mut maxima = MetricMaxima::default();
        for p in packages {
            maxima.observe(p.tb_lift, p.cash_lift, p.total_impact);
        }

        let mut best: Option<(PackageId, f64)> = None;
        for p in packages {
            let metrics =
                maxima.normalize(p.tb_lift, p.cash_lift, p.total_impact, p.risk_score as f64);
            let score = self.weights.score(&metrics, opportunity_score as f64);
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((p.id, score)),
            }
        }

        best.map(|(id, _)| id).unwrap_or(PackageId::Target)
    }

    /// 计算 priority_score 并按降序稳定排序
    pub fn rank(&self, mut candidates: Vec<RankedCandidate>) -> Vec<RankedCandidate> {
        let mut maxima = MetricMaxima::default();
        for c in &candidates {
            let (tb, cash, total, _) = target_metrics(c);
            maxima.observe(tb, cash, total);
        }

        for c in candidates.iter_mut() {
            let (tb, cash, total, risk) = target_metrics(c);
            let metrics = maxima.normalize(tb, cash, total, risk);
            c.priority_score = self.weights.score(&metrics, c.opportunity_score as f64);
        }

        candidates.sort_by(|a, b| {
            b.priority_score
                .partial_cmp(&a.priority_score)
                .unwrap_or(Ordering::Equal)
        });

        tracing::debug!(
            "优先级排序完成: {} 个候选, 目标 {}, tb上限 {:.0}, cash上限 {:.0}",
            candidates.len(),
            self.objective,
            maxima.tb,
            maxima.cash
        );
        candidates
    }

    /// 群体汇总（在截断之前调用）
    pub fn summarize(&self, candidates: &[RankedCandidate]) -> NegotiationTotals {
        let mut totals = NegotiationTotals {
            candidate_count: candidates.len(),
            ..NegotiationTotals::default()
        };
        for c in candidates {
            totals.net_sales += c.candidate.net_sales;
            totals.gross_profit += c.candidate.gross_profit;
            if let Some(target) = c.target_package() {
                totals.target_tb_potential += target.tb_lift;
                totals.target_cash_potential += target.cash_lift;
                totals.target_total_potential += target.total_impact;
            }
        }
        totals
    }
}

impl Default for PriorityRanker {
    fn default() -> Self {
        Self::new(Objective::default())
    }
}

/// Target 方案的 (tb, cash, total, risk)；缺失时按零提升、满风险处理
fn target_metrics(candidate: &RankedCandidate) -> (f64, f64, f64, f64) {
    match candidate.target_package() {
        Some(p) => (p.tb_lift, p.cash_lift, p.total_impact, p.risk_score as f64),
        None => (0.0, 0.0, 0.0, 100.0),
    }
}

#[cfg(test)]
mod tests;

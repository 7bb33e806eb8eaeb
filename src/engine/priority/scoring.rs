// ==========================================
// 目标 → 权重表
// ==========================================
// 同一张表同时用于: 群体排序 (priority_score) 与 单候选推荐档位
// ==========================================

use crate::domain::types::Objective;

/// 各项指标权重（安全分 = 100 - 风险分）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObjectiveWeights {
    pub tb: f64,
    pub cash: f64,
    pub total: f64,
    pub opportunity: f64,
    pub safety: f64,
}

impl ObjectiveWeights {
    pub fn for_objective(objective: Objective) -> Self {
        match objective {
            Objective::Tb => Self {
                tb: 0.65,
                cash: 0.0,
                total: 0.0,
                opportunity: 0.35,
                safety: 0.0,
            },
            Objective::Cash => Self {
                tb: 0.0,
                cash: 0.65,
                total: 0.0,
                opportunity: 0.35,
                safety: 0.0,
            },
            Objective::LowRisk => Self {
                tb: 0.0,
                cash: 0.0,
                total: 0.25,
                opportunity: 0.20,
                safety: 0.55,
            },
            Objective::Balanced => Self {
                tb: 0.0,
                cash: 0.0,
                total: 0.50,
                opportunity: 0.30,
                safety: 0.20,
            },
        }
    }

    /// 加权得分
    ///
    /// # 参数
    /// - `metrics`: 已归一化 (0-100) 的方案指标
    /// - `opportunity`: 候选机会分
    pub fn score(&self, metrics: &NormalizedMetrics, opportunity: f64) -> f64 {
        self.tb * metrics.tb
            + self.cash * metrics.cash
            + self.total * metrics.total
            + self.opportunity * opportunity
            + self.safety * (100.0 - metrics.risk)
    }
}

/// 一个方案归一化后的指标
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NormalizedMetrics {
    pub tb: f64,
    pub cash: f64,
    pub total: f64,
    pub risk: f64,
}

/// 归一化上限（下限为 1）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricMaxima {
    pub tb: f64,
    pub cash: f64,
    pub total: f64,
}

impl Default for MetricMaxima {
    fn default() -> Self {
        Self {
            tb: 1.0,
            cash: 1.0,
            total: 1.0,
        }
    }
}

impl MetricMaxima {
    pub fn observe(&mut self, tb: f64, cash: f64, total: f64) {
        self.tb = self.tb.max(tb);
        self.cash = self.cash.max(cash);
        self.total = self.total.max(total);
    }

    pub fn normalize(&self, tb: f64, cash: f64, total: f64, risk: f64) -> NormalizedMetrics {
        NormalizedMetrics {
            tb: normalize(tb, self.tb),
            cash: normalize(cash, self.cash),
            total: normalize(total, self.total),
            risk,
        }
    }
}

/// value / max(max, 1) × 100
pub fn normalize(value: f64, max: f64) -> f64 {
    value / max.max(1.0) * 100.0
}

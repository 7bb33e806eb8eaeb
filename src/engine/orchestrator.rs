// ==========================================
// 供应商谈判决策引擎 - 引擎编排器
// ==========================================
// 用途: 按固定顺序串联各阶段，数据只向前流动
// 流程: 库存比映射 → 行合并 → 筛选 → 分组 → 评分 → 方案模拟 → 推荐 → 排序 → 汇总 → 截断
// 红线: 引擎内部不报错，缺失/无效输入降级为空列表与零汇总
// ==========================================

use crate::config::negotiation_config::NegotiationConfig;
use crate::domain::negotiation::{FilterOptions, NegotiationOutput, RankedCandidate};
use crate::domain::source_row::SourceRow;
use crate::engine::grouper::CandidateGrouper;
use crate::engine::package_simulator::PackageSimulator;
use crate::engine::priority::PriorityRanker;
use crate::engine::row_merger::RowMerger;
use crate::engine::scoring::RiskScorer;
use crate::engine::stock_ratio::StockRatioMapper;
use crate::importer::snapshot::{Dataset, KpiSnapshot};
use serde_json::Value;
use std::collections::BTreeSet;
use tracing::{debug, info};

// ==========================================
// NegotiationEngine - 引擎编排器
// ==========================================
pub struct NegotiationEngine {
    config: NegotiationConfig,
    ratio_mapper: StockRatioMapper,
    grouper: CandidateGrouper,
    ranker: PriorityRanker,
}

impl NegotiationEngine {
    /// 创建新的编排器实例
    ///
    /// # 参数
    /// - config: 运行配置（杠杆 / 目标 / 覆写 / 筛选 / 截断）
    pub fn new(config: NegotiationConfig) -> Self {
        Self {
            ratio_mapper: StockRatioMapper::new(),
            grouper: CandidateGrouper::new(),
            ranker: PriorityRanker::new(config.prioritize_by),
            config,
        }
    }

    /// 直接对 JSON 值运行（非对象视为空快照）
    pub fn run_value(&self, value: Value) -> NegotiationOutput {
        self.run(&KpiSnapshot::from_value(value))
    }

    /// 执行完整流程
    ///
    /// # 参数
    /// - snapshot: KPI 快照
    ///
    /// # 返回
    /// 排序后的候选 + 汇总（汇总在截断之前计算）
    pub fn run(&self, snapshot: &KpiSnapshot) -> NegotiationOutput {
        let report_month = snapshot.report_month();
        info!(
            report_month = %report_month,
            prioritize_by = %self.config.prioritize_by,
            levers = self.config.enabled_lever_count(),
            "开始计算谈判候选"
        );

        // ==========================================
        // 步骤1: 库存销售比映射
        // ==========================================
        let ratios = self.ratio_mapper.build(
            &snapshot.dataset(Dataset::StoreDepartmentBreakdown),
            &report_month,
        );
        debug!("步骤1: 库存销售比映射 {} 项", ratios.len());

        // ==========================================
        // 步骤2: 行标准化与合并
        // ==========================================
        let merged = RowMerger::merge_snapshot(snapshot, &ratios);
        debug!("步骤2: 合并后 {} 行", merged.len());

        let filter_options = collect_filter_options(&merged);

        // ==========================================
        // 步骤3: 筛选
        // ==========================================
        let filter = &self.config.filter;
        let rows: Vec<SourceRow> = if filter.is_empty() {
            merged
        } else {
            merged.into_iter().filter(|r| filter.matches(r)).collect()
        };
        debug!("步骤3: 筛选后 {} 行", rows.len());

        // ==========================================
        // 步骤4: 分组
        // ==========================================
        let candidates = self.grouper.group(&rows);

        // ==========================================
        // 步骤5-7: 评分 / 方案模拟 / 推荐档位
        // ==========================================
        let scores = RiskScorer::score_cohort(&candidates);
        let simulator = PackageSimulator::new(&self.config);
        let ranked: Vec<RankedCandidate> = candidates
            .into_iter()
            .zip(scores)
            .map(|(candidate, scores)| {
                let packages = simulator.simulate(&candidate, scores.base_risk_score);
                let recommended_package_id =
                    self.ranker.recommend(&packages, scores.opportunity_score);
                RankedCandidate {
                    candidate,
                    base_risk_score: scores.base_risk_score,
                    opportunity_score: scores.opportunity_score,
                    primary_driver: scores.primary_driver,
                    packages,
                    recommended_package_id,
                    priority_score: 0.0,
                }
            })
            .collect();
        debug!("步骤5-7: 已模拟 {} 个候选", ranked.len());

        // ==========================================
        // 步骤8-9: 排序 / 汇总
        // ==========================================
        let mut ranked = self.ranker.rank(ranked);
        let totals = self.ranker.summarize(&ranked);

        // ==========================================
        // 步骤10: 截断
        // ==========================================
        if let Some(limit) = self.config.effective_limit() {
            ranked.truncate(limit);
        }

        info!(
            candidates = totals.candidate_count,
            returned = ranked.len(),
            target_total_potential = totals.target_total_potential,
            "谈判候选计算完成"
        );

        NegotiationOutput {
            report_month,
            prioritize_by: self.config.prioritize_by,
            selected_levers: self.config.selected_levers.iter().copied().collect(),
            candidates: ranked,
            totals,
            filter_options,
        }
    }
}

impl Default for NegotiationEngine {
    fn default() -> Self {
        Self::new(NegotiationConfig::default())
    }
}

/// 合并后、筛选前的去重排序取值
fn collect_filter_options(rows: &[SourceRow]) -> FilterOptions {
    let mut stores = BTreeSet::new();
    let mut departments = BTreeSet::new();
    let mut suppliers = BTreeSet::new();
    let mut report_months = BTreeSet::new();
    for row in rows {
        stores.insert(row.store.clone());
        departments.insert(row.department.clone());
        suppliers.insert(row.supplier.clone());
        report_months.insert(row.report_month.clone());
    }
    FilterOptions {
        stores: stores.into_iter().collect(),
        departments: departments.into_iter().collect(),
        suppliers: suppliers.into_iter().collect(),
        report_months: report_months.into_iter().collect(),
    }
}

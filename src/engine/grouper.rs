// ==========================================
// 供应商谈判决策引擎 - 候选分组器
// ==========================================
// 职责: 跨期聚合 SourceRow → Candidate
// 分组键: (门店, 部门, 供应商, 货号, EAN, 品名)，不含期间
// ==========================================
// 聚合口径:
// - 净销售额/毛利/库存额/退货行数/负毛利行数/退货件数: 求和
// - 销售件数: 取滚动最大值（Top-N 单期快照已代表至多一整期的件数）
// - 毛利率/库存销售比/退货率: 每折叠一行后由滚动总量重算
// ==========================================

use crate::domain::candidate::{Candidate, CandidateKey};
use crate::domain::source_row::{return_rate_percent, SourceRow};
use std::collections::{HashMap, HashSet};

/// 单个候选的聚合状态
struct GroupAccumulator {
    candidate: Candidate,
    months: HashSet<String>,
}

impl GroupAccumulator {
    fn new(row: &SourceRow) -> Self {
        Self {
            candidate: Candidate {
                store: row.store.clone(),
                department: row.department.clone(),
                supplier: row.supplier.clone(),
                article_number: row.article_number.clone(),
                ean: row.ean.clone(),
                article_text: row.article_text.clone(),
                periods: 0,
                net_sales: 0.0,
                gross_profit: 0.0,
                gross_margin_percent: 0.0,
                units_sold: 0.0,
                return_units: 0.0,
                return_row_count: 0,
                negative_margin_row_count: 0,
                stock_to_sales_ratio: 0.0,
                estimated_stock_value: 0.0,
                return_rate_percent: 0.0,
            },
            months: HashSet::new(),
        }
    }

    fn fold(&mut self, row: &SourceRow) {
        self.months.insert(row.report_month.clone());

        let c = &mut self.candidate;
        c.periods = self.months.len() as u32;

        c.net_sales += row.net_sales;
        c.gross_profit += row.gross_profit;
        c.estimated_stock_value += row.estimated_stock_value;
        c.return_row_count += row.return_row_count;
        c.negative_margin_row_count += row.negative_margin_row_count;
        c.return_units += row.return_units;
        c.units_sold = c.units_sold.max(row.units_sold);

        if c.net_sales > 0.0 {
            c.gross_margin_percent = c.gross_profit / c.net_sales * 100.0;
            c.stock_to_sales_ratio = c.estimated_stock_value / c.net_sales;
        } else {
            c.gross_margin_percent = row.gross_margin_percent;
            c.stock_to_sales_ratio = c.stock_to_sales_ratio.max(row.stock_to_sales_ratio);
        }
        c.return_rate_percent = return_rate_percent(c.units_sold, c.return_units);
    }
}

// ==========================================
// CandidateGrouper - 候选分组器
// ==========================================
pub struct CandidateGrouper;

impl CandidateGrouper {
    pub fn new() -> Self {
        Self
    }

    /// 聚合 SourceRow，输出按首次出现顺序
    pub fn group(&self, rows: &[SourceRow]) -> Vec<Candidate> {
        let mut order: Vec<GroupAccumulator> = Vec::new();
        let mut index: HashMap<CandidateKey, usize> = HashMap::new();

        for row in rows {
            let pos = *index.entry(row.candidate_key()).or_insert_with(|| {
                order.push(GroupAccumulator::new(row));
                order.len() - 1
            });
            order[pos].fold(row);
        }

        tracing::debug!("候选分组完成: {} 行 → {} 个候选", rows.len(), order.len());
        order.into_iter().map(|acc| acc.candidate).collect()
    }
}

impl Default for CandidateGrouper {
    fn default() -> Self {
        Self::new()
    }
}

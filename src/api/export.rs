// ==========================================
// 供应商谈判决策引擎 - 候选清单导出
// ==========================================
// 职责: 将排序后的候选写为 CSV（每行一个候选，附 Target 方案指标）
// 工具: csv::Writer + serde 序列化
// ==========================================

use crate::api::error::ApiResult;
use crate::domain::negotiation::RankedCandidate;
use csv::WriterBuilder;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// CSV 单行
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CandidateCsvRow<'a> {
    rank: usize,
    store: &'a str,
    department: &'a str,
    supplier: &'a str,
    article_number: &'a str,
    ean: &'a str,
    article_text: &'a str,
    periods: u32,
    net_sales: f64,
    gross_profit: f64,
    gross_margin_percent: f64,
    stock_to_sales_ratio: f64,
    return_rate_percent: f64,
    base_risk_score: u32,
    opportunity_score: u32,
    primary_driver: &'static str,
    recommended_package_id: &'static str,
    target_tb_lift: f64,
    target_cash_lift: f64,
    target_total_impact: f64,
    target_risk_score: u32,
    priority_score: f64,
}

impl<'a> CandidateCsvRow<'a> {
    fn new(rank: usize, ranked: &'a RankedCandidate) -> Self {
        let c = &ranked.candidate;
        let target = ranked.target_package();
        Self {
            rank,
            store: &c.store,
            department: &c.department,
            supplier: &c.supplier,
            article_number: &c.article_number,
            ean: &c.ean,
            article_text: &c.article_text,
            periods: c.periods,
            net_sales: round2(c.net_sales),
            gross_profit: round2(c.gross_profit),
            gross_margin_percent: round2(c.gross_margin_percent),
            stock_to_sales_ratio: round2(c.stock_to_sales_ratio),
            return_rate_percent: round2(c.return_rate_percent),
            base_risk_score: ranked.base_risk_score,
            opportunity_score: ranked.opportunity_score,
            primary_driver: ranked.primary_driver.as_str(),
            recommended_package_id: ranked.recommended_package_id.as_str(),
            target_tb_lift: round2(target.map(|p| p.tb_lift).unwrap_or(0.0)),
            target_cash_lift: round2(target.map(|p| p.cash_lift).unwrap_or(0.0)),
            target_total_impact: round2(target.map(|p| p.total_impact).unwrap_or(0.0)),
            target_risk_score: target.map(|p| p.risk_score).unwrap_or(0),
            priority_score: round2(ranked.priority_score),
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ==========================================
// CandidateCsvExporter
// ==========================================
pub struct CandidateCsvExporter {
    delimiter: u8,
}

impl CandidateCsvExporter {
    pub fn new() -> Self {
        Self { delimiter: b',' }
    }

    /// 设置分隔符（默认逗号）
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// 写入任意 Writer
    ///
    /// # 返回
    /// 写入的数据行数（不含表头）
    pub fn write<W: Write>(&self, writer: W, candidates: &[RankedCandidate]) -> ApiResult<usize> {
        let mut csv_writer = WriterBuilder::new()
            .delimiter(self.delimiter)
            .from_writer(writer);

        for (i, ranked) in candidates.iter().enumerate() {
            csv_writer.serialize(CandidateCsvRow::new(i + 1, ranked))?;
        }
        csv_writer.flush()?;
        Ok(candidates.len())
    }

    /// 写入文件
    pub fn export_to_path(&self, path: &Path, candidates: &[RankedCandidate]) -> ApiResult<usize> {
        let file = File::create(path)?;
        let rows = self.write(file, candidates)?;
        tracing::info!("候选清单已导出: {} ({} 行)", path.display(), rows);
        Ok(rows)
    }
}

impl Default for CandidateCsvExporter {
    fn default() -> Self {
        Self::new()
    }
}

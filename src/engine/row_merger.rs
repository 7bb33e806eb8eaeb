// ==========================================
// 供应商谈判决策引擎 - 行标准化与合并
// ==========================================
// 职责: 三个 Top-N 数据集 → 标准化 SourceRow → 按标识元组合并
// 输入: KPI 快照 + 库存销售比映射
// 输出: 去重后的 SourceRow 列表（按首次出现顺序）
// ==========================================
// 合并口径（近似，不是精确对账）:
// - 销量/退货件数: 取较大值（各 Top-N 视图互有遗漏，取大避免少算）
// - 净销售额/毛利: 取绝对值较大者（接近 0 的值视为被筛选的部分视图），相等保留已有值
// - 毛利率: 净销售额为正时由合并后的毛利/净销售额重算
// - 库存销售比/库存额/计数: 取较大值
// - 退货率: 由合并后的件数重算
// ==========================================

use crate::domain::source_row::{
    derive_margin_percent, estimated_stock_value, return_rate_percent, SourceRow, SourceRowKey,
};
use crate::engine::stock_ratio::StockRatioMap;
use crate::importer::data_cleaner::{fallback_labels, DataCleaner};
use crate::importer::derivation::DerivationService;
use crate::importer::field_mapper::{fields, FieldMapper};
use crate::importer::snapshot::{Dataset, KpiSnapshot};
use serde_json::{Map, Value};
use std::collections::HashMap;

// ==========================================
// RowNormalizer - 行标准化
// ==========================================
pub struct RowNormalizer {
    mapper: FieldMapper,
    cleaner: DataCleaner,
    derivation: DerivationService,
}

impl RowNormalizer {
    pub fn new() -> Self {
        Self {
            mapper: FieldMapper,
            cleaner: DataCleaner,
            derivation: DerivationService,
        }
    }

    /// 标准化单行 Top-N 记录
    ///
    /// # 参数
    /// - `row`: 原始 JSON 行
    /// - `ratios`: 库存销售比映射
    /// - `fallback_period`: 快照级 report_month
    pub fn normalize(
        &self,
        row: &Map<String, Value>,
        ratios: &StockRatioMap,
        fallback_period: &str,
    ) -> SourceRow {
        let m = &self.mapper;
        let c = &self.cleaner;

        let period = self.derivation.derive_period(
            m.get_text(row, fields::REPORT_MONTH),
            m.get_text(row, fields::REPORT_YEAR),
            m.get_number(row, fields::REPORT_MONTH_NUMBER),
            fallback_period,
        );

        let store = c.store_or_fallback(m.get_text(row, fields::STORE));
        let department = c.text_or_fallback(
            m.get_text(row, fields::DEPARTMENT),
            fallback_labels::DEPARTMENT,
        );
        let supplier =
            c.text_or_fallback(m.get_text(row, fields::SUPPLIER), fallback_labels::SUPPLIER);
        let article_number = c.text_or_fallback(
            m.get_text(row, fields::ARTICLE_NUMBER),
            fallback_labels::ARTICLE_NUMBER,
        );
        let ean = c.text_or_fallback(m.get_text(row, fields::EAN), fallback_labels::EAN);
        let article_text = c.text_or_fallback(
            m.get_text(row, fields::ARTICLE_TEXT),
            fallback_labels::ARTICLE_TEXT,
        );

        let net_sales = m.get_number_or_zero(row, fields::NET_SALES);
        let gross_profit = m.get_number_or_zero(row, fields::GROSS_PROFIT);
        let raw_margin = m.get_number_or_zero(row, fields::GROSS_MARGIN_PERCENT);
        let gross_margin_percent = derive_margin_percent(net_sales, gross_profit, raw_margin);

        let (units_sold, return_units) = self
            .derivation
            .split_units(m.get_number_or_zero(row, fields::UNITS_SOLD));

        let stock_to_sales_ratio = ratios.get(&period.report_month, &store, &department);

        SourceRow {
            report_month: period.report_month,
            report_year: period.report_year,
            report_month_number: period.month_number,
            store,
            department,
            supplier,
            article_number,
            ean,
            article_text,
            net_sales,
            gross_profit,
            gross_margin_percent,
            units_sold,
            return_units,
            return_row_count: m.get_count(row, fields::RETURN_ROW_COUNT),
            negative_margin_row_count: m.get_count(row, fields::NEGATIVE_MARGIN_ROW_COUNT),
            stock_to_sales_ratio,
            estimated_stock_value: estimated_stock_value(net_sales, stock_to_sales_ratio),
            return_rate_percent: return_rate_percent(units_sold, return_units),
        }
    }
}

impl Default for RowNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

// ==========================================
// RowMerger - 按标识元组合并
// ==========================================
/// 保持首次出现顺序的合并容器
#[derive(Debug, Default)]
pub struct RowMerger {
    rows: Vec<SourceRow>,
    index: HashMap<SourceRowKey, usize>,
}

impl RowMerger {
    pub fn new() -> Self {
        Self::default()
    }

    /// 合并快照内全部 Top-N 数据集
    pub fn merge_snapshot(snapshot: &KpiSnapshot, ratios: &StockRatioMap) -> Vec<SourceRow> {
        let fallback_period = snapshot.report_month();
        let normalizer = RowNormalizer::new();
        let mut merger = RowMerger::new();

        for dataset in Dataset::TOP_N {
            let rows = snapshot.dataset(dataset);
            tracing::debug!("合并数据集 {}: {} 行", dataset.time_key(), rows.len());
            for row in rows {
                merger.push(normalizer.normalize(row, ratios, &fallback_period));
            }
        }

        merger.into_rows()
    }

    /// 加入一行: 新键追加，已有键按合并口径更新
    pub fn push(&mut self, incoming: SourceRow) {
        let key = incoming.key();
        match self.index.get(&key) {
            Some(&pos) => merge_rows(&mut self.rows[pos], &incoming),
            None => {
                self.index.insert(key, self.rows.len());
                self.rows.push(incoming);
            }
        }
    }

    pub fn extend<I: IntoIterator<Item = SourceRow>>(&mut self, rows: I) {
        for row in rows {
            self.push(row);
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn into_rows(self) -> Vec<SourceRow> {
        self.rows
    }
}

/// 取绝对值较大者，相等时保留已有值
fn larger_magnitude(existing: f64, incoming: f64) -> f64 {
    if incoming.abs() > existing.abs() {
        incoming
    } else {
        existing
    }
}

/// 将 incoming 合并进 existing
pub fn merge_rows(existing: &mut SourceRow, incoming: &SourceRow) {
    existing.units_sold = existing.units_sold.max(incoming.units_sold);
    existing.return_units = existing.return_units.max(incoming.return_units);

    existing.net_sales = larger_magnitude(existing.net_sales, incoming.net_sales);
    existing.gross_profit = larger_magnitude(existing.gross_profit, incoming.gross_profit);
    if existing.net_sales > 0.0 {
        existing.gross_margin_percent = existing.gross_profit / existing.net_sales * 100.0;
    }

    existing.stock_to_sales_ratio = existing
        .stock_to_sales_ratio
        .max(incoming.stock_to_sales_ratio);
    existing.estimated_stock_value = existing
        .estimated_stock_value
        .max(incoming.estimated_stock_value);

    existing.return_row_count = existing.return_row_count.max(incoming.return_row_count);
    existing.negative_margin_row_count = existing
        .negative_margin_row_count
        .max(incoming.negative_margin_row_count);

    existing.return_rate_percent = return_rate_percent(existing.units_sold, existing.return_units);
}

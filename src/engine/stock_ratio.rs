// ==========================================
// 供应商谈判决策引擎 - 库存销售比映射
// ==========================================
// 职责: 由门店 × 部门明细构建 (期间, 门店, 部门) → 库存额/净销售额
// 输入: time_store_department_breakdown 行 + 快照级期间
// 输出: StockRatioMap (净销售额 ≤ 0 时比值为 0)
// ==========================================

use crate::importer::data_cleaner::{fallback_labels, DataCleaner};
use crate::importer::field_mapper::{fields, FieldMapper};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// 映射键: `period::store::department`
pub fn ratio_key(period: &str, store: &str, department: &str) -> String {
    format!("{}::{}::{}", period, store, department)
}

// ==========================================
// StockRatioMap - 库存销售比查找表
// ==========================================
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StockRatioMap {
    ratios: HashMap<String, f64>,
}

impl StockRatioMap {
    /// 查找比值，未命中为 0
    pub fn get(&self, period: &str, store: &str, department: &str) -> f64 {
        self.ratios
            .get(&ratio_key(period, store, department))
            .copied()
            .unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.ratios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ratios.is_empty()
    }
}

// ==========================================
// StockRatioMapper - 映射构建器
// ==========================================
pub struct StockRatioMapper {
    mapper: FieldMapper,
    cleaner: DataCleaner,
}

impl StockRatioMapper {
    pub fn new() -> Self {
        Self {
            mapper: FieldMapper,
            cleaner: DataCleaner,
        }
    }

    /// 构建库存销售比映射（同键多行时后者覆盖前者）
    pub fn build(&self, rows: &[&Map<String, Value>], fallback_period: &str) -> StockRatioMap {
        let mut ratios = HashMap::with_capacity(rows.len());

        for row in rows {
            let period = self
                .mapper
                .get_text(row, fields::REPORT_MONTH)
                .unwrap_or_else(|| fallback_period.trim().to_string());
            let store = self
                .cleaner
                .store_or_fallback(self.mapper.get_text(row, fields::STORE));
            let department = self.cleaner.text_or_fallback(
                self.mapper.get_text(row, fields::DEPARTMENT),
                fallback_labels::DEPARTMENT,
            );

            let net_sales = self.mapper.get_number_or_zero(row, fields::NET_SALES);
            let stock_value = self
                .mapper
                .get_number_or_zero(row, fields::ESTIMATED_STOCK_VALUE);
            let ratio = if net_sales > 0.0 {
                stock_value / net_sales
            } else {
                0.0
            };

            ratios.insert(ratio_key(&period, &store, &department), ratio);
        }

        tracing::debug!("库存销售比映射已构建: {} 个键", ratios.len());
        StockRatioMap { ratios }
    }
}

impl Default for StockRatioMapper {
    fn default() -> Self {
        Self::new()
    }
}

// ==========================================
// 供应商谈判决策引擎 - 派生字段服务
// ==========================================
// 职责: 期间字段派生 (年份/月份) + 带符号销量拆分 (销量/退货)
// ==========================================

use chrono::{Datelike, NaiveDate};

/// 报告期间
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPeriod {
    /// YYYY-MM
    pub report_month: String,
    pub report_year: String,
    /// 1-12；无法派生时为 0
    pub month_number: u32,
}

/// 解析 YYYY-MM 前缀为 (年, 月)
pub fn parse_report_month(value: &str) -> Option<(i32, u32)> {
    let prefix = value.trim().get(..7)?;
    NaiveDate::parse_from_str(&format!("{}-01", prefix), "%Y-%m-%d")
        .ok()
        .map(|d| (d.year(), d.month()))
}

pub struct DerivationService;

impl DerivationService {
    /// 派生报告期间
    ///
    /// # 参数
    /// - `report_month`: 行内 report_month（缺失时用 fallback_month）
    /// - `report_year`: 行内显式年份
    /// - `month_number`: 行内显式月份（仅接受 1-12）
    /// - `fallback_month`: 快照级 report_month
    pub fn derive_period(
        &self,
        report_month: Option<String>,
        report_year: Option<String>,
        month_number: Option<f64>,
        fallback_month: &str,
    ) -> ReportPeriod {
        let report_month = report_month.unwrap_or_else(|| fallback_month.trim().to_string());
        let parsed = parse_report_month(&report_month);

        let report_year = report_year
            .or_else(|| report_month.get(..4).map(|s| s.to_string()))
            .unwrap_or_default();

        let month_number = month_number
            .filter(|m| m.fract() == 0.0 && (1.0..=12.0).contains(m))
            .map(|m| m as u32)
            .or_else(|| parsed.map(|(_, m)| m))
            .unwrap_or(0);

        ReportPeriod {
            report_month,
            report_year,
            month_number,
        }
    }

    /// 拆分带符号销量
    ///
    /// # 返回
    /// (销售件数 ≥0, 退货件数 ≥0)；负数视为退货并取绝对值
    pub fn split_units(&self, signed_units: f64) -> (f64, f64) {
        if !signed_units.is_finite() {
            return (0.0, 0.0);
        }
        if signed_units < 0.0 {
            (0.0, signed_units.abs())
        } else {
            (signed_units, 0.0)
        }
    }
}

// ==========================================
// 供应商谈判决策引擎 - 字段映射器
// ==========================================
// 职责: 从 KPI JSON 行中按字段名读取文本/数值，并做宽松类型转换
// 红线: 不抛错，无法解析的数值为 None，由调用方回退为 0
// ==========================================

use serde_json::{Map, Value};

/// KPI 行字段名
pub mod fields {
    pub const REPORT_MONTH: &str = "report_month";
    pub const REPORT_YEAR: &str = "report_year";
    pub const REPORT_MONTH_NUMBER: &str = "report_month_number";
    pub const STORE: &str = "filial";
    pub const DEPARTMENT: &str = "avdelning";
    pub const SUPPLIER: &str = "huvudleverantor";
    pub const ARTICLE_NUMBER: &str = "artnr";
    pub const EAN: &str = "ean";
    pub const ARTICLE_TEXT: &str = "varutext";
    pub const NET_SALES: &str = "net_sales";
    pub const GROSS_PROFIT: &str = "gross_profit";
    pub const GROSS_MARGIN_PERCENT: &str = "gross_margin_percent";
    pub const UNITS_SOLD: &str = "units_sold";
    pub const RETURN_ROW_COUNT: &str = "return_row_count";
    pub const NEGATIVE_MARGIN_ROW_COUNT: &str = "negative_margin_row_count";
    pub const ESTIMATED_STOCK_VALUE: &str = "estimated_stock_value";
}

/// 宽松数值解析
///
/// - JSON 数字: 有限值直接返回
/// - 字符串: 去除空格与不间断空格，逗号视为小数点
/// - 其他（null / bool / 数组 / 对象 / NaN）: None
pub fn parse_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
        Value::String(s) => {
            let cleaned: String = s
                .chars()
                .filter(|c| !c.is_whitespace() && *c != '\u{00A0}')
                .collect();
            if cleaned.is_empty() {
                return None;
            }
            cleaned
                .replace(',', ".")
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
        }
        _ => None,
    }
}

/// 宽松文本解析
///
/// - 字符串: 去除首尾空白，空串为 None
/// - 整数: 原样输出；浮点数: 去掉多余的尾随 0
/// - 其他: None
pub fn parse_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return Some(i.to_string());
            }
            if let Some(u) = n.as_u64() {
                return Some(u.to_string());
            }
            let f = n.as_f64()?;
            if !f.is_finite() {
                return None;
            }
            if f.fract() == 0.0 {
                return Some(format!("{}", f as i64));
            }
            let text = format!("{}", f);
            let text = text.trim_end_matches('0').trim_end_matches('.');
            Some(if text.is_empty() { "0".to_string() } else { text.to_string() })
        }
        _ => None,
    }
}

// ==========================================
// FieldMapper - 行字段读取
// ==========================================
pub struct FieldMapper;

impl FieldMapper {
    /// 读取文本字段
    pub fn get_text(&self, row: &Map<String, Value>, key: &str) -> Option<String> {
        row.get(key).and_then(parse_text)
    }

    /// 读取数值字段（缺失或无法解析为 None）
    pub fn get_number(&self, row: &Map<String, Value>, key: &str) -> Option<f64> {
        row.get(key).and_then(parse_number)
    }

    /// 读取数值字段，无法解析时回退为 0
    pub fn get_number_or_zero(&self, row: &Map<String, Value>, key: &str) -> f64 {
        self.get_number(row, key).unwrap_or(0.0)
    }

    /// 读取计数字段（非负整数，向下截断到 0）
    pub fn get_count(&self, row: &Map<String, Value>, key: &str) -> u64 {
        let value = self.get_number_or_zero(row, key);
        if value > 0.0 {
            value.round() as u64
        } else {
            0
        }
    }
}

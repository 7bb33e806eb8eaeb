// ==========================================
// 测试辅助函数
// ==========================================
// 职责: 构造 KPI 快照 JSON、写入临时文件
// ==========================================

use serde_json::{json, Map, Value};
use std::io::Write;
use tempfile::NamedTempFile;

/// Top-N 商品行构造器
#[derive(Debug, Clone)]
pub struct ArticleRow {
    pub month: String,
    pub store: String,
    pub department: String,
    pub supplier: String,
    pub artnr: String,
    pub text: String,
    pub net_sales: f64,
    pub gross_profit: f64,
    pub units: f64,
}

impl ArticleRow {
    pub fn new(month: &str, supplier: &str, artnr: &str) -> Self {
        Self {
            month: month.to_string(),
            store: "EBB_Kista".to_string(),
            department: "Färg".to_string(),
            supplier: supplier.to_string(),
            artnr: artnr.to_string(),
            text: format!("Artikel {}", artnr),
            net_sales: 0.0,
            gross_profit: 0.0,
            units: 0.0,
        }
    }

    pub fn store(mut self, store: &str) -> Self {
        self.store = store.to_string();
        self
    }

    pub fn department(mut self, department: &str) -> Self {
        self.department = department.to_string();
        self
    }

    pub fn sales(mut self, net_sales: f64, gross_profit: f64) -> Self {
        self.net_sales = net_sales;
        self.gross_profit = gross_profit;
        self
    }

    pub fn units(mut self, units: f64) -> Self {
        self.units = units;
        self
    }

    pub fn to_value(&self) -> Value {
        let margin = if self.net_sales > 0.0 {
            self.gross_profit / self.net_sales * 100.0
        } else {
            0.0
        };
        json!({
            "report_month": self.month,
            "filial": self.store,
            "avdelning": self.department,
            "huvudleverantor": self.supplier,
            "artnr": self.artnr,
            "ean": format!("7318{}", self.artnr),
            "varutext": self.text,
            "net_sales": self.net_sales,
            "gross_profit": self.gross_profit,
            "gross_margin_percent": margin,
            "units_sold": self.units,
            "return_row_count": 0,
            "negative_margin_row_count": 0
        })
    }
}

/// 门店部门汇总行
pub fn breakdown_row(
    month: &str,
    store: &str,
    department: &str,
    net_sales: f64,
    stock_value: f64,
) -> Value {
    json!({
        "report_month": month,
        "filial": store,
        "avdelning": department,
        "net_sales": net_sales,
        "estimated_stock_value": stock_value
    })
}

/// 快照构造器
#[derive(Debug, Default)]
pub struct SnapshotBuilder {
    root: Map<String, Value>,
}

impl SnapshotBuilder {
    pub fn new(report_month: &str) -> Self {
        let mut root = Map::new();
        root.insert("report_month".to_string(), json!(report_month));
        Self { root }
    }

    pub fn breakdown(self, rows: Vec<Value>) -> Self {
        self.dataset("time_store_department_breakdown", rows)
    }

    pub fn low_margin(self, rows: &[ArticleRow]) -> Self {
        self.articles("time_low_margin_high_sales_top_n", rows)
    }

    pub fn margin_risk(self, rows: &[ArticleRow]) -> Self {
        self.articles("time_margin_risk_items_top_n", rows)
    }

    pub fn return_risk(self, rows: &[ArticleRow]) -> Self {
        self.articles("time_return_risk_items_top_n", rows)
    }

    pub fn articles(self, key: &str, rows: &[ArticleRow]) -> Self {
        self.dataset(key, rows.iter().map(ArticleRow::to_value).collect())
    }

    pub fn dataset(mut self, key: &str, rows: Vec<Value>) -> Self {
        self.root.insert(key.to_string(), Value::Array(rows));
        self
    }

    pub fn build(self) -> Value {
        Value::Object(self.root)
    }
}

/// 同一商品跨两期: 150,000 / 100,000 净销售额，48,000 / 45,000 毛利
pub fn two_period_snapshot() -> Value {
    let p1 = ArticleRow::new("2025-01", "Nordic Paint AB", "100200")
        .sales(150_000.0, 48_000.0)
        .units(500.0);
    let p2 = ArticleRow::new("2025-02", "Nordic Paint AB", "100200")
        .sales(100_000.0, 45_000.0)
        .units(400.0);

    SnapshotBuilder::new("2025-02")
        .breakdown(vec![
            breakdown_row("2025-01", "EBB_Kista", "Färg", 1_000_000.0, 2_000_000.0),
            breakdown_row("2025-02", "EBB_Kista", "Färg", 1_000_000.0, 2_000_000.0),
        ])
        .low_margin(&[p1])
        .margin_risk(&[p2])
        .build()
}

/// 写入临时 JSON 文件（返回值需保持存活）
pub fn write_temp_json(value: &Value) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(value.to_string().as_bytes())
        .expect("Failed to write temp file");
    file
}

/// 写入任意文本到临时文件
pub fn write_temp_text(text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(text.as_bytes())
        .expect("Failed to write temp file");
    file
}

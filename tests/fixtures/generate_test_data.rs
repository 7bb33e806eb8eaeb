// ==========================================
// 测试数据生成器
// ==========================================
// 用途: 生成 KPI 快照 JSON 测试数据集 + 示例配置
// 输出: tests/fixtures/snapshots/*.json
// 用法: cargo run --bin generate_test_data -- [输出目录]
// ==========================================

use chrono::{Datelike, Local, Months, NaiveDate};
use serde_json::{json, Map, Value};
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_OUTPUT_DIR: &str = "tests/fixtures/snapshots";

const STORES: &[&str] = &["EBB_Kista", "EBB_Solna", "EBB-Täby", "EBB_Nacka_Forum"];
const DEPARTMENTS: &[&str] = &["Färg", "Bygg", "Trädgård", "Verktyg", "Järn"];
const SUPPLIERS: &[&str] = &[
    "Nordic Paint AB",
    "Bygg Partner AB",
    "Verktyg Nord AB",
    "Grön Trädgård AB",
    "Skruv & Beslag AB",
    "Alfa Kemi AB",
];

// 商品记录参数
struct ArticleSpec {
    month: String,
    store: &'static str,
    department: &'static str,
    supplier: &'static str,
    artnr: String,
    text: String,
    net_sales: f64,
    gross_profit: f64,
    units: i64,
}

impl ArticleSpec {
    fn generate(index: usize, month: &str) -> Self {
        let net_sales = 2_000.0 + (index % 37) as f64 * 1_350.0;
        // 毛利率在 -5% 到 55% 之间循环
        let margin = -5.0 + (index % 13) as f64 * 5.0;
        // 每 7 行出现一次退货净额（负件数）
        let units = if index % 7 == 6 {
            -((index % 4) as i64 + 1)
        } else {
            5 + (index % 40) as i64
        };

        Self {
            month: month.to_string(),
            store: STORES[index % STORES.len()],
            department: DEPARTMENTS[index % DEPARTMENTS.len()],
            supplier: SUPPLIERS[index % SUPPLIERS.len()],
            artnr: format!("{}", 100_000 + index * 17),
            text: format!("Artikel {:04}", index),
            net_sales,
            gross_profit: (net_sales * margin / 100.0).round(),
            units,
        }
    }

    fn to_value(&self) -> Value {
        let margin_percent = if self.net_sales > 0.0 {
            (self.gross_profit / self.net_sales * 1000.0).round() / 10.0
        } else {
            0.0
        };
        let ean = format!("73{:011}", self.artnr.parse::<u64>().unwrap_or(0));
        let return_rows = u32::from(self.units < 0);
        let negative_margin_rows = u32::from(self.gross_profit < 0.0);

        json!({
            "report_month": self.month,
            "filial": self.store,
            "avdelning": self.department,
            "huvudleverantor": self.supplier,
            "artnr": self.artnr,
            "ean": ean,
            "varutext": self.text,
            "net_sales": self.net_sales,
            "gross_profit": self.gross_profit,
            "gross_margin_percent": margin_percent,
            "units_sold": self.units,
            "return_row_count": return_rows,
            "negative_margin_row_count": negative_margin_rows
        })
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let output_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));
    fs::create_dir_all(&output_dir)?;

    println!("开始生成测试数据集 → {}", output_dir.display());

    let months = recent_months(3);

    // 1. 正常快照（3 个月，每月 60 行）
    write_json(
        &output_dir.join("01_normal_snapshot.json"),
        &generate_snapshot(&months, 60),
    )?;

    // 2. 大数据集（3 个月，每月 1000 行）
    write_json(
        &output_dir.join("02_large_snapshot.json"),
        &generate_snapshot(&months, 1000),
    )?;

    // 3. 跨数据集重复行
    write_json(
        &output_dir.join("03_duplicates_snapshot.json"),
        &generate_duplicates(&months[0]),
    )?;

    // 4. 脏数据（乱码 / 逗号小数 / 缺失字段）
    write_json(
        &output_dir.join("04_dirty_values_snapshot.json"),
        &generate_dirty_values(&months[0]),
    )?;

    // 5. 非时间序列键名
    write_json(
        &output_dir.join("05_fallback_keys_snapshot.json"),
        &generate_fallback_keys(&months[0]),
    )?;

    // 6. 示例配置
    write_json(&output_dir.join("00_config_sample.json"), &sample_config())?;

    println!("✓ 所有测试数据集生成完成！");
    Ok(())
}

/// 当前月之前的 n 个整月（升序，YYYY-MM）
fn recent_months(n: u32) -> Vec<String> {
    let today = Local::now().date_naive();
    let first = NaiveDate::from_ymd_opt(today.year(), today.month(), 1).unwrap_or(today);
    (1..=n)
        .rev()
        .filter_map(|back| first.checked_sub_months(Months::new(back)))
        .map(|d| d.format("%Y-%m").to_string())
        .collect()
}

fn breakdown_rows(months: &[String]) -> Vec<Value> {
    let mut rows = Vec::new();
    for (m, month) in months.iter().enumerate() {
        for (s, store) in STORES.iter().enumerate() {
            for (d, department) in DEPARTMENTS.iter().enumerate() {
                let net_sales = 150_000.0 + (s * 20_000 + d * 7_500 + m * 3_000) as f64;
                // 库存销售比在 0.8 到 4.0 之间分布
                let ratio = 0.8 + ((s * 5 + d * 3 + m) % 17) as f64 * 0.2;
                rows.push(json!({
                    "report_month": month,
                    "filial": store,
                    "avdelning": department,
                    "net_sales": net_sales,
                    "estimated_stock_value": (net_sales * ratio).round()
                }));
            }
        }
    }
    rows
}

fn generate_snapshot(months: &[String], rows_per_month: usize) -> Value {
    let mut low_margin = Vec::new();
    let mut margin_risk = Vec::new();
    let mut return_risk = Vec::new();

    for month in months {
        for i in 0..rows_per_month {
            let spec = ArticleSpec::generate(i, month);
            let value = spec.to_value();
            match i % 3 {
                0 => low_margin.push(value),
                1 => margin_risk.push(value),
                _ => return_risk.push(value),
            }
        }
    }

    let mut root = Map::new();
    root.insert(
        "report_month".to_string(),
        json!(months.last().cloned().unwrap_or_default()),
    );
    root.insert(
        "time_store_department_breakdown".to_string(),
        Value::Array(breakdown_rows(months)),
    );
    root.insert(
        "time_low_margin_high_sales_top_n".to_string(),
        Value::Array(low_margin),
    );
    root.insert(
        "time_margin_risk_items_top_n".to_string(),
        Value::Array(margin_risk),
    );
    root.insert(
        "time_return_risk_items_top_n".to_string(),
        Value::Array(return_risk),
    );
    Value::Object(root)
}

fn generate_duplicates(month: &str) -> Value {
    let base: Vec<Value> = (0..20)
        .map(|i| ArticleSpec::generate(i, month).to_value())
        .collect();
    // 同一商品在另一数据集中以不同的净销售额 / 件数出现
    let partial: Vec<Value> = (0..20)
        .map(|i| {
            let mut spec = ArticleSpec::generate(i, month);
            spec.net_sales = -(spec.net_sales * 1.2).round();
            spec.units = -3;
            spec.to_value()
        })
        .collect();

    json!({
        "report_month": month,
        "time_store_department_breakdown": breakdown_rows(&[month.to_string()]),
        "time_low_margin_high_sales_top_n": base,
        "time_margin_risk_items_top_n": partial,
        "time_return_risk_items_top_n": base
    })
}

fn generate_dirty_values(month: &str) -> Value {
    json!({
        "report_month": month,
        "time_store_department_breakdown": [
            { "filial": "EBB_Kista", "avdelning": "FÃ¤rg", "net_sales": "120 000,50",
              "estimated_stock_value": "300 000" }
        ],
        "time_low_margin_high_sales_top_n": [
            { "filial": "EBB_Kista", "avdelning": "FÃ¤rg", "huvudleverantor": "Nordic Paint AB",
              "artnr": 100200, "varutext": "TÃ¤ckfÃ¤rg vit 10L",
              "net_sales": "12 500,75", "gross_profit": "3 100,25", "units_sold": "42" },
            { "filial": "", "avdelning": null, "net_sales": "abc", "gross_profit": 10 },
            { "huvudleverantor": "  ", "artnr": "  ", "net_sales": 500, "units_sold": -5 }
        ],
        "time_margin_risk_items_top_n": [
            "inte ett objekt",
            { "filial": "EBB-Solna", "avdelning": "Bygg", "huvudleverantor": "Bygg Partner AB",
              "artnr": "200300", "net_sales": 800, "gross_profit": -1600,
              "gross_margin_percent": -200 }
        ],
        "time_return_risk_items_top_n": null
    })
}

fn generate_fallback_keys(month: &str) -> Value {
    let rows: Vec<Value> = (0..12)
        .map(|i| {
            let mut value = ArticleSpec::generate(i, month).to_value();
            if let Some(obj) = value.as_object_mut() {
                obj.remove("report_month");
            }
            value
        })
        .collect();
    json!({
        "report_month": month,
        "store_department_breakdown": breakdown_rows(&[month.to_string()]),
        "low_margin_high_sales_top_n": rows,
        "margin_risk_items_top_n": [],
        "return_risk_items_top_n": []
    })
}

fn sample_config() -> Value {
    json!({
        "selectedLevers": ["purchase_cost", "price_lift", "payment_terms", "moq_stock", "returns"],
        "prioritizeBy": "balanced",
        "supplierOverrides": [
            { "supplier": "Nordic Paint AB", "purchaseCostImprovementPct": 4.0, "apDaysGain": 10 }
        ],
        "filter": {
            "stores": [],
            "departments": [],
            "suppliers": [],
            "reportYears": [],
            "monthNumbers": []
        },
        "limit": 50
    })
}

fn write_json(path: &Path, value: &Value) -> Result<(), Box<dyn Error>> {
    fs::write(path, serde_json::to_string_pretty(value)?)?;
    println!("  ✓ {}", path.display());
    Ok(())
}

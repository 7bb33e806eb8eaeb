// ==========================================
// 供应商谈判决策引擎 - 数据清洗器
// ==========================================
// 职责: 乱码修复 / 门店名标准化 / 缺省标签回填
// 说明: 上游 KPI 文件偶有 UTF-8 被按 Latin-1 解码的瑞典字符
// ==========================================

/// 缺省标签
pub mod fallback_labels {
    pub const STORE: &str = "Okänd butik";
    pub const DEPARTMENT: &str = "Okänd avdelning";
    pub const SUPPLIER: &str = "Okänd leverantör";
    pub const ARTICLE_TEXT: &str = "Okänd artikel";
    pub const ARTICLE_NUMBER: &str = "-";
    pub const EAN: &str = "-";
}

/// 已知乱码 → 正确字符
const MOJIBAKE_TABLE: &[(&str, &str)] = &[
    ("Ã¥", "å"),
    ("Ã¤", "ä"),
    ("Ã¶", "ö"),
    ("Ã…", "Å"),
    ("Ã„", "Ä"),
    ("Ã–", "Ö"),
    ("Ã©", "é"),
    ("Ã¼", "ü"),
];

/// 门店名前缀（大小写不敏感）
const STORE_PREFIXES: &[&str] = &["EBB_", "EBB-"];

pub struct DataCleaner;

impl DataCleaner {
    /// 修复已知乱码字符
    pub fn repair_text(&self, value: &str) -> String {
        if !value.contains('Ã') {
            return value.to_string();
        }
        MOJIBAKE_TABLE
            .iter()
            .fold(value.to_string(), |acc, (broken, fixed)| acc.replace(broken, fixed))
    }

    /// 门店名标准化: 去掉 EBB_/EBB- 前缀，下划线转空格
    pub fn clean_store_name(&self, value: &str) -> String {
        let repaired = self.repair_text(value.trim());
        let without_prefix = STORE_PREFIXES
            .iter()
            .find(|prefix| {
                repaired.len() >= prefix.len()
                    && repaired.is_char_boundary(prefix.len())
                    && repaired[..prefix.len()].eq_ignore_ascii_case(prefix)
            })
            .map(|prefix| &repaired[prefix.len()..])
            .unwrap_or(&repaired);

        without_prefix
            .replace('_', " ")
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// 文本字段: 修复乱码，空值回填缺省标签
    pub fn text_or_fallback(&self, value: Option<String>, fallback: &str) -> String {
        value
            .map(|v| self.repair_text(v.trim()))
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| fallback.to_string())
    }

    /// 门店字段: 标准化后为空则回填缺省标签
    pub fn store_or_fallback(&self, value: Option<String>) -> String {
        value
            .map(|v| self.clean_store_name(&v))
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| fallback_labels::STORE.to_string())
    }
}

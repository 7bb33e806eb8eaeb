// ==========================================
// 供应商谈判决策引擎 - 领域类型定义
// ==========================================
// 职责: 杠杆 / 方案档位 / 排序目标 / 风险主因 的枚举定义
// 序列化格式: snake_case (与前端表单参数一致)
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 谈判杠杆 (Lever)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lever {
    PurchaseCost, // 进价改善
    PriceLift,    // 售价提升
    PaymentTerms, // 账期延长
    MoqStock,     // 起订量/库存释放
    Returns,      // 退货降低
}

impl Lever {
    /// 全部杠杆（固定顺序）
    pub const ALL: [Lever; 5] = [
        Lever::PurchaseCost,
        Lever::PriceLift,
        Lever::PaymentTerms,
        Lever::MoqStock,
        Lever::Returns,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Lever::PurchaseCost => "purchase_cost",
            Lever::PriceLift => "price_lift",
            Lever::PaymentTerms => "payment_terms",
            Lever::MoqStock => "moq_stock",
            Lever::Returns => "returns",
        }
    }
}

impl fmt::Display for Lever {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Lever {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "purchase_cost" | "purchase-cost" => Ok(Lever::PurchaseCost),
            "price_lift" | "price-lift" => Ok(Lever::PriceLift),
            "payment_terms" | "payment-terms" => Ok(Lever::PaymentTerms),
            "moq_stock" | "moq-stock" => Ok(Lever::MoqStock),
            "returns" => Ok(Lever::Returns),
            other => Err(format!("未知杠杆类型: {}", other)),
        }
    }
}

// ==========================================
// 方案档位 (Package Id)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PackageId {
    Base,       // 保守
    Target,     // 目标
    Aggressive, // 激进
}

impl PackageId {
    /// 输出顺序: base / target / aggressive
    pub const ALL: [PackageId; 3] = [PackageId::Base, PackageId::Target, PackageId::Aggressive];

    pub fn as_str(&self) -> &'static str {
        match self {
            PackageId::Base => "base",
            PackageId::Target => "target",
            PackageId::Aggressive => "aggressive",
        }
    }
}

impl fmt::Display for PackageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// 排序目标 (Objective)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Objective {
    Balanced,
    Tb,
    Cash,
    LowRisk,
}

impl Objective {
    pub fn as_str(&self) -> &'static str {
        match self {
            Objective::Balanced => "balanced",
            Objective::Tb => "tb",
            Objective::Cash => "cash",
            Objective::LowRisk => "low_risk",
        }
    }

    pub fn title_sv(&self) -> &'static str {
        match self {
            Objective::Balanced => "Balanserad",
            Objective::Tb => "Maximera TB",
            Objective::Cash => "Maximera kassaflöde",
            Objective::LowRisk => "Låg risk",
        }
    }
}

impl Default for Objective {
    fn default() -> Self {
        Objective::Balanced
    }
}

impl fmt::Display for Objective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Objective {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "balanced" => Ok(Objective::Balanced),
            "tb" => Ok(Objective::Tb),
            "cash" => Ok(Objective::Cash),
            "low_risk" | "low-risk" => Ok(Objective::LowRisk),
            other => Err(format!("未知排序目标: {}", other)),
        }
    }
}

// ==========================================
// 风险主因 (Risk Driver)
// ==========================================
// 可解释性: 每个候选必须说明风险分主要来自哪一项
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskDriver {
    Margin,
    Stock,
    Returns,
    Scale,
}

impl RiskDriver {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskDriver::Margin => "margin",
            RiskDriver::Stock => "stock",
            RiskDriver::Returns => "returns",
            RiskDriver::Scale => "scale",
        }
    }
}

impl fmt::Display for RiskDriver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

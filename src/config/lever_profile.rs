// ==========================================
// 供应商谈判决策引擎 - 杠杆档位表
// ==========================================
// 职责: 三档固定杠杆预设 (base / target / aggressive)
// 说明: 人工覆写值按 target 档位录入，其余档位按默认值比例缩放
// ==========================================

use crate::domain::package::LeverValues;
use crate::domain::types::{Lever, PackageId};

/// 杠杆档位（不可变预设）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LeverProfile {
    pub id: PackageId,
    pub defaults: LeverValues,
    /// 档位自带的执行风险
    pub execution_risk: f64,
}

pub const BASE_PROFILE: LeverProfile = LeverProfile {
    id: PackageId::Base,
    defaults: LeverValues {
        purchase_cost_improvement_pct: 1.2,
        price_lift_pct: 0.4,
        ap_days_gain: 3.0,
        stock_release_pct: 4.0,
        return_reduction_pct: 10.0,
    },
    execution_risk: 18.0,
};

pub const TARGET_PROFILE: LeverProfile = LeverProfile {
    id: PackageId::Target,
    defaults: LeverValues {
        purchase_cost_improvement_pct: 2.5,
        price_lift_pct: 0.9,
        ap_days_gain: 7.0,
        stock_release_pct: 9.0,
        return_reduction_pct: 18.0,
    },
    execution_risk: 28.0,
};

pub const AGGRESSIVE_PROFILE: LeverProfile = LeverProfile {
    id: PackageId::Aggressive,
    defaults: LeverValues {
        purchase_cost_improvement_pct: 4.2,
        price_lift_pct: 1.5,
        ap_days_gain: 12.0,
        stock_release_pct: 14.0,
        return_reduction_pct: 30.0,
    },
    execution_risk: 40.0,
};

/// 按输出顺序排列的全部档位
pub const LEVER_PROFILES: [LeverProfile; 3] = [BASE_PROFILE, TARGET_PROFILE, AGGRESSIVE_PROFILE];

impl LeverProfile {
    pub fn for_id(id: PackageId) -> &'static LeverProfile {
        match id {
            PackageId::Base => &BASE_PROFILE,
            PackageId::Target => &TARGET_PROFILE,
            PackageId::Aggressive => &AGGRESSIVE_PROFILE,
        }
    }

    pub fn default_for(&self, lever: Lever) -> f64 {
        self.defaults.get(lever)
    }
}

/// 将 target 档位的覆写值按比例换算到指定档位
///
/// `override_value × (profile_default / target_default)`；
/// target 默认值为 0 时不缩放。
pub fn scale_override(override_value: f64, profile_default: f64, target_default: f64) -> f64 {
    if target_default == 0.0 {
        return override_value;
    }
    override_value * (profile_default / target_default)
}

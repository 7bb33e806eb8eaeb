use super::*;
use crate::domain::candidate::Candidate;
use crate::domain::package::LeverValues;
use crate::domain::types::RiskDriver;

// ==========================================
// 测试辅助函数
// ==========================================

fn package(id: PackageId, tb_lift: f64, cash_lift: f64, risk_score: u32) -> Package {
    Package {
        id,
        levers: LeverValues::default(),
        tb_lift,
        cash_lift,
        total_impact: tb_lift + cash_lift,
        risk_score,
    }
}

/// 只有 Target 方案有差异的候选
fn candidate_with(
    supplier: &str,
    tb: f64,
    cash: f64,
    risk: u32,
    opportunity: u32,
) -> RankedCandidate {
    RankedCandidate {
        candidate: Candidate {
            store: "Kista".to_string(),
            department: "Färg".to_string(),
            supplier: supplier.to_string(),
            article_number: "1".to_string(),
            ean: "-".to_string(),
            article_text: "Täckfärg".to_string(),
            periods: 1,
            net_sales: 1000.0,
            gross_profit: 300.0,
            gross_margin_percent: 30.0,
            units_sold: 10.0,
            return_units: 0.0,
            return_row_count: 0,
            negative_margin_row_count: 0,
            stock_to_sales_ratio: 1.0,
            estimated_stock_value: 1000.0,
            return_rate_percent: 0.0,
        },
        base_risk_score: 40,
        opportunity_score: opportunity,
        primary_driver: RiskDriver::Margin,
        packages: vec![
            package(PackageId::Base, tb / 2.0, cash / 2.0, risk.saturating_sub(10)),
            package(PackageId::Target, tb, cash, risk),
            package(PackageId::Aggressive, tb * 1.5, cash * 1.5, risk + 10),
        ],
        recommended_package_id: PackageId::Target,
        priority_score: 0.0,
    }
}

fn suppliers(candidates: &[RankedCandidate]) -> Vec<&str> {
    candidates
        .iter()
        .map(|c| c.candidate.supplier.as_str())
        .collect()
}

// ==========================================
// 权重表
// ==========================================

#[test]
fn test_weights_sum_to_one() {
    for objective in [
        Objective::Balanced,
        Objective::Tb,
        Objective::Cash,
        Objective::LowRisk,
    ] {
        let w = ObjectiveWeights::for_objective(objective);
        let sum = w.tb + w.cash + w.total + w.opportunity + w.safety;
        assert!((sum - 1.0).abs() < 1e-9, "{} 权重和为 {}", objective, sum);
    }
}

#[test]
fn test_normalize_floor() {
    assert_eq!(normalize(0.5, 0.2), 50.0);
    assert_eq!(normalize(50.0, 200.0), 25.0);
    assert_eq!(normalize(0.0, 0.0), 0.0);
}

// ==========================================
// 群体排序
// ==========================================

#[test]
fn test_rank_balanced() {
    let ranker = PriorityRanker::new(Objective::Balanced);
    let ranked = ranker.rank(vec![
        candidate_with("A", 100.0, 100.0, 50, 10),
        candidate_with("B", 200.0, 200.0, 50, 10),
    ]);

    assert_eq!(suppliers(&ranked), vec!["B", "A"]);
    // B: 0.5×100 + 0.3×10 + 0.2×50 = 63
    assert!((ranked[0].priority_score - 63.0).abs() < 1e-9);
    // A: 0.5×50 + 0.3×10 + 0.2×50 = 38
    assert!((ranked[1].priority_score - 38.0).abs() < 1e-9);
}

#[test]
fn test_rank_by_tb_and_cash() {
    let input = vec![
        candidate_with("TB", 1000.0, 0.0, 40, 0),
        candidate_with("CASH", 0.0, 2000.0, 40, 0),
    ];

    let by_tb = PriorityRanker::new(Objective::Tb).rank(input.clone());
    assert_eq!(suppliers(&by_tb), vec!["TB", "CASH"]);
    assert!((by_tb[0].priority_score - 65.0).abs() < 1e-9);

    let by_cash = PriorityRanker::new(Objective::Cash).rank(input);
    assert_eq!(suppliers(&by_cash), vec!["CASH", "TB"]);
}

#[test]
fn test_rank_low_risk_prefers_safe_candidate() {
    let ranked = PriorityRanker::new(Objective::LowRisk).rank(vec![
        candidate_with("RISKY", 50.0, 50.0, 80, 50),
        candidate_with("SAFE", 50.0, 50.0, 20, 50),
    ]);
    assert_eq!(suppliers(&ranked), vec!["SAFE", "RISKY"]);
}

#[test]
fn test_rank_is_stable_for_ties() {
    let ranked = PriorityRanker::default().rank(vec![
        candidate_with("FIRST", 100.0, 100.0, 40, 20),
        candidate_with("SECOND", 100.0, 100.0, 40, 20),
        candidate_with("THIRD", 100.0, 100.0, 40, 20),
    ]);
    assert_eq!(suppliers(&ranked), vec!["FIRST", "SECOND", "THIRD"]);
}

#[test]
fn test_rank_empty() {
    assert!(PriorityRanker::default().rank(Vec::new()).is_empty());
}

// ==========================================
// 推荐档位
// ==========================================

fn escalating_packages(base_risk: u32) -> Vec<Package> {
    vec![
        package(PackageId::Base, 10.0, 10.0, base_risk),
        package(PackageId::Target, 40.0, 40.0, 45),
        package(PackageId::Aggressive, 60.0, 60.0, 60),
    ]
}

#[test]
fn test_recommend_balanced_takes_largest_impact() {
    let ranker = PriorityRanker::new(Objective::Balanced);
    assert_eq!(
        ranker.recommend(&escalating_packages(30), 20),
        PackageId::Aggressive
    );
}

#[test]
fn test_recommend_low_risk_takes_safest() {
    let ranker = PriorityRanker::new(Objective::LowRisk);
    // base: 0.55×90 + 0.25×16.7 + 4 = 57.7，aggressive 51.0，target 50.9
    assert_eq!(ranker.recommend(&escalating_packages(10), 20), PackageId::Base);
}

#[test]
fn test_recommend_ties_keep_earlier_package() {
    let packages = vec![
        package(PackageId::Base, 0.0, 0.0, 30),
        package(PackageId::Target, 0.0, 0.0, 30),
        package(PackageId::Aggressive, 0.0, 0.0, 30),
    ];
    assert_eq!(
        PriorityRanker::default().recommend(&packages, 0),
        PackageId::Base
    );
}

#[test]
fn test_recommend_without_packages() {
    assert_eq!(PriorityRanker::default().recommend(&[], 0), PackageId::Target);
}

// ==========================================
// 汇总
// ==========================================

#[test]
fn test_summarize_sums_target_package() {
    let candidates = vec![
        candidate_with("A", 100.0, 50.0, 40, 0),
        candidate_with("B", 300.0, 25.0, 40, 0),
    ];
    let totals = PriorityRanker::default().summarize(&candidates);

    assert_eq!(totals.candidate_count, 2);
    assert_eq!(totals.net_sales, 2000.0);
    assert_eq!(totals.gross_profit, 600.0);
    assert_eq!(totals.target_tb_potential, 400.0);
    assert_eq!(totals.target_cash_potential, 75.0);
    assert_eq!(totals.target_total_potential, 475.0);
}

#[test]
fn test_summarize_empty() {
    let totals = PriorityRanker::default().summarize(&[]);
    assert_eq!(totals, NegotiationTotals::default());
}

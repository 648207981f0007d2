//! 集成測試

use fulfillment::*;
use rust_decimal::Decimal;

fn demand(item: &str, project: &str, tosite_group: &str, sop: i64) -> DemandRow {
    DemandRow::new(
        item.to_string(),
        project.to_string(),
        tosite_group.to_string(),
        Decimal::from(sop),
    )
}

#[test]
fn test_weekly_plan_end_to_end() {
    // 場景：兩個專案、兩個到著地的一週需求表
    //   PJT-ALPHA/EU-WEST：物料受限（60 < 產能 140）
    //   PJT-ALPHA/NA-EAST：完全滿足
    //   PJT-BETA/EU-WEST：缺少交期配置

    // 1. 交期表
    let due_lt = DueLeadTimeMap::new()
        .with_entry("PJT-ALPHA", "EU-WEST", 7)
        .with_entry("PJT-ALPHA", "NA-EAST", 14);

    // 2. 物料環境
    let materials = MaterialContext::new()
        .with_rule("PHONE-A*", &["MAT-BODY", "MAT-SCREEN"])
        .with_rule("PHONE-B*", &["MAT-BODY"])
        .with_stock("MAT-BODY", Decimal::from(1_000))
        .with_stock("MAT-SCREEN", Decimal::from(60));

    // 3. 產能環境
    let production = ProductionContext::new()
        .with_project_lines("PJT-ALPHA", &["LINE-1"])
        .with_line_capacity(
            "LINE-1",
            ShiftCapacity::new().with_uniform(14, Decimal::from(20)),
        );

    // 4. 需求列
    let demands = vec![
        demand("PHONE-A10", "PJT-ALPHA", "EU-WEST", 100),
        demand("PHONE-B10", "PJT-ALPHA", "NA-EAST", 50),
        demand("PHONE-A20", "PJT-BETA", "EU-WEST", 80),
    ];

    // 5. 執行評估
    let snapshot = EvaluationSnapshot::new(demands, due_lt, materials, production);
    let result = FulfillmentCalculator::evaluate_snapshot(snapshot).unwrap();

    // 6. 驗證逐列結果
    assert_eq!(result.rows.len(), 3);

    // PHONE-A10：MAT-SCREEN 僅 60，物料為約束方
    let row = &result.rows[0];
    assert_eq!(row.production_qty, Decimal::from(60));
    assert!(!row.is_fulfilled);
    assert_eq!(row.constraint, ConstraintKind::MaterialShortage);

    // PHONE-B10：物料與產能皆足
    let row = &result.rows[1];
    assert_eq!(row.production_qty, Decimal::from(50));
    assert!(row.is_fulfilled);
    assert_eq!(row.constraint, ConstraintKind::Unconstrained);

    // PHONE-A20：PJT-BETA 無交期配置
    let row = &result.rows[2];
    assert_eq!(row.production_qty, Decimal::ZERO);
    assert!(!row.is_fulfilled);
    assert_eq!(row.constraint, ConstraintKind::NoDueDateInfo);
    assert_eq!(result.warnings.len(), 1);

    // 7. 驗證彙總
    let summary = &result.summary;
    assert_eq!(summary.total_sop, Decimal::from(230));
    assert_eq!(summary.total_production, Decimal::from(110));

    let alpha = &summary.project_fulfillment["PJT-ALPHA"];
    assert_eq!(alpha.sop, Decimal::from(150));
    assert_eq!(alpha.production, Decimal::from(110));

    let beta = &summary.project_fulfillment["PJT-BETA"];
    assert_eq!(beta.sop, Decimal::from(80));
    assert_eq!(beta.production, Decimal::ZERO);
    assert_eq!(beta.rate, Decimal::ZERO);

    let eu_west = &summary.site_fulfillment["EU-WEST"];
    assert_eq!(eu_west.sop, Decimal::from(180));
    assert_eq!(eu_west.production, Decimal::from(60));

    // 分割性質：各專案 SOP 總和 = 總 SOP
    let project_total: Decimal = summary
        .project_fulfillment
        .values()
        .map(|group| group.sop)
        .sum();
    assert_eq!(project_total, summary.total_sop);
}

#[test]
fn test_material_binding_constraint_scenario() {
    // 場景：SOP 100、物料可用 60、產能可用 80
    let due_lt = DueLeadTimeMap::new().with_entry("PJT-ALPHA", "EU-WEST", 4);
    let materials = MaterialContext::new()
        .with_rule("PHONE-*", &["MAT-A"])
        .with_stock("MAT-A", Decimal::from(60));
    let production = ProductionContext::new()
        .with_project_lines("PJT-ALPHA", &["LINE-1"])
        .with_line_capacity(
            "LINE-1",
            ShiftCapacity::new().with_uniform(4, Decimal::from(20)),
        );

    let snapshot = EvaluationSnapshot::new(
        vec![demand("PHONE-A10", "PJT-ALPHA", "EU-WEST", 100)],
        due_lt,
        materials,
        production,
    );
    let result = FulfillmentCalculator::evaluate_snapshot(snapshot).unwrap();

    let row = &result.rows[0];
    assert_eq!(row.production_qty, Decimal::from(60));
    assert!(!row.is_fulfilled);
    assert_eq!(row.constraint, ConstraintKind::MaterialShortage);
}

#[test]
fn test_trivial_and_degraded_rows_coexist() {
    // SOP = 0 的列與缺交期的列互不影響，批次不中斷
    let snapshot = EvaluationSnapshot::new(
        vec![
            demand("PHONE-A10", "PJT-ALPHA", "EU-WEST", 0),
            demand("PHONE-A20", "PJT-GHOST", "EU-WEST", 10),
        ],
        DueLeadTimeMap::new().with_entry("PJT-ALPHA", "EU-WEST", 7),
        MaterialContext::new(),
        ProductionContext::new(),
    );

    let result = FulfillmentCalculator::evaluate_snapshot(snapshot).unwrap();

    assert!(result.rows[0].is_fulfilled);
    assert_eq!(result.rows[0].constraint, ConstraintKind::Unconstrained);
    assert_eq!(result.rows[1].constraint, ConstraintKind::NoDueDateInfo);
}

#[test]
fn test_snapshot_from_json_fixture() {
    // 模擬 GUI／檔案載入層以 JSON 快照呼叫引擎
    let fixture = r#"{
        "week": "2025-08-04",
        "demands": [
            {
                "id": "7b0f0cbe-6f0b-4f8f-9c36-16a1e1f6a001",
                "item": "PHONE-A10",
                "project": "PJT-ALPHA",
                "tosite_group": "EU-WEST",
                "sop": "100",
                "source_ref": null
            }
        ],
        "due_lt": { "entries": { "PJT-ALPHA": { "EU-WEST": 7 } } },
        "materials": {
            "rules": [ { "pattern": "PHONE-*", "materials": ["MAT-A"] } ],
            "stocks": { "MAT-A": "60" },
            "groups": []
        },
        "production": {
            "project_lines": { "PJT-ALPHA": ["LINE-1"] },
            "line_capacities": {
                "LINE-1": { "per_shift": { "1": "40", "2": "40" } }
            }
        }
    }"#;

    let snapshot: EvaluationSnapshot = serde_json::from_str(fixture).unwrap();
    let result = FulfillmentCalculator::evaluate_snapshot(snapshot).unwrap();

    let row = &result.rows[0];
    assert_eq!(
        row.demand_id,
        uuid::Uuid::parse_str("7b0f0cbe-6f0b-4f8f-9c36-16a1e1f6a001").unwrap()
    );
    assert_eq!(row.production_qty, Decimal::from(60));
    assert_eq!(row.constraint, ConstraintKind::MaterialShortage);

    let report = fulfill_calc::report::format_summary(
        &result.summary,
        Some(chrono::NaiveDate::from_ymd_opt(2025, 8, 4).unwrap()),
    );
    assert!(report.contains("Overall rate: 60.0%"));
    assert!(report.contains("PJT-ALPHA: 60.0% (Demand: 100, Production: 60)"));
}

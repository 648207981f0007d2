//! 週計劃滿足度評估示例

use chrono::NaiveDate;
use fulfillment::*;
use rust_decimal::Decimal;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    println!("=== 週計劃滿足度評估示例 ===\n");

    // 交期表：專案 × 到著地 → 提前期（班次）
    let due_lt = DueLeadTimeMap::new()
        .with_entry("PJT-ALPHA", "EU-WEST", 7)
        .with_entry("PJT-ALPHA", "NA-EAST", 14)
        .with_entry("PJT-BETA", "EU-WEST", 4);

    // 物料環境：規則表、庫存、替代分組
    let materials = MaterialContext::new()
        .with_rule("PHONE-A*", &["MAT-BODY", "MAT-SCREEN"])
        .with_rule("PHONE-B*", &["MAT-BODY", "MAT-SCREEN-B"])
        .with_stock("MAT-BODY", Decimal::from(500))
        .with_stock("MAT-SCREEN", Decimal::from(120))
        .with_stock("MAT-SCREEN-B2", Decimal::from(90))
        .with_group(&["MAT-SCREEN-B", "MAT-SCREEN-B2"]);

    // 產能環境：專案可用產線、各線班次產能
    let production = ProductionContext::new()
        .with_project_lines("PJT-ALPHA", &["LINE-1", "LINE-2"])
        .with_project_lines("PJT-BETA", &["LINE-2"])
        .with_line_capacity(
            "LINE-1",
            ShiftCapacity::new().with_uniform(14, Decimal::from(20)),
        )
        .with_line_capacity(
            "LINE-2",
            ShiftCapacity::new().with_uniform(14, Decimal::from(10)),
        );

    // 一週的需求列
    let demands = vec![
        DemandRow::new(
            "PHONE-A10".to_string(),
            "PJT-ALPHA".to_string(),
            "EU-WEST".to_string(),
            Decimal::from(100),
        )
        .with_source_ref("SP-2025-31".to_string()),
        DemandRow::new(
            "PHONE-A20".to_string(),
            "PJT-ALPHA".to_string(),
            "NA-EAST".to_string(),
            Decimal::from(60),
        ),
        DemandRow::new(
            "PHONE-B10".to_string(),
            "PJT-BETA".to_string(),
            "EU-WEST".to_string(),
            Decimal::from(80),
        ),
        DemandRow::new(
            "PHONE-B20".to_string(),
            "PJT-GAMMA".to_string(),
            "EU-WEST".to_string(),
            Decimal::from(40),
        ),
    ];

    let week = NaiveDate::from_ymd_opt(2025, 8, 4).unwrap();
    let snapshot =
        EvaluationSnapshot::new(demands, due_lt, materials, production).with_week(week);

    let result = FulfillmentCalculator::evaluate_snapshot(snapshot)?;

    println!("逐列結果:");
    for row in &result.rows {
        println!(
            "  - {} / {} / {}: 需求 {}, 可生產 {}, 滿足 {}{}",
            row.item,
            row.project,
            row.tosite_group,
            row.sop,
            row.production_qty,
            row.is_fulfilled,
            if row.constraint == ConstraintKind::Unconstrained {
                String::new()
            } else {
                format!(" [{}]", row.constraint)
            }
        );
    }

    if !result.warnings.is_empty() {
        println!("\n警告:");
        for warning in &result.warnings {
            println!("  - {} ({}): {}", warning.item, warning.project, warning.message);
        }
    }

    println!();
    print!(
        "{}",
        fulfill_calc::report::format_summary(&result.summary, Some(week))
    );

    Ok(())
}

//! 滿足度文字報表

use chrono::NaiveDate;
use fulfill_core::FulfillmentSummary;
use std::fmt::Write;

/// 將彙總結果渲染為文字摘要
///
/// 輸出順序固定：整體滿足率、需求/可生產總量，然後各專案、
/// 各到著地逐行列出（BTreeMap 迭代順序保證可重現）。
pub fn format_summary(summary: &FulfillmentSummary, week: Option<NaiveDate>) -> String {
    let mut out = String::new();

    if let Some(week) = week {
        let _ = writeln!(out, "=== Fulfillment Summary (Week {}) ===", week);
    } else {
        let _ = writeln!(out, "=== Fulfillment Summary ===");
    }

    let _ = writeln!(out, "Overall rate: {:.1}%", summary.overall_rate);
    let _ = writeln!(
        out,
        "Total demand: {}, Total production: {}",
        summary.total_sop, summary.total_production
    );

    let _ = writeln!(out, "\n[By project]");
    for (project, group) in &summary.project_fulfillment {
        let _ = writeln!(
            out,
            "{}: {:.1}% (Demand: {}, Production: {})",
            project, group.rate, group.sop, group.production
        );
    }

    let _ = writeln!(out, "\n[By site]");
    for (site, group) in &summary.site_fulfillment {
        let _ = writeln!(
            out,
            "{}: {:.1}% (Demand: {}, Production: {})",
            site, group.rate, group.sop, group.production
        );
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::AggregateCalculator;
    use fulfill_core::{ConstraintKind, DemandRow, RowResult};
    use rust_decimal::Decimal;

    fn summary() -> FulfillmentSummary {
        let rows = vec![
            RowResult::new(
                &DemandRow::new(
                    "PHONE-A10".to_string(),
                    "PJT-ALPHA".to_string(),
                    "EU-WEST".to_string(),
                    Decimal::from(100),
                ),
                Decimal::from(60),
                false,
                ConstraintKind::MaterialShortage,
            ),
            RowResult::new(
                &DemandRow::new(
                    "PHONE-A20".to_string(),
                    "PJT-BETA".to_string(),
                    "NA-EAST".to_string(),
                    Decimal::from(100),
                ),
                Decimal::from(100),
                true,
                ConstraintKind::Unconstrained,
            ),
        ];
        AggregateCalculator::summarize(&rows)
    }

    #[test]
    fn test_report_contains_overall_and_groups() {
        let text = format_summary(&summary(), None);

        assert!(text.contains("Overall rate: 80.0%"));
        assert!(text.contains("Total demand: 200, Total production: 160"));
        assert!(text.contains("PJT-ALPHA: 60.0% (Demand: 100, Production: 60)"));
        assert!(text.contains("NA-EAST: 100.0% (Demand: 100, Production: 100)"));
    }

    #[test]
    fn test_report_week_header() {
        let week = NaiveDate::from_ymd_opt(2025, 8, 4).unwrap();
        let text = format_summary(&summary(), Some(week));

        assert!(text.starts_with("=== Fulfillment Summary (Week 2025-08-04) ==="));
    }

    #[test]
    fn test_group_lines_are_sorted() {
        let text = format_summary(&summary(), None);

        let alpha = text.find("PJT-ALPHA").unwrap();
        let beta = text.find("PJT-BETA").unwrap();
        assert!(alpha < beta);
    }
}

//! 滿足率彙總

use fulfill_core::{FulfillmentSummary, GroupFulfillment, RowResult};

/// 滿足率彙總計算器
pub struct AggregateCalculator;

impl AggregateCalculator {
    /// 將逐列結果彙總為整體、各專案、各到著地的滿足率
    ///
    /// 專案與到著地是兩個獨立的單鍵分組（非交叉分組）。
    /// 所有結果列一律計入，不因限制因素排除。
    pub fn summarize(rows: &[RowResult]) -> FulfillmentSummary {
        let mut summary = FulfillmentSummary::empty();

        for row in rows {
            summary.total_sop += row.sop;
            summary.total_production += row.production_qty;

            summary
                .project_fulfillment
                .entry(row.project.clone())
                .or_insert_with(GroupFulfillment::new)
                .add(row.sop, row.production_qty);

            summary
                .site_fulfillment
                .entry(row.tosite_group.clone())
                .or_insert_with(GroupFulfillment::new)
                .add(row.sop, row.production_qty);
        }

        summary.overall_rate =
            GroupFulfillment::rate_of(summary.total_production, summary.total_sop);
        summary
    }
}

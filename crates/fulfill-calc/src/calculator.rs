//! 滿足度主計算器

use fulfill_core::{
    ConstraintKind, DemandRow, DueLeadTimeMap, EvaluationSnapshot, MaterialContext,
    ProductionContext, RowResult,
};
use rayon::prelude::*;
use rust_decimal::Decimal;

use crate::aggregate::AggregateCalculator;
use crate::capacity::CapacityCalculator;
use crate::material::MaterialCalculator;
use crate::rules::MaterialRuleSet;
use crate::{FulfillWarning, FulfillmentResult};

/// 滿足度計算器
///
/// 持有單次評估所需的唯讀環境（交期表、物料環境、產能環境）。
/// 逐列評估彼此獨立，評估期間環境不可變。
pub struct FulfillmentCalculator {
    /// 交期提前期查詢表
    due_lt: DueLeadTimeMap,

    /// 物料環境
    materials: MaterialContext,

    /// 產能環境
    production: ProductionContext,
}

impl FulfillmentCalculator {
    /// 創建新的滿足度計算器
    pub fn new(
        due_lt: DueLeadTimeMap,
        materials: MaterialContext,
        production: ProductionContext,
    ) -> Self {
        Self {
            due_lt,
            materials,
            production,
        }
    }

    /// 以單一快照為入口執行評估
    pub fn evaluate_snapshot(snapshot: EvaluationSnapshot) -> fulfill_core::Result<FulfillmentResult> {
        let EvaluationSnapshot {
            demands,
            due_lt,
            materials,
            production,
            ..
        } = snapshot;
        Self::new(due_lt, materials, production).evaluate(demands)
    }

    /// 主評估入口
    pub fn evaluate(&self, demands: Vec<DemandRow>) -> fulfill_core::Result<FulfillmentResult> {
        tracing::info!("開始滿足度評估：需求 {} 筆", demands.len());

        let start_time = std::time::Instant::now();

        // Step 1: 編譯物料規則表
        tracing::debug!("Step 1: 編譯物料規則");
        let rules = MaterialRuleSet::compile(&self.materials.rules)?;
        tracing::debug!("規則數量: {}", rules.len());

        // Step 2: 逐列評估（列間獨立，結果依輸入順序合併）
        tracing::debug!("Step 2: 逐列評估");
        let rows: Vec<RowResult> = demands
            .par_iter()
            .map(|row| self.evaluate_row(row, &rules))
            .collect();

        // Step 3: 彙總滿足率
        tracing::debug!("Step 3: 彙總滿足率");
        let summary = AggregateCalculator::summarize(&rows);

        let mut result = FulfillmentResult::empty();
        result.warnings = Self::collect_warnings(&rows);
        result.rows = rows;
        result.summary = summary;
        result.calculation_time_ms = Some(start_time.elapsed().as_millis());

        tracing::info!("滿足度評估完成，耗時 {:?}", start_time.elapsed());
        tracing::info!("整體滿足率: {}%", result.summary.overall_rate);

        Ok(result)
    }

    /// 單列評估（嚴格依序判定，先命中者即為結論）
    fn evaluate_row(&self, row: &DemandRow, rules: &MaterialRuleSet) -> RowResult {
        // 無需求的列視為已滿足
        if row.sop <= Decimal::ZERO {
            return RowResult::new(row, Decimal::ZERO, true, ConstraintKind::Unconstrained);
        }

        // 缺少交期配置：跳過兩項限制檢查
        let Some(due_lt) = self.due_lt.resolve(&row.project, &row.tosite_group) else {
            return RowResult::new(row, Decimal::ZERO, false, ConstraintKind::NoDueDateInfo);
        };

        // 兩項限制各自獨立計算
        let material = MaterialCalculator::check(&row.item, row.sop, &self.materials, rules);
        let capacity = CapacityCalculator::check(&row.project, row.sop, due_lt, &self.production);

        // 兩者同為零時優先歸因物料短缺
        if material.available_qty.is_zero() {
            return RowResult::new(row, Decimal::ZERO, false, ConstraintKind::MaterialShortage)
                .with_missing_materials(material.missing_materials);
        }
        if capacity.available_qty.is_zero() {
            return RowResult::new(row, Decimal::ZERO, false, ConstraintKind::CapacityShortage);
        }

        let production_qty = material.available_qty.min(capacity.available_qty);
        let is_fulfilled = production_qty >= row.sop;

        // 未滿足時歸因較小的一方；相等時歸因物料
        let constraint = if is_fulfilled {
            ConstraintKind::Unconstrained
        } else if material.available_qty <= capacity.available_qty {
            ConstraintKind::MaterialShortage
        } else {
            ConstraintKind::CapacityShortage
        };

        RowResult::new(row, production_qty, is_fulfilled, constraint)
            .with_missing_materials(material.missing_materials)
    }

    /// 為降級列產生警告（缺少交期配置屬於資料配置缺漏）
    fn collect_warnings(rows: &[RowResult]) -> Vec<FulfillWarning> {
        rows.iter()
            .filter(|row| row.constraint == ConstraintKind::NoDueDateInfo)
            .map(|row| {
                FulfillWarning::warning(
                    row.item.clone(),
                    row.project.clone(),
                    format!("缺少交期配置: {} / {}", row.project, row.tosite_group),
                )
            })
            .collect()
    }

    /// 獲取交期表引用
    pub fn due_lt(&self) -> &DueLeadTimeMap {
        &self.due_lt
    }

    /// 獲取物料環境引用
    pub fn materials(&self) -> &MaterialContext {
        &self.materials
    }

    /// 獲取產能環境引用
    pub fn production(&self) -> &ProductionContext {
        &self.production
    }
}

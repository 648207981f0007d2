//! # Fulfillment
//!
//! 出貨滿足度引擎門面：重新輸出核心模型與計算引擎

pub use fulfill_calc;
pub use fulfill_core;

// Re-export 常用類型
pub use fulfill_calc::{FulfillmentCalculator, FulfillmentResult};
pub use fulfill_core::{
    ConstraintKind, DemandRow, DueLeadTimeMap, EvaluationSnapshot, FulfillmentSummary,
    MaterialContext, ProductionContext, RowResult, ShiftCapacity,
};

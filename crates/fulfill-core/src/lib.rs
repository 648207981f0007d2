//! # Fulfillment Core
//!
//! 核心資料模型與類型定義

pub mod capacity;
pub mod demand;
pub mod due_date;
pub mod material;
pub mod result;
pub mod snapshot;
pub mod summary;

// Re-export 主要類型
pub use capacity::{ProductionContext, ShiftCapacity};
pub use demand::DemandRow;
pub use due_date::DueLeadTimeMap;
pub use material::{MaterialContext, MaterialRule, SubstituteGroups};
pub use result::{ConstraintKind, RowResult};
pub use snapshot::EvaluationSnapshot;
pub use summary::{FulfillmentSummary, GroupFulfillment};

/// 滿足度引擎錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum FulfillError {
    #[error("無效的物料規則: {0}")]
    InvalidMaterialRule(String),

    #[error("計算錯誤: {0}")]
    CalculationError(String),

    #[error("其他錯誤: {0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, FulfillError>;

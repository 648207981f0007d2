//! # Fulfillment Calculation Engine
//!
//! 出貨滿足度計算引擎

pub mod aggregate;
pub mod calculator;
pub mod capacity;
pub mod material;
pub mod report;
pub mod rules;

// Re-export 主要類型
pub use calculator::FulfillmentCalculator;
pub use rules::MaterialRuleSet;

use serde::{Deserialize, Serialize};

/// 滿足度評估結果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FulfillmentResult {
    /// 逐列評估結果（與輸入順序一致）
    pub rows: Vec<fulfill_core::RowResult>,

    /// 滿足度彙總
    pub summary: fulfill_core::FulfillmentSummary,

    /// 警告信息
    pub warnings: Vec<FulfillWarning>,

    /// 計算耗時（毫秒）
    pub calculation_time_ms: Option<u128>,
}

impl FulfillmentResult {
    /// 創建空的評估結果
    pub fn empty() -> Self {
        Self {
            rows: Vec::new(),
            summary: fulfill_core::FulfillmentSummary::empty(),
            warnings: Vec::new(),
            calculation_time_ms: None,
        }
    }

    /// 添加警告
    pub fn add_warning(&mut self, warning: FulfillWarning) {
        self.warnings.push(warning);
    }
}

/// 評估警告
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FulfillWarning {
    pub item: String,
    pub project: String,
    pub message: String,
    pub severity: WarningSeverity,
}

impl FulfillWarning {
    pub fn new(item: String, project: String, message: String, severity: WarningSeverity) -> Self {
        Self {
            item,
            project,
            message,
            severity,
        }
    }

    pub fn info(item: String, project: String, message: String) -> Self {
        Self::new(item, project, message, WarningSeverity::Info)
    }

    pub fn warning(item: String, project: String, message: String) -> Self {
        Self::new(item, project, message, WarningSeverity::Warning)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WarningSeverity {
    Info,
    Warning,
    Error,
}

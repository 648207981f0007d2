//! 評估輸入快照

use crate::capacity::ProductionContext;
use crate::demand::DemandRow;
use crate::due_date::DueLeadTimeMap;
use crate::material::MaterialContext;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 評估輸入快照
///
/// 呼叫端（檔案載入層）一次提供完整輸入：需求列、交期表、物料環境、
/// 產能環境。快照在單次評估內視為不可變；引擎不回寫任何欄位。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationSnapshot {
    /// 計劃週（週計劃表的識別日期）
    pub week: Option<NaiveDate>,

    /// 需求列
    pub demands: Vec<DemandRow>,

    /// 交期提前期查詢表
    pub due_lt: DueLeadTimeMap,

    /// 物料環境
    pub materials: MaterialContext,

    /// 產能環境
    pub production: ProductionContext,
}

impl EvaluationSnapshot {
    /// 創建新的快照
    pub fn new(
        demands: Vec<DemandRow>,
        due_lt: DueLeadTimeMap,
        materials: MaterialContext,
        production: ProductionContext,
    ) -> Self {
        Self {
            week: None,
            demands,
            due_lt,
            materials,
            production,
        }
    }

    /// 建構器模式：設置計劃週
    pub fn with_week(mut self, week: NaiveDate) -> Self {
        self.week = Some(week);
        self
    }
}

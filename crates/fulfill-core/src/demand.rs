//! 需求模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 週需求列（每列對應一組 品目 × 專案 × 到著地）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemandRow {
    /// 需求列ID
    pub id: Uuid,

    /// 品目代碼
    pub item: String,

    /// 專案
    pub project: String,

    /// 到著地群組
    pub tosite_group: String,

    /// 需求數量（SOP）
    pub sop: Decimal,

    /// 來源單據（如出貨計劃單號）
    pub source_ref: Option<String>,
}

impl DemandRow {
    /// 創建新的需求列
    pub fn new(item: String, project: String, tosite_group: String, sop: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            item,
            project,
            tosite_group,
            sop,
            source_ref: None,
        }
    }

    /// 建構器模式：設置來源單據
    pub fn with_source_ref(mut self, source_ref: String) -> Self {
        self.source_ref = Some(source_ref);
        self
    }

    /// 檢查是否有實際需求（SOP > 0）
    pub fn has_requirement(&self) -> bool {
        self.sop > Decimal::ZERO
    }
}

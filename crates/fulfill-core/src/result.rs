//! 逐列評估結果模型

use crate::demand::DemandRow;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// 限制因素分類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConstraintKind {
    /// 無限制（已滿足，或無需求）
    Unconstrained,
    /// 缺少交期配置
    NoDueDateInfo,
    /// 物料短缺
    MaterialShortage,
    /// 產能短缺
    CapacityShortage,
}

impl ConstraintKind {
    /// 使用者可見的限制因素文字
    pub fn as_str(&self) -> &'static str {
        match self {
            ConstraintKind::Unconstrained => "",
            ConstraintKind::NoDueDateInfo => "No due date info",
            ConstraintKind::MaterialShortage => "Material shortage",
            ConstraintKind::CapacityShortage => "Production CAPA shortage",
        }
    }
}

impl fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 逐列評估結果（原始欄位 + 可生產量、是否滿足、限制因素）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RowResult {
    /// 來源需求列ID
    pub demand_id: Uuid,

    /// 品目代碼
    pub item: String,

    /// 專案
    pub project: String,

    /// 到著地群組
    pub tosite_group: String,

    /// 需求數量（SOP）
    pub sop: Decimal,

    /// 可生產量
    pub production_qty: Decimal,

    /// 是否滿足（可生產量 >= SOP）
    pub is_fulfilled: bool,

    /// 限制因素
    pub constraint: ConstraintKind,

    /// 短缺物料清單（物料短缺時填入）
    pub missing_materials: Vec<String>,
}

impl RowResult {
    /// 由需求列與評估結論建立結果列
    pub fn new(
        row: &DemandRow,
        production_qty: Decimal,
        is_fulfilled: bool,
        constraint: ConstraintKind,
    ) -> Self {
        Self {
            demand_id: row.id,
            item: row.item.clone(),
            project: row.project.clone(),
            tosite_group: row.tosite_group.clone(),
            sop: row.sop,
            production_qty,
            is_fulfilled,
            constraint,
            missing_materials: Vec::new(),
        }
    }

    /// 建構器模式：填入短缺物料清單
    pub fn with_missing_materials(mut self, missing_materials: Vec<String>) -> Self {
        self.missing_materials = missing_materials;
        self
    }

    /// 未滿足的缺口數量
    pub fn shortfall(&self) -> Decimal {
        (self.sop - self.production_qty).max(Decimal::ZERO)
    }
}

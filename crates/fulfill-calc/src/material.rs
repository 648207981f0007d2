//! 物料可用量檢查

use crate::rules::MaterialRuleSet;
use fulfill_core::MaterialContext;
use rust_decimal::Decimal;

/// 品目查無物料規則時的短缺標記
pub const NO_MATERIAL_INFO: &str = "No material info";

/// 物料可用量檢查結果
#[derive(Debug, Clone)]
pub struct MaterialAvailability {
    /// 可用數量（0 <= 可用數量 <= 需求數量）
    pub available_qty: Decimal,

    /// 短缺物料清單（含 `NO_MATERIAL_INFO` 標記）
    pub missing_materials: Vec<String>,
}

impl MaterialAvailability {
    /// 檢查是否存在短缺物料
    pub fn is_short(&self) -> bool {
        !self.missing_materials.is_empty()
    }
}

/// 物料可用量計算器
pub struct MaterialCalculator;

impl MaterialCalculator {
    /// 計算品目在需求數量下的物料可用量
    ///
    /// 每項所需物料的可用量為自身庫存加上替代分組內其他物料的庫存；
    /// 任何一項所需物料可用量 <= 0 時，整列可用量為 0（替代分組
    /// 不跨所需物料槽位互補）。其餘情況取各物料可用量的最小值，
    /// 並以需求數量封頂。
    pub fn check(
        item: &str,
        required_qty: Decimal,
        materials: &MaterialContext,
        rules: &MaterialRuleSet,
    ) -> MaterialAvailability {
        let required = rules.materials_for(item);

        if required.is_empty() {
            return MaterialAvailability {
                available_qty: Decimal::ZERO,
                missing_materials: vec![NO_MATERIAL_INFO.to_string()],
            };
        }

        let mut missing = Vec::new();
        let mut limit: Option<Decimal> = None;

        for material in required {
            let pooled = materials.pooled_on_hand(&material);
            if pooled <= Decimal::ZERO {
                missing.push(material);
            } else {
                limit = Some(match limit {
                    Some(current) => current.min(pooled),
                    None => pooled,
                });
            }
        }

        if !missing.is_empty() {
            return MaterialAvailability {
                available_qty: Decimal::ZERO,
                missing_materials: missing,
            };
        }

        MaterialAvailability {
            available_qty: limit.unwrap_or(Decimal::ZERO).min(required_qty),
            missing_materials: Vec::new(),
        }
    }
}

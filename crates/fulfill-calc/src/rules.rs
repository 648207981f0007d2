//! 物料規則匹配

use fulfill_core::{FulfillError, MaterialRule};
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::collections::BTreeSet;

/// 編譯後的物料規則表
///
/// 將有序規則表的品目樣式一次編譯為 GlobSet；查詢回傳所有命中
/// 規則的物料聯集（去重、排序），結果與規則順序無關。
pub struct MaterialRuleSet {
    set: GlobSet,
    materials: Vec<Vec<String>>,
}

impl MaterialRuleSet {
    /// 編譯規則表；樣式非法時整表失敗
    pub fn compile(rules: &[MaterialRule]) -> fulfill_core::Result<Self> {
        let mut builder = GlobSetBuilder::new();
        let mut materials = Vec::with_capacity(rules.len());

        for rule in rules {
            let glob = Glob::new(&rule.pattern).map_err(|e| {
                FulfillError::InvalidMaterialRule(format!("{}: {}", rule.pattern, e))
            })?;
            builder.add(glob);
            materials.push(rule.materials.clone());
        }

        let set = builder
            .build()
            .map_err(|e| FulfillError::InvalidMaterialRule(e.to_string()))?;

        Ok(Self { set, materials })
    }

    /// 取得品目所需的物料（所有命中規則的聯集）
    pub fn materials_for(&self, item: &str) -> Vec<String> {
        let mut found = BTreeSet::new();
        for rule_idx in self.set.matches(item) {
            found.extend(self.materials[rule_idx].iter().cloned());
        }
        found.into_iter().collect()
    }

    /// 規則數量
    pub fn len(&self) -> usize {
        self.materials.len()
    }

    /// 檢查規則表是否為空
    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}

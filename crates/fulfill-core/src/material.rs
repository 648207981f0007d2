//! 物料模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 物料需求規則
///
/// 品目樣式（glob）對應所需物料清單。規則表為有序清單；
/// 匹配語義為「所有命中規則的聯集」，與規則順序無關。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialRule {
    /// 品目樣式（glob，如 `PHONE-A*`）
    pub pattern: String,

    /// 所需物料代碼
    pub materials: Vec<String>,
}

impl MaterialRule {
    /// 創建新的物料規則
    pub fn new(pattern: String, materials: Vec<String>) -> Self {
        Self { pattern, materials }
    }
}

/// 替代物料分組
///
/// 無向分組結構：每個物料歸屬唯一的分組。`link` 會合併兩個物料
/// 所在的分組，對稱性由結構本身保證（不依賴輸入方向）。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Vec<String>>", into = "Vec<Vec<String>>")]
pub struct SubstituteGroups {
    group_of: HashMap<String, usize>,
    groups: Vec<Vec<String>>,
}

impl SubstituteGroups {
    /// 創建空的分組結構
    pub fn new() -> Self {
        Self::default()
    }

    /// 宣告一整組互為替代的物料
    pub fn add_group<I>(&mut self, members: I)
    where
        I: IntoIterator<Item = String>,
    {
        let mut iter = members.into_iter();
        let Some(first) = iter.next() else {
            return;
        };
        for member in iter {
            self.link(&first, &member);
        }
        // 單一成員也需登記，否則查詢不到其分組
        if !self.group_of.contains_key(&first) {
            self.group_of.insert(first.clone(), self.groups.len());
            self.groups.push(vec![first]);
        }
    }

    /// 將兩個物料連入同一分組（必要時合併既有分組）
    pub fn link(&mut self, a: &str, b: &str) {
        match (self.group_of.get(a).copied(), self.group_of.get(b).copied()) {
            (None, None) => {
                let idx = self.groups.len();
                if a == b {
                    self.groups.push(vec![a.to_string()]);
                    self.group_of.insert(a.to_string(), idx);
                } else {
                    self.groups.push(vec![a.to_string(), b.to_string()]);
                    self.group_of.insert(a.to_string(), idx);
                    self.group_of.insert(b.to_string(), idx);
                }
            }
            (Some(idx), None) => {
                self.groups[idx].push(b.to_string());
                self.group_of.insert(b.to_string(), idx);
            }
            (None, Some(idx)) => {
                self.groups[idx].push(a.to_string());
                self.group_of.insert(a.to_string(), idx);
            }
            (Some(ia), Some(ib)) => {
                if ia == ib {
                    return;
                }
                // 將 ib 的成員併入 ia；被清空的分組保留空位，索引不變
                let moved = std::mem::take(&mut self.groups[ib]);
                for member in &moved {
                    self.group_of.insert(member.clone(), ia);
                }
                self.groups[ia].extend(moved);
            }
        }
    }

    /// 取得某物料的替代物料（不含自身，避免重複計算）
    pub fn substitutes_of<'a>(&'a self, material_id: &'a str) -> impl Iterator<Item = &'a str> {
        self.group_of
            .get(material_id)
            .map(|&idx| self.groups[idx].as_slice())
            .unwrap_or(&[])
            .iter()
            .map(String::as_str)
            .filter(move |m| *m != material_id)
    }

    /// 檢查兩個物料是否互為替代
    pub fn are_substitutes(&self, a: &str, b: &str) -> bool {
        a != b
            && match (self.group_of.get(a), self.group_of.get(b)) {
                (Some(ia), Some(ib)) => ia == ib,
                _ => false,
            }
    }
}

impl From<Vec<Vec<String>>> for SubstituteGroups {
    fn from(groups: Vec<Vec<String>>) -> Self {
        let mut result = Self::new();
        for members in groups {
            result.add_group(members);
        }
        result
    }
}

impl From<SubstituteGroups> for Vec<Vec<String>> {
    fn from(groups: SubstituteGroups) -> Self {
        groups.groups.into_iter().filter(|g| !g.is_empty()).collect()
    }
}

/// 物料環境（規則表、現有庫存、替代分組）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MaterialContext {
    /// 物料需求規則表（有序）
    pub rules: Vec<MaterialRule>,

    /// 各物料現有庫存
    pub stocks: HashMap<String, Decimal>,

    /// 替代物料分組
    pub groups: SubstituteGroups,
}

impl MaterialContext {
    /// 創建空的物料環境
    pub fn new() -> Self {
        Self::default()
    }

    /// 建構器模式：添加物料規則
    pub fn with_rule(mut self, pattern: &str, materials: &[&str]) -> Self {
        self.rules.push(MaterialRule::new(
            pattern.to_string(),
            materials.iter().map(|m| m.to_string()).collect(),
        ));
        self
    }

    /// 建構器模式：設置物料庫存
    pub fn with_stock(mut self, material_id: &str, on_hand_qty: Decimal) -> Self {
        self.stocks.insert(material_id.to_string(), on_hand_qty);
        self
    }

    /// 建構器模式：宣告替代物料分組
    pub fn with_group(mut self, members: &[&str]) -> Self {
        self.groups
            .add_group(members.iter().map(|m| m.to_string()));
        self
    }

    /// 單一物料的現有庫存（未登記視為 0）
    pub fn on_hand(&self, material_id: &str) -> Decimal {
        self.stocks.get(material_id).copied().unwrap_or_default()
    }

    /// 合併替代分組後的可用庫存（自身 + 替代物料，不重複計入自身）
    pub fn pooled_on_hand(&self, material_id: &str) -> Decimal {
        let mut total = self.on_hand(material_id);
        for substitute in self.groups.substitutes_of(material_id) {
            total += self.on_hand(substitute);
        }
        total
    }
}

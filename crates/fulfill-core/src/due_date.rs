//! 交期提前期查詢表

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 交期提前期查詢表
///
/// 兩層查詢：專案 → 到著地群組 → 提前期（班次數）。
/// 查無資料（`None`）與提前期為 0（`Some(0)`）是不同狀態：
/// 前者代表缺少配置，後者代表有效但已到期的交期。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DueLeadTimeMap {
    entries: HashMap<String, HashMap<String, u32>>,
}

impl DueLeadTimeMap {
    /// 創建空的查詢表
    pub fn new() -> Self {
        Self::default()
    }

    /// 登記一組 (專案, 到著地群組) 的提前期
    pub fn insert(&mut self, project: &str, tosite_group: &str, due_lt: u32) {
        self.entries
            .entry(project.to_string())
            .or_default()
            .insert(tosite_group.to_string(), due_lt);
    }

    /// 建構器模式：登記提前期
    pub fn with_entry(mut self, project: &str, tosite_group: &str, due_lt: u32) -> Self {
        self.insert(project, tosite_group, due_lt);
        self
    }

    /// 解析 (專案, 到著地群組) 的提前期；兩層皆須存在
    pub fn resolve(&self, project: &str, tosite_group: &str) -> Option<u32> {
        self.entries.get(project)?.get(tosite_group).copied()
    }

    /// 檢查查詢表是否為空
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

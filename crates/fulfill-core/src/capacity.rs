//! 產線產能模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// 單一產線的班次產能表
///
/// 班次索引從 1 開始；未登記的班次產能視為 0。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShiftCapacity {
    per_shift: BTreeMap<u32, Decimal>,
}

impl ShiftCapacity {
    /// 創建空的產能表
    pub fn new() -> Self {
        Self::default()
    }

    /// 建構器模式：設置單一班次產能
    pub fn with_shift(mut self, shift: u32, capacity: Decimal) -> Self {
        self.set(shift, capacity);
        self
    }

    /// 建構器模式：以固定產能填滿 1..=shifts 班次
    pub fn with_uniform(mut self, shifts: u32, capacity: Decimal) -> Self {
        for shift in 1..=shifts {
            self.set(shift, capacity);
        }
        self
    }

    /// 設置單一班次產能
    pub fn set(&mut self, shift: u32, capacity: Decimal) {
        self.per_shift.insert(shift, capacity);
    }

    /// 查詢單一班次產能（未登記為 0）
    pub fn get(&self, shift: u32) -> Decimal {
        self.per_shift.get(&shift).copied().unwrap_or_default()
    }

    /// 班次視窗內（1..=shifts）的產能總和
    pub fn window_total(&self, shifts: u32) -> Decimal {
        if shifts == 0 {
            return Decimal::ZERO;
        }
        self.per_shift
            .range(1..=shifts)
            .map(|(_, capacity)| *capacity)
            .sum()
    }

    /// 檢查產能表是否為空
    pub fn is_empty(&self) -> bool {
        self.per_shift.is_empty()
    }
}

/// 產能環境（專案可用產線、各線班次產能）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductionContext {
    /// 各專案可使用的產線
    pub project_lines: HashMap<String, Vec<String>>,

    /// 各產線的班次產能表
    pub line_capacities: HashMap<String, ShiftCapacity>,
}

impl ProductionContext {
    /// 創建空的產能環境
    pub fn new() -> Self {
        Self::default()
    }

    /// 建構器模式：設置專案可用產線
    pub fn with_project_lines(mut self, project: &str, lines: &[&str]) -> Self {
        self.project_lines.insert(
            project.to_string(),
            lines.iter().map(|l| l.to_string()).collect(),
        );
        self
    }

    /// 建構器模式：設置產線產能表
    pub fn with_line_capacity(mut self, line: &str, capacity: ShiftCapacity) -> Self {
        self.line_capacities.insert(line.to_string(), capacity);
        self
    }

    /// 取得專案可用的產線（未配置為空）
    pub fn lines_for(&self, project: &str) -> &[String] {
        self.project_lines
            .get(project)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// 取得產線的產能表（未登記為 None）
    pub fn capacity_of(&self, line: &str) -> Option<&ShiftCapacity> {
        self.line_capacities.get(line)
    }
}

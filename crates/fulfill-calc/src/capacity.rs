//! 產能可用量檢查

use fulfill_core::ProductionContext;
use rust_decimal::Decimal;
use std::fmt;

/// 班次視窗上限（兩週計劃視界）
pub const MAX_SHIFT_WINDOW: u32 = 14;

/// 產能短缺原因
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapacityShortfall {
    /// 交期提前期無效（<= 0）
    InvalidDueDate,
    /// 專案未配置任何產線
    NoProductionLine,
    /// 視窗內產能不足
    InsufficientCapacity,
}

impl CapacityShortfall {
    /// 使用者可見的原因文字
    pub fn as_str(&self) -> &'static str {
        match self {
            CapacityShortfall::InvalidDueDate => "Invalid due date",
            CapacityShortfall::NoProductionLine => "No available production line",
            CapacityShortfall::InsufficientCapacity => "Insufficient production capacity",
        }
    }
}

impl fmt::Display for CapacityShortfall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 產能可用量檢查結果
#[derive(Debug, Clone)]
pub struct CapacityAvailability {
    /// 可用數量（0 <= 可用數量 <= 需求數量）
    pub available_qty: Decimal,

    /// 短缺原因（充足時為 None）
    pub reason: Option<CapacityShortfall>,
}

/// 產能可用量計算器
pub struct CapacityCalculator;

impl CapacityCalculator {
    /// 計算專案在交期視窗內的產能可用量
    ///
    /// 彙總專案所有已配置產線在班次 1..=min(due_lt, MAX_SHIFT_WINDOW)
    /// 的產能。未登記產能表的產線略過；視窗內產能為 0 的產線仍計入
    /// （貢獻 0）。各線產能直接相加，此層不做產線間的負載分配。
    pub fn check(
        project: &str,
        required_qty: Decimal,
        due_lt: u32,
        production: &ProductionContext,
    ) -> CapacityAvailability {
        if due_lt == 0 {
            return CapacityAvailability {
                available_qty: Decimal::ZERO,
                reason: Some(CapacityShortfall::InvalidDueDate),
            };
        }

        let lines = production.lines_for(project);
        if lines.is_empty() {
            return CapacityAvailability {
                available_qty: Decimal::ZERO,
                reason: Some(CapacityShortfall::NoProductionLine),
            };
        }

        let window = due_lt.min(MAX_SHIFT_WINDOW);
        let total: Decimal = lines
            .iter()
            .filter_map(|line| production.capacity_of(line))
            .map(|capacity| capacity.window_total(window))
            .sum();

        CapacityAvailability {
            available_qty: total.min(required_qty),
            reason: (total < required_qty).then_some(CapacityShortfall::InsufficientCapacity),
        }
    }
}

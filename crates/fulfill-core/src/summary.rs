//! 滿足度彙總模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 單一分組（專案或到著地）的滿足度
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GroupFulfillment {
    /// 需求總量
    pub sop: Decimal,

    /// 可生產總量
    pub production: Decimal,

    /// 滿足率（百分比）
    pub rate: Decimal,
}

impl GroupFulfillment {
    /// 創建空的分組滿足度
    pub fn new() -> Self {
        Self::default()
    }

    /// 累加一列的需求與可生產量並更新滿足率
    pub fn add(&mut self, sop: Decimal, production: Decimal) {
        self.sop += sop;
        self.production += production;
        self.rate = Self::rate_of(self.production, self.sop);
    }

    /// 滿足率公式：production / sop * 100；sop 為 0 時視為 100（無需求即無欠量）
    pub fn rate_of(production: Decimal, sop: Decimal) -> Decimal {
        if sop.is_zero() {
            Decimal::ONE_HUNDRED
        } else {
            production / sop * Decimal::ONE_HUNDRED
        }
    }
}

/// 滿足度彙總（整體、各專案、各到著地）
///
/// 分組使用 BTreeMap，確保報表與測試輸出的迭代順序可重現。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FulfillmentSummary {
    /// 整體滿足率（百分比）
    pub overall_rate: Decimal,

    /// 需求總量
    pub total_sop: Decimal,

    /// 可生產總量
    pub total_production: Decimal,

    /// 各專案滿足度
    pub project_fulfillment: BTreeMap<String, GroupFulfillment>,

    /// 各到著地滿足度
    pub site_fulfillment: BTreeMap<String, GroupFulfillment>,
}

impl FulfillmentSummary {
    /// 創建空的彙總
    pub fn empty() -> Self {
        Self {
            overall_rate: Decimal::ONE_HUNDRED,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Decimal::from(50), Decimal::from(100), Decimal::from(50))]
    #[case(Decimal::from(100), Decimal::from(100), Decimal::from(100))]
    #[case(Decimal::ZERO, Decimal::from(80), Decimal::ZERO)]
    #[case(Decimal::from(1), Decimal::from(3), Decimal::from(100) / Decimal::from(3))]
    fn test_rate_formula(
        #[case] production: Decimal,
        #[case] sop: Decimal,
        #[case] expected: Decimal,
    ) {
        assert_eq!(GroupFulfillment::rate_of(production, sop), expected);
    }

    #[test]
    fn test_rate_with_zero_sop_is_vacuously_full() {
        assert_eq!(
            GroupFulfillment::rate_of(Decimal::ZERO, Decimal::ZERO),
            Decimal::ONE_HUNDRED
        );
    }

    #[test]
    fn test_group_accumulation() {
        let mut group = GroupFulfillment::new();
        group.add(Decimal::from(100), Decimal::from(60));
        group.add(Decimal::from(100), Decimal::from(90));

        assert_eq!(group.sop, Decimal::from(200));
        assert_eq!(group.production, Decimal::from(150));
        assert_eq!(group.rate, Decimal::from(75));
    }

    #[test]
    fn test_empty_summary_is_vacuously_full() {
        let summary = FulfillmentSummary::empty();

        assert_eq!(summary.overall_rate, Decimal::ONE_HUNDRED);
        assert_eq!(summary.total_sop, Decimal::ZERO);
        assert!(summary.project_fulfillment.is_empty());
    }
}

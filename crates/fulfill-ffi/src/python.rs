//! Python 綁定實現

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use rust_decimal::Decimal;

/// Python 滿足度計算器
///
/// 輸入與輸出皆為 JSON 字串：GUI 端以表格資料組裝
/// `EvaluationSnapshot`，取回逐列結果與彙總。
#[pyclass(name = "FulfillmentCalculator")]
pub struct PyFulfillmentCalculator;

#[pymethods]
impl PyFulfillmentCalculator {
    #[new]
    fn new() -> Self {
        Self
    }

    /// 執行滿足度評估
    ///
    /// 接受序列化的評估快照，回傳序列化的評估結果；
    /// JSON 非法或物料規則樣式非法時拋出 ValueError。
    fn evaluate(&self, snapshot_json: &str) -> PyResult<String> {
        let snapshot: fulfill_core::EvaluationSnapshot = serde_json::from_str(snapshot_json)
            .map_err(|e| PyValueError::new_err(format!("無效的快照 JSON: {e}")))?;

        let result = fulfill_calc::FulfillmentCalculator::evaluate_snapshot(snapshot)
            .map_err(|e| PyValueError::new_err(e.to_string()))?;

        serde_json::to_string(&result).map_err(|e| PyValueError::new_err(e.to_string()))
    }
}

/// Python 需求列
#[pyclass(name = "DemandRow")]
pub struct PyDemandRow {
    #[pyo3(get, set)]
    pub item: String,
    #[pyo3(get, set)]
    pub project: String,
    #[pyo3(get, set)]
    pub tosite_group: String,
    #[pyo3(get, set)]
    pub sop: f64,
}

#[pymethods]
impl PyDemandRow {
    #[new]
    #[pyo3(signature = (item, project, tosite_group, sop=0.0))]
    fn new(item: String, project: String, tosite_group: String, sop: f64) -> Self {
        Self {
            item,
            project,
            tosite_group,
            sop,
        }
    }

    /// 轉為 JSON（供 GUI 端組裝快照的 demands 欄位）
    fn to_json(&self) -> PyResult<String> {
        let row = self.to_rust_row()?;
        serde_json::to_string(&row).map_err(|e| PyValueError::new_err(e.to_string()))
    }
}

/// 內部方法實現（不暴露給 Python）
impl PyDemandRow {
    /// 轉換為 Rust DemandRow（內部使用）
    pub(crate) fn to_rust_row(&self) -> PyResult<fulfill_core::DemandRow> {
        let sop = Decimal::try_from(self.sop)
            .map_err(|_| PyValueError::new_err(format!("無效的需求數量: {}", self.sop)))?;

        Ok(fulfill_core::DemandRow::new(
            self.item.clone(),
            self.project.clone(),
            self.tosite_group.clone(),
            sop,
        ))
    }
}

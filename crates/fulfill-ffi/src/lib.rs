//! # Fulfillment FFI
//!
//! Python 綁定層（PyO3）：供桌面排程應用（PyQt5）以行程內呼叫
//! 使用滿足度引擎

use pyo3::prelude::*;

pub mod python;

/// Python 模組註冊
#[pymodule]
fn fulfill_engine(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<python::PyFulfillmentCalculator>()?;
    m.add_class::<python::PyDemandRow>()?;
    Ok(())
}

//! Bridge WASM <-> JavaScript trung lập framework.

use dashboard_core::{DashboardConfig, Patient, RenderModel};
use serde::Deserialize;
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

#[derive(Deserialize)]
struct JsDashboardConfig {
    #[serde(default)]
    active_lab_result: Option<String>,
}

impl From<JsDashboardConfig> for DashboardConfig {
    fn from(cfg: JsDashboardConfig) -> Self {
        let mut base = DashboardConfig::default();
        if let Some(label) = cfg.active_lab_result {
            base.active_lab_result = label;
        }
        base
    }
}

#[wasm_bindgen]
pub fn prepare_dashboard(patient: JsValue, config: Option<JsValue>) -> Result<JsValue, JsValue> {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    let patient: Patient = from_value(patient)
        .map_err(|err| JsValue::from_str(&format!("Không đọc được dữ liệu bệnh nhân: {err}")))?;

    let cfg = match config {
        Some(js_cfg) => {
            let cfg: JsDashboardConfig = from_value(js_cfg)
                .map_err(|err| JsValue::from_str(&format!("Không đọc được config: {err}")))?;
            DashboardConfig::from(cfg)
        }
        None => DashboardConfig::default(),
    };

    let model = RenderModel::new(patient, &cfg);

    to_value(&model)
        .map_err(|err| JsValue::from_str(&format!("Không serialize mô hình hiển thị: {err}")))
}

/// Hồ sơ mẫu để trang demo khởi động khi chưa có nguồn dữ liệu thật.
#[wasm_bindgen]
pub fn sample_patient() -> Result<JsValue, JsValue> {
    to_value(&dashboard_core::sample_patient())
        .map_err(|err| JsValue::from_str(&format!("Không serialize hồ sơ mẫu: {err}")))
}

#![cfg(target_arch = "wasm32")]

//! Cầu nối tới constructor `Chart` toàn cục của thư viện biểu đồ.

use dashboard_core::ChartConfig;
use serde_wasm_bindgen::to_value;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = Chart)]
    type ChartJs;

    #[wasm_bindgen(constructor, js_class = "Chart")]
    fn new(canvas: &HtmlCanvasElement, config: &JsValue) -> ChartJs;

    #[wasm_bindgen(method, js_class = "Chart")]
    fn destroy(this: &ChartJs);
}

/// Một instance biểu đồ đang gắn vào canvas.
pub struct BpChart {
    inner: ChartJs,
}

impl BpChart {
    fn mount(canvas: &HtmlCanvasElement, config: &ChartConfig) -> Result<Self, JsValue> {
        let config = to_value(config)?;
        Ok(Self {
            inner: ChartJs::new(canvas, &config),
        })
    }
}

/// Thay instance cũ (nếu có) bằng instance mới.
///
/// Mỗi canvas chỉ giữ đúng một instance; instance cũ được `destroy`
/// trước khi dựng instance kế tiếp.
pub fn replace(
    slot: &mut Option<BpChart>,
    canvas: &HtmlCanvasElement,
    config: &ChartConfig,
) -> Result<(), JsValue> {
    if let Some(previous) = slot.take() {
        previous.inner.destroy();
    }
    *slot = Some(BpChart::mount(canvas, config)?);
    Ok(())
}

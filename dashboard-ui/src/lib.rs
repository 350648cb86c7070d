//! Thành phần giao diện bảng điều khiển bệnh nhân cho môi trường WebAssembly.

#[cfg(target_arch = "wasm32")]
mod chart;
#[cfg(target_arch = "wasm32")]
mod styles;

#[cfg(target_arch = "wasm32")]
mod wasm_ui {
    use crate::{chart, styles};
    use dashboard_core::{
        chart::{DIASTOLIC_COLOR, SYSTOLIC_COLOR},
        BpReading, ChartConfig, ChartSeries, DashboardConfig, DashboardError, DiagnosticEntry,
        LabItem, Patient, VitalReading,
    };
    use serde_wasm_bindgen::from_value;
    use wasm_bindgen::prelude::*;
    use web_sys::{console, Document, Element, HtmlCanvasElement, Window};
    use yew::prelude::*;

    #[derive(Properties, PartialEq)]
    pub struct DashboardViewProps {
        pub patient: Patient,
        #[prop_or_default]
        pub config: DashboardConfig,
    }

    #[function_component(DashboardView)]
    fn dashboard_view(props: &DashboardViewProps) -> Html {
        let patient = &props.patient;

        use_effect_with((), |_| {
            if let Some(window) = web_sys::window() {
                if let Some(document) = window.document() {
                    if let Err(err) = styles::ensure_styles(&document) {
                        console::error_1(&err);
                    }
                }
            }
            || ()
        });

        let canvas_ref = use_node_ref();
        let chart_slot = use_mut_ref(|| None::<chart::BpChart>);

        {
            let canvas_ref = canvas_ref.clone();
            let chart_slot = chart_slot.clone();
            use_effect_with(patient.diagnosis_history.clone(), move |history| {
                let series = ChartSeries::from_history(history);
                let config = ChartConfig::blood_pressure(&series);
                match canvas_ref.cast::<HtmlCanvasElement>() {
                    Some(canvas) => {
                        if let Err(err) =
                            chart::replace(&mut chart_slot.borrow_mut(), &canvas, &config)
                        {
                            console::error_1(&err);
                        }
                    }
                    None => {
                        let err = DashboardError::MissingElement(
                            "canvas biểu đồ huyết áp".to_string(),
                        );
                        console::error_1(&JsValue::from_str(&err.to_string()));
                    }
                }
                || ()
            });
        }

        let lab_items = dashboard_core::lab_items(&patient.lab_results, &props.config);

        html! {
            <div class="dashboard-root">
                <aside class="profile-column">
                    <section class="profile-card">
                        <header class="profile-header">
                            <h2>{ patient.name.clone() }</h2>
                            <p class="profile-summary">{ patient.summary.clone() }</p>
                        </header>
                        <ul class="profile-fields">
                            { render_profile_field("Ngày sinh", &patient.dob) }
                            { render_profile_field("Giới tính", &patient.gender) }
                            { render_profile_field("Liên hệ", &patient.contact) }
                            { render_profile_field("Liên hệ khẩn cấp", &patient.emergency_contact) }
                            { render_profile_field("Bảo hiểm", &patient.insurance) }
                        </ul>
                    </section>
                    <section class="lab-card">
                        <header>
                            <h3>{"Kết quả xét nghiệm"}</h3>
                            <span class="lab-count">{ lab_items.len() }</span>
                        </header>
                        <ul class="lab-list">
                            {
                                if lab_items.is_empty() {
                                    html! { <li class="lab-empty">{"Chưa có kết quả xét nghiệm."}</li> }
                                } else {
                                    html! { for lab_items.iter().map(render_lab_item) }
                                }
                            }
                        </ul>
                    </section>
                </aside>
                <section class="diagnosis-column">
                    <section class="chart-card">
                        <header class="chart-header">
                            <h3>{"Lịch sử chẩn đoán"}</h3>
                            { render_chart_legend() }
                        </header>
                        <div class="chart-surface">
                            <canvas ref={canvas_ref} aria-label="Biểu đồ huyết áp theo tháng"></canvas>
                        </div>
                        <div class="bp-summary">
                            { render_bp_reading("Huyết áp tâm thu", &patient.bp_readings.systolic, "systolic") }
                            { render_bp_reading("Huyết áp tâm trương", &patient.bp_readings.diastolic, "diastolic") }
                        </div>
                    </section>
                    <section class="vitals-grid">
                        { render_vital_card("Nhịp thở", &patient.vitals.respiratory_rate, "respiratory") }
                        { render_vital_card("Nhiệt độ", &patient.vitals.temperature, "temperature") }
                        { render_vital_card("Nhịp tim", &patient.vitals.heart_rate, "heart-rate") }
                    </section>
                    <section class="diagnostic-card">
                        <header>
                            <h3>{"Danh sách chẩn đoán"}</h3>
                            <span class="diagnostic-count">{ patient.diagnostic_list.len() }</span>
                        </header>
                        <table class="diagnostic-table">
                            <thead>
                                <tr>
                                    <th>{"Vấn đề / Chẩn đoán"}</th>
                                    <th>{"Mô tả"}</th>
                                    <th>{"Trạng thái"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                {
                                    if patient.diagnostic_list.is_empty() {
                                        html! {
                                            <tr class="diagnostic-empty">
                                                <td colspan="3">{"Chưa ghi nhận chẩn đoán nào."}</td>
                                            </tr>
                                        }
                                    } else {
                                        html! { for patient.diagnostic_list.iter().map(render_diagnostic_row) }
                                    }
                                }
                            </tbody>
                        </table>
                    </section>
                </section>
            </div>
        }
    }

    fn render_profile_field(label: &str, value: &str) -> Html {
        html! {
            <li class="profile-field">
                <span class="field-label">{ label }</span>
                <span class="field-value">{ value }</span>
            </li>
        }
    }

    fn render_chart_legend() -> Html {
        let entries = [("Systolic", SYSTOLIC_COLOR), ("Diastolic", DIASTOLIC_COLOR)];

        html! {
            <div class="chart-legend" role="presentation">
                {
                    for entries.into_iter().map(|(label, color)| html! {
                        <span class="legend-entry">
                            <span class="legend-dot" style={format!("background: {color}")}></span>
                            { label }
                        </span>
                    })
                }
            </div>
        }
    }

    fn render_bp_reading(title: &str, reading: &BpReading, kind: &'static str) -> Html {
        html! {
            <div class="bp-reading" data-kind={kind}>
                <span class="bp-title">{ title }</span>
                <span class="bp-value">
                    { reading.value }
                    <span class="bp-trend">{ reading.trend.glyph() }</span>
                </span>
                <span class="bp-status" data-level={reading.status.level()}>
                    { reading.status.label() }
                </span>
            </div>
        }
    }

    fn render_vital_card(title: &str, reading: &VitalReading, kind: &'static str) -> Html {
        html! {
            <article class="vital-card" data-kind={kind}>
                <h4>{ title }</h4>
                <span class="vital-value">{ reading.value.clone() }</span>
                <span class="vital-status" data-level={reading.status.level()}>
                    { reading.status.label() }
                </span>
            </article>
        }
    }

    fn render_diagnostic_row(entry: &DiagnosticEntry) -> Html {
        html! {
            <tr class="diagnostic-row">
                <td>{ entry.problem.clone() }</td>
                <td>{ entry.description.clone() }</td>
                <td><span class="diagnostic-status">{ entry.status.clone() }</span></td>
            </tr>
        }
    }

    fn render_lab_item(item: &LabItem) -> Html {
        html! {
            <li class={classes!("lab-item", item.active.then_some("active"))}>
                <span class="lab-label">{ item.label.clone() }</span>
                <button type="button" class="download-button" aria-label="Tải xuống">
                    <span class="download-icon" aria-hidden="true">{ item.icon.glyph() }</span>
                </button>
            </li>
        }
    }

    #[wasm_bindgen]
    pub fn mount_dashboard_view(
        selector: &str,
        patient: JsValue,
        config: Option<JsValue>,
    ) -> Result<(), JsValue> {
        let window: Window =
            web_sys::window().ok_or_else(|| JsValue::from_str("Không có window"))?;
        let document: Document = window
            .document()
            .ok_or_else(|| JsValue::from_str("Không truy cập được document"))?;

        let target: Element = document
            .query_selector(selector)
            .map_err(|err| JsValue::from_str(&format!("Selector lỗi: {err:?}")))?
            .ok_or_else(|| {
                JsValue::from_str(
                    &DashboardError::MissingElement(selector.to_string()).to_string(),
                )
            })?;

        let patient: Patient = from_value(patient)?;
        let config: DashboardConfig = match config {
            Some(value) => from_value(value)?,
            None => DashboardConfig::default(),
        };

        yew::Renderer::<DashboardView>::with_root_and_props(
            target,
            DashboardViewProps { patient, config },
        )
        .render();
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm_ui::mount_dashboard_view;

#[cfg(not(target_arch = "wasm32"))]
pub fn mount_dashboard_view(
    _: &str,
    _: wasm_bindgen::JsValue,
    _: Option<wasm_bindgen::JsValue>,
) -> Result<(), wasm_bindgen::JsValue> {
    Err(wasm_bindgen::JsValue::from_str(
        "dashboard-ui chỉ hỗ trợ biên dịch target wasm32",
    ))
}

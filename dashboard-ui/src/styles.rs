#![cfg(target_arch = "wasm32")]

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Node};

const STYLE_TAG_SELECTOR: &str = "style[data-dashboard-ui]";

/// CSS mặc định của component kèm các design token dễ ghi đè.
pub const DEFAULT_STYLES: &str = r#"
:root {
  --dashboard-font-family: 'Inter', system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
  --dashboard-bg: #f6f7f8;
  --dashboard-card-bg: #ffffff;
  --dashboard-card-border: rgba(148, 163, 184, 0.28);
  --dashboard-radius: 16px;
  --dashboard-text: #1f2933;
  --dashboard-muted: #52606d;
  --dashboard-heading: #11181c;
  --dashboard-systolic: #C27CE5;
  --dashboard-diastolic: #8C6FE0;
  --dashboard-active-bg: #D8FCF7;
  --dashboard-level-normal: #047857;
  --dashboard-level-normal-bg: rgba(16, 185, 129, 0.14);
  --dashboard-level-high: #b54708;
  --dashboard-level-high-bg: rgba(220, 104, 3, 0.16);
  --dashboard-level-low: #0b5394;
  --dashboard-level-low-bg: rgba(11, 83, 148, 0.12);
}

.dashboard-root {
  font-family: var(--dashboard-font-family);
  background: var(--dashboard-bg);
  color: var(--dashboard-text);
  border-radius: var(--dashboard-radius);
  display: grid;
  gap: 24px;
  padding: 24px;
  grid-template-columns: minmax(280px, 0.8fr) minmax(460px, 1.7fr);
}

.profile-column {
  display: flex;
  flex-direction: column;
  gap: 24px;
}

.profile-card,
.lab-card,
.chart-card,
.diagnostic-card,
.vital-card {
  background: var(--dashboard-card-bg);
  border: 1px solid var(--dashboard-card-border);
  border-radius: var(--dashboard-radius);
  padding: 20px;
  box-shadow: 0 12px 24px rgba(15, 23, 42, 0.06);
}

.profile-header h2 {
  margin: 0;
  color: var(--dashboard-heading);
  font-size: 1.3rem;
}

.profile-summary {
  margin: 4px 0 0;
  color: var(--dashboard-muted);
  font-size: 0.9rem;
}

.profile-fields {
  list-style: none;
  margin: 18px 0 0;
  padding: 0;
  display: flex;
  flex-direction: column;
  gap: 14px;
}

.profile-field {
  display: flex;
  flex-direction: column;
  gap: 2px;
}

.field-label {
  font-size: 0.78rem;
  color: var(--dashboard-muted);
  text-transform: uppercase;
  letter-spacing: 0.04em;
}

.field-value {
  font-weight: 600;
  color: var(--dashboard-heading);
}

.lab-card header,
.chart-header,
.diagnostic-card header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 12px;
}

.lab-card h3,
.chart-card h3,
.diagnostic-card h3 {
  margin: 0;
  color: var(--dashboard-heading);
  font-size: 1.05rem;
}

.lab-count,
.diagnostic-count {
  font-size: 0.78rem;
  font-weight: 600;
  color: var(--dashboard-muted);
  background: rgba(71, 84, 103, 0.14);
  border-radius: 999px;
  padding: 2px 10px;
}

.lab-list {
  list-style: none;
  margin: 14px 0 0;
  padding: 0;
  display: flex;
  flex-direction: column;
}

.lab-item {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 10px;
  padding: 10px 12px;
  border-radius: 10px;
  font-size: 0.92rem;
}

.lab-item.active {
  background: var(--dashboard-active-bg);
  font-weight: 600;
}

.lab-empty,
.diagnostic-empty td {
  color: var(--dashboard-muted);
  font-size: 0.88rem;
  font-style: italic;
  padding: 10px 12px;
}

.download-button {
  border: none;
  background: transparent;
  cursor: pointer;
  color: var(--dashboard-muted);
  font-size: 1rem;
  line-height: 1;
  padding: 4px;
}

.download-button:hover {
  color: var(--dashboard-heading);
}

.chart-legend {
  display: flex;
  gap: 16px;
}

.legend-entry {
  display: inline-flex;
  align-items: center;
  gap: 6px;
  font-size: 0.82rem;
  color: var(--dashboard-muted);
}

.legend-dot {
  width: 10px;
  height: 10px;
  border-radius: 50%;
  display: inline-block;
}

.chart-surface {
  position: relative;
  height: 260px;
  margin-top: 16px;
}

.chart-surface canvas {
  width: 100%;
  height: 100%;
}

.bp-summary {
  display: flex;
  gap: 24px;
  margin-top: 16px;
  padding-top: 16px;
  border-top: 1px solid var(--dashboard-card-border);
}

.bp-reading {
  display: flex;
  flex-direction: column;
  gap: 4px;
  padding-left: 14px;
  border-left: 3px solid var(--dashboard-systolic);
}

.bp-reading[data-kind="diastolic"] {
  border-left-color: var(--dashboard-diastolic);
}

.bp-title {
  font-size: 0.82rem;
  color: var(--dashboard-muted);
}

.bp-value {
  font-size: 1.4rem;
  font-weight: 700;
  color: var(--dashboard-heading);
  font-variant-numeric: tabular-nums;
}

.bp-trend {
  font-size: 0.8rem;
  margin-left: 6px;
}

.vitals-grid {
  display: grid;
  grid-template-columns: repeat(3, minmax(0, 1fr));
  gap: 16px;
  margin-top: 24px;
}

.vital-card h4 {
  margin: 0;
  font-size: 0.85rem;
  color: var(--dashboard-muted);
}

.vital-value {
  display: block;
  margin-top: 8px;
  font-size: 1.5rem;
  font-weight: 700;
  color: var(--dashboard-heading);
  font-variant-numeric: tabular-nums;
}

.vital-status,
.bp-status {
  display: inline-block;
  margin-top: 8px;
  font-size: 0.78rem;
  font-weight: 600;
  border-radius: 999px;
  padding: 3px 10px;
}

.vital-status[data-level="normal"],
.bp-status[data-level="normal"] {
  color: var(--dashboard-level-normal);
  background: var(--dashboard-level-normal-bg);
}

.vital-status[data-level="high"],
.bp-status[data-level="high"] {
  color: var(--dashboard-level-high);
  background: var(--dashboard-level-high-bg);
}

.vital-status[data-level="low"],
.bp-status[data-level="low"] {
  color: var(--dashboard-level-low);
  background: var(--dashboard-level-low-bg);
}

.diagnostic-card {
  margin-top: 24px;
}

.diagnostic-table {
  width: 100%;
  margin-top: 14px;
  border-collapse: collapse;
  font-size: 0.9rem;
}

.diagnostic-table th {
  text-align: left;
  font-size: 0.78rem;
  text-transform: uppercase;
  letter-spacing: 0.04em;
  color: var(--dashboard-muted);
  padding: 8px 12px;
  border-bottom: 1px solid var(--dashboard-card-border);
}

.diagnostic-table td {
  padding: 10px 12px;
  border-bottom: 1px solid rgba(148, 163, 184, 0.16);
  vertical-align: top;
}

.diagnostic-status {
  font-weight: 600;
  color: var(--dashboard-heading);
}

@media (max-width: 1080px) {
  .dashboard-root {
    grid-template-columns: 1fr;
  }

  .vitals-grid {
    grid-template-columns: 1fr;
  }
}

@media (max-width: 640px) {
  .dashboard-root {
    padding: 16px;
  }

  .bp-summary {
    flex-direction: column;
    gap: 14px;
  }

  .diagnostic-table {
    font-size: 0.84rem;
  }
}
"#;

pub fn ensure_styles(document: &Document) -> Result<(), JsValue> {
    if document.query_selector(STYLE_TAG_SELECTOR)?.is_some() {
        return Ok(());
    }

    let head = document
        .head()
        .ok_or_else(|| JsValue::from_str("Document không có thẻ <head>"))?;

    let style_el = document.create_element("style")?;
    style_el.set_attribute("data-dashboard-ui", "v1")?;
    style_el.set_text_content(Some(DEFAULT_STYLES));
    head.append_child(&style_el.clone().dyn_into::<Node>()?)?;

    Ok(())
}

use std::fs;

use dashboard_core::{sample_patient, DashboardConfig, Patient, RenderModel};
use serde_json::Value;

fn fixture_path(name: &str) -> String {
    format!("{}/tests/data/{name}", env!("CARGO_MANIFEST_DIR"))
}

#[test]
fn fixture_matches_builtin_sample() {
    let raw = fs::read_to_string(fixture_path("jessica_taylor.json"))
        .expect("Không đọc được hồ sơ mẫu");

    let patient = Patient::from_json_str(&raw).expect("Hồ sơ mẫu không hợp lệ");

    assert_eq!(patient, sample_patient());
}

#[test]
fn sample_patient_matches_golden_render_model() {
    let raw = fs::read_to_string(fixture_path("jessica_taylor.json"))
        .expect("Không đọc được hồ sơ mẫu");

    let patient = Patient::from_json_str(&raw).expect("Hồ sơ mẫu không hợp lệ");
    let model = RenderModel::new(patient, &DashboardConfig::default());

    let mut actual = serde_json::to_value(model).expect("Không serialize mô hình");
    normalize_dynamic_fields(&mut actual);

    let expected = fs::read_to_string(fixture_path("jessica_taylor_render.json"))
        .expect("Không đọc được golden");

    let mut expected_value: Value =
        serde_json::from_str(&expected).expect("Golden không hợp lệ");
    normalize_dynamic_fields(&mut expected_value);

    assert_eq!(actual, expected_value);
}

fn normalize_dynamic_fields(value: &mut Value) {
    if let Some(obj) = value.as_object_mut() {
        if obj.contains_key("generated_at") {
            obj.insert(
                "generated_at".to_string(),
                Value::String("__DYNAMIC_TIMESTAMP__".to_string()),
            );
        }
    }
}

use dashboard_core::{lab_items, sample_patient, ChartSeries, DashboardConfig, RenderModel};

#[test]
fn sample_history_splits_into_expected_series() {
    let patient = sample_patient();
    let series = ChartSeries::from_history(&patient.diagnosis_history);

    assert_eq!(
        series.labels,
        [
            "Oct, 2023",
            "Nov, 2023",
            "Dec, 2023",
            "Jan, 2024",
            "Feb, 2024",
            "Mar, 2024"
        ]
    );
    assert_eq!(series.systolic, [120.0, 115.0, 160.0, 110.0, 150.0, 160.0]);
    assert_eq!(series.diastolic, [110.0, 65.0, 110.0, 92.0, 72.0, 78.0]);
}

#[test]
fn series_stay_index_aligned_with_history() {
    let patient = sample_patient();
    let series = ChartSeries::from_history(&patient.diagnosis_history);

    assert_eq!(series.labels.len(), patient.diagnosis_history.len());
    assert_eq!(series.systolic.len(), series.labels.len());
    assert_eq!(series.diastolic.len(), series.labels.len());

    for (index, point) in patient.diagnosis_history.iter().enumerate() {
        assert_eq!(series.labels[index], point.month);
        assert_eq!(series.systolic[index], point.systolic);
        assert_eq!(series.diastolic[index], point.diastolic);
    }
}

#[test]
fn empty_history_yields_empty_chart() {
    let mut patient = sample_patient();
    patient.diagnosis_history.clear();

    let model = RenderModel::new(patient, &DashboardConfig::default());

    assert!(model.chart().data.labels.is_empty());
    assert_eq!(model.chart().data.datasets.len(), 2);
    assert!(model
        .chart()
        .data
        .datasets
        .iter()
        .all(|dataset| dataset.data.is_empty()));
}

#[test]
fn exactly_one_active_lab_item_with_default_config() {
    let patient = sample_patient();
    let model = RenderModel::new(patient.clone(), &DashboardConfig::default());

    let labels: Vec<&str> = model
        .lab_items()
        .iter()
        .map(|item| item.label.as_str())
        .collect();
    assert_eq!(labels, patient.lab_results);

    let active: Vec<&str> = model
        .lab_items()
        .iter()
        .filter(|item| item.active)
        .map(|item| item.label.as_str())
        .collect();
    assert_eq!(active, ["CT Scans"]);
}

#[test]
fn no_active_item_when_configured_name_absent() {
    let mut patient = sample_patient();
    patient.lab_results.retain(|label| label != "CT Scans");

    let items = lab_items(&patient.lab_results, &DashboardConfig::default());

    assert!(!items.is_empty());
    assert!(items.iter().all(|item| !item.active));
}

#[test]
fn config_override_moves_active_item() {
    let patient = sample_patient();
    let config = DashboardConfig {
        active_lab_result: "X-Rays".to_string(),
    };

    let items = lab_items(&patient.lab_results, &config);
    let active: Vec<&str> = items
        .iter()
        .filter(|item| item.active)
        .map(|item| item.label.as_str())
        .collect();

    assert_eq!(active, ["X-Rays"]);
}

#[test]
fn repeated_derivation_is_deterministic() {
    let patient = sample_patient();
    let config = DashboardConfig::default();

    let first = RenderModel::new(patient.clone(), &config);
    let second = RenderModel::new(patient, &config);

    assert_eq!(first.chart(), second.chart());
    assert_eq!(first.lab_items(), second.lab_items());
    assert_eq!(first.patient, second.patient);
}

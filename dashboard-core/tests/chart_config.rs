use dashboard_core::{
    chart::{DIASTOLIC_COLOR, SYSTOLIC_COLOR},
    sample_patient, ChartConfig, ChartSeries, DashboardError, Patient,
};

fn sample_config() -> ChartConfig {
    let series = ChartSeries::from_history(&sample_patient().diagnosis_history);
    ChartConfig::blood_pressure(&series)
}

#[test]
fn blood_pressure_chart_keeps_fixed_line_styling() {
    let config = sample_config();

    assert_eq!(config.chart_type, "line");
    assert_eq!(config.data.datasets.len(), 2);

    let systolic = &config.data.datasets[0];
    let diastolic = &config.data.datasets[1];
    assert_eq!(systolic.label, "Systolic");
    assert_eq!(systolic.border_color, SYSTOLIC_COLOR);
    assert_eq!(diastolic.label, "Diastolic");
    assert_eq!(diastolic.border_color, DIASTOLIC_COLOR);

    for dataset in &config.data.datasets {
        assert_eq!(dataset.background_color, dataset.border_color);
        assert_eq!(dataset.point_background_color, dataset.border_color);
        assert_eq!(dataset.tension, 0.4);
        assert!(!dataset.fill);
        assert_eq!(dataset.point_radius, 6);
        assert_eq!(dataset.point_border_color, "white");
        assert_eq!(dataset.point_border_width, 2);
    }
}

#[test]
fn legend_hidden_and_tooltips_enabled() {
    let config = sample_config();

    assert!(!config.options.plugins.legend.display);
    assert!(config.options.plugins.tooltip.enabled);
}

#[test]
fn axes_follow_fixed_design() {
    let config = sample_config();
    let scales = &config.options.scales;

    assert_eq!(scales.x.grid.display, Some(false));
    assert_eq!(scales.x.ticks.step_size, None);

    assert!(!scales.y.begin_at_zero);
    assert_eq!(scales.y.min, 60.0);
    assert_eq!(scales.y.max, 180.0);
    assert_eq!(scales.y.ticks.step_size, Some(20.0));
    assert_eq!(scales.y.grid.color.as_deref(), Some("#E6E6E6"));
    assert_eq!(scales.y.grid.border_dash, Some(vec![5, 5]));
}

#[test]
fn malformed_patient_json_fails_fast() {
    let err = Patient::from_json_str(r#"{ "name": "Alex" }"#).unwrap_err();
    assert!(matches!(err, DashboardError::Parse(_)));
}

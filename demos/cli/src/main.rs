use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use dashboard_core::{sample_patient, ChartSeries, DashboardConfig, Patient, RenderModel};

#[derive(Parser, Debug)]
#[command(
    name = "dashboard-cli",
    about = "Dựng mô hình hiển thị bảng điều khiển từ hồ sơ bệnh nhân JSON."
)]
struct Args {
    /// Đường dẫn tới file JSON hồ sơ; bỏ trống để dùng hồ sơ mẫu.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// In toàn bộ mô hình hiển thị dưới dạng JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let patient = match &args.input {
        Some(path) => {
            let data = std::fs::read_to_string(path)
                .with_context(|| format!("Không đọc được file {path:?}"))?;
            Patient::from_json_str(&data)?
        }
        None => sample_patient(),
    };

    let config = DashboardConfig::default();
    let model = RenderModel::new(patient, &config);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&model)?);
        return Ok(());
    }

    let series = ChartSeries::from_history(&model.patient.diagnosis_history);
    let active = model
        .lab_items()
        .iter()
        .find(|item| item.active)
        .map(|item| item.label.as_str())
        .unwrap_or("--");

    println!(
        "Generated at: {}\nPatient: {} ({})\nHistory points: {}\nLabels: {:?}\nSystolic: {:?}\nDiastolic: {:?}\nActive lab result: {}",
        model.generated_at,
        model.patient.name,
        model.patient.summary,
        model.patient.diagnosis_history.len(),
        series.labels,
        series.systolic,
        series.diastolic,
        active
    );

    Ok(())
}

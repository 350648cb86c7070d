//! Cấu hình biểu đồ đường cho lịch sử huyết áp (định dạng Chart.js).

use serde::{Deserialize, Serialize};

use crate::HistoryPoint;

/// Màu đường tâm thu.
pub const SYSTOLIC_COLOR: &str = "#C27CE5";
/// Màu đường tâm trương.
pub const DIASTOLIC_COLOR: &str = "#8C6FE0";

const AXIS_TICK_COLOR: &str = "#6b7280";
const GRID_LINE_COLOR: &str = "#E6E6E6";
const Y_AXIS_MIN: f64 = 60.0;
const Y_AXIS_MAX: f64 = 180.0;
const Y_AXIS_STEP: f64 = 20.0;

/// Hai chuỗi số liệu cùng nhãn trục hoành, dẫn xuất từ lịch sử chẩn đoán.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub systolic: Vec<f64>,
    pub diastolic: Vec<f64>,
}

impl ChartSeries {
    /// Tách lịch sử thành nhãn và hai chuỗi giá trị, giữ nguyên thứ tự.
    pub fn from_history(history: &[HistoryPoint]) -> Self {
        Self {
            labels: history.iter().map(|point| point.month.clone()).collect(),
            systolic: history.iter().map(|point| point.systolic).collect(),
            diastolic: history.iter().map(|point| point.diastolic).collect(),
        }
    }
}

/// Cấu hình đầy đủ giao cho widget biểu đồ.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub chart_type: String,
    pub data: ChartData,
    pub options: ChartOptions,
}

impl ChartConfig {
    /// Biểu đồ hai đường tâm thu / tâm trương với kiểu trang trí cố định.
    pub fn blood_pressure(series: &ChartSeries) -> Self {
        Self {
            chart_type: "line".to_string(),
            data: ChartData {
                labels: series.labels.clone(),
                datasets: vec![
                    Dataset::line("Systolic", series.systolic.clone(), SYSTOLIC_COLOR),
                    Dataset::line("Diastolic", series.diastolic.clone(), DIASTOLIC_COLOR),
                ],
            },
            options: ChartOptions::fixed(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

/// Một đường trên biểu đồ cùng kiểu điểm đánh dấu.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    pub border_color: String,
    pub background_color: String,
    pub tension: f64,
    pub fill: bool,
    pub point_radius: u32,
    pub point_background_color: String,
    pub point_border_color: String,
    pub point_border_width: u32,
}

impl Dataset {
    fn line(label: &str, data: Vec<f64>, color: &str) -> Self {
        Self {
            label: label.to_string(),
            data,
            border_color: color.to_string(),
            background_color: color.to_string(),
            tension: 0.4,
            fill: false,
            point_radius: 6,
            point_background_color: color.to_string(),
            point_border_color: "white".to_string(),
            point_border_width: 2,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub plugins: PluginOptions,
    pub scales: ScaleOptions,
}

impl ChartOptions {
    // Chú giải là markup tĩnh bên ngoài widget nên legend tắt hẳn.
    fn fixed() -> Self {
        Self {
            responsive: true,
            maintain_aspect_ratio: false,
            plugins: PluginOptions {
                legend: LegendOptions { display: false },
                tooltip: TooltipOptions { enabled: true },
            },
            scales: ScaleOptions {
                x: XAxisOptions {
                    grid: GridOptions {
                        display: Some(false),
                        color: None,
                        border_dash: None,
                    },
                    ticks: TickOptions {
                        step_size: None,
                        color: AXIS_TICK_COLOR.to_string(),
                        font: FontSpec {
                            size: 12,
                            weight: Some(600),
                        },
                    },
                },
                y: YAxisOptions {
                    begin_at_zero: false,
                    min: Y_AXIS_MIN,
                    max: Y_AXIS_MAX,
                    ticks: TickOptions {
                        step_size: Some(Y_AXIS_STEP),
                        color: AXIS_TICK_COLOR.to_string(),
                        font: FontSpec {
                            size: 12,
                            weight: None,
                        },
                    },
                    grid: GridOptions {
                        display: None,
                        color: Some(GRID_LINE_COLOR.to_string()),
                        border_dash: Some(vec![5, 5]),
                    },
                },
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PluginOptions {
    pub legend: LegendOptions,
    pub tooltip: TooltipOptions,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct LegendOptions {
    pub display: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TooltipOptions {
    pub enabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScaleOptions {
    pub x: XAxisOptions,
    pub y: YAxisOptions,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct XAxisOptions {
    pub grid: GridOptions,
    pub ticks: TickOptions,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct YAxisOptions {
    pub begin_at_zero: bool,
    pub min: f64,
    pub max: f64,
    pub ticks: TickOptions,
    pub grid: GridOptions,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GridOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_dash: Option<Vec<u32>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TickOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step_size: Option<f64>,
    pub color: String,
    pub font: FontSpec,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct FontSpec {
    pub size: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<u32>,
}

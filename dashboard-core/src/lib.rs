//! Mô hình dữ liệu lõi cho bảng điều khiển bệnh nhân.

pub mod chart;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use chart::{ChartConfig, ChartSeries};

/// Cấu hình trình bày có thể ghi đè từ lớp ngoài.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardConfig {
    /// Tên xét nghiệm được đánh dấu chọn sẵn khi chưa có lựa chọn từ người dùng.
    pub active_lab_result: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            active_lab_result: "CT Scans".to_string(),
        }
    }
}

/// Hồ sơ một bệnh nhân, bất biến trong suốt phiên hiển thị.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Patient {
    pub name: String,
    /// Dòng tóm tắt dưới tên, ví dụ "Female, 28".
    pub summary: String,
    pub dob: String,
    pub gender: String,
    pub contact: String,
    pub emergency_contact: String,
    pub insurance: String,
    pub vitals: Vitals,
    pub bp_readings: BpReadings,
    #[serde(default)]
    pub diagnosis_history: Vec<HistoryPoint>,
    #[serde(default)]
    pub diagnostic_list: Vec<DiagnosticEntry>,
    #[serde(default)]
    pub lab_results: Vec<String>,
}

impl Patient {
    /// Đọc hồ sơ bệnh nhân từ chuỗi JSON.
    pub fn from_json_str(input: &str) -> Result<Self, DashboardError> {
        serde_json::from_str(input).map_err(|err| DashboardError::Parse(err.to_string()))
    }
}

/// Ba chỉ số sinh tồn trên lưới vitals.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Vitals {
    pub respiratory_rate: VitalReading,
    pub temperature: VitalReading,
    pub heart_rate: VitalReading,
}

/// Một chỉ số sinh tồn kèm đánh giá so với mức trung bình.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VitalReading {
    pub value: String,
    pub status: VitalStatus,
}

impl Default for VitalReading {
    fn default() -> Self {
        Self {
            value: String::new(),
            status: VitalStatus::Normal,
        }
    }
}

/// Đánh giá một trị số so với khoảng tham chiếu.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum VitalStatus {
    Normal,
    HigherThanAverage,
    LowerThanAverage,
}

impl VitalStatus {
    /// Nhãn hiển thị cho người dùng.
    pub fn label(self) -> &'static str {
        match self {
            VitalStatus::Normal => "Normal",
            VitalStatus::HigherThanAverage => "Higher than Average",
            VitalStatus::LowerThanAverage => "Lower than Average",
        }
    }

    /// Mã mức độ dùng cho thuộc tính `data-level` khi trình bày.
    pub fn level(self) -> &'static str {
        match self {
            VitalStatus::Normal => "normal",
            VitalStatus::HigherThanAverage => "high",
            VitalStatus::LowerThanAverage => "low",
        }
    }
}

/// Hai trị số huyết áp mới nhất.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct BpReadings {
    pub systolic: BpReading,
    pub diastolic: BpReading,
}

/// Một trị số huyết áp kèm xu hướng so với lần đo trước.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BpReading {
    pub value: f64,
    pub status: VitalStatus,
    pub trend: TrendArrow,
}

impl Default for BpReading {
    fn default() -> Self {
        Self {
            value: 0.0,
            status: VitalStatus::Normal,
            trend: TrendArrow::Rising,
        }
    }
}

/// Chiều biến động của một trị số.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TrendArrow {
    Rising,
    Falling,
}

impl TrendArrow {
    /// Ký tự mũi tên hiển thị cạnh trị số.
    pub fn glyph(self) -> &'static str {
        match self {
            TrendArrow::Rising => "▲",
            TrendArrow::Falling => "▼",
        }
    }
}

/// Một điểm trong lịch sử chẩn đoán huyết áp.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoryPoint {
    pub month: String,
    pub systolic: f64,
    pub diastolic: f64,
}

/// Một dòng trong bảng danh sách chẩn đoán.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticEntry {
    pub problem: String,
    pub description: String,
    pub status: String,
}

/// Biểu tượng trang trí trên mỗi mục kết quả xét nghiệm.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LabIcon {
    Download,
}

impl LabIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            LabIcon::Download => "⤓",
        }
    }
}

/// Mục kết quả xét nghiệm đã kèm trạng thái chọn.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LabItem {
    pub label: String,
    pub icon: LabIcon,
    pub active: bool,
}

/// Dựng danh sách mục xét nghiệm, đánh dấu mục trùng tên với cấu hình.
pub fn lab_items(lab_results: &[String], config: &DashboardConfig) -> Vec<LabItem> {
    lab_results
        .iter()
        .map(|label| LabItem {
            label: label.clone(),
            icon: LabIcon::Download,
            active: *label == config.active_lab_result,
        })
        .collect()
}

/// Mô hình hiển thị hoàn chỉnh: hồ sơ gốc cộng các phần dẫn xuất.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RenderModel {
    pub generated_at: DateTime<Utc>,
    pub patient: Patient,
    pub chart: ChartConfig,
    pub lab_items: Vec<LabItem>,
}

impl RenderModel {
    /// Dẫn xuất mô hình hiển thị từ hồ sơ bệnh nhân.
    pub fn new(patient: Patient, config: &DashboardConfig) -> Self {
        let series = ChartSeries::from_history(&patient.diagnosis_history);
        let chart = ChartConfig::blood_pressure(&series);
        let lab_items = lab_items(&patient.lab_results, config);
        Self {
            generated_at: Utc::now(),
            patient,
            chart,
            lab_items,
        }
    }

    /// Cấu hình biểu đồ huyết áp đã dựng sẵn.
    pub fn chart(&self) -> &ChartConfig {
        &self.chart
    }

    /// Danh sách mục xét nghiệm đã đánh dấu mục chọn.
    pub fn lab_items(&self) -> &[LabItem] {
        &self.lab_items
    }
}

/// Lỗi chung khi dựng bảng điều khiển.
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error("Không đọc được dữ liệu bệnh nhân: {0}")]
    Parse(String),
    #[error("Không tìm thấy phần tử hiển thị: {0}")]
    MissingElement(String),
}

/// Hồ sơ mẫu dùng cho demo và test.
pub fn sample_patient() -> Patient {
    Patient {
        name: "Jessica Taylor".to_string(),
        summary: "Female, 28".to_string(),
        dob: "August 23, 1996".to_string(),
        gender: "Female".to_string(),
        contact: "(415) 555-1234".to_string(),
        emergency_contact: "(415) 555-5678".to_string(),
        insurance: "Sunrise Health Assurance".to_string(),
        vitals: Vitals {
            respiratory_rate: VitalReading {
                value: "20 bpm".to_string(),
                status: VitalStatus::Normal,
            },
            temperature: VitalReading {
                value: "98.6°F".to_string(),
                status: VitalStatus::Normal,
            },
            heart_rate: VitalReading {
                value: "78 bpm".to_string(),
                status: VitalStatus::LowerThanAverage,
            },
        },
        bp_readings: BpReadings {
            systolic: BpReading {
                value: 160.0,
                status: VitalStatus::HigherThanAverage,
                trend: TrendArrow::Rising,
            },
            diastolic: BpReading {
                value: 78.0,
                status: VitalStatus::LowerThanAverage,
                trend: TrendArrow::Falling,
            },
        },
        diagnosis_history: vec![
            history_point("Oct, 2023", 120.0, 110.0),
            history_point("Nov, 2023", 115.0, 65.0),
            history_point("Dec, 2023", 160.0, 110.0),
            history_point("Jan, 2024", 110.0, 92.0),
            history_point("Feb, 2024", 150.0, 72.0),
            history_point("Mar, 2024", 160.0, 78.0),
        ],
        diagnostic_list: vec![
            diagnostic(
                "Hypertension",
                "Chronic high blood pressure",
                "Under Observation",
            ),
            diagnostic(
                "Type 2 Diabetes",
                "Insulin resistance and elevated blood sugar",
                "Cured",
            ),
            diagnostic(
                "Asthma",
                "Recurrent episodes of bronchial constriction",
                "Inactive",
            ),
            diagnostic(
                "Chronic Kidney Disease",
                "Progressive loss of kidney function",
                "Under Observation",
            ),
            diagnostic(
                "Seasonal Allergies",
                "Allergic reaction to pollen and dust",
                "Inactive",
            ),
        ],
        lab_results: [
            "Blood Tests",
            "CT Scans",
            "Radiology Reports",
            "X-Rays",
            "Urine Test",
            "Lipid Panel",
            "Thyroid Function Tests",
            "Liver Function Tests",
        ]
        .into_iter()
        .map(str::to_string)
        .collect(),
    }
}

fn history_point(month: &str, systolic: f64, diastolic: f64) -> HistoryPoint {
    HistoryPoint {
        month: month.to_string(),
        systolic,
        diastolic,
    }
}

fn diagnostic(problem: &str, description: &str, status: &str) -> DiagnosticEntry {
    DiagnosticEntry {
        problem: problem.to_string(),
        description: description.to_string(),
        status: status.to_string(),
    }
}

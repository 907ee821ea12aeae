// Chart configuration handed to the charting layer (Chart.js shaped)
use super::series::Series;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    #[serde(default, skip_serializing_if = "ChartOptions::is_empty")]
    pub options: ChartOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub data: DatasetData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_tension: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub point_background_color: Option<String>,
}

/// Dataset values: either `{t, y}` points or plain values matching `labels`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DatasetData {
    Points(Series),
    Values(Vec<f64>),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scales: Option<Scales>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plugins: Option<Plugins>,
}

impl ChartOptions {
    fn is_empty(&self) -> bool {
        self.scales.is_none() && self.plugins.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scales {
    pub x: Axis,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plugins {
    pub legend: Legend,
    pub tooltip: Tooltip,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Legend {
    pub display: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tooltip {
    pub box_padding: u32,
}

const DEMO_LABELS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];
const DEMO_VALUES: [f64; 7] = [15339.0, 21345.0, 18483.0, 24003.0, 23489.0, 24092.0, 12034.0];
const DEMO_COLOR: &str = "#007bff";

impl ChartConfig {
    /// Line chart over a time axis with a single dataset labelled by field
    pub fn time_series(field: &str, points: Series) -> Self {
        Self {
            kind: ChartKind::Line,
            data: ChartData {
                labels: Vec::new(),
                datasets: vec![Dataset {
                    label: Some(field.to_string()),
                    data: DatasetData::Points(points),
                    line_tension: None,
                    background_color: None,
                    border_color: None,
                    border_width: None,
                    point_background_color: None,
                }],
            },
            options: ChartOptions {
                scales: Some(Scales {
                    x: Axis {
                        kind: "time".to_string(),
                    },
                }),
                plugins: None,
            },
        }
    }

    /// Static weekly chart with literal data, not tied to any field
    pub fn weekly_demo() -> Self {
        Self {
            kind: ChartKind::Line,
            data: ChartData {
                labels: DEMO_LABELS.iter().map(|d| d.to_string()).collect(),
                datasets: vec![Dataset {
                    label: None,
                    data: DatasetData::Values(DEMO_VALUES.to_vec()),
                    line_tension: Some(0.0),
                    background_color: Some("transparent".to_string()),
                    border_color: Some(DEMO_COLOR.to_string()),
                    border_width: Some(4),
                    point_background_color: Some(DEMO_COLOR.to_string()),
                }],
            },
            options: ChartOptions {
                scales: None,
                plugins: Some(Plugins {
                    legend: Legend { display: false },
                    tooltip: Tooltip { box_padding: 3 },
                }),
            },
        }
    }

    /// Label of the first dataset, if any
    pub fn label(&self) -> Option<&str> {
        self.data.datasets.first().and_then(|d| d.label.as_deref())
    }
}

//! Option tree consumed by the external line-chart renderer.
//!
//! The shape of this tree belongs to the renderer, so field names follow its
//! camelCase schema rather than the descriptor's.

use serde::{Deserialize, Serialize};

use crate::core::DataPoint;
use crate::error::{ChartError, ChartResult};

use super::{ChartDescriptor, DatasetEntry, FillPolicy};

pub const CHART_TYPE_LINE: &str = "line";
pub const TITLE_FONT_COLOR: &str = "#333333";
pub const FONT_SIZE: u32 = 14;
pub const FONT_STYLE: &str = "normal";
pub const BORDER_WIDTH: f64 = 3.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineChartConfig {
    #[serde(rename = "type")]
    pub chart_type: String,
    pub data: LineChartData,
    pub options: LineChartOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineChartData {
    pub datasets: Vec<LineDataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineDataset {
    pub label: String,
    pub data: Vec<DataPoint>,
    pub fill: bool,
    pub line_tension: f64,
    pub border_width: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineChartOptions {
    pub title: TitleOptions,
    pub scales: ScaleOptions,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleOptions {
    pub display: bool,
    pub text: String,
    pub font_size: u32,
    pub font_style: String,
    pub font_color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleOptions {
    pub x_axes: Vec<AxisOptions>,
    pub y_axes: Vec<AxisOptions>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisOptions {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub axis_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    pub scale_label: ScaleLabel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleLabel {
    pub display: bool,
    pub label_string: String,
    pub font_size: u32,
    pub font_style: String,
}

impl ScaleLabel {
    fn new(text: &str) -> Self {
        Self {
            display: true,
            label_string: text.to_owned(),
            font_size: FONT_SIZE,
            font_style: FONT_STYLE.to_owned(),
        }
    }
}

impl From<&DatasetEntry> for LineDataset {
    fn from(entry: &DatasetEntry) -> Self {
        Self {
            label: entry.label.clone(),
            data: entry.points.clone(),
            fill: match entry.fill_policy {
                FillPolicy::NoFill => false,
            },
            line_tension: entry.line_smoothing.tension(),
            border_width: BORDER_WIDTH,
            border_color: entry.color.clone(),
            background_color: entry.color.clone(),
        }
    }
}

impl ChartDescriptor {
    #[must_use]
    pub fn to_line_chart_config(&self) -> LineChartConfig {
        LineChartConfig {
            chart_type: CHART_TYPE_LINE.to_owned(),
            data: LineChartData {
                datasets: self.datasets.iter().map(LineDataset::from).collect(),
            },
            options: LineChartOptions {
                title: TitleOptions {
                    display: true,
                    text: self.title.clone(),
                    font_size: FONT_SIZE,
                    font_style: FONT_STYLE.to_owned(),
                    font_color: TITLE_FONT_COLOR.to_owned(),
                },
                scales: ScaleOptions {
                    x_axes: vec![AxisOptions {
                        axis_type: Some("linear".to_owned()),
                        position: Some("bottom".to_owned()),
                        scale_label: ScaleLabel::new(&self.axis_labels.x),
                    }],
                    y_axes: vec![AxisOptions {
                        axis_type: None,
                        position: None,
                        scale_label: ScaleLabel::new(&self.axis_labels.y),
                    }],
                },
            },
        }
    }

    pub fn to_line_chart_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self.to_line_chart_config()).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize line chart config: {e}"))
        })
    }
}

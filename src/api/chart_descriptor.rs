use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{DataPoint, SeriesId, color_of, display_name_of, to_points};
use crate::error::{ChartError, ChartResult};

use super::BenchmarkDataset;

pub const X_AXIS_LABEL: &str = "Hilbert-Space Dimension";
pub const Y_AXIS_LABEL: &str = "Elapsed Time [seconds]";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisLabels {
    pub x: String,
    pub y: String,
}

impl Default for AxisLabels {
    fn default() -> Self {
        Self {
            x: X_AXIS_LABEL.to_owned(),
            y: Y_AXIS_LABEL.to_owned(),
        }
    }
}

/// Area fill below a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FillPolicy {
    #[default]
    NoFill,
}

/// Curve interpolation between points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LineSmoothing {
    /// Straight segments, line tension 0.
    #[default]
    Off,
}

impl LineSmoothing {
    #[must_use]
    pub const fn tension(self) -> f64 {
        match self {
            Self::Off => 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetEntry {
    pub series: SeriesId,
    pub label: String,
    pub points: Vec<DataPoint>,
    /// `None` when the series has no catalog color and no fallback applies;
    /// the renderer then uses its own default styling.
    pub color: Option<String>,
    pub fill_policy: FillPolicy,
    pub line_smoothing: LineSmoothing,
}

/// Renderer-independent description of one benchmark comparison chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDescriptor {
    pub title: String,
    pub axis_labels: AxisLabels,
    /// One entry per series, in payload order.
    pub datasets: Vec<DatasetEntry>,
}

impl ChartDescriptor {
    #[must_use]
    pub fn dataset(&self, series: &str) -> Option<&DatasetEntry> {
        self.datasets
            .iter()
            .find(|entry| entry.series.as_str() == series)
    }

    pub fn validate(&self) -> ChartResult<()> {
        for entry in &self.datasets {
            if let Some(index) = entry.points.iter().position(|point| !point.is_finite()) {
                return Err(ChartError::InvalidData(format!(
                    "series `{}` has a non-finite point at index {index}",
                    entry.series
                )));
            }
        }
        Ok(())
    }
}

/// Builds the descriptor, omitting styling for series the catalog does not know.
pub fn build(dataset: &BenchmarkDataset, title: &str) -> ChartResult<ChartDescriptor> {
    build_with_fallback(dataset, title, None)
}

/// Builds the descriptor; unknown series get `fallback_color` when given.
///
/// Deterministic and free of I/O. Any malformed record fails the whole chart.
pub fn build_with_fallback(
    dataset: &BenchmarkDataset,
    title: &str,
    fallback_color: Option<&str>,
) -> ChartResult<ChartDescriptor> {
    let mut datasets = Vec::with_capacity(dataset.len());
    for (series, records) in dataset {
        let points = to_points(series.as_str(), records)?;
        let color = match color_of(series.as_str()) {
            Some(color) => Some(color.to_owned()),
            None => {
                warn!(
                    series = %series,
                    fallback = fallback_color.unwrap_or("<renderer default>"),
                    "series has no catalog color"
                );
                fallback_color.map(str::to_owned)
            }
        };
        datasets.push(DatasetEntry {
            series: series.clone(),
            label: display_name_of(series.as_str()).to_owned(),
            points,
            color,
            fill_policy: FillPolicy::NoFill,
            line_smoothing: LineSmoothing::Off,
        });
    }
    debug!(title, dataset_count = datasets.len(), "built chart descriptor");
    Ok(ChartDescriptor {
        title: title.to_owned(),
        axis_labels: AxisLabels::default(),
        datasets,
    })
}

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::api::{ChartDescriptor, LineChartConfig};
use crate::error::{ChartError, ChartResult};
use crate::render::{ChartRenderer, RenderTarget};

#[derive(Debug, Serialize)]
struct CanvasDocument<'a> {
    id: &'a str,
    height: u32,
    config: LineChartConfig,
}

/// Writes each chart as `<out_dir>/<id>.chart.json` for a browser-side
/// line-chart renderer to pick up.
#[derive(Debug, Clone)]
pub struct JsonFileRenderer {
    out_dir: PathBuf,
    written: Vec<PathBuf>,
}

impl JsonFileRenderer {
    #[must_use]
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            written: Vec::new(),
        }
    }

    #[must_use]
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Files written so far, in render order.
    #[must_use]
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    #[must_use]
    pub fn chart_path(&self, chart_id: &str) -> PathBuf {
        self.out_dir.join(format!("{chart_id}.chart.json"))
    }
}

impl ChartRenderer for JsonFileRenderer {
    fn render(&mut self, target: &RenderTarget, descriptor: ChartDescriptor) -> ChartResult<()> {
        let render_err = |message: String| ChartError::Render {
            chart_id: target.chart_id.clone(),
            message,
        };
        descriptor
            .validate()
            .map_err(|err| render_err(err.to_string()))?;

        let document = CanvasDocument {
            id: &target.chart_id,
            height: target.height_px,
            config: descriptor.to_line_chart_config(),
        };
        let payload = serde_json::to_string_pretty(&document)
            .map_err(|err| render_err(format!("failed to serialize chart: {err}")))?;

        let path = self.chart_path(&target.chart_id);
        fs::write(&path, payload)
            .map_err(|err| render_err(format!("failed to write `{}`: {err}", path.display())))?;
        debug!(chart_id = %target.chart_id, path = %path.display(), "wrote chart config");
        self.written.push(path);
        Ok(())
    }
}

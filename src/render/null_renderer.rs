use crate::api::ChartDescriptor;
use crate::error::{ChartError, ChartResult};
use crate::render::{ChartRenderer, RenderTarget};

/// No-op renderer used by tests and headless pipelines.
///
/// It still validates descriptor content so tests catch non-finite points
/// before a real backend sees them.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub render_count: usize,
    pub last_chart_id: Option<String>,
    pub last_dataset_count: usize,
}

impl ChartRenderer for NullRenderer {
    fn render(&mut self, target: &RenderTarget, descriptor: ChartDescriptor) -> ChartResult<()> {
        descriptor.validate().map_err(|err| ChartError::Render {
            chart_id: target.chart_id.clone(),
            message: err.to_string(),
        })?;
        self.render_count += 1;
        self.last_chart_id = Some(target.chart_id.clone());
        self.last_dataset_count = descriptor.datasets.len();
        Ok(())
    }
}

mod json_file_renderer;
mod null_renderer;

pub use json_file_renderer::JsonFileRenderer;
pub use null_renderer::NullRenderer;

use crate::api::ChartDescriptor;
use crate::error::ChartResult;

/// Canvas a descriptor is drawn into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderTarget {
    pub chart_id: String,
    pub height_px: u32,
}

impl RenderTarget {
    #[must_use]
    pub fn new(chart_id: impl Into<String>, height_px: u32) -> Self {
        Self {
            chart_id: chart_id.into(),
            height_px,
        }
    }
}

/// Contract implemented by any line-chart backend.
///
/// A descriptor is handed over by value and rendered exactly once.
pub trait ChartRenderer {
    fn render(&mut self, target: &RenderTarget, descriptor: ChartDescriptor) -> ChartResult<()>;
}

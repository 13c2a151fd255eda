//! bench-charts: benchmark-timing comparison charts for documentation pages.
//!
//! Raw timing payloads are normalized onto a fixed catalog of toolboxes,
//! turned into line-chart descriptors and handed to a renderer, together
//! with links to each benchmark's source code.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{ChartDescriptor, ChartPageConfig, ChartPipeline};
pub use error::{ChartError, ChartResult};

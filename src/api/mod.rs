mod chart_descriptor;
mod line_chart_config;
mod page_config;
mod pipeline;
mod record_normalizer;
mod source_links;

pub use chart_descriptor::{
    AxisLabels, ChartDescriptor, DatasetEntry, FillPolicy, LineSmoothing, X_AXIS_LABEL,
    Y_AXIS_LABEL, build, build_with_fallback,
};
pub use line_chart_config::{
    AxisOptions, BORDER_WIDTH, CHART_TYPE_LINE, FONT_SIZE, FONT_STYLE, LineChartConfig,
    LineChartData, LineChartOptions, LineDataset, ScaleLabel, ScaleOptions, TITLE_FONT_COLOR,
    TitleOptions,
};
pub use page_config::ChartPageConfig;
pub use pipeline::{
    BenchmarkSource, ChartOutcome, ChartPipeline, ChartSlot, DirectorySource, PageReport,
    RenderedChart,
};
pub use record_normalizer::{
    BenchmarkDataset, RewriteRule, apply_exclusions, canonicalize_identifiers, normalize,
    parse_dataset, rewrite_rules,
};
pub use source_links::{SourceLink, SourceLinkCluster};

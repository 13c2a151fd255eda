use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{SeriesId, css_class_of, display_name_of, source_link_with_base};

use super::{BenchmarkDataset, ChartPageConfig};

/// One "view source" button under a chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLink {
    pub series: SeriesId,
    pub label: String,
    pub href: String,
    pub css_class: String,
}

/// Source links for every series drawn in one chart, in dataset order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLinkCluster {
    pub chart_id: String,
    pub links: Vec<SourceLink>,
}

impl SourceLinkCluster {
    /// The chart id doubles as the benchmark file stem.
    ///
    /// Series without a link template are left out.
    #[must_use]
    pub fn for_dataset(chart_id: &str, dataset: &BenchmarkDataset, config: &ChartPageConfig) -> Self {
        let links = dataset
            .series_ids()
            .filter_map(|series| {
                let Some(href) =
                    source_link_with_base(&config.source_base_url, series.as_str(), chart_id)
                else {
                    debug!(chart_id, series = %series, "no source link for series");
                    return None;
                };
                Some(SourceLink {
                    series: series.clone(),
                    label: display_name_of(series.as_str()).to_owned(),
                    href,
                    css_class: css_class_of(series.as_str())
                        .unwrap_or(config.fallback_css_class.as_str())
                        .to_owned(),
                })
            })
            .collect();
        Self {
            chart_id: chart_id.to_owned(),
            links,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Renders the small button group placed below the chart canvas.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut html = String::from(r#"<div class="btn-group btn-group-sm">"#);
        html.push_str(
            r#"<a style="cursor: default;" class="btn btn-default"><i class="fa fa-github"></i> View Source Code</a>"#,
        );
        for link in &self.links {
            html.push_str(&format!(
                r#"<a href="{}" class="btn btn-{}">{}</a>"#,
                htmlize::escape_attribute(&link.href),
                htmlize::escape_attribute(&link.css_class),
                htmlize::escape_text(&link.label),
            ));
        }
        html.push_str("</div>");
        html
    }
}

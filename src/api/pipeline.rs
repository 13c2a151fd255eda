//! Per-chart pipeline: fetch, normalize, build, render, link.
//!
//! Charts on one page share nothing but the read-only series catalog and the
//! page config. A failure ends only the chart it happened in.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::core::SeriesId;
use crate::error::{ChartError, ChartResult};
use crate::render::{ChartRenderer, RenderTarget};

use super::{ChartPageConfig, SourceLinkCluster, build_with_fallback, normalize};

/// One chart canvas on the page: its id names the payload and the
/// benchmark file stem, the title is shown above the plot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartSlot {
    pub id: String,
    pub title: String,
}

impl ChartSlot {
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

/// Provides the raw payload text for a chart id.
pub trait BenchmarkSource {
    fn fetch(&self, chart_id: &str) -> ChartResult<String>;
}

/// Reads `<dir>/<chart_id>.json` from the local filesystem.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    dir: PathBuf,
}

impl DirectorySource {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    #[must_use]
    pub fn payload_path(&self, chart_id: &str) -> PathBuf {
        self.dir.join(format!("{chart_id}.json"))
    }
}

impl BenchmarkSource for DirectorySource {
    fn fetch(&self, chart_id: &str) -> ChartResult<String> {
        if chart_id.is_empty() || chart_id.contains(['/', '\\']) || chart_id.contains("..") {
            return Err(ChartError::Fetch {
                chart_id: chart_id.to_owned(),
                message: "chart id must be a plain file stem".to_owned(),
            });
        }
        let path = self.payload_path(chart_id);
        fs::read_to_string(&path).map_err(|err| ChartError::Fetch {
            chart_id: chart_id.to_owned(),
            message: format!("failed to read `{}`: {err}", path.display()),
        })
    }
}

/// Summary of a chart that made it to the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedChart {
    pub chart_id: String,
    pub series: Vec<SeriesId>,
    pub links: SourceLinkCluster,
}

#[derive(Debug)]
pub enum ChartOutcome {
    Rendered(RenderedChart),
    Failed { chart_id: String, error: ChartError },
}

impl ChartOutcome {
    #[must_use]
    pub fn chart_id(&self) -> &str {
        match self {
            Self::Rendered(chart) => &chart.chart_id,
            Self::Failed { chart_id, .. } => chart_id,
        }
    }

    #[must_use]
    pub fn is_rendered(&self) -> bool {
        matches!(self, Self::Rendered(_))
    }
}

/// Outcomes for every slot on a page, in slot order.
#[derive(Debug, Default)]
pub struct PageReport {
    pub outcomes: Vec<ChartOutcome>,
}

impl PageReport {
    #[must_use]
    pub fn rendered_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_rendered()).count()
    }

    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.outcomes.len() - self.rendered_count()
    }

    pub fn rendered(&self) -> impl Iterator<Item = &RenderedChart> {
        self.outcomes.iter().filter_map(|outcome| match outcome {
            ChartOutcome::Rendered(chart) => Some(chart),
            ChartOutcome::Failed { .. } => None,
        })
    }

    pub fn failures(&self) -> impl Iterator<Item = (&str, &ChartError)> {
        self.outcomes.iter().filter_map(|outcome| match outcome {
            ChartOutcome::Rendered(_) => None,
            ChartOutcome::Failed { chart_id, error } => Some((chart_id.as_str(), error)),
        })
    }
}

pub struct ChartPipeline<S: BenchmarkSource, R: ChartRenderer> {
    source: S,
    renderer: R,
    config: ChartPageConfig,
}

impl<S: BenchmarkSource, R: ChartRenderer> ChartPipeline<S, R> {
    pub fn new(source: S, renderer: R, config: ChartPageConfig) -> ChartResult<Self> {
        config.validate()?;
        Ok(Self {
            source,
            renderer,
            config,
        })
    }

    #[must_use]
    pub fn config(&self) -> &ChartPageConfig {
        &self.config
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Runs one chart end to end. Nothing reaches the renderer unless the
    /// payload parsed and every record mapped.
    pub fn run_chart(&mut self, slot: &ChartSlot) -> ChartResult<RenderedChart> {
        let text = self.source.fetch(&slot.id)?;
        let dataset = normalize(&slot.id, &text, self.config.exclude_fft)?;
        let descriptor =
            build_with_fallback(&dataset, &slot.title, self.config.fallback_color.as_deref())?;
        let links = SourceLinkCluster::for_dataset(&slot.id, &dataset, &self.config);

        let target = RenderTarget::new(slot.id.clone(), self.config.canvas_height_px);
        self.renderer.render(&target, descriptor)?;
        debug!(
            chart_id = %slot.id,
            series_count = dataset.len(),
            link_count = links.links.len(),
            "rendered chart"
        );

        Ok(RenderedChart {
            chart_id: slot.id.clone(),
            series: dataset.series_ids().cloned().collect(),
            links,
        })
    }

    /// Runs every slot in order; a failing chart never stops its siblings.
    pub fn run_page(&mut self, slots: &[ChartSlot]) -> PageReport {
        let outcomes = slots
            .iter()
            .map(|slot| match self.run_chart(slot) {
                Ok(chart) => ChartOutcome::Rendered(chart),
                Err(error) => {
                    warn!(chart_id = %slot.id, error = %error, "chart left unrendered");
                    ChartOutcome::Failed {
                        chart_id: slot.id.clone(),
                        error,
                    }
                }
            })
            .collect();
        PageReport { outcomes }
    }
}

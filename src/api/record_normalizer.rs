//! Payload normalization: identifier canonicalization, parsing and the FFT
//! exclusion filter.
//!
//! Payloads key their series by version-qualified names such as
//! `QuantumOptics.jl-v0_4_1` or `QuTiP-4.2.0/cython`. Collapsing those onto
//! the canonical ids of the series catalog happens on the raw text, before
//! parsing, through an ordered list of rewrite rules.

use std::sync::OnceLock;

use indexmap::IndexMap;
use indexmap::map::Iter;
use regex::{NoExpand, Regex};
use tracing::{debug, trace};

use crate::core::{KnownSeries, RawRecord, SeriesId};
use crate::error::{ChartError, ChartResult};

/// Rewrite rules as `(pattern, replacement)`, applied in this order.
///
/// Each pattern ends on the closing quote of the JSON key. The FFT rule must
/// run before the generic `QuantumOptics.jl` rule.
const REWRITE_RULE_SOURCES: [(&str, &str); 4] = [
    (r#"QuantumOptics\.jl-\w*/fft""#, r#"QuantumOptics.jl/fft""#),
    (r#"QuantumOptics\.jl-\w*""#, r#"QuantumOptics.jl""#),
    (r#"QuTiP-[0-9.]*""#, r#"QuTiP""#),
    (r#"QuTiP-[0-9.]*/cython""#, r#"QuTiP/cython""#),
];

#[derive(Debug)]
pub struct RewriteRule {
    pattern: Regex,
    replacement: &'static str,
}

impl RewriteRule {
    #[must_use]
    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    #[must_use]
    pub fn replacement(&self) -> &'static str {
        self.replacement
    }
}

/// Compiled rewrite rules, in application order.
pub fn rewrite_rules() -> &'static [RewriteRule] {
    static RULES: OnceLock<Vec<RewriteRule>> = OnceLock::new();
    RULES.get_or_init(|| {
        REWRITE_RULE_SOURCES
            .iter()
            .map(|&(pattern, replacement)| RewriteRule {
                pattern: Regex::new(pattern).expect("identifier rewrite pattern must compile"),
                replacement,
            })
            .collect()
    })
}

/// Applies every rewrite rule in order. Idempotent on its own output.
#[must_use]
pub fn canonicalize_identifiers(text: &str) -> String {
    let mut current = text.to_owned();
    for rule in rewrite_rules() {
        let rewritten = rule
            .pattern
            .replace_all(&current, NoExpand(rule.replacement))
            .into_owned();
        current = rewritten;
    }
    current
}

/// Normalized payload: series in payload order, each with its raw records.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BenchmarkDataset {
    series: IndexMap<SeriesId, Vec<RawRecord>>,
}

impl BenchmarkDataset {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a series, or replaces the records of an existing one in place.
    pub fn insert(&mut self, id: impl Into<SeriesId>, records: Vec<RawRecord>) {
        self.series.insert(id.into(), records);
    }

    pub fn remove(&mut self, id: &str) -> Option<Vec<RawRecord>> {
        self.series.shift_remove(id)
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&[RawRecord]> {
        self.series.get(id).map(Vec::as_slice)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.series.contains_key(id)
    }

    pub fn series_ids(&self) -> impl Iterator<Item = &SeriesId> {
        self.series.keys()
    }

    pub fn iter(&self) -> Iter<'_, SeriesId, Vec<RawRecord>> {
        self.series.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.series.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

impl<K: Into<SeriesId>> FromIterator<(K, Vec<RawRecord>)> for BenchmarkDataset {
    fn from_iter<I: IntoIterator<Item = (K, Vec<RawRecord>)>>(iter: I) -> Self {
        Self {
            series: iter.into_iter().map(|(id, records)| (id.into(), records)).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a BenchmarkDataset {
    type Item = (&'a SeriesId, &'a Vec<RawRecord>);
    type IntoIter = Iter<'a, SeriesId, Vec<RawRecord>>;

    fn into_iter(self) -> Self::IntoIter {
        self.series.iter()
    }
}

/// Canonicalizes identifiers and parses the payload, without exclusions.
///
/// A key repeated after canonicalization keeps its first position and its
/// last set of records.
pub fn parse_dataset(chart_id: &str, text: &str) -> ChartResult<BenchmarkDataset> {
    let canonical = canonicalize_identifiers(text);
    let series: IndexMap<SeriesId, Vec<RawRecord>> =
        serde_json::from_str(&canonical).map_err(|err| ChartError::Parse {
            chart_id: chart_id.to_owned(),
            message: err.to_string(),
        })?;
    trace!(chart_id, series_count = series.len(), "parsed benchmark payload");
    Ok(BenchmarkDataset { series })
}

/// Drops series that are suppressed from comparison charts.
///
/// Returns the removed FFT records, if the series was present.
pub fn apply_exclusions(chart_id: &str, dataset: &mut BenchmarkDataset) -> Option<Vec<RawRecord>> {
    let removed = dataset.remove(KnownSeries::QuantumOpticsJlFft.id());
    if let Some(records) = &removed {
        debug!(
            chart_id,
            series = KnownSeries::QuantumOpticsJlFft.id(),
            record_count = records.len(),
            "excluding fft series from chart"
        );
    }
    removed
}

/// Full normalization: canonicalize, parse and, when `exclude_fft` is set,
/// filter. Fails with `ChartError::Parse` without returning partial data.
pub fn normalize(chart_id: &str, text: &str, exclude_fft: bool) -> ChartResult<BenchmarkDataset> {
    let mut dataset = parse_dataset(chart_id, text)?;
    if exclude_fft {
        apply_exclusions(chart_id, &mut dataset);
    }
    Ok(dataset)
}

use serde::{Deserialize, Serialize};

use crate::core::DataPoint;
use crate::error::{ChartError, ChartResult};

/// One timing measurement exactly as it appears in a payload.
///
/// Both fields are optional at parse time so a record that lacks one can be
/// reported precisely instead of failing the whole payload parse.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RawRecord {
    #[serde(rename = "N", default, skip_serializing_if = "Option::is_none")]
    pub n: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub t: Option<f64>,
}

impl RawRecord {
    #[must_use]
    pub fn new(n: f64, t: f64) -> Self {
        Self {
            n: Some(n),
            t: Some(t),
        }
    }
}

/// Maps a series' records onto `(N, t)` points, preserving input order.
///
/// Missing fields are never defaulted: the first record lacking `N` or `t`
/// fails the whole series with `ChartError::MalformedRecord`.
pub fn to_points(series: &str, records: &[RawRecord]) -> ChartResult<Vec<DataPoint>> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let missing = |field| ChartError::MalformedRecord {
                series: series.to_owned(),
                index,
                field,
            };
            let x = record.n.ok_or_else(|| missing("N"))?;
            let y = record.t.ok_or_else(|| missing("t"))?;
            Ok(DataPoint::new(x, y))
        })
        .collect()
}

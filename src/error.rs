use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("chart `{chart_id}`: payload is not valid benchmark json: {message}")]
    Parse { chart_id: String, message: String },

    #[error("series `{series}`: record {index} is missing numeric field `{field}`")]
    MalformedRecord {
        series: String,
        index: usize,
        field: &'static str,
    },

    #[error("chart `{chart_id}`: failed to fetch payload: {message}")]
    Fetch { chart_id: String, message: String },

    #[error("chart `{chart_id}`: renderer rejected descriptor: {message}")]
    Render { chart_id: String, message: String },

    #[error("invalid page config: {0}")]
    InvalidConfig(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}

/// Errors raised while loading or querying the historical dataset.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("cannot read dataset at {path}: {reason}")]
    ReadFailed { path: String, reason: String },

    #[error("dataset is missing required column '{column}'")]
    MissingColumn { column: String },

    #[error("malformed row {row}: {reason}")]
    MalformedRow { row: usize, reason: String },

    #[error("dataset at {path} has no usable rows")]
    Empty { path: String },
}

use thiserror::Error;

/// Failures while ingesting or building datasets. Lookups never produce these;
/// a miss is always `None`.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to decode csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("line {line}: {message}")]
    MalformedRow { line: u64, message: String },
    #[error("duplicate {field} '{value}' (already assigned to {existing})")]
    DuplicateKey {
        field: &'static str,
        value: String,
        existing: String,
    },
}

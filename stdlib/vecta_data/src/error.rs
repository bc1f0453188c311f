use thiserror::Error;

/// Errors raised while collecting or validating scoring inputs
#[derive(Debug, Error)]
pub enum DataError {
    #[error("Invalid input for {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },
    #[error("Location not found: {0}")]
    LocationNotFound(String),
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DataError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        DataError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DataError>;

/// Reject values outside `[min, max]`, including NaN.
pub(crate) fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<()> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(DataError::invalid(
            field,
            format!("{value} is outside {min}..={max}"),
        ))
    }
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CollectError {
    #[error("Request to connpass failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to parse the listing response: {0}")]
    InvalidResponse(#[from] serde_json::Error),

    #[error("Invalid year-month {0}: the month part must be between 01 and 12")]
    InvalidYearMonth(u32),

    #[error("Failed to write the dataset: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

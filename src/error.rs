use crate::fetch_error::FetchError;

#[derive(Debug, thiserror::Error)]
pub enum HolidayError {
    #[error("No holiday table found: {0}")]
    StructureNotFound(String),
    #[error("Row {row} has {found} cells but the table has {expected} columns")]
    SchemaMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("Website format has changed! Manual inspection required! ({0})")]
    FormatDrift(String),
    #[error("Failed to parse date '{value}': {source}")]
    DateParse {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("Failed to write CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

//! Error types for statement generation.

use thiserror::Error;

/// Result type alias for billing operations
pub type Result<T> = std::result::Result<T, StatementError>;

/// Errors that can occur while loading inputs or building a statement.
#[derive(Error, Debug)]
pub enum StatementError {
    /// A play's genre is not one of the priced genres
    #[error("unknown type: {0}")]
    UnknownPlayType(String),

    /// A performance references a play id absent from the catalog
    #[error("unknown play: {0}")]
    UnknownPlay(String),

    /// Failed to open or read an input file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing error
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// Malformed input record
    #[error("Invalid record at row {row}: {message}")]
    InvalidRecord { row: usize, message: String },

    /// Play id listed twice in the catalog
    #[error("Duplicate play ID {play_id} at row {row}")]
    DuplicatePlayId { play_id: String, row: usize },

    /// Missing input file argument
    #[error(
        "Missing input file argument. Usage: theater-billing <plays.csv> <performances.csv>"
    )]
    MissingArgument,
}

impl StatementError {
    /// Classifies a CSV error raised while reading the given 1-indexed row.
    ///
    /// Field-level deserialization failures become [`StatementError::InvalidRecord`];
    /// anything else stays a CSV error.
    pub(crate) fn from_csv_row(err: csv::Error, row: usize) -> Self {
        if let csv::ErrorKind::Deserialize { err: de, .. } = err.kind() {
            return StatementError::InvalidRecord {
                row,
                message: de.to_string(),
            };
        }
        StatementError::Csv(err)
    }
}

//! Error types for the data-loader crate.

use thiserror::Error;

/// Errors that can occur while loading tables or building the catalog.
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// I/O error occurred while opening or reading a table
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A table couldn't be read or a row couldn't be decoded
    ///
    /// The csv error carries the record position; this variant adds which
    /// table it happened in.
    #[error("Failed to read {file}: {source}")]
    Table {
        file: String,
        #[source]
        source: csv::Error,
    },

    /// Referenced entity doesn't exist (e.g., rating for an unknown movie)
    #[error("Missing reference: {entity} with id {id}")]
    MissingReference { entity: String, id: u32 },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;

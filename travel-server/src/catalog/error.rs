//! Catalog error types.

use std::path::PathBuf;

use crate::domain::EngineError;

/// Errors that can occur when loading or updating the catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Reading or writing a data file failed
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A data file is not valid JSON for its record type
    #[error("JSON error in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// A destination record failed validation
    #[error("destination #{index} is invalid: {source}")]
    InvalidDestination { index: usize, source: EngineError },

    /// Two destinations share a name (case-insensitive)
    #[error("duplicate destination name: {0}")]
    DuplicateName(String),

    /// The catalog was built in memory and has no files to reload
    #[error("catalog has no data directory")]
    NotFileBacked,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = CatalogError::InvalidDestination {
            index: 2,
            source: EngineError::validation("rating 7 is outside 0-5"),
        };
        assert_eq!(
            err.to_string(),
            "destination #2 is invalid: invalid input: rating 7 is outside 0-5"
        );

        let err = CatalogError::DuplicateName("Murree".to_string());
        assert_eq!(err.to_string(), "duplicate destination name: Murree");
    }

    #[test]
    fn io_error_names_the_file() {
        let err = CatalogError::Io {
            path: PathBuf::from("data/destinations.json"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(err.to_string().starts_with("I/O error on data/destinations.json"));
    }
}

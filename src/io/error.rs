use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::domain::ValidationError;

/// Errors produced while streaming delivery records out of a JSON source
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Failed to open {}: {source}", path.display())]
    SourceOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read delivery array: {0}")]
    Structure(#[source] serde_json::Error),

    #[error("Failed to decode record {index}: {source}")]
    Decode {
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid record {index}: {source}")]
    Validation {
        index: usize,
        #[source]
        source: ValidationError,
    },
}

impl ParseError {
    /// Fatal errors mean no record could be read at all
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::SourceOpen { .. })
    }

    /// Array position of the offending element, if the error is tied to one
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::Decode { index, .. } | Self::Validation { index, .. } => Some(*index),
            Self::SourceOpen { .. } | Self::Structure(_) => None,
        }
    }
}

/// Errors writing the final report
#[derive(Error, Debug)]
pub enum WriteError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn json_error() -> serde_json::Error {
        serde_json::from_str::<serde_json::Value>("{").unwrap_err()
    }

    #[test]
    fn error_display_formats_correctly() {
        let err = ParseError::SourceOpen {
            path: PathBuf::from("/missing.json"),
            source: io::Error::new(io::ErrorKind::NotFound, "file not found"),
        };
        assert_eq!(err.to_string(), "Failed to open /missing.json: file not found");

        let err = ParseError::Validation {
            index: 3,
            source: ValidationError::InvalidPostcode(String::new()),
        };
        assert_eq!(
            err.to_string(),
            "Invalid record 3: Invalid postcode \"\": must be 1-10 characters"
        );

        let err = ParseError::Decode {
            index: 7,
            source: json_error(),
        };
        assert!(err.to_string().starts_with("Failed to decode record 7: "));
    }

    #[test]
    fn only_source_open_is_fatal() {
        let open = ParseError::SourceOpen {
            path: PathBuf::from("x"),
            source: io::Error::new(io::ErrorKind::NotFound, "nope"),
        };
        assert!(open.is_fatal());
        assert!(!ParseError::Structure(json_error()).is_fatal());
        assert!(
            !ParseError::Validation {
                index: 0,
                source: ValidationError::InvalidItemName(0),
            }
            .is_fatal()
        );
    }

    #[test]
    fn index_is_reported_for_element_errors() {
        let err = ParseError::Decode {
            index: 2,
            source: json_error(),
        };
        assert_eq!(err.index(), Some(2));
        assert_eq!(ParseError::Structure(json_error()).index(), None);
    }

    #[test]
    fn io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "closed");
        match WriteError::from(io_err) {
            WriteError::Io(_) => {}
            _ => panic!("Expected Io error variant"),
        }
    }
}

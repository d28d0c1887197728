//! Error types for layout calculation.

use std::path::PathBuf;
use thiserror::Error;

/// Error classification for layout requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Job file could not be read.
    Io,
    /// Job file is malformed.
    Parse,
    /// Sheet width or height missing/non-positive.
    InvalidSheetDimensions,
    /// No complete cut entries.
    NoValidPieces,
    /// A cut entry has malformed values.
    InvalidCut,
    /// A kerf-inflated piece does not fit the sheet.
    OversizedPiece,
    /// A validated piece failed to fit an empty sheet.
    InternalPackingFailure,
}

/// Main error type for layout calculation.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("Invalid sheet dimensions: {width} x {height}")]
    InvalidSheetDimensions { width: f64, height: f64 },

    #[error("No valid cut entries")]
    NoValidPieces,

    #[error("Cut {}: invalid {field} '{value}'", .index + 1)]
    InvalidCut {
        index: usize,
        field: &'static str,
        value: String,
    },

    #[error(
        "Cut {} ({length} x {width}, kerf {kerf}) is too large for sheet {sheet_width} x {sheet_height}",
        .index + 1
    )]
    OversizedPiece {
        index: usize,
        length: f64,
        width: f64,
        kerf: f64,
        sheet_width: f64,
        sheet_height: f64,
    },

    #[error("Internal packing failure: piece {width} x {height} did not fit an empty sheet")]
    InternalPackingFailure { width: f64, height: f64 },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Empty file: {path}")]
    EmptyFile { path: PathBuf },

    #[error("Parse error at line {line}, column {column}: {message}")]
    ParseError {
        line: usize,
        column: usize,
        message: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl LayoutError {
    /// Get the classification for this error.
    pub fn code(&self) -> ErrorKind {
        match self {
            LayoutError::InvalidSheetDimensions { .. } => ErrorKind::InvalidSheetDimensions,
            LayoutError::NoValidPieces => ErrorKind::NoValidPieces,
            LayoutError::InvalidCut { .. } => ErrorKind::InvalidCut,
            LayoutError::OversizedPiece { .. } => ErrorKind::OversizedPiece,
            LayoutError::InternalPackingFailure { .. } => ErrorKind::InternalPackingFailure,
            LayoutError::FileNotFound { .. } => ErrorKind::Io,
            LayoutError::EmptyFile { .. } => ErrorKind::Parse,
            LayoutError::ParseError { .. } => ErrorKind::Parse,
            LayoutError::Io(_) => ErrorKind::Io,
        }
    }

    /// Whether this error indicates a defect rather than bad input.
    pub fn is_internal(&self) -> bool {
        self.code() == ErrorKind::InternalPackingFailure
    }
}

impl From<serde_json::Error> for LayoutError {
    fn from(err: serde_json::Error) -> Self {
        LayoutError::ParseError {
            line: err.line(),
            column: err.column(),
            message: err.to_string(),
        }
    }
}

/// Result type alias for layout operations.
pub type Result<T> = std::result::Result<T, LayoutError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            LayoutError::NoValidPieces.code(),
            ErrorKind::NoValidPieces
        );
        assert_eq!(
            LayoutError::InvalidSheetDimensions {
                width: 0.0,
                height: 1.0
            }
            .code(),
            ErrorKind::InvalidSheetDimensions
        );
        assert_eq!(
            LayoutError::EmptyFile {
                path: PathBuf::from("job.json")
            }
            .code(),
            ErrorKind::Parse
        );
    }

    #[test]
    fn test_internal_classification() {
        let internal = LayoutError::InternalPackingFailure {
            width: 10.0,
            height: 10.0,
        };
        assert!(internal.is_internal());
        assert!(!LayoutError::NoValidPieces.is_internal());
    }

    #[test]
    fn test_cut_numbers_are_one_based() {
        let err = LayoutError::InvalidCut {
            index: 0,
            field: "quantity",
            value: "0".to_string(),
        };
        assert_eq!(err.to_string(), "Cut 1: invalid quantity '0'");
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{\n  \"a\": }").unwrap_err();
        let err = LayoutError::from(json_err);
        match err {
            LayoutError::ParseError { line, .. } => assert_eq!(line, 2),
            other => panic!("Expected ParseError, got {:?}", other),
        }
    }
}

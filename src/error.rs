//! Error type shared by the catalog and the movement interpreter.
//!
//! Rule classification never fails, and unknown action tags or colour
//! groups are not errors either; they fall back to documented defaults.

use thiserror::Error;

use crate::core::SquareId;
use crate::movement::MoveKind;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GuideError>;

/// Which end of a movement path disagreed with the result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathEnd {
    First,
    Last,
}

impl std::fmt::Display for PathEnd {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathEnd::First => f.write_str("first"),
            PathEnd::Last => f.write_str("last"),
        }
    }
}

#[derive(Debug, Error)]
pub enum GuideError {
    /// A referenced square id is not in the catalog.
    #[error("{0} is not in the catalog")]
    UnresolvedSquare(SquareId),

    /// A bus result without options, or a non-bus result with them.
    #[error("invalid options for {kind} movement: {reason}")]
    InvalidModeOptions {
        kind: MoveKind,
        reason: &'static str,
    },

    /// A non-bus result without a start or destination position.
    #[error("{kind} movement is missing {field}")]
    MissingPosition {
        kind: MoveKind,
        field: &'static str,
    },

    #[error("movement path is empty")]
    EmptyPath,

    #[error("{end} path step is {found}, expected {expected}")]
    PathMismatch {
        end: PathEnd,
        expected: SquareId,
        found: SquareId,
    },

    /// The path wraps past the last square but the result says GO was not passed.
    #[error("path wraps from {from} to {to} without passing GO")]
    WrapWithoutGo { from: SquareId, to: SquareId },

    #[error("catalog has no squares")]
    EmptyCatalog,

    #[error("{0} appears more than once in the catalog")]
    DuplicateSquare(SquareId),

    #[error("catalog ids must be contiguous: expected {expected}, found {found}")]
    NonContiguousCatalog { expected: SquareId, found: SquareId },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            GuideError::UnresolvedSquare(SquareId::new(44)).to_string(),
            "Square(44) is not in the catalog"
        );
        assert_eq!(
            GuideError::InvalidModeOptions {
                kind: MoveKind::Bus,
                reason: "bus options are missing",
            }
            .to_string(),
            "invalid options for bus movement: bus options are missing"
        );
        assert_eq!(
            GuideError::PathMismatch {
                end: PathEnd::Last,
                expected: SquareId::new(7),
                found: SquareId::new(8),
            }
            .to_string(),
            "last path step is Square(8), expected Square(7)"
        );
    }

    #[test]
    fn test_json_conversion() {
        let err: GuideError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, GuideError::Json(_)));
    }
}

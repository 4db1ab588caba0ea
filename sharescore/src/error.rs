//! Error types for share-text parsing.

use crate::catalog::Game;

/// Result type alias for parsing operations.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Errors that end the pipeline for one input.
///
/// Both variants are expected outcomes rather than bugs. Their `Display`
/// output is meant to be shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// No grammar's trigger matched the input.
    #[error("Unknown game format")]
    Unrecognized,

    /// A grammar was selected but none of its patterns matched either text variant.
    #[error("Couldn't parse {} result", .game.display_name())]
    Unparseable {
        /// The game the classifier picked.
        game: Game,
    },
}

impl ParseError {
    /// Creates an unparseable error for the given game.
    #[inline]
    pub fn unparseable(game: Game) -> Self {
        Self::Unparseable { game }
    }

    /// Returns the game that was recognized before the failure, if any.
    pub fn game(&self) -> Option<Game> {
        match self {
            Self::Unrecognized => None,
            Self::Unparseable { game } => Some(*game),
        }
    }
}

/// A single captured field that does not have the expected shape.
///
/// Field errors never escape a deriver: callers substitute a default and
/// keep building the record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    /// The field was captured but could not be interpreted.
    #[error("Malformed {field}: {value:?}")]
    Malformed {
        /// Name of the field.
        field: &'static str,
        /// The raw captured text.
        value: String,
    },

    /// The field was not present in the match.
    #[error("Missing {field}")]
    Missing {
        /// Name of the field.
        field: &'static str,
    },
}

impl FieldError {
    /// Creates a malformed field error.
    #[inline]
    pub fn malformed(field: &'static str, value: impl Into<String>) -> Self {
        Self::Malformed {
            field,
            value: value.into(),
        }
    }
}

/// Errors raised while handing a result to the shared store.
#[derive(Debug, thiserror::Error)]
pub enum HandoffError {
    /// Serializing or deserializing a record failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

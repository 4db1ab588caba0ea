//! # sharescore
//!
//! Recognizes the text a player shares from a daily puzzle game and turns it
//! into a strongly-typed result record.
//!
//! Shared texts arrive with no metadata. They mix headers, emoji grids,
//! keycap digits, promotional links and inconsistent whitespace. This crate:
//! - Classifies the text against a fixed, priority-ordered game catalog
//! - Extracts puzzle number, score and completion with per-game grammars
//! - Decodes the emoji used as compact score encodings
//! - Returns either one [`GameResult`] or a user-facing failure message
//!
//! ## Quick Start
//!
//! ```rust
//! use sharescore::parse_share;
//!
//! let result = parse_share("Wordle 1,492 3/6\n\n⬛🟨⬛⬛⬛\n🟩🟩🟩🟩🟩").unwrap();
//! assert_eq!(result.game_name(), "wordle");
//! assert_eq!(result.score(), Some(3));
//! assert!(result.completed());
//! assert_eq!(result.puzzle_number(), Some("1492"));
//! ```
//!
//! ## Failures
//!
//! ```rust
//! use sharescore::{parse_share, error::ParseError};
//!
//! let err = parse_share("just some text").unwrap_err();
//! assert_eq!(err, ParseError::Unrecognized);
//! assert_eq!(err.to_string(), "Unknown game format");
//! ```
//!
//! ## Handing results off
//!
//! ```rust
//! use sharescore::{handoff::{self, MemoryStore}, parse_share};
//!
//! let mut store = MemoryStore::new();
//! let result = parse_share("Tango #362\n1:10 🌗\nlnkd.in/tango.").unwrap();
//! handoff::publish(&mut store, &result).unwrap();
//!
//! let queued = handoff::drain_queue(&mut store).unwrap();
//! assert_eq!(queued, vec![result]);
//! ```

pub mod catalog;
pub mod error;
pub mod games;
pub mod handoff;
pub mod parser;
pub mod result;
pub mod symbols;

use chrono::{DateTime, Utc};
pub use catalog::Game;
use error::Result;
use once_cell::sync::Lazy;
use parser::ShareParser;
pub use result::GameResult;

static DEFAULT_PARSER: Lazy<ShareParser> = Lazy::new(ShareParser::new);

/// Parses a shared text into a result stamped with the current time.
///
/// This is the main entry point for the library.
///
/// # Examples
///
/// ```
/// use sharescore::parse_share;
///
/// let result = parse_share("Wordle 1492 X/6").unwrap();
/// assert!(!result.completed());
/// assert_eq!(result.score(), None);
/// ```
///
/// # Errors
///
/// Returns `ParseError::Unrecognized` if the text matches no supported game.
/// Returns `ParseError::Unparseable` if the game was recognized but its result
/// could not be read.
pub fn parse_share(input: &str) -> Result<GameResult> {
    DEFAULT_PARSER.parse(input)
}

/// Parses a shared text into a result stamped with `timestamp`.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use sharescore::parse_share_at;
///
/// let at = Utc.with_ymd_and_hms(2026, 10, 19, 8, 0, 0).unwrap();
/// let result = parse_share_at("Tango #362\n1:10 🌗\nlnkd.in/tango.", at).unwrap();
/// assert_eq!(result.date(), at);
/// assert_eq!(result.score(), Some(70));
/// ```
pub fn parse_share_at(input: &str, timestamp: DateTime<Utc>) -> Result<GameResult> {
    DEFAULT_PARSER.parse_at(input, timestamp)
}

/// Returns the game a shared text belongs to, without extracting a result.
///
/// # Examples
///
/// ```
/// use sharescore::{classify, Game};
///
/// assert_eq!(classify("Connections\nPuzzle #420"), Some(Game::Connections));
/// assert_eq!(classify("hello"), None);
/// ```
pub fn classify(input: &str) -> Option<Game> {
    DEFAULT_PARSER.classify(input)
}

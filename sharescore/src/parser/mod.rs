//! Parser module that coordinates classification, extraction and assembly.

mod candidate;
pub mod classifier;
mod cleaner;
pub mod engine;
mod grammar;

pub use candidate::{Candidate, CandidateSource};
use chrono::{DateTime, Utc};
pub use cleaner::{Cleaner, DecorationStripper, GarbageCleaner};
pub use engine::{extract, normalize_puzzle_number, Captures};
pub use grammar::{DeriveFn, Grammar, Trigger};
use tracing::{debug, warn};

use crate::{
    catalog::Game,
    error::{ParseError, Result},
    games,
    result::{assemble_tagged, GameResult, DEFAULT_SOURCE_TAG},
};

/// Maximum size of input to process (1MB) - DoS protection
pub const MAX_INPUT_SIZE: usize = 1024 * 1024;

/// Parser that turns a shared text into a [`GameResult`].
///
/// Grammars are held in priority order. The pipeline is:
/// 1. Classify: the first grammar with a trigger in the normalized text
/// 2. Extract: that grammar's patterns against the cleaned, then the raw text
/// 3. Derive: the grammar's pure derive rule
/// 4. Assemble: the canonical record, stamped with the source tag
///
/// # Examples
///
/// ```
/// use sharescore::parser::ShareParser;
///
/// let parser = ShareParser::default();
/// let result = parser.parse("Wordle 1,492 3/6").unwrap();
/// assert_eq!(result.score(), Some(3));
/// ```
#[derive(Debug, Clone)]
pub struct ShareParser {
    /// Grammars in priority order.
    grammars: Vec<Grammar>,
    source_tag: String,
    max_input_len: usize,
}

impl Default for ShareParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ShareParser {
    /// Creates a parser over the full game catalog.
    pub fn new() -> Self {
        Self::with_grammars(games::catalog())
    }

    /// Creates a parser with custom grammars.
    ///
    /// Grammars will be sorted by priority automatically. Equal priorities
    /// keep their given order.
    pub fn with_grammars(mut grammars: Vec<Grammar>) -> Self {
        grammars.sort_by_key(|g| g.priority());
        Self {
            grammars,
            source_tag: DEFAULT_SOURCE_TAG.to_string(),
            max_input_len: MAX_INPUT_SIZE,
        }
    }

    /// Sets the tag written to `parsedData["source"]`.
    pub fn with_source_tag(mut self, tag: impl Into<String>) -> Self {
        self.source_tag = tag.into();
        self
    }

    /// Sets the largest input, in bytes, the parser will inspect.
    pub fn with_max_input_len(mut self, max_input_len: usize) -> Self {
        self.max_input_len = max_input_len;
        self
    }

    /// Parses a shared text, stamping the result with the current time.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Unrecognized` if no game matches and
    /// `ParseError::Unparseable` if the game's patterns do not match.
    pub fn parse(&self, input: &str) -> Result<GameResult> {
        self.parse_at(input, Utc::now())
    }

    /// Parses a shared text, stamping the result with `timestamp`.
    pub fn parse_at(&self, input: &str, timestamp: DateTime<Utc>) -> Result<GameResult> {
        let grammar = self.classify_grammar(input).ok_or(ParseError::Unrecognized)?;
        let captures = extract(input, grammar)?;

        let mut derived = grammar.derive(&captures);
        if derived.puzzle_number.is_none() {
            derived.puzzle_number = captures.puzzle_number();
        }
        debug!(
            game = grammar.game().slug(),
            score = ?derived.score,
            completed = derived.completed,
            "derived result"
        );

        Ok(assemble_tagged(
            grammar.game(),
            derived,
            input,
            timestamp,
            &self.source_tag,
        ))
    }

    /// Classifies a shared text and returns the raw captures of its grammar.
    ///
    /// # Errors
    ///
    /// Same failure cases as [`ShareParser::parse`].
    pub fn extract(&self, input: &str) -> Result<(Game, Captures)> {
        let grammar = self.classify_grammar(input).ok_or(ParseError::Unrecognized)?;
        let captures = extract(input, grammar)?;
        Ok((grammar.game(), captures))
    }

    /// Parses the stored text of an earlier result again with the current grammars.
    ///
    /// The earlier result's `id` and `date` are kept.
    pub fn reparse(&self, previous: &GameResult) -> Result<GameResult> {
        let fresh = self.parse_at(previous.shared_text(), previous.date())?;
        Ok(fresh.with_id(previous.id()))
    }

    /// Returns the game a shared text belongs to, if any.
    pub fn classify(&self, input: &str) -> Option<Game> {
        self.classify_grammar(input).map(Grammar::game)
    }

    fn classify_grammar(&self, input: &str) -> Option<&Grammar> {
        if input.len() > self.max_input_len {
            warn!(
                len = input.len(),
                max = self.max_input_len,
                "shared text too large, not classifying"
            );
            return None;
        }
        let normalized = GarbageCleaner::new().normalize(input);
        classifier::classify(&self.grammars, &normalized)
    }

    /// Returns the grammar registered for a game.
    pub fn grammar(&self, game: Game) -> Option<&Grammar> {
        self.grammars.iter().find(|g| g.game() == game)
    }

    /// Returns the number of grammars registered.
    #[inline]
    pub fn grammar_count(&self) -> usize {
        self.grammars.len()
    }

    /// Returns the games in classification priority order.
    pub fn game_order(&self) -> Vec<Game> {
        self.grammars.iter().map(Grammar::game).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_parser_covers_catalog() {
        let parser = ShareParser::new();
        assert_eq!(parser.grammar_count(), Game::ALL.len());
        for game in Game::ALL {
            assert!(parser.grammar(game).is_some(), "missing grammar for {game}");
        }
    }

    #[test]
    fn test_priority_order() {
        let order = ShareParser::new().game_order();
        let pos = |g: Game| order.iter().position(|&x| x == g).unwrap();

        assert_eq!(order[0], Game::Octordle);
        assert!(pos(Game::Strands) < pos(Game::Connections));
        assert!(pos(Game::Quordle) < pos(Game::Wordle));
        assert_eq!(*order.last().unwrap(), Game::MiniCrossword);
    }

    #[test]
    fn test_parse_wordle() {
        let result = ShareParser::new().parse("Wordle 1,492 3/6").unwrap();
        assert_eq!(result.game(), Some(Game::Wordle));
        assert_eq!(result.score(), Some(3));
        assert!(result.completed());
        assert_eq!(result.puzzle_number(), Some("1492"));
    }

    #[test]
    fn test_parse_unrecognized() {
        let err = ShareParser::new().parse("hello world").unwrap_err();
        assert_eq!(err, ParseError::Unrecognized);
    }

    #[test]
    fn test_parse_unparseable() {
        let err = ShareParser::new().parse("Wordle").unwrap_err();
        assert_eq!(err.to_string(), "Couldn't parse Wordle result");
    }

    #[test]
    fn test_oversized_input_is_unrecognized() {
        let parser = ShareParser::new().with_max_input_len(8);
        assert_eq!(parser.parse("Wordle 1,492 3/6").unwrap_err(), ParseError::Unrecognized);
    }

    #[test]
    fn test_custom_source_tag() {
        let parser = ShareParser::new().with_source_tag("clipboard");
        let result = parser.parse("Wordle 1,492 3/6").unwrap();
        assert_eq!(result.source(), Some("clipboard"));
    }

    #[test]
    fn test_with_grammars_sorts() {
        let grammars = games::catalog().into_iter().rev().collect();
        let parser = ShareParser::with_grammars(grammars);
        assert_eq!(parser.game_order(), ShareParser::new().game_order());
    }

    #[test]
    fn test_extract_exposes_captures() {
        let (game, captures) = ShareParser::new().extract("Wordle 1,492 X/6").unwrap();
        assert_eq!(game, Game::Wordle);
        assert_eq!(captures.get("guesses"), "X");
        assert_eq!(captures.puzzle_number().as_deref(), Some("1492"));
    }

    #[test]
    fn test_reparse_keeps_identity() {
        let parser = ShareParser::new();
        let first = parser.parse("Tango #362\n1:10 🌗\nlnkd.in/tango.").unwrap();
        let again = parser.reparse(&first).unwrap();
        assert_eq!(again.id(), first.id());
        assert_eq!(again.date(), first.date());
        assert_eq!(again.score(), Some(70));
    }
}

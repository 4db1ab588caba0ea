//! Per-game grammars and derive rules.
//!
//! Each submodule covers one family of scoring rules and exposes one
//! `grammar()` constructor per game. [`catalog`] lists them in
//! classification priority order.

mod attempts;
mod categories;
mod grid;
mod hints;
mod timed;

use std::collections::BTreeMap;

use tracing::debug;

use crate::{catalog::Game, error::FieldError, parser::Grammar};

/// The fields a derive rule produces.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DerivedFields {
    /// Game-specific score; absent where the rule defines none (e.g. a failed game).
    pub score: Option<i32>,
    /// Upper bound of the scale, or a secondary metric for timed games.
    pub max_attempts: i32,
    pub completed: bool,
    /// Overrides the captured puzzle number when set.
    pub puzzle_number: Option<String>,
    /// Auxiliary `parsedData` entries.
    pub aux: BTreeMap<String, String>,
}

impl DerivedFields {
    /// A completed result on the game's standard scale.
    pub fn completed(game: Game, score: Option<i32>) -> Self {
        Self {
            score,
            max_attempts: game.max_attempts(),
            completed: true,
            ..Self::default()
        }
    }

    /// A failed result: not completed and without a score.
    pub fn failed(game: Game) -> Self {
        Self {
            max_attempts: game.max_attempts(),
            ..Self::default()
        }
    }

    /// Replaces the scale bound, e.g. with a backtrack count.
    pub fn with_max_attempts(mut self, max_attempts: i32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Overrides the captured puzzle number.
    pub fn with_puzzle_number(mut self, number: impl Into<String>) -> Self {
        self.puzzle_number = Some(number.into());
        self
    }

    /// Adds one `parsedData` entry.
    pub fn with_aux(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.aux.insert(key.into(), value.into());
        self
    }
}

/// Returns every grammar in classification priority order.
///
/// Priority notes:
/// - Octordle and Quordle come before the single-grid word games.
/// - Strands comes before Connections: a Strands theme line such as
///   "Making connections" contains the Connections trigger.
/// - The LinkedIn timed games come before the Mini Crossword.
pub fn catalog() -> Vec<Grammar> {
    vec![
        grid::octordle(10),
        grid::quordle(20),
        attempts::nerdle(30),
        attempts::worldle(40),
        attempts::wordle(50),
        hints::strands(60),
        categories::connections(70),
        attempts::framed(80),
        attempts::pinpoint(90),
        timed::crossclimb(100),
        timed::queens(110),
        timed::tango(120),
        timed::zip(130),
        timed::pips(140),
        timed::mini_crossword(150),
    ]
}

/// Converts `M:SS` or `H:MM:SS` to seconds.
///
/// # Examples
///
/// ```
/// use sharescore::games::parse_clock;
///
/// assert_eq!(parse_clock("1:10"), Ok(70));
/// assert_eq!(parse_clock("1:02:03"), Ok(3723));
/// assert!(parse_clock("1:75").is_err());
/// ```
///
/// # Errors
///
/// Returns `FieldError::Malformed` if the text is not a clock reading.
pub fn parse_clock(raw: &str) -> Result<u32, FieldError> {
    let malformed = || FieldError::malformed("time", raw);
    let parts = raw
        .trim()
        .split(':')
        .map(|p| {
            if p.is_empty() || p.len() > 3 || !p.bytes().all(|b| b.is_ascii_digit()) {
                return Err(malformed());
            }
            p.parse::<u32>().map_err(|_| malformed())
        })
        .collect::<Result<Vec<_>, _>>()?;

    match parts.as_slice() {
        [minutes, seconds] if *seconds < 60 => Ok(minutes * 60 + seconds),
        [hours, minutes, seconds] if *minutes < 60 && *seconds < 60 => {
            Ok(hours * 3600 + minutes * 60 + seconds)
        }
        _ => Err(malformed()),
    }
}

/// Parses a bounded integer slot, if present.
pub(crate) fn parse_count(raw: &str, field: &'static str) -> Result<i32, FieldError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FieldError::Missing { field });
    }
    trimmed
        .parse::<u16>()
        .map(i32::from)
        .map_err(|_| FieldError::malformed(field, trimmed))
}

/// Recovers from a malformed field by logging and substituting `default`.
pub(crate) fn recover<T>(result: Result<T, FieldError>, default: T) -> T {
    result.unwrap_or_else(|err| {
        debug!(%err, "recovered malformed field");
        default
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_priorities_are_unique_and_ascending() {
        let grammars = catalog();
        let priorities: Vec<u8> = grammars.iter().map(Grammar::priority).collect();
        let mut sorted = priorities.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(priorities, sorted);
        assert_eq!(grammars.len(), Game::ALL.len());
    }

    #[test]
    fn test_every_grammar_has_triggers_and_patterns() {
        for grammar in catalog() {
            assert!(!grammar.triggers().is_empty(), "{}", grammar.game());
            assert!(!grammar.patterns().is_empty(), "{}", grammar.game());
        }
    }

    #[test]
    fn test_parse_clock() {
        assert_eq!(parse_clock("0:45"), Ok(45));
        assert_eq!(parse_clock(" 12:00 "), Ok(720));
        assert!(parse_clock("").is_err());
        assert!(parse_clock("1:7x").is_err());
        assert!(parse_clock("1:60").is_err());
        assert!(parse_clock("1:60:00").is_err());
        assert!(parse_clock("99999999:00").is_err());
        assert!(parse_clock("1::2").is_err());
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("3", "guesses"), Ok(3));
        assert_eq!(parse_count("", "guesses"), Err(FieldError::Missing { field: "guesses" }));
        assert!(parse_count("99999999", "guesses").is_err());
    }

    #[test]
    fn test_recover_substitutes_default() {
        assert_eq!(recover(parse_clock("bad"), 0), 0);
        assert_eq!(recover(parse_clock("1:10"), 0), 70);
    }

    #[test]
    fn test_derived_builders() {
        let d = DerivedFields::failed(Game::Wordle).with_aux("hardMode", "true");
        assert!(!d.completed);
        assert_eq!(d.score, None);
        assert_eq!(d.max_attempts, 6);
        assert_eq!(d.aux["hardMode"], "true");
    }
}

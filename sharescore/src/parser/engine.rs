//! Grammar engine: applies a grammar's extraction patterns to a text.
//!
//! Two passes are made. The first runs every pattern against a cleaned
//! candidate (normalized, decorations stripped); the second runs the same
//! patterns against the raw input. The first match wins.

use std::collections::HashMap;

use tracing::{debug, trace};

use super::{Candidate, CandidateSource, Cleaner, DecorationStripper, GarbageCleaner, Grammar};
use crate::{
    error::{ParseError, Result},
    symbols::{self, SymbolValue, Symbols},
};

/// Named values pulled out of a matched text.
///
/// Slots that did not participate in the match read as empty.
#[derive(Debug, Clone)]
pub struct Captures {
    slots: HashMap<String, String>,
    body: String,
    source: CandidateSource,
    pattern_index: usize,
}

impl Captures {
    fn from_match(
        regex: &regex::Regex,
        caps: &regex::Captures<'_>,
        text: &str,
        source: CandidateSource,
        pattern_index: usize,
    ) -> Self {
        let slots = regex
            .capture_names()
            .flatten()
            .filter_map(|name| caps.name(name).map(|m| (name.to_string(), m.as_str().to_string())))
            .collect();
        let start = caps.get(0).map_or(0, |m| m.start());

        Self {
            slots,
            body: text[start..].to_string(),
            source,
            pattern_index,
        }
    }

    /// Returns the captured slot, or `""` if it did not participate.
    pub fn get(&self, name: &str) -> &str {
        self.slots.get(name).map_or("", String::as_str)
    }

    /// Returns the captured slot if it is present and not blank.
    pub fn get_opt(&self, name: &str) -> Option<&str> {
        let value = self.get(name).trim();
        (!value.is_empty()).then_some(value)
    }

    /// Returns true if the slot is present and not blank.
    #[inline]
    pub fn has(&self, name: &str) -> bool {
        self.get_opt(name).is_some()
    }

    /// Returns the matched text from the start of the match to the end of the input.
    ///
    /// Derive rules scan this for grids and trailing lines.
    #[inline]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns which variant of the text matched.
    #[inline]
    pub const fn source(&self) -> CandidateSource {
        self.source
    }

    /// Returns the index of the pattern that matched.
    #[inline]
    pub const fn pattern_index(&self) -> usize {
        self.pattern_index
    }

    /// Streams the decodable symbols of the body.
    pub fn symbols(&self) -> Symbols<'_> {
        symbols::symbols(&self.body)
    }

    /// Decodes the body line by line, dropping lines without symbols.
    pub fn rows(&self) -> Vec<Vec<SymbolValue>> {
        self.body
            .lines()
            .map(|line| symbols::symbols(line).collect::<Vec<_>>())
            .filter(|row| !row.is_empty())
            .collect()
    }

    /// Counts occurrences of a glyph in the body.
    pub fn count(&self, glyph: char) -> usize {
        self.body.chars().filter(|&c| c == glyph).count()
    }

    /// Returns the `num` slot with thousands separators removed.
    pub fn puzzle_number(&self) -> Option<String> {
        normalize_puzzle_number(self.get("num"))
    }
}

/// Strips separators from a captured puzzle number.
///
/// Returns `None` when no digits remain.
///
/// # Examples
///
/// ```
/// use sharescore::parser::normalize_puzzle_number;
///
/// assert_eq!(normalize_puzzle_number("1,492"), Some("1492".to_string()));
/// assert_eq!(normalize_puzzle_number("1.070"), Some("1070".to_string()));
/// assert_eq!(normalize_puzzle_number(""), None);
/// ```
pub fn normalize_puzzle_number(raw: &str) -> Option<String> {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    let trimmed = digits.trim_start_matches('0');
    match (digits.is_empty(), trimmed.is_empty()) {
        (true, _) => None,
        (false, true) => Some("0".to_string()),
        (false, false) => Some(trimmed.to_string()),
    }
}

/// Builds the candidates for a grammar, cleaned first.
fn candidates(text: &str, grammar: &Grammar) -> Vec<Candidate> {
    let raw = Candidate::raw(text);
    let cleaners: [&dyn Cleaner; 2] = [
        &GarbageCleaner::new(),
        &DecorationStripper::new(grammar.decoration_glyphs()),
    ];

    let mut cleaned = Candidate::cleaned(text);
    for cleaner in cleaners {
        if let Some(next) = cleaner.clean(&cleaned) {
            trace!(cleaner = cleaner.name(), "cleaned candidate");
            cleaned = next;
        }
    }

    vec![cleaned, raw]
}

/// Applies `grammar`'s extraction patterns to `text`.
///
/// # Errors
///
/// Returns `ParseError::Unparseable` if no pattern matches either variant.
pub fn extract(text: &str, grammar: &Grammar) -> Result<Captures> {
    for candidate in candidates(text, grammar) {
        for (idx, regex) in grammar.patterns().iter().enumerate() {
            trace!(
                game = grammar.game().slug(),
                variant = candidate.source.label(),
                pattern = idx,
                "trying pattern"
            );
            if let Some(caps) = regex.captures(&candidate.content) {
                debug!(
                    game = grammar.game().slug(),
                    variant = candidate.source.label(),
                    pattern = idx,
                    "pattern matched"
                );
                return Ok(Captures::from_match(
                    regex,
                    &caps,
                    &candidate.content,
                    candidate.source,
                    idx,
                ));
            }
        }
    }

    debug!(game = grammar.game().slug(), "no pattern matched");
    Err(ParseError::unparseable(grammar.game()))
}

#[cfg(test)]
mod tests {
    use regex::Regex;

    use super::*;
    use crate::{catalog::Game, games::DerivedFields};

    fn noop(_: &Captures) -> DerivedFields {
        DerivedFields::default()
    }

    fn tango() -> Grammar {
        Grammar::new(Game::Tango, 1, noop)
            .phrase("tango")
            .pattern(Regex::new(r"(?i)tango\s+#(?P<num>[\d,]+)\s+(?P<time>\d+:\d{2})(?P<moon>🌗)?").unwrap())
            .decorations(&['🌗'])
    }

    #[test]
    fn test_cleaned_variant_wins() {
        let caps = extract("Tango\u{00A0}#362\n1:10 🌗", &tango()).unwrap();
        assert_eq!(caps.source(), CandidateSource::Cleaned);
        assert_eq!(caps.get("num"), "362");
        assert_eq!(caps.get("time"), "1:10");
        assert_eq!(caps.get("moon"), "");
    }

    #[test]
    fn test_raw_fallback() {
        let grammar = Grammar::new(Game::Tango, 1, noop)
            .pattern(Regex::new(r"(?P<time>\d+:\d{2}) 🌗").unwrap())
            .decorations(&['🌗']);

        let caps = extract("Tango #362\n1:10 🌗", &grammar).unwrap();
        assert_eq!(caps.source(), CandidateSource::Raw);
        assert_eq!(caps.get("time"), "1:10");
    }

    #[test]
    fn test_patterns_tried_in_order() {
        let grammar = Grammar::new(Game::Tango, 1, noop)
            .pattern(Regex::new(r"nope(?P<x>\d)").unwrap())
            .pattern(Regex::new(r"#(?P<num>\d+)").unwrap());

        let caps = extract("Tango #362", &grammar).unwrap();
        assert_eq!(caps.pattern_index(), 1);
        assert_eq!(caps.puzzle_number().as_deref(), Some("362"));
    }

    #[test]
    fn test_unparseable() {
        let err = extract("Tango", &tango()).unwrap_err();
        assert_eq!(err, ParseError::unparseable(Game::Tango));
    }

    #[test]
    fn test_body_starts_at_match() {
        let caps = extract("hello\nTango #362 1:10\n🟩🟩", &tango()).unwrap();
        assert!(caps.body().starts_with("Tango"));
        assert_eq!(caps.rows().len(), 1);
        assert_eq!(caps.count('🟩'), 2);
    }

    #[test]
    fn test_get_opt_ignores_blank() {
        let grammar = Grammar::new(Game::Tango, 1, noop)
            .pattern(Regex::new(r"#(?P<num>\d+)(?P<space>\s*)").unwrap());
        let caps = extract("Tango #362", &grammar).unwrap();
        assert!(caps.has("num"));
        assert!(!caps.has("space"));
        assert!(!caps.has("missing"));
    }

    #[test]
    fn test_normalize_puzzle_number() {
        assert_eq!(normalize_puzzle_number("1,492").as_deref(), Some("1492"));
        assert_eq!(normalize_puzzle_number("0"), Some("0".to_string()));
        assert_eq!(normalize_puzzle_number("007").as_deref(), Some("7"));
        assert_eq!(normalize_puzzle_number(",,"), None);
    }
}

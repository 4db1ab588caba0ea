//! Per-game grammar configuration.

use regex::Regex;

use crate::{catalog::Game, games::DerivedFields, parser::Captures};

/// Pure function turning captures into the game's derived fields.
pub type DeriveFn = fn(&Captures) -> DerivedFields;

/// A marker whose presence identifies a game.
#[derive(Debug, Clone)]
pub enum Trigger {
    /// Literal text, stored lowercase and matched case-insensitively.
    Phrase(String),

    /// A lightweight pattern, matched against the normalized text.
    Pattern(Regex),
}

impl Trigger {
    /// Creates a literal trigger, lowercasing it once up front.
    pub fn phrase(text: &str) -> Self {
        Trigger::Phrase(text.to_lowercase())
    }

    /// Returns true if this trigger occurs in the text.
    ///
    /// `lowered` must be the lowercase form of `normalized`.
    pub fn matches(&self, normalized: &str, lowered: &str) -> bool {
        match self {
            Trigger::Phrase(phrase) => lowered.contains(phrase.as_str()),
            Trigger::Pattern(regex) => regex.is_match(normalized),
        }
    }
}

/// The triggers, extraction patterns and derive rule of one game.
///
/// # Examples
///
/// ```
/// use regex::Regex;
/// use sharescore::catalog::Game;
/// use sharescore::games::DerivedFields;
/// use sharescore::parser::{Captures, Grammar};
///
/// fn derive(_: &Captures) -> DerivedFields {
///     DerivedFields::completed(Game::Tango, None)
/// }
///
/// let grammar = Grammar::new(Game::Tango, 1, derive)
///     .phrase("tango #")
///     .pattern(Regex::new(r"(?i)tango\s+#(?P<num>\d+)").unwrap());
/// assert_eq!(grammar.patterns().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Grammar {
    game: Game,
    priority: u8,
    triggers: Vec<Trigger>,
    patterns: Vec<Regex>,
    decorations: &'static [char],
    derive: DeriveFn,
}

impl Grammar {
    /// Creates a grammar with no triggers or patterns.
    ///
    /// Lower priorities are classified first.
    pub fn new(game: Game, priority: u8, derive: DeriveFn) -> Self {
        Self {
            game,
            priority,
            triggers: Vec::new(),
            patterns: Vec::new(),
            decorations: &[],
            derive,
        }
    }

    /// Adds a case-insensitive literal trigger.
    pub fn phrase(mut self, phrase: &str) -> Self {
        self.triggers.push(Trigger::phrase(phrase));
        self
    }

    /// Adds a pattern trigger.
    pub fn trigger_pattern(mut self, regex: Regex) -> Self {
        self.triggers.push(Trigger::Pattern(regex));
        self
    }

    /// Appends an extraction pattern. Patterns are tried in insertion order.
    pub fn pattern(mut self, regex: Regex) -> Self {
        self.patterns.push(regex);
        self
    }

    /// Sets the glyphs stripped from the cleaned variant.
    pub fn decorations(mut self, glyphs: &'static [char]) -> Self {
        self.decorations = glyphs;
        self
    }

    /// Returns the game this grammar recognizes.
    #[inline]
    pub const fn game(&self) -> Game {
        self.game
    }

    /// Returns the classification priority; lower runs first.
    #[inline]
    pub const fn priority(&self) -> u8 {
        self.priority
    }

    /// Returns the triggers in insertion order.
    #[inline]
    pub fn triggers(&self) -> &[Trigger] {
        &self.triggers
    }

    /// Returns the extraction patterns in the order they are tried.
    #[inline]
    pub fn patterns(&self) -> &[Regex] {
        &self.patterns
    }

    /// Returns the glyphs stripped from the cleaned variant.
    #[inline]
    pub const fn decoration_glyphs(&self) -> &'static [char] {
        self.decorations
    }

    /// Returns true if any trigger occurs in the text.
    pub fn is_triggered(&self, normalized: &str, lowered: &str) -> bool {
        self.triggers.iter().any(|t| t.matches(normalized, lowered))
    }

    /// Runs the derive rule.
    #[inline]
    pub fn derive(&self, captures: &Captures) -> DerivedFields {
        (self.derive)(captures)
    }
}

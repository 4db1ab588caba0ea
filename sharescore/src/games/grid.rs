//! Multi-grid word games that report one emoji-encoded result per board.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{parse_count, recover, DerivedFields};
use crate::{
    catalog::Game,
    parser::{Captures, Grammar},
    symbols::SymbolValue,
};

static QUORDLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:(?P<mode>sequence|rescue|extreme|chill)\s+)?quordle\s+#?(?P<num>\d[\d,.]*)")
        .expect("Invalid Quordle pattern")
});

static OCTORDLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?is)(?:(?P<mode>sequence|rescue)\s+)?octordle\s+#?(?P<num>\d[\d,.]*)(?:.*?\bscore\s*:?\s*(?P<score>\d+))?",
    )
    .expect("Invalid Octordle pattern")
});

/// Boards shown in Quordle.
const QUORDLE_BOARDS: usize = 4;

/// Boards shown in Octordle.
const OCTORDLE_BOARDS: usize = 8;

/// Letter-grid squares that follow the result block. Red is kept: it is the miss glyph.
const LETTER_SQUARES: &[char] = &['⬛', '⬜', '🟨', '🟩'];

pub(super) fn quordle(priority: u8) -> Grammar {
    Grammar::new(Game::Quordle, priority, derive_quordle)
        .phrase("quordle")
        .pattern(QUORDLE.clone())
        .decorations(LETTER_SQUARES)
}

pub(super) fn octordle(priority: u8) -> Grammar {
    Grammar::new(Game::Octordle, priority, derive_octordle)
        .phrase("octordle")
        .pattern(OCTORDLE.clone())
        .decorations(LETTER_SQUARES)
}

/// Renders board results as `6,5,9,X`.
fn render(results: &[SymbolValue]) -> String {
    results
        .iter()
        .map(|s| match s {
            SymbolValue::Digit(d) => d.to_string(),
            _ => "X".to_string(),
        })
        .collect::<Vec<_>>()
        .join(",")
}

fn with_mode(derived: DerivedFields, captures: &Captures) -> DerivedFields {
    match captures.get_opt("mode") {
        Some(mode) => derived.with_aux("mode", mode.to_lowercase()),
        None => derived,
    }
}

/// Completed only when all four boards were solved; the score is their rounded mean.
fn derive_quordle(captures: &Captures) -> DerivedFields {
    let results: Vec<SymbolValue> = captures
        .symbols()
        .filter(|s| s.is_result())
        .take(QUORDLE_BOARDS)
        .collect();
    let digits: Vec<u8> = results.iter().filter_map(|s| s.digit()).collect();

    let derived = if digits.len() == QUORDLE_BOARDS {
        let sum: u32 = digits.iter().map(|&d| u32::from(d)).sum();
        let mean = (f64::from(sum) / QUORDLE_BOARDS as f64).round() as i32;
        DerivedFields::completed(Game::Quordle, Some(mean))
    } else {
        DerivedFields::failed(Game::Quordle)
    };

    with_mode(derived, captures).with_aux("scores", render(&results))
}

/// The trailing score line wins; otherwise the board digits are summed.
/// Any miss glyph marks the game as not completed.
fn derive_octordle(captures: &Captures) -> DerivedFields {
    let all: Vec<SymbolValue> = captures.symbols().filter(|s| s.is_result()).collect();
    let failed = all.contains(&SymbolValue::Failure);
    let boards: Vec<SymbolValue> = all.iter().copied().take(OCTORDLE_BOARDS).collect();
    let digits: Vec<u8> = boards.iter().filter_map(|s| s.digit()).collect();

    let stated = captures
        .get_opt("score")
        .and_then(|s| recover(parse_count(s, "score").map(Some), None));
    let summed = (!digits.is_empty()).then(|| digits.iter().map(|&d| i32::from(d)).sum::<i32>());
    let score = stated.or(summed);

    let derived = DerivedFields {
        score,
        max_attempts: Game::Octordle.max_attempts(),
        completed: !failed && score.is_some(),
        ..DerivedFields::default()
    };
    with_mode(derived, captures).with_aux("scores", render(&boards))
}

//! Attempt-count games: a bounded guess count or a failure marker.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{parse_count, recover, DerivedFields};
use crate::{
    catalog::Game,
    parser::{Captures, Grammar},
    symbols::{SquareColor, SymbolValue},
};

static WORDLE_TRIGGER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bwordle\b").expect("Invalid Wordle trigger pattern"));

static WORDLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\bwordle\s+#?(?P<num>\d[\d,.]*)\s+(?P<guesses>[1-6x])/6(?P<hard>\*)?")
        .expect("Invalid Wordle pattern")
});

static NERDLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)(?P<mini>mini\s+)?nerdle(?:game)?\s*(?:[:\-]\s*)?#?(?P<num>\d[\d,.]*)\s+(?P<guesses>[1-6x])/6",
    )
    .expect("Invalid Nerdle pattern")
});

static WORLDLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)worldle\s+#?(?P<num>\d[\d,.]*)(?:\s*\([^)\n]*\))?\s+(?P<guesses>[1-6x])/6(?:\s*\((?P<accuracy>\d{1,3})%\))?",
    )
    .expect("Invalid Worldle pattern")
});

static FRAMED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)framed\s+#?(?P<num>\d[\d,.]*)").expect("Invalid Framed pattern")
});

static PINPOINT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)pinpoint\s+#?(?P<num>\d[\d,.]*)(?:\s*\|\s*(?P<guesses>\d+)\s+guess(?:es)?)?")
        .expect("Invalid Pinpoint pattern")
});

/// Squares left over from the letter grid; patterns never consume them.
const BOARD: &[char] = &['⬛', '⬜', '🟨', '🟩', '🟦', '🟧'];

pub(super) fn wordle(priority: u8) -> Grammar {
    Grammar::new(Game::Wordle, priority, derive_wordle)
        .trigger_pattern(WORDLE_TRIGGER.clone())
        .pattern(WORDLE.clone())
        .decorations(BOARD)
}

pub(super) fn nerdle(priority: u8) -> Grammar {
    Grammar::new(Game::Nerdle, priority, derive_nerdle)
        .phrase("nerdle")
        .pattern(NERDLE.clone())
        .decorations(&['⬛', '⬜', '🟪', '🟩'])
}

pub(super) fn worldle(priority: u8) -> Grammar {
    Grammar::new(Game::Worldle, priority, derive_worldle)
        .phrase("worldle")
        .pattern(WORLDLE.clone())
        .decorations(&['⬛', '⬜', '🟨', '🟩', '🎉', '⬆', '⬇', '⬅', '➡', '↖', '↗', '↘', '↙'])
}

pub(super) fn framed(priority: u8) -> Grammar {
    Grammar::new(Game::Framed, priority, derive_framed)
        .phrase("framed #")
        .phrase("framed.wtf")
        .pattern(FRAMED.clone())
        .decorations(&['🎥', '🎬'])
}

pub(super) fn pinpoint(priority: u8) -> Grammar {
    Grammar::new(Game::Pinpoint, priority, derive_pinpoint)
        .phrase("pinpoint #")
        .phrase("lnkd.in/pinpoint")
        .pattern(PINPOINT.clone())
}

/// Shared rule for `N/6` headers: `X` means failed.
fn derive_guesses(game: Game, captures: &Captures) -> DerivedFields {
    let token = captures.get("guesses");
    if token.eq_ignore_ascii_case("x") {
        return DerivedFields::failed(game);
    }
    match recover(parse_count(token, "guesses").map(Some), None) {
        Some(guesses) if (1..=game.max_attempts()).contains(&guesses) => {
            DerivedFields::completed(game, Some(guesses))
        }
        _ => DerivedFields::failed(game),
    }
}

fn derive_wordle(captures: &Captures) -> DerivedFields {
    derive_guesses(Game::Wordle, captures).with_aux("hardMode", captures.has("hard").to_string())
}

fn derive_nerdle(captures: &Captures) -> DerivedFields {
    let mode = if captures.has("mini") { "mini" } else { "classic" };
    derive_guesses(Game::Nerdle, captures).with_aux("mode", mode)
}

fn derive_worldle(captures: &Captures) -> DerivedFields {
    let derived = derive_guesses(Game::Worldle, captures);
    match captures.get_opt("accuracy") {
        Some(accuracy) => derived.with_aux("accuracy", accuracy),
        None => derived,
    }
}

/// Score is the position of the first correct guess among the six frames.
fn derive_framed(captures: &Captures) -> DerivedFields {
    let max = Game::Framed.max_attempts();
    let guesses: Vec<SymbolValue> = captures
        .symbols()
        .filter(|s| {
            matches!(
                s,
                SymbolValue::Failure
                    | SymbolValue::Color(SquareColor::Green)
                    | SymbolValue::Color(SquareColor::Black)
            )
        })
        .take(max as usize)
        .collect();

    let wrong = guesses.iter().filter(|s| **s == SymbolValue::Failure).count();
    let hit = guesses
        .iter()
        .position(|s| *s == SymbolValue::Color(SquareColor::Green));

    let derived = match hit {
        Some(idx) => DerivedFields::completed(Game::Framed, Some(idx as i32 + 1)),
        None => DerivedFields::failed(Game::Framed),
    };
    derived.with_aux("wrongGuesses", wrong.to_string())
}

/// Solved only when the pin shows; the stated count wins over counting guesses.
fn derive_pinpoint(captures: &Captures) -> DerivedFields {
    let pinned = captures.count('📌') > 0;
    let gave_up = captures.count('❌') > 0;
    if !pinned || gave_up {
        return DerivedFields::failed(Game::Pinpoint);
    }

    let stated = captures.get_opt("guesses").map(|g| parse_count(g, "guesses"));
    let counted = captures.count('🤔') as i32 + 1;
    let guesses = match stated {
        Some(parsed) => recover(parsed, counted),
        None => counted,
    };
    DerivedFields::completed(Game::Pinpoint, Some(guesses.clamp(1, Game::Pinpoint.max_attempts())))
}

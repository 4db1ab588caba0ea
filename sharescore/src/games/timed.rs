//! Timed logic games: the score is the elapsed time in seconds.
//!
//! A missing or malformed time yields a score of 0; the result is still
//! recorded as completed.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{parse_clock, parse_count, recover, DerivedFields};
use crate::{
    catalog::Game,
    error::FieldError,
    parser::{Captures, Grammar},
};

/// Builds a `<name> #N | M:SS` header pattern for the LinkedIn games.
fn linkedin_header(name: &str, tail: &str) -> Regex {
    let pattern = format!(
        r"(?is){name}\s+#?(?P<num>\d[\d,.]*)(?:\s*\|)?(?:\s*(?P<time>\d{{1,3}}(?::\d{{1,2}}){{1,2}}))?(?P<flawless>\s+and\s+flawless)?{tail}"
    );
    Regex::new(&pattern).expect("Invalid LinkedIn header pattern")
}

static CROSSCLIMB: Lazy<Regex> = Lazy::new(|| linkedin_header("crossclimb", ""));

static QUEENS: Lazy<Regex> = Lazy::new(|| linkedin_header("queens", ""));

static TANGO: Lazy<Regex> = Lazy::new(|| linkedin_header("tango", ""));

static ZIP: Lazy<Regex> = Lazy::new(|| {
    linkedin_header("zip", r"(?:.*?\bwith\s+(?P<backtracks>\d+)\s+backtracks?)?")
});

static PIPS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)pips\s+#?(?P<num>\d[\d,.]*)(?:\s+(?P<difficulty>easy|medium|hard))?(?:\s*\|)?(?:\s*(?P<time>\d{1,3}(?::\d{1,2}){1,2}))?",
    )
    .expect("Invalid Pips pattern")
});

static MINI_SENTENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)solved\s+the\s+(?:(?P<weekday>[a-z]+day),?\s+)?(?P<date>\d{1,2}/\d{1,2}/\d{2,4})\s+new\s+york\s+times\s+mini\s+crossword\s+in\s+(?P<time>\d{1,3}(?::\d{1,2}){1,2})",
    )
    .expect("Invalid Mini Crossword pattern")
});

static MINI_SHORT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)mini(?:\s+crossword)?\s+in\s+(?P<time>\d{1,3}(?::\d{1,2}){1,2})")
        .expect("Invalid Mini Crossword pattern")
});

pub(super) fn crossclimb(priority: u8) -> Grammar {
    Grammar::new(Game::Crossclimb, priority, derive_crossclimb)
        .phrase("crossclimb")
        .pattern(CROSSCLIMB.clone())
        .decorations(&['🪜', '🏅', '🧗'])
}

pub(super) fn queens(priority: u8) -> Grammar {
    Grammar::new(Game::Queens, priority, derive_queens)
        .phrase("queens #")
        .phrase("lnkd.in/queens")
        .pattern(QUEENS.clone())
        .decorations(&['👑', '🟦', '🟨', '🟩', '🟧', '🟪', '⬜', '🟫', '🟥'])
}

pub(super) fn tango(priority: u8) -> Grammar {
    Grammar::new(Game::Tango, priority, derive_tango)
        .phrase("tango #")
        .phrase("lnkd.in/tango")
        .pattern(TANGO.clone())
        .decorations(&['🌗', '🌑', '🌕', '☀', '🌝', '🌚', '🟡', '🔵'])
}

pub(super) fn zip(priority: u8) -> Grammar {
    Grammar::new(Game::Zip, priority, derive_zip)
        .phrase("zip #")
        .phrase("lnkd.in/zip")
        .pattern(ZIP.clone())
        .decorations(&['🏁', '🛑', '⚡'])
}

pub(super) fn pips(priority: u8) -> Grammar {
    Grammar::new(Game::Pips, priority, derive_pips)
        .phrase("pips #")
        .pattern(PIPS.clone())
        .decorations(&['🟢', '🟡', '🟠', '🔴', '🟣'])
}

pub(super) fn mini_crossword(priority: u8) -> Grammar {
    Grammar::new(Game::MiniCrossword, priority, derive_mini)
        .phrase("mini crossword")
        .phrase("new york times mini")
        .pattern(MINI_SENTENCE.clone())
        .pattern(MINI_SHORT.clone())
}

/// Common rule: seconds from the `time` slot, completed unconditionally.
fn derive_timed(game: Game, captures: &Captures) -> DerivedFields {
    let seconds = match captures.get_opt("time") {
        Some(time) => recover(parse_clock(time), 0),
        None => recover(Err(FieldError::Missing { field: "time" }), 0),
    };
    let derived = DerivedFields::completed(game, Some(seconds as i32));
    match captures.get_opt("time") {
        Some(time) => derived.with_aux("time", time),
        None => derived,
    }
}

fn with_flawless(derived: DerivedFields, captures: &Captures) -> DerivedFields {
    derived.with_aux("flawless", captures.has("flawless").to_string())
}

fn derive_crossclimb(captures: &Captures) -> DerivedFields {
    derive_timed(Game::Crossclimb, captures)
}

fn derive_queens(captures: &Captures) -> DerivedFields {
    with_flawless(derive_timed(Game::Queens, captures), captures)
}

fn derive_tango(captures: &Captures) -> DerivedFields {
    with_flawless(derive_timed(Game::Tango, captures), captures)
}

/// The backtrack count doubles as `maxAttempts`; a flawless run has none.
fn derive_zip(captures: &Captures) -> DerivedFields {
    let backtracks = captures
        .get_opt("backtracks")
        .map_or(0, |raw| recover(parse_count(raw, "backtracks"), 0));
    with_flawless(derive_timed(Game::Zip, captures), captures)
        .with_max_attempts(backtracks)
        .with_aux("backtracks", backtracks.to_string())
}

fn derive_pips(captures: &Captures) -> DerivedFields {
    let derived = derive_timed(Game::Pips, captures);
    match captures.get_opt("difficulty") {
        Some(difficulty) => derived.with_aux("difficulty", difficulty.to_lowercase()),
        None => derived,
    }
}

/// The Mini has no puzzle number; its date stands in for one.
fn derive_mini(captures: &Captures) -> DerivedFields {
    let mut derived = derive_timed(Game::MiniCrossword, captures);
    if let Some(date) = captures.get_opt("date") {
        derived = derived.with_aux("date", date).with_puzzle_number(date);
    }
    if let Some(weekday) = captures.get_opt("weekday") {
        derived = derived.with_aux("weekday", weekday.to_lowercase());
    }
    derived
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::extract;

    fn run(grammar: Grammar, text: &str) -> DerivedFields {
        let captures = extract(text, &grammar).unwrap();
        let mut derived = grammar.derive(&captures);
        if derived.puzzle_number.is_none() {
            derived.puzzle_number = captures.puzzle_number();
        }
        derived
    }

    #[test]
    fn test_tango() {
        let d = run(tango(1), "Tango #362\n1:10 🌗\nlnkd.in/tango.");
        assert_eq!(d.score, Some(70));
        assert!(d.completed);
        assert_eq!(d.puzzle_number.as_deref(), Some("362"));
        assert_eq!(d.aux["time"], "1:10");
        assert_eq!(d.aux["flawless"], "false");
    }

    #[test]
    fn test_queens_flawless() {
        let d = run(queens(1), "Queens #158 | 2:10 and flawless\nFirst 👑s: 🟦 🟨 🟩\nlnkd.in/queens.");
        assert_eq!(d.score, Some(130));
        assert_eq!(d.aux["flawless"], "true");
    }

    #[test]
    fn test_missing_time_scores_zero() {
        let d = run(queens(1), "Queens #158\nlnkd.in/queens.");
        assert_eq!(d.score, Some(0));
        assert!(d.completed);
        assert!(!d.aux.contains_key("time"));
    }

    #[test]
    fn test_malformed_time_scores_zero() {
        let d = run(crossclimb(1), "Crossclimb #131 | 1:75\n🪜");
        assert_eq!(d.score, Some(0));
        assert_eq!(d.aux["time"], "1:75");
    }

    #[test]
    fn test_zip_backtracks() {
        let d = run(zip(1), "Zip #101 | 0:23 🏁\nWith 1 backtrack 🛑\nlnkd.in/zip.");
        assert_eq!(d.score, Some(23));
        assert_eq!(d.max_attempts, 1);
        assert_eq!(d.aux["backtracks"], "1");
    }

    #[test]
    fn test_zip_flawless() {
        let d = run(zip(1), "Zip #101 | 0:23 and flawless 🏁\nlnkd.in/zip.");
        assert_eq!(d.max_attempts, 0);
        assert_eq!(d.aux["flawless"], "true");
    }

    #[test]
    fn test_pips_difficulty() {
        let d = run(pips(1), "Pips #46 Hard 🔴\n4:21");
        assert_eq!(d.score, Some(261));
        assert_eq!(d.aux["difficulty"], "hard");
    }

    #[test]
    fn test_mini_sentence() {
        let d = run(
            mini_crossword(1),
            "I solved the Saturday 10/19/2026 New York Times Mini Crossword in 1:02!",
        );
        assert_eq!(d.score, Some(62));
        assert_eq!(d.puzzle_number.as_deref(), Some("10/19/2026"));
        assert_eq!(d.aux["weekday"], "saturday");
    }

    #[test]
    fn test_mini_short_form() {
        let d = run(mini_crossword(1), "I solved the Mini Crossword in 0:38");
        assert_eq!(d.score, Some(38));
        assert_eq!(d.puzzle_number, None);
    }

    #[test]
    fn test_hour_long_time() {
        let d = run(tango(1), "Tango #362 | 1:02:03");
        assert_eq!(d.score, Some(3723));
    }
}

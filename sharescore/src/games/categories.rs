//! Category-matching games: each guess is a row of colored squares.

use once_cell::sync::Lazy;
use regex::Regex;

use super::DerivedFields;
use crate::{
    catalog::Game,
    parser::{Captures, Grammar},
    symbols::SquareColor,
};

static CONNECTIONS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)connections\s*(?:[:\-]\s*)?puzzle\s*(?:#|no\.?)\s*(?P<num>\d[\d,.]*)")
        .expect("Invalid Connections pattern")
});

/// Squares per guess row.
const ROW_WIDTH: usize = 4;

/// Categories per puzzle.
const CATEGORIES: i32 = 4;

pub(super) fn connections(priority: u8) -> Grammar {
    Grammar::new(Game::Connections, priority, derive_connections)
        .phrase("connections")
        .pattern(CONNECTIONS.clone())
}

/// A row counts as solved only when all four squares share one color;
/// any other full row is a strike.
fn derive_connections(captures: &Captures) -> DerivedFields {
    let guesses: Vec<Vec<SquareColor>> = captures
        .rows()
        .into_iter()
        .filter_map(|row| row.iter().map(|s| s.color()).collect::<Option<Vec<_>>>())
        .filter(|row| row.len() == ROW_WIDTH)
        .collect();

    let mut solved = Vec::new();
    let mut strikes = 0;
    for row in &guesses {
        if row.iter().all(|c| *c == row[0]) {
            solved.push(row[0].label());
        } else {
            strikes += 1;
        }
    }

    let score = (solved.len() as i32).min(CATEGORIES);
    DerivedFields {
        score: Some(score),
        max_attempts: Game::Connections.max_attempts(),
        completed: score == CATEGORIES,
        ..DerivedFields::default()
    }
    .with_aux("strikes", strikes.to_string())
    .with_aux("guesses", guesses.len().to_string())
    .with_aux("solveOrder", solved.join(","))
}

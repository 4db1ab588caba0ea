//! Hint-based word games. There is no failure state; the score counts hints used.

use once_cell::sync::Lazy;
use regex::Regex;

use super::DerivedFields;
use crate::{
    catalog::Game,
    parser::{Captures, Grammar},
};

static STRANDS_TRIGGER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?im)^\s*strands\b").expect("Invalid Strands trigger pattern"));

static STRANDS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)strands\s+#?(?P<num>\d[\d,.]*)(?:\s*[“"](?P<theme>[^”"\n]*)[”"])?"#)
        .expect("Invalid Strands pattern")
});

const HINT: char = '💡';
const THEME_WORD: char = '🔵';
const SPANGRAM: char = '🟡';

pub(super) fn strands(priority: u8) -> Grammar {
    Grammar::new(Game::Strands, priority, derive_strands)
        .phrase("strands #")
        .trigger_pattern(STRANDS_TRIGGER.clone())
        .pattern(STRANDS.clone())
}

fn derive_strands(captures: &Captures) -> DerivedFields {
    let mut hints = 0;
    let mut words = 0;
    let mut spangram = None;
    for ch in captures.body().chars() {
        match ch {
            HINT => hints += 1,
            THEME_WORD => words += 1,
            SPANGRAM => {
                words += 1;
                spangram.get_or_insert(words);
            }
            _ => {}
        }
    }

    let mut derived = DerivedFields::completed(Game::Strands, Some(hints))
        .with_aux("hints", hints.to_string())
        .with_aux("wordsFound", words.to_string());
    if let Some(position) = spangram {
        derived = derived.with_aux("spangramPosition", position.to_string());
    }
    if let Some(theme) = captures.get_opt("theme") {
        derived = derived.with_aux("theme", theme);
    }
    derived
}

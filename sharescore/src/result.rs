//! The canonical result record and its assembler.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{catalog::Game, games::DerivedFields};

/// Tag written to `parsedData["source"]` by default.
pub const DEFAULT_SOURCE_TAG: &str = "shareExtension";

/// `parsedData` key of the puzzle number.
pub const PUZZLE_NUMBER_KEY: &str = "puzzleNumber";

/// `parsedData` key of the source tag.
pub const SOURCE_KEY: &str = "source";

/// A fully typed result, built once per successful parse.
///
/// Serializes to the record shape consumed by persistence:
///
/// ```json
/// {"id": "…", "gameId": "…", "gameName": "wordle", "date": "2026-10-19T08:00:00Z",
///  "score": 3, "maxAttempts": 6, "completed": true, "sharedText": "Wordle 1,492 3/6",
///  "parsedData": {"puzzleNumber": "1492", "source": "shareExtension"}}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameResult {
    id: Uuid,
    game_id: Uuid,
    game_name: String,
    date: DateTime<Utc>,
    score: Option<i32>,
    max_attempts: i32,
    completed: bool,
    shared_text: String,
    parsed_data: BTreeMap<String, String>,
}

impl GameResult {
    #[inline]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    #[inline]
    pub const fn game_id(&self) -> Uuid {
        self.game_id
    }

    /// Returns the catalog entry, if the id is known to this build.
    pub fn game(&self) -> Option<Game> {
        Game::from_id(self.game_id)
    }

    #[inline]
    pub fn game_name(&self) -> &str {
        &self.game_name
    }

    #[inline]
    pub const fn date(&self) -> DateTime<Utc> {
        self.date
    }

    #[inline]
    pub const fn score(&self) -> Option<i32> {
        self.score
    }

    #[inline]
    pub const fn max_attempts(&self) -> i32 {
        self.max_attempts
    }

    #[inline]
    pub const fn completed(&self) -> bool {
        self.completed
    }

    /// Returns the verbatim input.
    #[inline]
    pub fn shared_text(&self) -> &str {
        &self.shared_text
    }

    #[inline]
    pub fn parsed_data(&self) -> &BTreeMap<String, String> {
        &self.parsed_data
    }

    /// Returns one auxiliary field.
    pub fn field(&self, key: &str) -> Option<&str> {
        self.parsed_data.get(key).map(String::as_str)
    }

    pub fn puzzle_number(&self) -> Option<&str> {
        self.field(PUZZLE_NUMBER_KEY)
    }

    pub fn source(&self) -> Option<&str> {
        self.field(SOURCE_KEY)
    }

    /// Returns true if both results describe the same parse, ignoring `id` and `date`.
    pub fn same_outcome(&self, other: &GameResult) -> bool {
        self.game_id == other.game_id
            && self.game_name == other.game_name
            && self.score == other.score
            && self.max_attempts == other.max_attempts
            && self.completed == other.completed
            && self.shared_text == other.shared_text
            && self.parsed_data == other.parsed_data
    }

    pub(crate) fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }
}

/// Builds a result tagged with [`DEFAULT_SOURCE_TAG`].
pub fn assemble(game: Game, derived: DerivedFields, raw_text: &str, timestamp: DateTime<Utc>) -> GameResult {
    assemble_tagged(game, derived, raw_text, timestamp, DEFAULT_SOURCE_TAG)
}

/// Builds a result with a fresh id and the given source tag.
///
/// Derived auxiliary fields are kept, except that `puzzleNumber` and
/// `source` always come from the assembler.
pub fn assemble_tagged(
    game: Game,
    derived: DerivedFields,
    raw_text: &str,
    timestamp: DateTime<Utc>,
    source_tag: &str,
) -> GameResult {
    let DerivedFields {
        score,
        max_attempts,
        completed,
        puzzle_number,
        aux,
    } = derived;

    let mut parsed_data = aux;
    parsed_data.remove(PUZZLE_NUMBER_KEY);
    if let Some(number) = puzzle_number {
        parsed_data.insert(PUZZLE_NUMBER_KEY.to_string(), number);
    }
    parsed_data.insert(SOURCE_KEY.to_string(), source_tag.to_string());

    GameResult {
        id: Uuid::new_v4(),
        game_id: game.id(),
        game_name: game.slug().to_string(),
        date: timestamp,
        score,
        max_attempts,
        completed,
        shared_text: raw_text.to_string(),
        parsed_data,
    }
}

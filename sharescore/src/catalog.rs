//! The fixed catalog of supported games.
//!
//! Game identifiers are shared with the rest of the application and must
//! never change once released.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A game from the supported catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Game {
    Wordle,
    Quordle,
    Octordle,
    Nerdle,
    Worldle,
    Connections,
    Strands,
    Framed,
    Pinpoint,
    Crossclimb,
    Queens,
    Tango,
    Zip,
    Pips,
    #[serde(rename = "minicrossword")]
    MiniCrossword,
}

impl Game {
    /// Every catalog entry, in declaration order (not classifier order).
    pub const ALL: [Game; 15] = [
        Game::Wordle,
        Game::Quordle,
        Game::Octordle,
        Game::Nerdle,
        Game::Worldle,
        Game::Connections,
        Game::Strands,
        Game::Framed,
        Game::Pinpoint,
        Game::Crossclimb,
        Game::Queens,
        Game::Tango,
        Game::Zip,
        Game::Pips,
        Game::MiniCrossword,
    ];

    /// Returns the stable catalog identifier.
    pub const fn id(self) -> Uuid {
        let raw: u128 = match self {
            Game::Wordle => 0x8c6d_1a0e_5b3f_4c8e_9a2d_7f10_c4e2_b601,
            Game::Quordle => 0x8c6d_1a0e_5b3f_4c8e_9a2d_7f10_c4e2_b602,
            Game::Octordle => 0x8c6d_1a0e_5b3f_4c8e_9a2d_7f10_c4e2_b603,
            Game::Nerdle => 0x8c6d_1a0e_5b3f_4c8e_9a2d_7f10_c4e2_b604,
            Game::Worldle => 0x8c6d_1a0e_5b3f_4c8e_9a2d_7f10_c4e2_b605,
            Game::Connections => 0x8c6d_1a0e_5b3f_4c8e_9a2d_7f10_c4e2_b606,
            Game::Strands => 0x8c6d_1a0e_5b3f_4c8e_9a2d_7f10_c4e2_b607,
            Game::Framed => 0x8c6d_1a0e_5b3f_4c8e_9a2d_7f10_c4e2_b608,
            Game::Pinpoint => 0x8c6d_1a0e_5b3f_4c8e_9a2d_7f10_c4e2_b609,
            Game::Crossclimb => 0x8c6d_1a0e_5b3f_4c8e_9a2d_7f10_c4e2_b60a,
            Game::Queens => 0x8c6d_1a0e_5b3f_4c8e_9a2d_7f10_c4e2_b60b,
            Game::Tango => 0x8c6d_1a0e_5b3f_4c8e_9a2d_7f10_c4e2_b60c,
            Game::Zip => 0x8c6d_1a0e_5b3f_4c8e_9a2d_7f10_c4e2_b60d,
            Game::Pips => 0x8c6d_1a0e_5b3f_4c8e_9a2d_7f10_c4e2_b60e,
            Game::MiniCrossword => 0x8c6d_1a0e_5b3f_4c8e_9a2d_7f10_c4e2_b60f,
        };
        Uuid::from_u128(raw)
    }

    /// Returns the canonical lowercase slug.
    pub const fn slug(self) -> &'static str {
        match self {
            Game::Wordle => "wordle",
            Game::Quordle => "quordle",
            Game::Octordle => "octordle",
            Game::Nerdle => "nerdle",
            Game::Worldle => "worldle",
            Game::Connections => "connections",
            Game::Strands => "strands",
            Game::Framed => "framed",
            Game::Pinpoint => "pinpoint",
            Game::Crossclimb => "crossclimb",
            Game::Queens => "queens",
            Game::Tango => "tango",
            Game::Zip => "zip",
            Game::Pips => "pips",
            Game::MiniCrossword => "minicrossword",
        }
    }

    /// Returns the human-readable name used in messages.
    pub const fn display_name(self) -> &'static str {
        match self {
            Game::Wordle => "Wordle",
            Game::Quordle => "Quordle",
            Game::Octordle => "Octordle",
            Game::Nerdle => "Nerdle",
            Game::Worldle => "Worldle",
            Game::Connections => "Connections",
            Game::Strands => "Strands",
            Game::Framed => "Framed",
            Game::Pinpoint => "Pinpoint",
            Game::Crossclimb => "Crossclimb",
            Game::Queens => "Queens",
            Game::Tango => "Tango",
            Game::Zip => "Zip",
            Game::Pips => "Pips",
            Game::MiniCrossword => "Mini Crossword",
        }
    }

    /// Returns the upper bound of the game's scoring scale.
    ///
    /// Timed games have no attempt limit and report 0. Zip overrides this
    /// per result with its backtrack count.
    pub const fn max_attempts(self) -> i32 {
        match self {
            Game::Wordle | Game::Nerdle | Game::Worldle | Game::Framed => 6,
            Game::Quordle => 9,
            Game::Octordle => 13,
            Game::Connections => 4,
            Game::Pinpoint => 5,
            Game::Strands
            | Game::Crossclimb
            | Game::Queens
            | Game::Tango
            | Game::Zip
            | Game::Pips
            | Game::MiniCrossword => 0,
        }
    }

    /// Looks up a game by its slug.
    pub fn from_slug(slug: &str) -> Option<Game> {
        Self::ALL.into_iter().find(|g| g.slug() == slug)
    }

    /// Looks up a game by its catalog identifier.
    pub fn from_id(id: Uuid) -> Option<Game> {
        Self::ALL.into_iter().find(|g| g.id() == id)
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Error returned when a slug does not name a catalog game.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown game slug: {0}")]
pub struct UnknownGame(pub String);

impl FromStr for Game {
    type Err = UnknownGame;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Game::from_slug(&s.trim().to_lowercase()).ok_or_else(|| UnknownGame(s.to_string()))
    }
}

//! Every supported game, fed its canonical share text.

use pretty_assertions::assert_eq;
use sharescore::{parse_share, Game};

/// (input, game, score, completed, puzzle number)
type Case = (&'static str, Game, Option<i32>, bool, Option<&'static str>);

const CASES: &[Case] = &[
    ("Wordle 1,492 3/6", Game::Wordle, Some(3), true, Some("1492")),
    ("Wordle 1492 X/6", Game::Wordle, None, false, Some("1492")),
    (
        "Wordle 1,492 4/6*\n\n⬛⬛🟨⬛⬛\n⬛🟩⬛🟨⬛\n🟩🟩⬛🟩🟩\n🟩🟩🟩🟩🟩",
        Game::Wordle,
        Some(4),
        true,
        Some("1492"),
    ),
    (
        "Daily Quordle 1149\n6️⃣5️⃣\n9️⃣4️⃣\nm-w.com/games/quordle/",
        Game::Quordle,
        Some(6),
        true,
        Some("1149"),
    ),
    (
        "Daily Quordle 1149\n6️⃣5️⃣\n9️⃣🟥",
        Game::Quordle,
        None,
        false,
        Some("1149"),
    ),
    (
        "Daily Octordle #1070\n8️⃣4️⃣\n🕚🔟\n6️⃣5️⃣\n7️⃣🕛\nScore: 63",
        Game::Octordle,
        Some(63),
        true,
        Some("1070"),
    ),
    (
        "nerdlegame 728 3/6\n\n🟪🟩⬛🟪⬛🟪⬛⬛\n🟩🟩🟩🟩🟩🟩🟩🟩",
        Game::Nerdle,
        Some(3),
        true,
        Some("728"),
    ),
    (
        "#Worldle #807 (12.08.2024) 4/6 (100%)\n🟩🟩🟩🟩🟩🎉\nhttps://worldle.teuteuf.fr",
        Game::Worldle,
        Some(4),
        true,
        Some("807"),
    ),
    (
        "Connections\nPuzzle #420\n🟨🟨🟨🟨\n🟩🟩🟩🟩\n🟦🟦🟦🟦\n🟪🟪🟪🟪",
        Game::Connections,
        Some(4),
        true,
        Some("420"),
    ),
    (
        "Strands #206\n“Making moves”\n💡🔵🔵🔵\n🔵🟡🔵💡",
        Game::Strands,
        Some(2),
        true,
        Some("206"),
    ),
    (
        "Framed #850\n🎥 🟥 🟥 🟩 ⬛ ⬛ ⬛\n\nhttps://framed.wtf",
        Game::Framed,
        Some(3),
        true,
        Some("850"),
    ),
    (
        "Pinpoint #179 | 3 guesses\n🤔 🤔 📌 ⬜ ⬜\nlnkd.in/pinpoint.",
        Game::Pinpoint,
        Some(3),
        true,
        Some("179"),
    ),
    (
        "Crossclimb #131 | 1:23\n🪜 Oh, I'm climbing\nlnkd.in/crossclimb.",
        Game::Crossclimb,
        Some(83),
        true,
        Some("131"),
    ),
    (
        "Queens #158 | 2:10 and flawless\nFirst 👑s: 🟦 🟨 🟩\nlnkd.in/queens.",
        Game::Queens,
        Some(130),
        true,
        Some("158"),
    ),
    (
        "Tango #362\n1:10 🌗\nlnkd.in/tango.",
        Game::Tango,
        Some(70),
        true,
        Some("362"),
    ),
    (
        "Zip #101 | 0:23 🏁\nWith 1 backtrack 🛑\nlnkd.in/zip.",
        Game::Zip,
        Some(23),
        true,
        Some("101"),
    ),
    ("Pips #46 Easy 🟢\n1:03", Game::Pips, Some(63), true, Some("46")),
    (
        "I solved the 10/19/2026 New York Times Mini Crossword in 0:38!",
        Game::MiniCrossword,
        Some(38),
        true,
        Some("10/19/2026"),
    ),
];

#[test]
fn test_canonical_shares() {
    for (input, game, score, completed, puzzle) in CASES {
        let result = parse_share(input).unwrap_or_else(|e| panic!("{input:?}: {e}"));
        assert_eq!(
            (result.game(), result.score(), result.completed(), result.puzzle_number()),
            (Some(*game), *score, *completed, *puzzle),
            "input: {input:?}"
        );
        assert_eq!(result.game_name(), game.slug());
        assert_eq!(result.game_id(), game.id());
        assert_eq!(result.shared_text(), *input);
        assert_eq!(result.source(), Some("shareExtension"));
    }
}

#[test]
fn test_every_game_has_a_canonical_case() {
    for game in Game::ALL {
        assert!(
            CASES.iter().any(|(_, g, ..)| *g == game),
            "no canonical share for {game}"
        );
    }
}

#[test]
fn test_connections_one_bad_line() {
    let result =
        parse_share("Connections\nPuzzle #420\n🟨🟨🟨🟨\n🟩🟩🟩🟩\n🟦🟦🟦🟦\n🟪🟦🟪🟪").unwrap();
    assert!(!result.completed());
    assert_eq!(result.score(), Some(3));
    assert_eq!(result.field("strikes"), Some("1"));
    assert_eq!(result.max_attempts(), 4);
}

#[test]
fn test_octordle_failure_glyph_wins_over_score_line() {
    let result = parse_share("Daily Octordle #1070\n8️⃣4️⃣\n🕚🔟\n6️⃣🟥\n7️⃣🕛\nScore: 80").unwrap();
    assert!(!result.completed());
    assert_eq!(result.score(), Some(80));
}

#[test]
fn test_pinpoint_without_pin_is_not_completed() {
    let result = parse_share("Pinpoint #179 | 5 guesses\n🤔 🤔 🤔 🤔 🤔\nlnkd.in/pinpoint.").unwrap();
    assert!(!result.completed());
    assert_eq!(result.score(), None);
    assert_eq!(result.puzzle_number(), Some("179"));
}

#[test]
fn test_zip_backtracks_fill_max_attempts() {
    let result = parse_share("Zip #101 | 0:23 🏁\nWith 2 backtracks 🛑\nlnkd.in/zip.").unwrap();
    assert_eq!(result.max_attempts(), 2);
    assert_eq!(result.field("backtracks"), Some("2"));
}

#[test]
fn test_timed_game_without_time() {
    let result = parse_share("Tango #362\nlnkd.in/tango.").unwrap();
    assert_eq!(result.score(), Some(0));
    assert!(result.completed());
}

#[test]
fn test_messy_whitespace_and_invisible_chars() {
    let input = "\u{FEFF}  Wordle\u{00A0}1,492\u{200B}  3/6  \r\n\r\n🟩🟩🟩🟩🟩";
    let result = parse_share(input).unwrap();
    assert_eq!(result.score(), Some(3));
    assert_eq!(result.puzzle_number(), Some("1492"));
    assert_eq!(result.shared_text(), input);
}

#[test]
fn test_case_insensitive_headers() {
    let result = parse_share("WORDLE 1,492 2/6").unwrap();
    assert_eq!(result.score(), Some(2));

    let result = parse_share("tango #362 | 0:59").unwrap();
    assert_eq!(result.score(), Some(59));
}

#[test]
fn test_trailing_promotional_link() {
    let result = parse_share(
        "Queens #158 | 2:10\nFirst 👑s: 🟦 🟨 🟩\nlnkd.in/queens.\nPlay daily at https://www.linkedin.com/games",
    )
    .unwrap();
    assert_eq!(result.score(), Some(130));
    assert_eq!(result.field("flawless"), Some("false"));
}

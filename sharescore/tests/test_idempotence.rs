//! Parsing the same text twice yields the same outcome under fresh ids.

use chrono::{TimeZone, Utc};
use sharescore::{parse_share, parse_share_at, parser::ShareParser};

const SHARES: &[&str] = &[
    "Wordle 1,492 3/6",
    "Daily Quordle 1149\n6️⃣5️⃣\n9️⃣4️⃣",
    "Connections\nPuzzle #420\n🟨🟨🟨🟨\n🟩🟩🟩🟩\n🟦🟪🟦🟦\n🟦🟦🟦🟦\n🟪🟪🟪🟪",
    "Strands #206\n“Making moves”\n💡🔵🔵🔵\n🔵🟡🔵💡",
    "Zip #101 | 0:23 🏁\nWith 1 backtrack 🛑\nlnkd.in/zip.",
];

#[test]
fn test_same_outcome_twice() {
    for input in SHARES {
        let first = parse_share(input).unwrap();
        let second = parse_share(input).unwrap();
        assert_ne!(first.id(), second.id(), "ids must be fresh for {input:?}");
        assert!(first.same_outcome(&second), "outcome differs for {input:?}");
    }
}

#[test]
fn test_fixed_timestamp_equal_except_id() {
    let at = Utc.with_ymd_and_hms(2026, 10, 19, 21, 30, 0).unwrap();
    for input in SHARES {
        let a = parse_share_at(input, at).unwrap();
        let b = parse_share_at(input, at).unwrap();
        assert_eq!(a.date(), b.date());
        assert_eq!(a.parsed_data(), b.parsed_data());
    }
}

#[test]
fn test_reparse_keeps_identity() {
    let parser = ShareParser::new();
    for input in SHARES {
        let original = parser.parse(input).unwrap();
        let again = parser.reparse(&original).unwrap();
        assert_eq!(again.id(), original.id());
        assert_eq!(again.date(), original.date());
        assert!(again.same_outcome(&original));
    }
}

#[test]
fn test_json_round_trip_preserves_outcome() {
    let result = parse_share(SHARES[2]).unwrap();
    let json = serde_json::to_string(&result).unwrap();
    let back: sharescore::GameResult = serde_json::from_str(&json).unwrap();
    assert_eq!(back, result);
}

//! Picks the grammar that applies to a shared text.

use tracing::{debug, trace};

use crate::parser::Grammar;

/// Returns the first grammar, in slice order, with a trigger present in `normalized`.
///
/// The slice order is the priority policy: when a text contains triggers of
/// several games the earliest grammar wins. `None` means the text is not a
/// supported share.
pub fn classify<'g>(grammars: &'g [Grammar], normalized: &str) -> Option<&'g Grammar> {
    let lowered = normalized.to_lowercase();

    for grammar in grammars {
        if grammar.is_triggered(normalized, &lowered) {
            debug!(game = grammar.game().slug(), "classified share text");
            return Some(grammar);
        }
        trace!(game = grammar.game().slug(), "no trigger");
    }

    debug!("no grammar triggered");
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        catalog::Game,
        games::DerivedFields,
        parser::Captures,
    };

    fn noop(_: &Captures) -> DerivedFields {
        DerivedFields::default()
    }

    fn grammars() -> Vec<Grammar> {
        vec![
            Grammar::new(Game::Strands, 1, noop).phrase("strands #"),
            Grammar::new(Game::Connections, 2, noop).phrase("connections"),
        ]
    }

    #[test]
    fn test_first_trigger_wins() {
        let grammars = grammars();
        let text = "Strands #206\n“Making connections”";
        assert_eq!(classify(&grammars, text).map(Grammar::game), Some(Game::Strands));
    }

    #[test]
    fn test_later_grammar_when_earlier_absent() {
        let grammars = grammars();
        let text = "Connections\nPuzzle #420";
        assert_eq!(classify(&grammars, text).map(Grammar::game), Some(Game::Connections));
    }

    #[test]
    fn test_unrecognized() {
        let grammars = grammars();
        assert!(classify(&grammars, "I scored 12 at bowling").is_none());
        assert!(classify(&grammars, "").is_none());
    }
}

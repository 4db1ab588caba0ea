//! Cleaning steps that normalize shared text before matching.

use unicode_normalization::UnicodeNormalization;

use crate::parser::Candidate;

/// Trait for steps that turn one candidate into a cleaner one.
///
/// Cleaners run in sequence before the grammar engine's first pass.
pub trait Cleaner: Send + Sync + std::fmt::Debug {
    /// Returns the name of this cleaner for debugging.
    fn name(&self) -> &'static str;

    /// Cleans the candidate, returning a new candidate if changes were made.
    ///
    /// Returns None if no cleaning was needed.
    fn clean(&self, candidate: &Candidate) -> Option<Candidate>;
}

/// Garbage cleaner that removes characters that carry no information.
///
/// Applies, in order:
/// - Removal of invisible characters (zero-width spaces, BOM, bidi marks)
/// - Removal of emoji variation selectors
/// - NFKC normalization (non-breaking spaces, fullwidth digits, ligatures)
/// - Line ending and horizontal whitespace normalization
#[derive(Debug, Clone, Default)]
pub struct GarbageCleaner;

impl GarbageCleaner {
    /// Creates a new garbage cleaner.
    pub fn new() -> Self {
        Self
    }

    /// Runs every cleaning step and returns the normalized text.
    ///
    /// This is the text the classifier inspects.
    pub fn normalize(&self, input: &str) -> String {
        let visible = self.remove_invisible_chars(input);
        let compatible: String = visible.nfkc().collect();
        self.normalize_whitespace(&compatible)
    }

    /// Removes invisible characters and variation selectors.
    ///
    /// Removes:
    /// - Zero-width space, non-joiner and joiner (U+200B..U+200D)
    /// - Byte Order Mark (U+FEFF)
    /// - Bidi marks and overrides
    /// - Variation selectors (U+FE0E, U+FE0F)
    pub fn remove_invisible_chars(&self, input: &str) -> String {
        input.replace(
            [
                '\u{200B}', '\u{200C}', '\u{200D}', '\u{FEFF}', '\u{200E}', '\u{200F}', '\u{202A}',
                '\u{202B}', '\u{202C}', '\u{202D}', '\u{202E}', '\u{2060}', '\u{FE0E}', '\u{FE0F}',
            ],
            "",
        )
    }

    /// Normalizes line endings and collapses horizontal whitespace.
    ///
    /// Line structure is kept: every line break becomes `\n`, runs of other
    /// whitespace become one space, and each line is trimmed.
    fn normalize_whitespace(&self, input: &str) -> String {
        let unified = input
            .replace("\r\n", "\n")
            .replace(['\r', '\u{2028}', '\u{2029}', '\u{0085}'], "\n");

        let mut result = String::with_capacity(unified.len());
        for (idx, line) in unified.split('\n').enumerate() {
            if idx > 0 {
                result.push('\n');
            }
            let mut last_was_space = false;
            for ch in line.trim().chars() {
                if ch.is_whitespace() {
                    if !last_was_space {
                        result.push(' ');
                        last_was_space = true;
                    }
                } else {
                    last_was_space = false;
                    result.push(ch);
                }
            }
        }

        result.trim().to_string()
    }
}

impl Cleaner for GarbageCleaner {
    fn name(&self) -> &'static str {
        "garbage"
    }

    fn clean(&self, candidate: &Candidate) -> Option<Candidate> {
        let normalized = self.normalize(&candidate.content);
        if normalized == candidate.content {
            return None;
        }
        let mut cleaned = candidate.clone();
        cleaned.content = normalized;
        Some(cleaned)
    }
}

/// Removes a grammar's decorative glyphs.
///
/// Decorations carry color or emphasis only; a grammar lists the glyphs its
/// patterns and deriver never consume.
#[derive(Debug, Clone, Copy)]
pub struct DecorationStripper {
    glyphs: &'static [char],
}

impl DecorationStripper {
    /// Creates a stripper for the given glyphs.
    pub const fn new(glyphs: &'static [char]) -> Self {
        Self { glyphs }
    }

    /// Removes the glyphs, then trims the spaces they leave behind.
    pub fn strip(&self, input: &str) -> String {
        if self.glyphs.is_empty() {
            return input.to_string();
        }
        let stripped = input.replace(self.glyphs, "");
        stripped
            .split('\n')
            .map(|line| line.split(' ').filter(|w| !w.is_empty()).collect::<Vec<_>>().join(" "))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Cleaner for DecorationStripper {
    fn name(&self) -> &'static str {
        "decoration"
    }

    fn clean(&self, candidate: &Candidate) -> Option<Candidate> {
        if !candidate.content.contains(self.glyphs) {
            return None;
        }
        let mut cleaned = candidate.clone();
        cleaned.content = self.strip(&candidate.content);
        Some(cleaned)
    }
}

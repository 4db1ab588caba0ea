//! Text variants the grammar engine matches against.

/// One rendition of the shared text.
///
/// The engine first tries a cleaned candidate and falls back to the raw
/// input when no pattern matches the cleaned one.
#[derive(Debug, Clone)]
pub struct Candidate {
    /// The text to match against.
    pub content: String,

    /// How this candidate was produced.
    pub source: CandidateSource,
}

/// Describes how a candidate was derived from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateSource {
    /// The verbatim input.
    Raw,

    /// Normalized input with the grammar's decorative glyphs removed.
    Cleaned,
}

impl CandidateSource {
    /// Returns the label recorded in logs.
    pub const fn label(self) -> &'static str {
        match self {
            CandidateSource::Raw => "raw",
            CandidateSource::Cleaned => "cleaned",
        }
    }
}

impl Candidate {
    /// Creates a candidate holding the verbatim input.
    pub fn raw(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            source: CandidateSource::Raw,
        }
    }

    /// Creates a cleaned candidate.
    pub fn cleaned(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            source: CandidateSource::Cleaned,
        }
    }
}

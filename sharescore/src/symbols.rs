//! Decoding of the emoji glyphs games use as compact score encodings.
//!
//! Handles:
//! - Keycap digits `0️⃣`..`9️⃣` (digit, optional U+FE0F, U+20E3)
//! - `🔟` and the clock faces `🕙` `🕚` `🕛` for 10, 11 and 12
//! - `🟥` as the miss marker
//! - The remaining colored squares as color tags
//!
//! Everything else decodes to `None`.

use std::{iter::Peekable, str::Chars};

/// Combining enclosing keycap.
const KEYCAP: char = '\u{20E3}';

/// Emoji presentation selector.
const VARIATION_SELECTOR: char = '\u{FE0F}';

/// The semantic value of a decoded glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolValue {
    /// A numeric score in `0..=12`.
    Digit(u8),
    /// The distinguished miss glyph.
    Failure,
    /// A colored square used as a category or difficulty marker.
    Color(SquareColor),
}

impl SymbolValue {
    /// Returns the digit value, if this is a digit.
    #[inline]
    pub const fn digit(self) -> Option<u8> {
        match self {
            SymbolValue::Digit(d) => Some(d),
            _ => None,
        }
    }

    /// Returns the color, if this is a color tag.
    #[inline]
    pub const fn color(self) -> Option<SquareColor> {
        match self {
            SymbolValue::Color(c) => Some(c),
            _ => None,
        }
    }

    /// Returns true for digits and failures, the symbols that encode a sub-result.
    #[inline]
    pub const fn is_result(self) -> bool {
        matches!(self, SymbolValue::Digit(_) | SymbolValue::Failure)
    }
}

/// Colors of the square glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SquareColor {
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
    Brown,
    Black,
    White,
}

impl SquareColor {
    /// Returns the lowercase label for this color.
    pub const fn label(self) -> &'static str {
        match self {
            SquareColor::Orange => "orange",
            SquareColor::Yellow => "yellow",
            SquareColor::Green => "green",
            SquareColor::Blue => "blue",
            SquareColor::Purple => "purple",
            SquareColor::Brown => "brown",
            SquareColor::Black => "black",
            SquareColor::White => "white",
        }
    }
}

/// Decodes a single glyph.
///
/// The glyph may carry a trailing variation selector. Anything longer than
/// one glyph, or outside the supported set, yields `None`.
///
/// # Examples
///
/// ```
/// use sharescore::symbols::{decode, SymbolValue};
///
/// assert_eq!(decode("3\u{FE0F}\u{20E3}"), Some(SymbolValue::Digit(3)));
/// assert_eq!(decode("🕚"), Some(SymbolValue::Digit(11)));
/// assert_eq!(decode("🟥"), Some(SymbolValue::Failure));
/// assert_eq!(decode("a"), None);
/// ```
pub fn decode(glyph: &str) -> Option<SymbolValue> {
    let mut chars = glyph.chars().peekable();
    let value = next_symbol_at(&mut chars)?;
    skip_selector(&mut chars);
    if chars.next().is_some() {
        return None;
    }
    value
}

/// Decodes a single code point that is a glyph on its own.
pub fn decode_char(ch: char) -> Option<SymbolValue> {
    let value = match ch {
        '🔟' | '🕙' => SymbolValue::Digit(10),
        '🕚' => SymbolValue::Digit(11),
        '🕛' => SymbolValue::Digit(12),
        '🟥' => SymbolValue::Failure,
        '🟧' => SymbolValue::Color(SquareColor::Orange),
        '🟨' => SymbolValue::Color(SquareColor::Yellow),
        '🟩' => SymbolValue::Color(SquareColor::Green),
        '🟦' => SymbolValue::Color(SquareColor::Blue),
        '🟪' => SymbolValue::Color(SquareColor::Purple),
        '🟫' => SymbolValue::Color(SquareColor::Brown),
        '⬛' => SymbolValue::Color(SquareColor::Black),
        '⬜' => SymbolValue::Color(SquareColor::White),
        _ => return None,
    };
    Some(value)
}

/// Streams every decodable glyph in `text`, skipping everything else.
///
/// Plain ASCII digits are not symbols; only keycap sequences decode to digits.
///
/// # Examples
///
/// ```
/// use sharescore::symbols::{symbols, SymbolValue};
///
/// let decoded: Vec<_> = symbols("Daily Quordle 1149\n6️⃣5️⃣\n9️⃣🟥").collect();
/// assert_eq!(
///     decoded,
///     vec![
///         SymbolValue::Digit(6),
///         SymbolValue::Digit(5),
///         SymbolValue::Digit(9),
///         SymbolValue::Failure,
///     ]
/// );
/// ```
pub fn symbols(text: &str) -> Symbols<'_> {
    Symbols {
        chars: text.chars().peekable(),
    }
}

/// Iterator returned by [`symbols`].
#[derive(Debug, Clone)]
pub struct Symbols<'a> {
    chars: Peekable<Chars<'a>>,
}

impl Iterator for Symbols<'_> {
    type Item = SymbolValue;

    fn next(&mut self) -> Option<SymbolValue> {
        while self.chars.peek().is_some() {
            if let Some(value) = next_symbol_at(&mut self.chars)? {
                return Some(value);
            }
        }
        None
    }
}

/// Consumes one glyph from `chars`.
///
/// Returns `None` when the input is exhausted, `Some(None)` when a glyph was
/// consumed but is not a symbol.
fn next_symbol_at(chars: &mut Peekable<Chars<'_>>) -> Option<Option<SymbolValue>> {
    let ch = chars.next()?;

    if let Some(d) = ch.to_digit(10) {
        skip_selector(chars);
        if chars.peek() == Some(&KEYCAP) {
            chars.next();
            return Some(Some(SymbolValue::Digit(d as u8)));
        }
        return Some(None);
    }

    Some(decode_char(ch))
}

#[inline]
fn skip_selector(chars: &mut Peekable<Chars<'_>>) {
    while chars.peek() == Some(&VARIATION_SELECTOR) {
        chars.next();
    }
}

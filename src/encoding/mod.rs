//! Encoding layer: GSM 03.38 classification for outbound message text.
//!
//! Vonage transmits an SMS either in the GSM 7-bit default alphabet (`type=text`)
//! or in UCS-2 (`type=unicode`). The classifier here decides which one a given
//! text needs: a message can go out as `text` only if every one of its characters
//! is part of the GSM 03.38 default alphabet or its single-shift extension table.
//!
//! Length and segmentation are the caller's concern; this module only answers
//! the alphabet-membership question.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Every character of the GSM 03.38 default alphabet plus the single-shift
/// extension table, laid out in table order.
///
/// The escape character (0x1B) is a shift marker, not a character, and is
/// deliberately absent. National-language locking/shift tables (Turkish,
/// Spanish, Portuguese) are not supported; a character from those tables
/// classifies the whole message as Unicode.
const GSM_CHARACTERS: [char; 137] = [
    // 0x00..0x0F
    '@', '£', '$', '¥', 'è', 'é', 'ù', 'ì', 'ò', 'Ç', '\n', 'Ø', 'ø', '\r', 'Å', 'å',
    // 0x10..0x1F (0x1B is the escape)
    'Δ', '_', 'Φ', 'Γ', 'Λ', 'Ω', 'Π', 'Ψ', 'Σ', 'Θ', 'Ξ', 'Æ', 'æ', 'ß', 'É',
    // 0x20..0x2F
    ' ', '!', '"', '#', '¤', '%', '&', '\'', '(', ')', '*', '+', ',', '-', '.', '/',
    // 0x30..0x3F
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', ':', ';', '<', '=', '>', '?',
    // 0x40..0x4F
    '¡', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O',
    // 0x50..0x5F
    'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', 'Ä', 'Ö', 'Ñ', 'Ü', '§',
    // 0x60..0x6F
    '¿', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o',
    // 0x70..0x7F
    'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z', 'ä', 'ö', 'ñ', 'ü', 'à',
    // single-shift extension table
    '\u{0C}', '^', '{', '}', '\\', '[', '~', ']', '|', '€',
];

static GSM_CHARSET: LazyLock<HashSet<char>> =
    LazyLock::new(|| GSM_CHARACTERS.iter().copied().collect());

/// Returns `true` when `text` cannot be represented in the GSM 03.38 default
/// alphabet and must be sent as Unicode (UCS-2).
///
/// Operates on Unicode scalar values, not grapheme clusters: a combining
/// accent counts as its own character and forces Unicode even if its base
/// letter is in the GSM alphabet. The empty string fits vacuously and
/// returns `false`.
pub fn requires_unicode_encoding(text: &str) -> bool {
    text.chars().any(|ch| !GSM_CHARSET.contains(&ch))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Wire value of the `type` field on an outbound SMS.
///
/// Binary payloads (`type=binary`) are a separate submission path and are not
/// represented here.
pub enum MessageType {
    /// GSM 7-bit default alphabet (`text`).
    #[default]
    Text,
    /// UCS-2 (`unicode`).
    Unicode,
}

impl MessageType {
    /// Form field name used by Vonage (`type`).
    pub const FIELD: &'static str = "type";

    /// Classify `text` into the message type it must be transmitted as.
    pub fn detect(text: &str) -> Self {
        if requires_unicode_encoding(text) {
            Self::Unicode
        } else {
            Self::Text
        }
    }

    /// Value sent on the wire (`text` or `unicode`).
    pub fn as_wire_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Unicode => "unicode",
        }
    }
}

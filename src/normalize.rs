//! Input text normalization.
//!
//! Classification expects text that is NFC-normalized, uses straight
//! quotes and ASCII hyphens, and carries at most one consecutive blank
//! line. Upstream extraction usually guarantees that; this helper exists
//! for callers whose extractor does not.

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Normalizer for raw extracted text.
pub struct Normalizer {
    horizontal_ws: Regex,
    trailing_ws: Regex,
    excess_newlines: Regex,
}

impl Normalizer {
    /// Create a normalizer.
    pub fn new() -> Self {
        Self {
            horizontal_ws: Regex::new(r"[ \t\u{00A0}]{2,}").unwrap(),
            trailing_ws: Regex::new(r"(?m)[ \t]+$").unwrap(),
            excess_newlines: Regex::new(r"\n{3,}").unwrap(),
        }
    }

    /// Normalize raw extracted text for classification.
    pub fn normalize(&self, text: &str) -> String {
        let mut result: String = text.replace("\r\n", "\n").nfc().collect();

        result = result.replace('\u{FFFD}', "");

        // Straight quotes and ASCII punctuation
        result = result
            .replace(['\u{2018}', '\u{2019}'], "'")
            .replace(['\u{201C}', '\u{201D}'], "\"")
            .replace(['\u{2013}', '\u{2014}'], "-")
            .replace('\u{2026}', "...");

        result = self.horizontal_ws.replace_all(&result, " ").to_string();
        result = self.trailing_ws.replace_all(&result, "").to_string();
        result = self.excess_newlines.replace_all(&result, "\n\n").to_string();

        result.trim().to_string()
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Normalize text with a fresh [`Normalizer`].
pub fn normalize(text: &str) -> String {
    Normalizer::new().normalize(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quotes_and_dashes() {
        let out = normalize("\u{201C}quoted\u{201D} \u{2018}text\u{2019} \u{2014} em \u{2013} en");
        assert_eq!(out, "\"quoted\" 'text' - em - en");
    }

    #[test]
    fn test_blank_line_collapse() {
        let out = normalize("one\n\n\n\ntwo");
        assert_eq!(out, "one\n\ntwo");
    }

    #[test]
    fn test_replacement_char_removed() {
        let out = normalize("bro\u{FFFD}ken");
        assert_eq!(out, "broken");
    }

    #[test]
    fn test_horizontal_whitespace_collapse() {
        let out = normalize("spaced    out\ttext   ");
        assert_eq!(out, "spaced out\ttext");
    }

    #[test]
    fn test_windows_line_endings() {
        let out = normalize("a\r\nb");
        assert_eq!(out, "a\nb");
    }
}

//! Inline formatting tokenizer.
//!
//! Recovers emphasis markup from plain text spans: `**bold**`, `*italic*`,
//! and `__underline__` markers are converted into an ordered sequence of
//! styled runs. Markers do not nest; a pair that never closes is kept as
//! literal text. Bold markers are matched before italic so `**x**` is not
//! read as two adjacent italics.

use serde::{Deserialize, Serialize};

/// Emphasis style of a single text run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStyle {
    /// No emphasis
    #[default]
    Plain,
    /// Bold (`**...**`)
    Bold,
    /// Italic (`*...*`)
    Italic,
    /// Underline (`__...__`)
    Underline,
}

/// A contiguous text span with one emphasis style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyledRun {
    /// The text content, marker characters removed
    pub text: String,

    /// Emphasis style
    pub style: RunStyle,
}

impl StyledRun {
    /// Create a plain run.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: RunStyle::Plain,
        }
    }

    /// Create a run with the given style.
    pub fn styled(text: impl Into<String>, style: RunStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    /// Check if this run is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Split a single-line text span into styled runs.
///
/// The concatenated run text equals the input with consumed marker
/// characters removed. Tokenizing text that contains no markers yields a
/// single plain run, so re-tokenizing stripped output is a no-op.
pub fn tokenize(span: &str) -> Vec<StyledRun> {
    let bytes = span.as_bytes();
    let mut runs: Vec<StyledRun> = Vec::new();
    let mut plain_start = 0;
    let mut pos = 0;

    while pos < bytes.len() {
        let marker = match bytes[pos] {
            b'*' if bytes[pos + 1..].first() == Some(&b'*') => Some(("**", RunStyle::Bold)),
            b'*' => Some(("*", RunStyle::Italic)),
            b'_' if bytes[pos + 1..].first() == Some(&b'_') => Some(("__", RunStyle::Underline)),
            _ => None,
        };

        let (open, style) = match marker {
            Some(m) => m,
            None => {
                pos += 1;
                continue;
            }
        };

        let content_start = pos + open.len();
        // An unclosed or empty pair stays literal.
        match span[content_start..].find(open) {
            Some(rel) if rel > 0 => {
                if plain_start < pos {
                    runs.push(StyledRun::plain(&span[plain_start..pos]));
                }
                runs.push(StyledRun::styled(
                    &span[content_start..content_start + rel],
                    style,
                ));
                pos = content_start + rel + open.len();
                plain_start = pos;
            }
            _ => pos += open.len(),
        }
    }

    if plain_start < span.len() {
        runs.push(StyledRun::plain(&span[plain_start..]));
    }

    coalesce(runs)
}

/// Merge adjacent runs that share a style.
fn coalesce(runs: Vec<StyledRun>) -> Vec<StyledRun> {
    let mut merged: Vec<StyledRun> = Vec::with_capacity(runs.len());
    for run in runs {
        if run.is_empty() {
            continue;
        }
        match merged.last_mut() {
            Some(last) if last.style == run.style => last.text.push_str(&run.text),
            _ => merged.push(run),
        }
    }
    merged
}

/// Re-concatenate runs into the marker-stripped text.
pub fn plain_text(runs: &[StyledRun]) -> String {
    runs.iter().map(|r| r.text.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bold_run() {
        let runs = tokenize("This is **very** important.");
        assert_eq!(
            runs,
            vec![
                StyledRun::plain("This is "),
                StyledRun::styled("very", RunStyle::Bold),
                StyledRun::plain(" important."),
            ]
        );
    }

    #[test]
    fn test_italic_and_underline() {
        let runs = tokenize("*lean* and __firm__");
        assert_eq!(runs[0], StyledRun::styled("lean", RunStyle::Italic));
        assert_eq!(runs[1], StyledRun::plain(" and "));
        assert_eq!(runs[2], StyledRun::styled("firm", RunStyle::Underline));
    }

    #[test]
    fn test_bold_checked_before_italic() {
        let runs = tokenize("**x**");
        assert_eq!(runs, vec![StyledRun::styled("x", RunStyle::Bold)]);
    }

    #[test]
    fn test_unclosed_marker_is_literal() {
        let runs = tokenize("a *dangling marker");
        assert_eq!(runs, vec![StyledRun::plain("a *dangling marker")]);

        let runs = tokenize("**half closed* done");
        assert_eq!(plain_text(&runs), "**half closed* done");
    }

    #[test]
    fn test_empty_pair_is_literal() {
        let runs = tokenize("an **** oddity");
        assert_eq!(runs, vec![StyledRun::plain("an **** oddity")]);
    }

    #[test]
    fn test_idempotent_on_plain_text() {
        let input = "No markers here at all.";
        let runs = tokenize(input);
        assert_eq!(runs, vec![StyledRun::plain(input)]);

        let stripped = plain_text(&tokenize("mix of **bold** and *italic*"));
        let again = tokenize(&stripped);
        assert_eq!(again, vec![StyledRun::plain(stripped.as_str())]);
    }

    #[test]
    fn test_concatenation_preserves_text() {
        let input = "lead **b** mid *i* tail __u__ end";
        let runs = tokenize(input);
        assert_eq!(plain_text(&runs), "lead b mid i tail u end");
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
    }
}

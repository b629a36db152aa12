//! Text measurement and line breaking.
//!
//! Real glyph metrics live in the external writer; the renderer only
//! needs widths good enough to decide where lines and pages break. The
//! [`Typography`] trait is that capability boundary, and
//! [`HeuristicTypography`] is the built-in estimate used when no real
//! metrics are supplied.

use crate::inline::{RunStyle, StyledRun};

use super::page::StyledLine;
use super::style::BlockStyle;

/// Measurement capability for styled text.
pub trait Typography: Send + Sync {
    /// Measured width of `text` at `font_size` points.
    fn text_width(&self, text: &str, font_size: f32, bold: bool) -> f32;
}

/// Built-in width estimate: half an em per character, a full em for
/// fullwidth CJK, with a small factor for bold faces.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicTypography;

impl HeuristicTypography {
    /// Create the default estimator.
    pub fn new() -> Self {
        Self
    }
}

impl Typography for HeuristicTypography {
    fn text_width(&self, text: &str, font_size: f32, bold: bool) -> f32 {
        let ems: f32 = text
            .chars()
            .map(|c| if is_fullwidth(c) { 1.0 } else { 0.5 })
            .sum();
        let factor = if bold { 1.05 } else { 1.0 };
        ems * font_size * factor
    }
}

/// Check if a character occupies a full em cell (CJK ideographs, kana,
/// Hangul, and CJK punctuation).
fn is_fullwidth(c: char) -> bool {
    let code = c as u32;

    // CJK Unified Ideographs + Extension A
    (0x4E00..=0x9FFF).contains(&code)
        || (0x3400..=0x4DBF).contains(&code)
        // Hiragana, Katakana
        || (0x3040..=0x30FF).contains(&code)
        // Hangul syllables
        || (0xAC00..=0xD7AF).contains(&code)
        // CJK symbols and punctuation, fullwidth forms
        || (0x3000..=0x303F).contains(&code)
        || (0xFF00..=0xFF60).contains(&code)
}

/// A word with the style of the run it came from.
struct StyledWord {
    text: String,
    style: RunStyle,
}

/// Wrap styled runs into lines of at most `width` points.
///
/// Greedy word fill; a word wider than a whole line is hard-broken at
/// the character that overflows. Adjacent same-style fragments on a line
/// are merged back into single runs.
pub(crate) fn break_lines(
    runs: &[StyledRun],
    style: &BlockStyle,
    content_width: f32,
    indent_first_line: bool,
    typography: &dyn Typography,
) -> Vec<StyledLine> {
    let words: Vec<StyledWord> = runs
        .iter()
        .flat_map(|run| {
            run.text.split_whitespace().map(|w| StyledWord {
                text: w.to_string(),
                style: run.style,
            })
        })
        .collect();

    if words.is_empty() {
        return Vec::new();
    }

    let bold = style.bold;
    let size = style.font_size;
    let space_width = typography.text_width(" ", size, bold);
    let base_width = (content_width - style.indent_left).max(size);
    let first_width = if indent_first_line {
        (base_width - style.first_line_indent).max(size)
    } else {
        base_width
    };

    let mut lines: Vec<StyledLine> = Vec::new();
    let mut current: Vec<StyledRun> = Vec::new();
    let mut current_width = 0.0f32;

    let available = |lines: &Vec<StyledLine>| {
        if lines.is_empty() {
            first_width
        } else {
            base_width
        }
    };

    for word in words {
        let run_bold = bold || word.style == RunStyle::Bold;
        let mut word_width = typography.text_width(&word.text, size, run_bold);
        let mut text = word.text;

        // Flush the open line when the word does not fit after it.
        if !current.is_empty() && current_width + space_width + word_width > available(&lines) {
            lines.push(StyledLine::new(std::mem::take(&mut current)));
            current_width = 0.0;
        }

        // Hard-break a word wider than a whole line. The open line is
        // empty here: a too-wide word forced the flush above.
        while word_width > available(&lines) {
            let limit = available(&lines);
            let mut taken = 0;
            let mut taken_width = 0.0f32;
            for c in text.chars() {
                let w = typography.text_width(&c.to_string(), size, run_bold);
                if taken > 0 && taken_width + w > limit {
                    break;
                }
                taken_width += w;
                taken += c.len_utf8();
            }
            let head: String = text[..taken].to_string();
            text = text[taken..].to_string();
            lines.push(StyledLine::new(vec![StyledRun::styled(head, word.style)]));
            word_width = typography.text_width(&text, size, run_bold);
            if text.is_empty() {
                break;
            }
        }
        if text.is_empty() {
            continue;
        }

        match current.last_mut() {
            None => {
                current_width = word_width;
                current.push(StyledRun::styled(text, word.style));
            }
            Some(last) => {
                // The inter-word space stays with the preceding run.
                current_width += space_width + word_width;
                last.text.push(' ');
                if last.style == word.style {
                    last.text.push_str(&text);
                } else {
                    current.push(StyledRun::styled(text, word.style));
                }
            }
        }
    }

    if !current.is_empty() {
        lines.push(StyledLine::new(current));
    }

    lines
}

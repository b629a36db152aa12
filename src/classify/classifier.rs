//! Line classification state machine.

use regex::Regex;

use super::{FragmentKind, RawFragment};

/// Maximum line length (in characters) for heading candidates.
const HEADING_MAX_CHARS: usize = 70;

/// Maximum line length (in characters) for term candidates.
const TERM_MAX_CHARS: usize = 50;

/// Heuristic classifier for raw, line-oriented document text.
///
/// One forward scan over the input, a single paragraph accumulator, no
/// backtracking. Per non-blank line the rules are evaluated in fixed
/// precedence: heading, figure caption, chapter title, term candidate,
/// paragraph accumulation. A blank line flushes the accumulator.
pub struct LineClassifier {
    multi_word_heading: Regex,
    single_word_heading: Regex,
    figure_caption: Regex,
    chapter_title: Regex,
}

impl LineClassifier {
    /// Create a classifier with the standard patterns.
    pub fn new() -> Self {
        Self {
            // "Basic Network Terminology": every word capitalized, 2-4 words
            multi_word_heading: Regex::new(r"^[A-Z][a-z]+(\s+[A-Z][a-z]+){1,3}$").unwrap(),
            // "Network": a single capitalized word on its own line
            single_word_heading: Regex::new(r"^[A-Z][a-z]+$").unwrap(),
            // "Figure 3", "Figure 2-1", "Figure 2.1" at line start
            figure_caption: Regex::new(r"^Figure\s+\d+([.-]\d+)?").unwrap(),
            chapter_title: Regex::new(r"(?i)^chapter\s+\d+").unwrap(),
        }
    }

    /// Classify a raw multi-line text block into ordered fragments.
    ///
    /// The concatenation of fragment texts in emitted order reproduces
    /// every non-blank line of the input exactly once, modulo the
    /// hyphen repair and single-space line joins inside paragraphs.
    pub fn classify(&self, text: &str) -> Vec<RawFragment> {
        // Tabs behave like spaces for all length and pattern checks.
        let text = text.replace('\t', "    ");
        let lines: Vec<&str> = text.lines().collect();

        let mut fragments: Vec<RawFragment> = Vec::new();
        let mut paragraph = String::new();

        for (i, line) in lines.iter().enumerate() {
            let trimmed = line.trim();

            if trimmed.is_empty() {
                flush_paragraph(&mut paragraph, &mut fragments);
                continue;
            }

            let prev_blank = i > 0 && lines[i - 1].trim().is_empty();
            let next = lines.get(i + 1).map(|l| l.trim());

            if self.is_heading(trimmed, prev_blank, next) {
                flush_paragraph(&mut paragraph, &mut fragments);
                fragments.push(RawFragment::new(FragmentKind::Heading, trimmed));
            } else if self.figure_caption.is_match(trimmed) {
                flush_paragraph(&mut paragraph, &mut fragments);
                fragments.push(RawFragment::new(FragmentKind::FigureCaption, trimmed));
            } else if self.chapter_title.is_match(trimmed) {
                flush_paragraph(&mut paragraph, &mut fragments);
                fragments.push(RawFragment::new(FragmentKind::ChapterTitle, trimmed));
            } else if is_term_candidate(trimmed, next) {
                flush_paragraph(&mut paragraph, &mut fragments);
                fragments.push(RawFragment::new(FragmentKind::TermCandidate, trimmed));
            } else {
                append_line(&mut paragraph, trimmed);
            }
        }

        flush_paragraph(&mut paragraph, &mut fragments);

        log::debug!(
            "classified {} lines into {} fragments",
            lines.len(),
            fragments.len()
        );
        fragments
    }

    /// Heading detection: short line matching one of the capitalization
    /// patterns, or a capitalized line isolated by blank lines.
    ///
    /// Short proper-noun sentences ("Paris Is Calling") false-positive
    /// here; the heuristic is line-local by design and does not try to
    /// disambiguate.
    fn is_heading(&self, line: &str, prev_blank: bool, next: Option<&str>) -> bool {
        if line.chars().count() >= HEADING_MAX_CHARS {
            return false;
        }

        if self.multi_word_heading.is_match(line) || self.single_word_heading.is_match(line) {
            return true;
        }

        // Capitalized line with a blank line before and after (end of
        // input counts as blank). Lines ending in a sentence terminator
        // are excluded so an isolated one-sentence paragraph or a figure
        // caption at end of input stays what it is.
        let starts_capitalized = line.chars().next().is_some_and(|c| c.is_uppercase());
        starts_capitalized
            && prev_blank
            && next.map_or(true, str::is_empty)
            && !line.ends_with(['.', '!', '?'])
    }
}

impl Default for LineClassifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Term detection: a short line without a sentence terminator whose
/// following line is strictly longer, read as a term name ahead of its
/// definition.
fn is_term_candidate(line: &str, next: Option<&str>) -> bool {
    let next = match next {
        Some(n) if !n.is_empty() => n,
        _ => return false,
    };

    line.chars().count() < TERM_MAX_CHARS
        && !line.ends_with(['.', '!', '?'])
        && next.chars().count() > line.chars().count()
}

/// Append a line to the paragraph accumulator, repairing hyphenated
/// word breaks: a trailing hyphen directly followed by a lowercase
/// letter on the next line drops the hyphen and joins without a space.
fn append_line(paragraph: &mut String, line: &str) {
    if paragraph.is_empty() {
        paragraph.push_str(line);
        return;
    }

    let continues_word =
        paragraph.ends_with('-') && line.chars().next().is_some_and(char::is_lowercase);
    if continues_word {
        paragraph.pop();
    } else {
        paragraph.push(' ');
    }
    paragraph.push_str(line);
}

/// Emit the accumulated paragraph, if any, as one fragment.
fn flush_paragraph(paragraph: &mut String, fragments: &mut Vec<RawFragment>) {
    if !paragraph.is_empty() {
        fragments.push(RawFragment::new(
            FragmentKind::Paragraph,
            std::mem::take(paragraph),
        ));
    }
}

//! Line classification for extracted page text.
//!
//! Every line is judged on its trimmed form. Noise lines (running
//! headers, footers, bare page numbers) are matched against the
//! vendor's ignore rules; boundary lines are recognised by two fixed
//! heading shapes:
//!
//! - numbered sections: `3.2 Interface Configuration`
//! - chapters: `Chapter 4: BGP` (half- or full-width colon)

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::core::error::{ChunkError, Result};

static SECTION_TITLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+(\.\d+)+\s+.+").unwrap());

static CHAPTER_TITLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^chapter\s+\d+[:：]").unwrap());

// `\r\n` is listed first so it is taken as a single break
static LINE_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\r\n|[\n\r\x0B\x0C\x1C-\x1E\x{85}\x{2028}\x{2029}]").unwrap());

/// What a single line of page text is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    /// Header/footer/page-number noise, dropped before segmentation
    Ignored,
    /// `Chapter <n>:` boundary
    Chapter,
    /// Dotted numeric section boundary
    Section,
    /// Ordinary content
    Body,
}

impl LineKind {
    pub fn is_boundary(self) -> bool {
        matches!(self, LineKind::Chapter | LineKind::Section)
    }

    pub fn label(self) -> &'static str {
        match self {
            LineKind::Ignored => "ignored",
            LineKind::Chapter => "chapter",
            LineKind::Section => "section",
            LineKind::Body => "body",
        }
    }
}

/// Ordered, compiled vendor ignore patterns.
///
/// Each pattern is anchored at the start of the trimmed line, so
/// `\d{1,4}$` only ever matches a line that is a bare number.
#[derive(Debug, Clone, Default)]
pub struct IgnoreRules {
    patterns: Vec<Regex>,
}

impl IgnoreRules {
    /// Compile the given patterns in order
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        let patterns = patterns
            .iter()
            .map(|p| {
                let p = p.as_ref();
                Regex::new(&format!("^(?:{p})")).map_err(|e| ChunkError::InvalidPattern {
                    pattern: p.to_string(),
                    message: e.to_string(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// True if the trimmed line matches any rule
    pub fn matches(&self, line: &str) -> bool {
        let line = line.trim();
        self.patterns.iter().any(|p| p.is_match(line))
    }
}

/// Split text into lines on every Unicode line boundary.
///
/// Besides `\n` and `\r\n` this breaks on a lone `\r`, vertical tab,
/// form feed, the file/group/record separators, NEL and the Unicode
/// line/paragraph separators. A trailing break does not produce an
/// empty last line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = LINE_BREAK.split(text).collect();
    if lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    lines
}

/// True if the line is header/footer/page-number noise
pub fn is_irrelevant(line: &str, rules: &IgnoreRules) -> bool {
    rules.matches(line)
}

/// True if the line is a dotted numeric heading such as `3.2 Interface Configuration`
pub fn is_section_title(line: &str) -> bool {
    SECTION_TITLE.is_match(line.trim())
}

/// True if the line opens with `Chapter <n>:` (any case, `:` or `：`)
pub fn is_chapter_title(line: &str) -> bool {
    CHAPTER_TITLE.is_match(line.trim())
}

/// Classify a line; ignore rules take precedence over boundary detection
pub fn classify(line: &str, rules: &IgnoreRules) -> LineKind {
    if is_irrelevant(line, rules) {
        LineKind::Ignored
    } else if is_chapter_title(line) {
        LineKind::Chapter
    } else if is_section_title(line) {
        LineKind::Section
    } else {
        LineKind::Body
    }
}

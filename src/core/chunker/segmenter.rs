//! Chapter/section segmentation state machine.
//!
//! Lines are fed in document order. Body lines accumulate in the
//! current section's buffer; a chapter or section heading closes the
//! buffer (token-splitting it into chunks) and opens a new section.
//!
//! A closed section's page range ends on the page where the *next*
//! heading was found, which may be the page its successor starts on.

use crate::core::chunker::classifier::{classify, IgnoreRules, LineKind};
use crate::core::chunker::splitter::SemanticSplitter;
use crate::core::error::Result;
use crate::core::types::{Chunk, PageRange, UNKNOWN_SECTION};

/// Counters gathered while segmenting one document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SegmentCounts {
    pub lines_ignored: usize,
    pub sections_detected: usize,
    pub oversized_chunks: usize,
}

/// Accumulating segmenter for a single document
pub struct SectionSegmenter<'a> {
    splitter: SemanticSplitter<'a>,
    rules: &'a IgnoreRules,
    source: String,
    current_title: String,
    current_text: String,
    current_start_page: usize,
    chunks: Vec<Chunk>,
    counts: SegmentCounts,
}

impl<'a> SectionSegmenter<'a> {
    /// Start in the accumulating state: title `UNKNOWN`, empty
    /// buffer, section opened at `start_page`.
    pub fn new(
        splitter: SemanticSplitter<'a>,
        rules: &'a IgnoreRules,
        source: impl Into<String>,
        start_page: usize,
    ) -> Self {
        Self {
            splitter,
            rules,
            source: source.into(),
            current_title: UNKNOWN_SECTION.to_string(),
            current_text: String::new(),
            current_start_page: start_page,
            chunks: Vec::new(),
            counts: SegmentCounts::default(),
        }
    }

    pub fn current_title(&self) -> &str {
        &self.current_title
    }

    /// Feed one raw line found on `page`
    pub fn feed_line(&mut self, page: usize, line: &str) -> Result<LineKind> {
        let kind = classify(line, self.rules);

        match kind {
            LineKind::Ignored => self.counts.lines_ignored += 1,
            LineKind::Chapter | LineKind::Section => {
                self.close_section(page)?;
                self.current_title = line.trim().to_string();
                self.current_start_page = page;
                self.counts.sections_detected += 1;
                tracing::debug!("Found new section on page {}: {}", page, self.current_title);
            }
            LineKind::Body => {
                self.current_text.push_str(line);
                self.current_text.push('\n');
            }
        }

        Ok(kind)
    }

    /// Feed every line of a page in order
    pub fn feed_page<S: AsRef<str>>(&mut self, page: usize, lines: &[S]) -> Result<()> {
        for line in lines {
            self.feed_line(page, line.as_ref())?;
        }
        Ok(())
    }

    /// Close the trailing section at `end_page` and return all chunks
    pub fn finish(mut self, end_page: usize) -> Result<(Vec<Chunk>, SegmentCounts)> {
        self.close_section(end_page)?;
        Ok((self.chunks, self.counts))
    }

    fn close_section(&mut self, end_page: usize) -> Result<()> {
        let text = std::mem::take(&mut self.current_text);
        let text = text.trim();
        if text.is_empty() {
            return Ok(());
        }

        let page_range = PageRange::new(self.current_start_page, end_page);
        let segments = self.splitter.split(text)?;
        let counter = self.splitter.counter();

        for content in segments {
            if counter.count_tokens(&content)? > self.splitter.max_tokens() {
                self.counts.oversized_chunks += 1;
                tracing::warn!(
                    "Single line exceeds {} tokens in section '{}' (pages {}-{})",
                    self.splitter.max_tokens(),
                    self.current_title,
                    page_range.start,
                    page_range.end
                );
            }

            self.chunks.push(Chunk {
                section: self.current_title.clone(),
                content,
                page_range,
                source: self.source.clone(),
            });
        }

        Ok(())
    }
}

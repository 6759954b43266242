//! Token-budgeted splitting at line boundaries.
//!
//! A closed section is cut into the fewest consecutive pieces that
//! each fit the budget, greedily packing whole lines. Lines are
//! atomic: a single line longer than the budget is emitted on its
//! own and left over budget.

use crate::core::chunker::classifier::split_lines;
use crate::core::chunker::tokenizer::TokenCounter;
use crate::core::error::Result;

/// Greedy line-packing splitter
pub struct SemanticSplitter<'a> {
    counter: &'a dyn TokenCounter,
    max_tokens: usize,
}

impl<'a> SemanticSplitter<'a> {
    pub fn new(counter: &'a dyn TokenCounter, max_tokens: usize) -> Self {
        Self {
            counter,
            max_tokens,
        }
    }

    pub fn max_tokens(&self) -> usize {
        self.max_tokens
    }

    pub fn counter(&self) -> &'a dyn TokenCounter {
        self.counter
    }

    /// Split `text` into ordered, trimmed, non-empty segments.
    ///
    /// Text already within budget is returned untouched as the only
    /// segment; blank text yields no segments. Only tokenizer failures
    /// are reported as errors.
    pub fn split(&self, text: &str) -> Result<Vec<String>> {
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }

        if self.counter.count_tokens(text)? <= self.max_tokens {
            tracing::debug!("Text within {} tokens, keeping as one segment", self.max_tokens);
            return Ok(vec![text.to_string()]);
        }

        let mut segments = Vec::new();
        let mut buffer = String::new();

        for line in split_lines(text) {
            let tentative = if buffer.is_empty() {
                line.to_string()
            } else {
                format!("{buffer}\n{line}")
            };

            if self.counter.count_tokens(&tentative)? > self.max_tokens {
                Self::flush(&mut segments, &buffer);
                buffer = line.to_string();
            } else {
                buffer = tentative;
            }
        }
        Self::flush(&mut segments, &buffer);

        tracing::debug!(
            "Split {} bytes into {} segments (max {} tokens)",
            text.len(),
            segments.len(),
            self.max_tokens
        );

        Ok(segments)
    }

    fn flush(segments: &mut Vec<String>, buffer: &str) {
        let trimmed = buffer.trim();
        if !trimmed.is_empty() {
            segments.push(trimmed.to_string());
        }
    }
}

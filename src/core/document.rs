//! Page-indexed document sources.
//!
//! A source exposes its page count and, per page, the raw lines of
//! extracted text. PDFs are extracted page by page with
//! `pdf-extract`; plain-text manuals use form feeds as page breaks.

use std::fs;
use std::path::Path;

use crate::core::chunker::split_lines;
use crate::core::error::{ChunkError, Result};

/// Page break used by plain-text manual exports
pub const PAGE_BREAK: char = '\x0C';

/// Random-access page text extractor
pub trait DocumentSource: Send {
    /// File name recorded as each chunk's `source`
    fn name(&self) -> &str;

    /// Total number of pages
    fn page_count(&self) -> usize;

    /// Raw lines of the page at `index` (0-based)
    fn page_lines(&self, index: usize) -> Vec<String>;
}

fn page_lines_of(page: &str) -> Vec<String> {
    split_lines(page).into_iter().map(str::to_string).collect()
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn open_error(path: &Path, reason: impl ToString) -> ChunkError {
    ChunkError::DocumentOpen {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// PDF manual with text extracted per page
#[derive(Debug, Clone)]
pub struct PdfDocument {
    name: String,
    pages: Vec<String>,
}

impl PdfDocument {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|e| open_error(path, e))?;
        // pdf-extract panics on some malformed inputs
        let pages = std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem_by_pages(&bytes))
            .map_err(|_| open_error(path, "PDF extractor panicked on malformed input"))?
            .map_err(|e| open_error(path, e))?;

        tracing::info!("Opened PDF {:?} with {} pages", path, pages.len());

        Ok(Self {
            name: file_name(path),
            pages,
        })
    }
}

impl DocumentSource for PdfDocument {
    fn name(&self) -> &str {
        &self.name
    }

    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page_lines(&self, index: usize) -> Vec<String> {
        self.pages
            .get(index)
            .map(|p| page_lines_of(p))
            .unwrap_or_default()
    }
}

/// Plain-text manual, pages separated by form feeds
#[derive(Debug, Clone)]
pub struct TextDocument {
    name: String,
    pages: Vec<String>,
}

impl TextDocument {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| open_error(path, e))?;
        let pages: Vec<String> = contents.split(PAGE_BREAK).map(str::to_string).collect();

        tracing::info!("Opened text document {:?} with {} pages", path, pages.len());

        Ok(Self {
            name: file_name(path),
            pages,
        })
    }

    /// In-memory document from already extracted pages
    pub fn from_pages<S: Into<String>>(name: impl Into<String>, pages: Vec<S>) -> Self {
        Self {
            name: name.into(),
            pages: pages.into_iter().map(Into::into).collect(),
        }
    }
}

impl DocumentSource for TextDocument {
    fn name(&self) -> &str {
        &self.name
    }

    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page_lines(&self, index: usize) -> Vec<String> {
        self.pages
            .get(index)
            .map(|p| page_lines_of(p))
            .unwrap_or_default()
    }
}

/// Open a document, choosing the extractor by file extension
pub fn open_document(path: impl AsRef<Path>) -> Result<Box<dyn DocumentSource>> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(open_error(path, "not a readable file"));
    }

    let is_pdf = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false);

    if is_pdf {
        Ok(Box::new(PdfDocument::open(path)?))
    } else {
        Ok(Box::new(TextDocument::open(path)?))
    }
}

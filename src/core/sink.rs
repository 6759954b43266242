//! Downstream hand-off of chunk records.
//!
//! The engine knows nothing about embedding or storage; it pushes
//! finished chunks into a sink. The JSON-Lines sink writes one
//! `{section, content, page_range, source}` object per line, the
//! format consumed by the embedding/storage loader.

use std::io::Write;

use crate::core::error::Result;
use crate::core::types::Chunk;

/// Receiver of an ordered chunk sequence
pub trait ChunkSink {
    fn write_chunk(&mut self, chunk: &Chunk) -> Result<()>;

    fn flush(&mut self) -> Result<()>;

    /// Write every chunk in order, then flush
    fn write_all(&mut self, chunks: &[Chunk]) -> Result<()> {
        for chunk in chunks {
            self.write_chunk(chunk)?;
        }
        self.flush()
    }
}

/// Newline-delimited JSON writer
pub struct JsonlSink<W: Write> {
    writer: W,
    written: usize,
}

impl<W: Write> JsonlSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0 }
    }

    /// Number of chunks written so far
    pub fn written(&self) -> usize {
        self.written
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ChunkSink for JsonlSink<W> {
    fn write_chunk(&mut self, chunk: &Chunk) -> Result<()> {
        serde_json::to_writer(&mut self.writer, chunk)?;
        self.writer.write_all(b"\n")?;
        self.written += 1;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

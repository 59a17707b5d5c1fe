//! Output sinks for generated variants.
//!
//! The generator never touches files itself; it appends each variant to a
//! [`VariantSink`], one line per variant, and ends each seed word's block with
//! [`VariantSink::end_block`]. [`FileSink`] truncates its file once on
//! creation and then only appends.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{PassmithError, Result};

/// Default output file name.
pub const DEFAULT_OUTPUT_FILE: &str = "password_dictionary.txt";

/// Destination for generated variants.
pub trait VariantSink {
    /// Append one variant, terminated by a line break.
    fn append(&mut self, variant: &str) -> Result<()>;

    /// Called after the last variant of a seed word.
    fn end_block(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Sink writing lines to any [`Write`] through a buffer.
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    writer: BufWriter<W>,
    lines_written: u64,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        WriterSink {
            writer: BufWriter::new(writer),
            lines_written: 0,
        }
    }

    pub fn lines_written(&self) -> u64 {
        self.lines_written
    }

    /// Flush and return the inner writer.
    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| PassmithError::Io(e.into_error()))
    }
}

impl<W: Write> VariantSink for WriterSink<W> {
    fn append(&mut self, variant: &str) -> Result<()> {
        self.writer.write_all(variant.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.lines_written += 1;
        Ok(())
    }

    fn end_block(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Plain UTF-8 text file, truncated when the sink is created.
#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
    inner: WriterSink<File>,
}

impl FileSink {
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::create(&path).map_err(|e| {
            PassmithError::Io(io::Error::new(
                e.kind(),
                format!("Failed to create output file '{}': {}", path.display(), e),
            ))
        })?;

        Ok(FileSink {
            path,
            inner: WriterSink::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn lines_written(&self) -> u64 {
        self.inner.lines_written()
    }
}

impl VariantSink for FileSink {
    fn append(&mut self, variant: &str) -> Result<()> {
        self.inner.append(variant)
    }

    fn end_block(&mut self) -> Result<()> {
        self.inner.end_block()
    }
}

/// In-memory sink keeping each seed word's block separately.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    blocks: Vec<Vec<String>>,
    current: Vec<String>,
}

impl MemorySink {
    pub fn new() -> Self {
        MemorySink::default()
    }

    /// Completed blocks, one per seed word.
    pub fn blocks(&self) -> &[Vec<String>] {
        &self.blocks
    }

    /// Every line in output order.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.blocks
            .iter()
            .flatten()
            .chain(self.current.iter())
            .map(String::as_str)
    }
}

impl VariantSink for MemorySink {
    fn append(&mut self, variant: &str) -> Result<()> {
        self.current.push(variant.to_string());
        Ok(())
    }

    fn end_block(&mut self) -> Result<()> {
        self.blocks.push(std::mem::take(&mut self.current));
        Ok(())
    }
}

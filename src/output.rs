//! Persists rendered documents.

use crate::error::Result;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Writes `document` to `writer` and flushes it.
pub fn write_to<W: Write>(mut writer: W, document: &str) -> Result<()> {
    writer.write_all(document.as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Creates (or truncates) the file at `path` and writes `document` into it.
pub fn write_document(path: impl AsRef<Path>, document: &str) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_to(BufWriter::new(file), document)?;
    debug!(path = %path.display(), bytes = document.len(), "wrote document");
    Ok(())
}

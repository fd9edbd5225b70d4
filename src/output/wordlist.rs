// src/output/wordlist.rs
// =============================================================================
// Serializing the path list into a wordlist file.
//
// Format: one path per line, each prefixed with a literal "/" so the lines
// drop straight into content-discovery tools that expect absolute-style
// paths. Rust strings are UTF-8, so arbitrary Unicode path names survive
// as-is.
//
// Rust concepts:
// - BufWriter: batches many small writes into few syscalls
// - writeln!: like write! but appends a newline
// =============================================================================

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;

// Writes one "/"-prefixed path per line to `output`
//
// Parameters:
//   paths:  repo-relative paths, already in final order
//   output: file to create (truncating any existing content)
//
// Returns: the number of lines written, or Error::Io if the file cannot
// be opened or written
pub fn write_wordlist(paths: &[String], output: &Path) -> Result<usize> {
    // File::create truncates if the file already exists
    let file = File::create(output)?;
    let mut writer = BufWriter::new(file);

    for path in paths {
        writeln!(writer, "/{}", path)?;
    }

    // BufWriter flushes on drop too, but that would swallow the error
    writer.flush()?;

    Ok(paths.len())
}

//! Reading raw lines from an input file.
//!
//! Lines keep their `\n` terminator, so a line holding only a newline is a
//! real line and survives the empty-string filter. `\r\n` and lone `\r`
//! terminators are normalised to `\n` first.

use crate::scan::{LoaderOptions, ScanError};
use log::trace;
use std::fs;
use std::path::Path;

/// Read `path` and return its lines, minus those equal to `""`.
pub fn read_lines(path: &Path, options: &LoaderOptions) -> Result<Vec<String>, ScanError> {
    let text = fs::read_to_string(path).map_err(|source| ScanError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let lines = split_lines(&text, options);
    trace!("Loaded {} lines from {}", lines.len(), path.display());
    Ok(lines)
}

/// Split in-memory text into lines the same way [`read_lines`] does.
pub fn split_lines(text: &str, options: &LoaderOptions) -> Vec<String> {
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");

    normalized
        .split_inclusive('\n')
        .map(|line| {
            if options.strip_line_endings {
                line.strip_suffix('\n').unwrap_or(line).to_string()
            } else {
                line.to_string()
            }
        })
        .filter(|line| !line.is_empty())
        .filter(|line| !(options.skip_blank && line.trim().is_empty()))
        .collect()
}

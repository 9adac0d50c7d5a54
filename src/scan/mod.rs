//! End-to-end scanning: load lines, split them into records, and collect
//! placeholders.
//!
//! # Examples
//!
//! ```rust
//! use record_scan::scan::{ScanConfig, scan_text};
//!
//! let report = scan_text("alice,hello {world} foo", &ScanConfig::default()).unwrap();
//! assert_eq!(report.records.get("alice"), Some("hello {world} foo"));
//! assert!(report.placeholders.contains("world"));
//! ```

pub mod core;
pub mod error;

pub use self::core::{DEFAULT_DELIMITER, DEFAULT_INPUT, DEFAULT_PATTERN, LoaderOptions, ScanConfig};
pub use self::error::ScanError;

use crate::load;
use crate::placeholder::PlaceholderExtractor;
use crate::record::RecordMap;
use crate::report::Report;
use log::info;

/// Scan the file named by `config.input`
pub fn scan_file(config: &ScanConfig) -> Result<Report, ScanError> {
    // Compile first so a bad pattern fails before any I/O.
    let extractor = PlaceholderExtractor::with_pattern(&config.pattern)?;
    let lines = load::read_lines(&config.input, &config.loader)?;
    Ok(build_report(&lines, config.delimiter, &extractor))
}

/// Scan in-memory text
pub fn scan_text(text: &str, config: &ScanConfig) -> Result<Report, ScanError> {
    let extractor = PlaceholderExtractor::with_pattern(&config.pattern)?;
    let lines = load::split_lines(text, &config.loader);
    Ok(build_report(&lines, config.delimiter, &extractor))
}

fn build_report(lines: &[String], delimiter: char, extractor: &PlaceholderExtractor) -> Report {
    let records = RecordMap::from_lines(lines, delimiter);
    let placeholders = extractor.collect(&records);
    info!(
        "Scanned {} lines into {} records with {} placeholders",
        lines.len(),
        records.len(),
        placeholders.len()
    );
    Report::new(records, placeholders)
}

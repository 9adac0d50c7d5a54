//! 'record-scan' - Key/value records and their brace placeholders.
//!
//! This library reads a line-oriented, comma-delimited text file into a
//! key/value map and picks the first `{placeholder}` token out of every value.
//! Each line's first field is the key and the remainder, delimiters included,
//! is the value. Duplicate keys keep the last value seen.

pub mod load;
pub mod placeholder;
pub mod record;
pub mod report;
pub mod scan;

pub use placeholder::{PlaceholderExtractor, PlaceholderSet};
pub use record::{Record, RecordMap};
pub use report::Report;
pub use scan::{ScanConfig, ScanError, scan_file, scan_text};

/// Scans `text` with the default delimiter and pattern.
///
/// For custom delimiters, patterns or line handling, see [`scan::ScanConfig`].
pub fn extract_placeholders(text: &str) -> Result<Report, ScanError> {
    scan_text(text, &ScanConfig::default())
}

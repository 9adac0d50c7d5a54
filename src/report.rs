//! Rendering the outcome of a scan.

use crate::placeholder::PlaceholderSet;
use crate::record::RecordMap;
use crate::scan::ScanError;
use serde::Serialize;
use std::fmt;

/// Records and the placeholders found in them
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    pub records: RecordMap,
    pub placeholders: PlaceholderSet,
}

impl Report {
    pub fn new(records: RecordMap, placeholders: PlaceholderSet) -> Self {
        Self {
            records,
            placeholders,
        }
    }

    /// `{"records": {...}, "placeholders": [...]}`
    pub fn to_json(&self) -> Result<String, ScanError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Two lines: the record map, then the placeholder set.
impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.records)?;
        write!(f, "{:?}", self.placeholders)
    }
}

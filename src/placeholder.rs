use crate::record::RecordMap;
use crate::scan::{DEFAULT_PATTERN, ScanError};
use log::debug;
use regex::{Captures, Regex};
use std::collections::BTreeSet;

/// Distinct placeholder tokens, one at most per record value
pub type PlaceholderSet = BTreeSet<String>;

/// Finds bracketed placeholder tokens inside record values
#[derive(Debug, Clone)]
pub struct PlaceholderExtractor {
    regex: Regex,
}

impl PlaceholderExtractor {
    /// Extractor using the default `\{(.*?)\}` pattern
    pub fn standard() -> Result<Self, ScanError> {
        Self::with_pattern(DEFAULT_PATTERN)
    }

    /// Extractor using a custom pattern.
    ///
    /// Capture group 1 is the token when the pattern has one, even when that
    /// group took no part in the match. Otherwise the whole match is.
    pub fn with_pattern(pattern: &str) -> Result<Self, ScanError> {
        Ok(Self {
            regex: Regex::new(pattern)?,
        })
    }

    /// First token in `value`. Later matches are ignored.
    pub fn first_match(&self, value: &str) -> Option<String> {
        self.regex.captures(value).map(|caps| self.token(&caps))
    }

    /// Every token in `value`, in order
    pub fn all_matches(&self, value: &str) -> Vec<String> {
        self.regex
            .captures_iter(value)
            .map(|caps| self.token(&caps))
            .collect()
    }

    /// Collect the first token of every value in `records`
    pub fn collect(&self, records: &RecordMap) -> PlaceholderSet {
        let mut placeholders = PlaceholderSet::new();

        for (key, value) in records.iter() {
            if let Some(found) = self.first_match(value) {
                debug!("Placeholder {:?} in record {:?}", found, key);
                placeholders.insert(found);
            }
        }

        placeholders
    }

    fn token(&self, caps: &Captures<'_>) -> String {
        // An unmatched optional group yields "", never the whole match.
        let group = if self.regex.captures_len() > 1 { 1 } else { 0 };
        caps.get(group)
            .map_or_else(String::new, |m| m.as_str().to_string())
    }
}

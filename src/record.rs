//! Splitting lines into key/value records and collecting them into a map.

use log::debug;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;
use std::fmt;

/// One parsed line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub key: String,
    pub value: String,
}

impl Record {
    /// Split `line` at the first `delimiter`.
    ///
    /// The key is everything before it, untrimmed. The value is everything
    /// after it, so further delimiters stay in the value verbatim. A line
    /// without a delimiter becomes a key with an empty value.
    pub fn parse(line: &str, delimiter: char) -> Self {
        match line.split_once(delimiter) {
            Some((key, value)) => Self {
                key: key.to_string(),
                value: value.to_string(),
            },
            None => Self {
                key: line.to_string(),
                value: String::new(),
            },
        }
    }
}

/// Key/value records with unique keys.
///
/// Iteration follows the order in which each key was first inserted.
/// Inserting an existing key replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordMap {
    entries: Vec<Record>,
    index: HashMap<String, usize>,
}

impl RecordMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a map from raw lines, last occurrence of a key winning
    pub fn from_lines<I, S>(lines: I, delimiter: char) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut map = Self::new();
        for line in lines {
            map.insert(Record::parse(line.as_ref(), delimiter));
        }
        map
    }

    /// Insert a record, returning the value it replaced, if any
    pub fn insert(&mut self, record: Record) -> Option<String> {
        debug!("Record {:?} => {:?}", record.key, record.value);

        if let Some(&pos) = self.index.get(&record.key) {
            let previous = std::mem::replace(&mut self.entries[pos].value, record.value);
            return Some(previous);
        }

        self.index.insert(record.key.clone(), self.entries.len());
        self.entries.push(record);
        None
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.index
            .get(key)
            .map(|&pos| self.entries[pos].value.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|r| (r.key.as_str(), r.value.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|r| r.key.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|r| r.value.as_str())
    }
}

/// Renders as a debug map: `{"key": "value", ...}`
impl fmt::Display for RecordMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl Serialize for RecordMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

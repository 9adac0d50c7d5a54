use std::path::PathBuf;

/// Input file read when no path is given
pub const DEFAULT_INPUT: &str = "text.txt";

/// Field delimiter separating a key from its value
pub const DEFAULT_DELIMITER: char = ',';

/// Non-greedy "anything between one `{` and the next `}`"
pub const DEFAULT_PATTERN: &str = r"\{(.*?)\}";

/// How raw lines are filtered before splitting
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoaderOptions {
    /// Remove the trailing `\n` from every line
    pub strip_line_endings: bool,

    /// Drop lines that contain only whitespace
    pub skip_blank: bool,
}

/// Configuration for a single scan
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// File to read records from
    pub input: PathBuf,

    /// Character separating the key from the rest of the line
    pub delimiter: char,

    /// Regex used to find placeholders; capture group 1 is the token when present
    pub pattern: String,

    /// Line filtering applied by the loader
    pub loader: LoaderOptions,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            delimiter: DEFAULT_DELIMITER,
            pattern: DEFAULT_PATTERN.to_string(),
            loader: LoaderOptions::default(),
        }
    }
}

impl ScanConfig {
    /// Read records from `path`
    pub fn with_input(mut self, path: impl Into<PathBuf>) -> Self {
        self.input = path.into();
        self
    }

    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_pattern(mut self, pattern: &str) -> Self {
        self.pattern = pattern.to_string();
        self
    }

    /// Strip `\n` from the end of each line before splitting
    pub fn strip_line_endings(mut self) -> Self {
        self.loader.strip_line_endings = true;
        self
    }

    /// Skip whitespace-only lines
    pub fn skip_blank(mut self) -> Self {
        self.loader.skip_blank = true;
        self
    }
}

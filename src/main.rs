//! record-scan - print a file's key/value records and their placeholders.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{LevelFilter, debug};

use record_scan::scan::{DEFAULT_DELIMITER, DEFAULT_INPUT, DEFAULT_PATTERN, ScanConfig, scan_file};

#[derive(Debug, Parser)]
#[command(name = "record-scan", version, about)]
struct Cli {
    /// Input file, one `key,value` record per line
    #[arg(default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Character separating the key from the value
    #[arg(short, long, default_value_t = DEFAULT_DELIMITER)]
    delimiter: char,

    /// Regex for placeholders; capture group 1 is the token
    #[arg(short, long, default_value = DEFAULT_PATTERN)]
    pattern: String,

    /// Remove trailing newlines from lines before splitting
    #[arg(long)]
    strip_newlines: bool,

    /// Ignore lines containing only whitespace
    #[arg(long)]
    skip_blank: bool,

    /// Print records and placeholders as one JSON document
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn scan_config(&self) -> ScanConfig {
        let mut config = ScanConfig::default()
            .with_input(&self.input)
            .with_delimiter(self.delimiter)
            .with_pattern(&self.pattern);
        if self.strip_newlines {
            config = config.strip_line_endings();
        }
        if self.skip_blank {
            config = config.skip_blank();
        }
        config
    }
}

fn setup_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let config = cli.scan_config();
    debug!("main: scanning with {:?}", config);

    let report = scan_file(&config)
        .with_context(|| format!("Failed to scan {}", config.input.display()))?;

    if cli.json {
        println!("{}", report.to_json().context("Failed to render JSON")?);
    } else {
        println!("{report}");
    }

    Ok(())
}

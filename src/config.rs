//! Benchmark configuration and CLI argument parsing
//!
//! This module turns the raw command line into a validated [`Config`]
//! record before any benchmark work starts. The pipeline is:
//!
//! 1. Parse arguments (clap, with the documented defaults filled in)
//! 2. Validate every field against its domain
//! 3. Print a `label : value` summary of the effective configuration
//!
//! Parsing and validation never terminate the process themselves; they
//! return a [`ConfigError`] and leave the exit to the binary front-end,
//! so the whole pipeline is testable in-process.
//!
//! # Example Usage
//!
//! ```bash
//! # Defaults only
//! ycsb-bench
//!
//! # 4x dataset, 20% writes
//! ycsb-bench -k 4 -u 0.2
//!
//! # Long forms
//! ycsb-bench --scale-factor 4 --transactions 50000 --backend_count 8
//! ```

use std::ffi::OsString;
use std::io::Write;

use clap::Parser;
use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_SCALE_FACTOR: i64 = 1;
pub const DEFAULT_TRANSACTION_COUNT: i64 = 10_000;
pub const DEFAULT_COLUMN_COUNT: i64 = 10;
pub const DEFAULT_UPDATE_RATIO: f64 = 0.5;
pub const DEFAULT_BACKEND_COUNT: i64 = 2;

/// Width of the left-justified label column in the configuration summary.
const LABEL_WIDTH: usize = 20;

/// Usage banner printed on `-h`/`--help` or an unrecognized option.
const USAGE: &str = "Command line options : ycsb-bench <options>\n\
   -h --help              :  Print help message\n\
   -k --scale-factor      :  # of tuples\n\
   -t --transactions      :  # of transactions\n\
   -c --column_count      :  # of columns\n\
   -u --update_ratio      :  Fraction of updates\n\
   -b --backend_count     :  # of backends\n";

/// Errors produced by the parse-validate pipeline
///
/// `Usage` carries the rendered banner and belongs on stderr;
/// `InvalidField` names the offending field and value and belongs on
/// stdout, next to the confirmation lines it interrupts.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Help was requested or an option was not recognized.
    #[error("{0}")]
    Usage(String),

    /// A field value is outside its declared domain.
    #[error("Invalid {field} :: {value}")]
    InvalidField { field: &'static str, value: String },

    /// The configuration summary could not be written.
    #[error("failed to write configuration summary: {0}")]
    Io(#[from] std::io::Error),
}

/// Benchmark run configuration
///
/// Every field is independently validated; a `Config` handed out by
/// [`Config::from_args`] plus [`Config::validate`] always satisfies all
/// of its constraints. Counts are signed and the ratio is a float so
/// that out-of-domain values survive parsing and are rejected by the
/// validation layer with a proper diagnostic.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    /// Dataset size multiplier (> 0)
    pub scale_factor: i64,
    /// Number of transactions to run (> 0)
    pub transaction_count: i64,
    /// Number of columns per tuple (> 0)
    pub column_count: i64,
    /// Fraction of operations that are updates (in [0, 1])
    pub update_ratio: f64,
    /// Number of concurrent backend workers (> 0)
    pub backend_count: i64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            scale_factor: DEFAULT_SCALE_FACTOR,
            transaction_count: DEFAULT_TRANSACTION_COUNT,
            column_count: DEFAULT_COLUMN_COUNT,
            update_ratio: DEFAULT_UPDATE_RATIO,
            backend_count: DEFAULT_BACKEND_COUNT,
        }
    }
}

/// Command-line arguments for the benchmark driver
///
/// clap's built-in help is disabled: the original tooling expects the
/// usage banner on stderr with a failure exit code, so `-h`/`--help` is
/// an ordinary flag handled in [`Config::from_args`].
#[derive(Parser, Debug)]
#[command(name = "ycsb-bench", disable_help_flag = true)]
struct Args {
    #[arg(
        short = 'k',
        long = "scale-factor",
        value_name = "N",
        help = "# of tuples",
        default_value_t = DEFAULT_SCALE_FACTOR,
        allow_negative_numbers = true
    )]
    scale_factor: i64,

    #[arg(
        short = 't',
        long = "transactions",
        value_name = "N",
        help = "# of transactions",
        default_value_t = DEFAULT_TRANSACTION_COUNT,
        allow_negative_numbers = true
    )]
    transaction_count: i64,

    #[arg(
        short = 'c',
        long = "column_count",
        value_name = "N",
        help = "# of columns",
        default_value_t = DEFAULT_COLUMN_COUNT,
        allow_negative_numbers = true
    )]
    column_count: i64,

    #[arg(
        short = 'u',
        long = "update_ratio",
        value_name = "FRACTION",
        help = "Fraction of updates",
        default_value_t = DEFAULT_UPDATE_RATIO,
        allow_negative_numbers = true
    )]
    update_ratio: f64,

    #[arg(
        short = 'b',
        long = "backend_count",
        value_name = "N",
        help = "# of backends",
        default_value_t = DEFAULT_BACKEND_COUNT,
        allow_negative_numbers = true
    )]
    backend_count: i64,

    #[arg(short = 'h', long = "help", help = "Print help message")]
    help: bool,
}

impl Config {
    /// Parse a configuration from command-line tokens
    ///
    /// `args` is the argument sequence *excluding* the program name.
    /// Recognized options overwrite the documented defaults; the help
    /// flag and unrecognized options yield [`ConfigError::Usage`] with
    /// the rendered banner.
    ///
    /// The returned record is not yet validated; call
    /// [`Config::validate`] before handing it to the benchmark engine.
    pub fn from_args<I, T>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let mut argv: Vec<OsString> = vec![OsString::from("ycsb-bench")];
        argv.extend(args.into_iter().map(Into::into));

        let args = Args::try_parse_from(argv)
            .map_err(|_| ConfigError::Usage(USAGE.to_string()))?;

        if args.help {
            return Err(ConfigError::Usage(USAGE.to_string()));
        }

        Ok(Config {
            scale_factor: args.scale_factor,
            transaction_count: args.transaction_count,
            column_count: args.column_count,
            update_ratio: args.update_ratio,
            backend_count: args.backend_count,
        })
    }

    pub fn validate_scale_factor(&self) -> Result<(), ConfigError> {
        if self.scale_factor <= 0 {
            return Err(invalid("scale_factor", self.scale_factor));
        }
        Ok(())
    }

    pub fn validate_column_count(&self) -> Result<(), ConfigError> {
        if self.column_count <= 0 {
            return Err(invalid("column_count", self.column_count));
        }
        Ok(())
    }

    pub fn validate_update_ratio(&self) -> Result<(), ConfigError> {
        if self.update_ratio < 0.0 || self.update_ratio > 1.0 {
            return Err(invalid("update_ratio", self.update_ratio));
        }
        Ok(())
    }

    pub fn validate_backend_count(&self) -> Result<(), ConfigError> {
        if self.backend_count <= 0 {
            return Err(invalid("backend_count", self.backend_count));
        }
        Ok(())
    }

    pub fn validate_transaction_count(&self) -> Result<(), ConfigError> {
        if self.transaction_count <= 0 {
            return Err(invalid("transaction_count", self.transaction_count));
        }
        Ok(())
    }

    /// Validate every field and write the configuration summary to `out`
    ///
    /// Fields are checked in a fixed order: scale factor, column count,
    /// update ratio, backend count, transaction count. Each passing
    /// check writes its confirmation line before the next check runs,
    /// so on failure the summary contains exactly the fields that were
    /// accepted before the offending one. Downstream tooling reads the
    /// partial summary, so the ordering is part of the contract.
    pub fn validate<W: Write>(&self, out: &mut W) -> Result<(), ConfigError> {
        self.validate_scale_factor()?;
        writeln!(out, "{:<LABEL_WIDTH$} : {}", "scale_factor", self.scale_factor)?;

        self.validate_column_count()?;
        writeln!(out, "{:<LABEL_WIDTH$} : {}", "column_count", self.column_count)?;

        self.validate_update_ratio()?;
        writeln!(out, "{:<LABEL_WIDTH$} : {}", "update_ratio", self.update_ratio)?;

        self.validate_backend_count()?;
        writeln!(out, "{:<LABEL_WIDTH$} : {}", "backend_count", self.backend_count)?;

        self.validate_transaction_count()?;
        writeln!(
            out,
            "{:<LABEL_WIDTH$} : {}",
            "transaction_count", self.transaction_count
        )?;

        Ok(())
    }
}

fn invalid(field: &'static str, value: impl std::fmt::Display) -> ConfigError {
    ConfigError::InvalidField {
        field,
        value: value.to_string(),
    }
}

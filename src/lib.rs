//! # ycsb-bench
//!
//! A YCSB-style database benchmark driver.
//!
//! This crate currently exposes the configuration front-end: the
//! parse-default-validate pipeline that turns command-line arguments
//! into a fully validated [`Config`] record. The benchmark engine
//! consumes the record after validation succeeds.
//!
//! ## Quick Start
//!
//! ```bash
//! # Run with defaults (scale factor 1, 10000 transactions)
//! ycsb-bench
//!
//! # 4x dataset, 20% writes
//! ycsb-bench -k 4 -u 0.2
//! ```
//!
//! ## Configuration
//!
//! | Flag | Long form | Default |
//! |------|-----------|---------|
//! | `-k` | `--scale-factor` | 1 |
//! | `-t` | `--transactions` | 10000 |
//! | `-c` | `--column_count` | 10 |
//! | `-u` | `--update_ratio` | 0.5 |
//! | `-b` | `--backend_count` | 2 |
//!
//! Every field is validated after parsing; an out-of-domain value
//! aborts the run with a diagnostic naming the field and the value.

pub mod config;

pub use config::{Config, ConfigError};

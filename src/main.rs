use std::io;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use ycsb_bench::config::{Config, ConfigError};

fn main() -> ExitCode {
    // Logs go to stderr; stdout is reserved for the configuration summary.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let config = match Config::from_args(std::env::args_os().skip(1)) {
        Ok(config) => config,
        Err(err) => {
            eprint!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let mut stdout = io::stdout();
    if let Err(err) = config.validate(&mut stdout) {
        match err {
            // Validation diagnostics share stdout with the summary lines.
            ConfigError::InvalidField { .. } => println!("{err}"),
            _ => eprintln!("{err}"),
        }
        return ExitCode::FAILURE;
    }

    tracing::info!(
        scale_factor = config.scale_factor,
        transaction_count = config.transaction_count,
        column_count = config.column_count,
        update_ratio = config.update_ratio,
        backend_count = config.backend_count,
        "benchmark configuration loaded"
    );

    // The benchmark engine takes ownership of the validated record here.
    ExitCode::SUCCESS
}

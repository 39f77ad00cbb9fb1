//! CLI command definitions and argument parsing.

use clap::{Args, Parser, Subcommand};
use eratos_cluster::Mode;
use std::path::PathBuf;

/// Eratos - count primes in a range across parallel workers.
#[derive(Debug, Parser)]
#[command(name = "eratos")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true, default_value = "text")]
    pub format: CliFormat,

    /// Configuration file path (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Human-readable text (default)
    Text,
    /// JSON format
    Json,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Count primes in the configured range
    Count(RangeArgs),

    /// Compare the distributed run against a single-worker baseline
    Bench(RangeArgs),
}

/// Range and worker options shared by the subcommands. Anything not given
/// here falls back to the configuration file, then to the defaults.
#[derive(Debug, Args)]
pub struct RangeArgs {
    /// First value of the range, in decimal
    #[arg(short, long)]
    pub start: Option<String>,

    /// Last value of the range, in decimal. Bounds beyond native width
    /// (e.g. 1000000000000000000000000) need --mode big
    #[arg(short, long)]
    pub end: Option<String>,

    /// Number of parallel workers
    #[arg(short, long)]
    pub workers: Option<usize>,

    /// Engine selection
    #[arg(short, long, value_enum)]
    pub mode: Option<CliMode>,
}

/// Engine selection argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliMode {
    /// Native u64 bounds
    Fixed,
    /// Arbitrary-precision bounds
    Big,
}

impl From<CliMode> for Mode {
    fn from(mode: CliMode) -> Self {
        match mode {
            CliMode::Fixed => Mode::FixedWidth,
            CliMode::Big => Mode::ArbitraryPrecision,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_command() {
        let cli = Cli::parse_from(["eratos", "count", "--start", "1", "--end", "1000"]);
        match cli.command {
            Command::Count(args) => {
                assert_eq!(args.start.as_deref(), Some("1"));
                assert_eq!(args.end.as_deref(), Some("1000"));
                assert!(args.workers.is_none());
            }
            _ => panic!("Expected Count command"),
        }
    }

    #[test]
    fn test_bench_command_with_workers_and_mode() {
        let cli = Cli::parse_from(["eratos", "bench", "-w", "8", "-m", "big"]);
        match cli.command {
            Command::Bench(args) => {
                assert_eq!(args.workers, Some(8));
                assert!(matches!(args.mode, Some(CliMode::Big)));
            }
            _ => panic!("Expected Bench command"),
        }
    }

    #[test]
    fn test_mode_conversion() {
        assert_eq!(Mode::from(CliMode::Fixed), Mode::FixedWidth);
        assert_eq!(Mode::from(CliMode::Big), Mode::ArbitraryPrecision);
    }
}

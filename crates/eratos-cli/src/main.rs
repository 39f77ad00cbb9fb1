//! Eratos CLI - count primes in a range across parallel workers.

use clap::Parser;
use eratos_cli::{config, Cli, Command, Formatter};
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> eratos_cli::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let formatter = Formatter::new(cli.format);
    match &cli.command {
        Command::Count(args) => {
            let config = config::apply_overrides(config::load(cli.config.as_deref())?, args);
            let report = eratos_cluster::runner::count(&config)?;
            println!("{}", formatter.format_run(&report)?);
        }
        Command::Bench(args) => {
            let config = config::apply_overrides(config::load(cli.config.as_deref())?, args);
            let report = eratos_cluster::runner::bench(&config)?;
            println!("{}", formatter.format_bench(&report)?);
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

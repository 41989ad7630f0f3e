mod cli;
mod commands;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = parse_args();

    // Initialize logging
    setup_logging(cli.verbose)?;

    // Handle commands
    match cli.command {
        None => {
            // No subcommand provided, show the root help
            Cli::command().print_long_help()?;
            Ok(())
        }
        Some(Commands::Setup) => commands::setup::execute(),
        Some(Commands::Start(args)) => commands::start::execute(&args),
        Some(Commands::Stop(args)) => commands::stop::execute(&args),
        Some(Commands::Status) => commands::status::execute(),
        Some(Commands::Logs(args)) => commands::logs::execute(&args),
        Some(Commands::Test(args)) => commands::test::execute(&args),
        Some(Commands::Deploy(args)) => commands::deploy::execute(&args),
        Some(Commands::Version) => commands::version::execute(),
    }
}

/// Parse argv, mapping clap's usage-error exit to code 1.
///
/// Help and version displays exit 0. Every malformed invocation (unknown
/// command or flag, arity violation, bad enum value) exits 1 before any
/// command handler runs.
fn parse_args() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = err.print();
            std::process::exit(code);
        }
    }
}

fn setup_logging(verbose: bool) -> Result<()> {
    let default_filter = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    // Diagnostics go to stderr so child output owns stdout
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

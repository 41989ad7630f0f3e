//! CLI argument definitions
//!
//! Declares the full command surface of `saas`. Each subcommand is one
//! variant; flags and positionals live in a per-command argument struct so a
//! resolved invocation owns its parsed values outright.

use clap::{Args, Parser, Subcommand, ValueEnum};

const LONG_ABOUT: &str = "\
A command-line tool to manage local development of the SaaS Platform.

This tool provides convenient commands for:
  - Setting up the development environment
  - Managing services (start, stop, restart)
  - Running tests
  - Deploying to local/dev environments
  - Viewing logs and status

Examples:
  saas setup          # Setup development environment
  saas start          # Start all services
  saas stop           # Stop all services
  saas logs auth      # View auth service logs
  saas test           # Run all tests
  saas deploy local   # Deploy to local Kubernetes";

#[derive(Parser)]
#[command(
    name = "saas",
    version,
    about = "SaaS Platform Developer CLI",
    long_about = LONG_ABOUT,
    infer_subcommands = true
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Setup development environment
    ///
    /// Installs dependencies, clones service repositories, and initializes
    /// the workspace through the platform's `make setup` target.
    Setup,

    /// Start services
    ///
    /// Starts all services, or restarts a single service when one is named.
    Start(StartArgs),

    /// Stop services
    ///
    /// Stops all services, or a single service container when one is named.
    Stop(StopArgs),

    /// Check service status
    Status,

    /// View service logs
    Logs(LogsArgs),

    /// Run tests
    Test(TestArgs),

    /// Deploy to environment
    Deploy(DeployArgs),

    /// Print version information
    Version,
}

#[derive(Args)]
pub struct StartArgs {
    /// Service to start (all services when omitted)
    pub service: Option<String>,

    /// Start in development mode with hot-reload
    #[arg(long)]
    pub dev: bool,
}

#[derive(Args)]
pub struct StopArgs {
    /// Service to stop (all services when omitted)
    pub service: Option<String>,
}

#[derive(Args)]
pub struct LogsArgs {
    /// Service whose logs to view (all services when omitted)
    pub service: Option<String>,

    /// Follow log output
    #[arg(short, long)]
    pub follow: bool,
}

#[derive(Args)]
pub struct TestArgs {
    /// Test suite to run (all suites when omitted)
    #[arg(long = "type", value_enum, value_name = "TYPE")]
    pub suite: Option<TestSuite>,
}

#[derive(Args)]
pub struct DeployArgs {
    /// Target environment
    #[arg(value_enum)]
    pub environment: Environment,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TestSuite {
    Unit,
    Integration,
    E2e,
    Load,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Environment {
    /// Local Kubernetes cluster
    Local,
    /// Shared development environment
    Dev,
}

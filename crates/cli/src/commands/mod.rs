//! Command implementations
//!
//! One module per saas subcommand. Each module exposes an `execute` entry
//! point that builds the external invocation for that command and runs it
//! through the shared process runner.

pub mod deploy;
pub mod logs;
pub mod setup;
pub mod start;
pub mod status;
pub mod stop;
pub mod version;

/// Container name for a service, as the platform's compose file and make
/// targets know it.
pub(crate) fn service_container(service: &str) -> String {
    format!("{service}-service")
}

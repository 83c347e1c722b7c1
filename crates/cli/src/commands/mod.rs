pub mod lookup;
pub mod reverse;
pub mod trace;

#[cfg(test)]
mod test_support;

use colored::Colorize;
use dnspect_domain::DomainError;
use std::process::ExitCode;
use tracing::debug;

/// Report bad input and fail. Callers reach this before building any
/// resolver, so nothing has gone out on the network yet.
fn invalid_input(error: DomainError) -> ExitCode {
    debug!(input_error = error.is_input_error(), "Rejected command input");
    eprintln!("{}: {}", "Error".red().bold(), error);
    ExitCode::FAILURE
}

use crate::output::{self, Format};
use dnspect_application::use_cases::ReverseLookupUseCase;
use dnspect_domain::{validate_ip, DomainError};
use std::net::IpAddr;
use std::process::ExitCode;
use tracing::debug;

/// Only invalid input fails; a lookup that finds nothing is reported as a
/// warning and still exits successfully.
pub async fn run(
    ip: &str,
    format: Format,
    use_case: impl FnOnce() -> anyhow::Result<ReverseLookupUseCase>,
) -> anyhow::Result<ExitCode> {
    let address = match parse_address(ip) {
        Ok(address) => address,
        Err(e) => return Ok(super::invalid_input(e)),
    };

    let result = use_case()?.execute(address).await;

    match format {
        Format::Text => match &result {
            Ok(answer) => print!("{}", output::render_lookup(answer)),
            Err(e) => println!("{}", output::render_reverse_failure(e)),
        },
        Format::Json => println!("{}", output::reverse_json(ip, &result)?),
    }

    if let Err(e) = &result {
        debug!(ip = %address, error = %e, "Reverse lookup failed");
    }
    Ok(ExitCode::SUCCESS)
}

fn parse_address(ip: &str) -> Result<IpAddr, DomainError> {
    if !validate_ip(ip) {
        return Err(DomainError::InvalidIpAddress(ip.to_string()));
    }
    ip.parse()
        .map_err(|_| DomainError::InvalidIpAddress(ip.to_string()))
}

use crate::output::{self, Format};
use dnspect_application::use_cases::TraceDomainUseCase;
use dnspect_domain::{canonicalize_domain, validate_domain, DnsQuery, DomainError, RecordType};
use std::process::ExitCode;
use std::str::FromStr;
use tracing::debug;

/// Validate the arguments, then build the use case and walk the referral
/// chain. An unanswered trace exits with failure.
pub async fn run(
    domain: &str,
    record: &str,
    format: Format,
    use_case: impl FnOnce() -> anyhow::Result<TraceDomainUseCase>,
) -> anyhow::Result<ExitCode> {
    let query = match parse_query(domain, record) {
        Ok(query) => query,
        Err(e) => return Ok(super::invalid_input(e)),
    };

    let result = use_case()?.execute(&query).await;

    match format {
        Format::Text => {
            print!("{}", output::render_trace(&result));
            println!("{}", output::trace_summary(&result));
        }
        Format::Json => println!("{}", output::trace_json(&result)?),
    }

    if result.is_complete() {
        Ok(ExitCode::SUCCESS)
    } else {
        debug!(
            domain = %result.domain,
            outcome = result.outcome.as_str(),
            steps = result.steps.len(),
            "Trace did not reach an answer"
        );
        Ok(ExitCode::FAILURE)
    }
}

fn parse_query(domain: &str, record: &str) -> Result<DnsQuery, DomainError> {
    if !validate_domain(domain) {
        return Err(DomainError::InvalidDomainName(domain.to_string()));
    }
    let record_type = RecordType::from_str(record)?;
    let name = canonicalize_domain(domain)?;
    Ok(DnsQuery::new(name, record_type))
}

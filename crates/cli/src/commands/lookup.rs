use crate::output::{self, Format};
use dnspect_application::use_cases::LookupRecordsUseCase;
use dnspect_domain::{parse_record_types, validate_domain, DomainError, RecordType};
use std::process::ExitCode;

pub async fn run(
    domain: &str,
    record: &str,
    all: bool,
    format: Format,
    use_case: impl FnOnce() -> anyhow::Result<LookupRecordsUseCase>,
) -> anyhow::Result<ExitCode> {
    let record_types = match parse_request(domain, record, all) {
        Ok(types) => types,
        Err(e) => return Ok(super::invalid_input(e)),
    };

    let outcomes = use_case()?.execute(domain, &record_types).await;

    match format {
        Format::Text => {
            for outcome in &outcomes {
                match &outcome.result {
                    Ok(answer) => print!("{}", output::render_lookup(answer)),
                    Err(e) => {
                        println!("{}", output::render_lookup_failure(outcome.record_type, e))
                    }
                }
            }
        }
        Format::Json => println!("{}", output::lookup_json(&outcomes)?),
    }

    // Per-type failures are reported above and do not fail the command
    Ok(ExitCode::SUCCESS)
}

/// Record types to query; `--all` expands to the common set.
fn parse_request(domain: &str, record: &str, all: bool) -> Result<Vec<RecordType>, DomainError> {
    if !validate_domain(domain) {
        return Err(DomainError::InvalidDomainName(domain.to_string()));
    }
    if all {
        return Ok(RecordType::COMMON.to_vec());
    }
    parse_record_types(record)
}

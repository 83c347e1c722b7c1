use dnspect_application::use_cases::RecordLookupOutcome;
use dnspect_domain::{DomainError, LookupAnswer, TraceResult};
use serde_json::{json, Value};

pub fn trace_json(result: &TraceResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(result)
}

pub fn lookup_json(outcomes: &[RecordLookupOutcome]) -> serde_json::Result<String> {
    let entries = outcomes
        .iter()
        .map(|outcome| match &outcome.result {
            Ok(answer) => serde_json::to_value(answer),
            Err(e) => Ok(json!({
                "record_type": outcome.record_type,
                "error": e.to_string(),
            })),
        })
        .collect::<serde_json::Result<Vec<Value>>>()?;

    serde_json::to_string_pretty(&entries)
}

pub fn reverse_json(
    target: &str,
    result: &Result<LookupAnswer, DomainError>,
) -> serde_json::Result<String> {
    match result {
        Ok(answer) => serde_json::to_string_pretty(answer),
        Err(e) => serde_json::to_string_pretty(&json!({
            "target": target,
            "record_type": "PTR",
            "error": e.to_string(),
        })),
    }
}

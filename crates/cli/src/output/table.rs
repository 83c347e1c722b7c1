use colored::Colorize;
use dnspect_domain::{DomainError, LookupAnswer, RecordType};
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct ResultRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Result")]
    value: String,
}

/// Numbered table of one record type's results, or a notice when the type
/// has none.
pub fn render_lookup(answer: &LookupAnswer) -> String {
    if answer.is_empty() {
        return format!(
            "{}\n\n",
            format!("No {} records found", answer.record_type).yellow()
        );
    }

    let rows = answer
        .records
        .iter()
        .enumerate()
        .map(|(idx, value)| ResultRow {
            index: idx + 1,
            value: value.clone(),
        });

    format!(
        "{}\n{}\n{}\n\n",
        format!("DNS Lookup: {} ({})", answer.target, answer.record_type).bold(),
        Table::new(rows),
        format!("Response time: {:.2} ms", answer.response_time_ms).dimmed()
    )
}

pub fn render_lookup_failure(record_type: RecordType, error: &DomainError) -> String {
    format!("Could not fetch {} records: {}", record_type, error)
        .yellow()
        .to_string()
}

pub fn render_reverse_failure(error: &DomainError) -> String {
    format!("Could not perform reverse lookup: {}", error)
        .yellow()
        .to_string()
}

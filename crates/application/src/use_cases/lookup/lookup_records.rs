use crate::ports::RecordLookup;
use dnspect_domain::{DnsQuery, DomainError, LookupAnswer, RecordType};
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct RecordLookupOutcome {
    pub record_type: RecordType,
    pub result: Result<LookupAnswer, DomainError>,
}

pub struct LookupRecordsUseCase {
    lookup: Arc<dyn RecordLookup>,
}

impl LookupRecordsUseCase {
    pub fn new(lookup: Arc<dyn RecordLookup>) -> Self {
        Self { lookup }
    }

    /// One outcome per requested type, in request order. A failed type does
    /// not stop the remaining ones.
    pub async fn execute(
        &self,
        domain: &str,
        record_types: &[RecordType],
    ) -> Vec<RecordLookupOutcome> {
        let mut outcomes = Vec::with_capacity(record_types.len());

        for &record_type in record_types {
            let query = DnsQuery::new(domain, record_type);
            let start = Instant::now();

            let result = match self.lookup.lookup(&query).await {
                Ok(records) => {
                    let response_time_ms = start.elapsed().as_secs_f64() * 1000.0;
                    debug!(
                        domain = %domain,
                        record_type = %record_type,
                        records = records.len(),
                        response_time_ms,
                        "Lookup completed"
                    );
                    Ok(LookupAnswer {
                        target: domain.to_string(),
                        record_type,
                        records,
                        response_time_ms,
                    })
                }
                Err(e) => {
                    debug!(
                        domain = %domain,
                        record_type = %record_type,
                        error = %e,
                        "Lookup failed"
                    );
                    Err(e)
                }
            };

            outcomes.push(RecordLookupOutcome {
                record_type,
                result,
            });
        }

        outcomes
    }
}

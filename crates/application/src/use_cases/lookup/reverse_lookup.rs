use crate::ports::RecordLookup;
use dnspect_domain::{DomainError, LookupAnswer, RecordType};
use std::net::IpAddr;
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

pub struct ReverseLookupUseCase {
    lookup: Arc<dyn RecordLookup>,
}

impl ReverseLookupUseCase {
    pub fn new(lookup: Arc<dyn RecordLookup>) -> Self {
        Self { lookup }
    }

    pub async fn execute(&self, ip: IpAddr) -> Result<LookupAnswer, DomainError> {
        let start = Instant::now();
        let records = self.lookup.reverse(ip).await?;
        let response_time_ms = start.elapsed().as_secs_f64() * 1000.0;

        debug!(ip = %ip, records = records.len(), response_time_ms, "Reverse lookup completed");

        Ok(LookupAnswer {
            target: ip.to_string(),
            record_type: RecordType::PTR,
            records,
            response_time_ms,
        })
    }
}

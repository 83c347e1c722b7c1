use async_trait::async_trait;
use dnspect_domain::{DnsQuery, DomainError};
use std::net::IpAddr;

#[async_trait]
pub trait RecordLookup: Send + Sync {
    /// Recursive lookup returning each record's RDATA as text.
    ///
    /// A well-formed reply without records of the type is `Ok(vec![])`.
    async fn lookup(&self, query: &DnsQuery) -> Result<Vec<String>, DomainError>;

    /// PTR records for the reverse-mapped name of `ip`.
    async fn reverse(&self, ip: IpAddr) -> Result<Vec<String>, DomainError>;
}

use async_trait::async_trait;
use dnspect_domain::{DnsQuery, DomainError, ServerResponse};
use std::net::IpAddr;
use std::time::Duration;

/// Protocol side of an iterative trace.
#[async_trait]
pub trait ResolverClient: Send + Sync {
    /// Send one non-recursive query to `server` and return its parsed reply.
    ///
    /// Timeouts, transport errors and malformed replies are all `Err`.
    async fn query_server(
        &self,
        query: &DnsQuery,
        server: IpAddr,
        timeout: Duration,
    ) -> Result<ServerResponse, DomainError>;

    /// Resolve a nameserver hostname through the ordinary recursive resolver.
    async fn resolve_address(&self, hostname: &str) -> Result<Vec<IpAddr>, DomainError>;
}

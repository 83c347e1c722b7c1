use super::builder::build_resolver;
use crate::dns::forwarding::{DnsForwarder, RecordTypeMapper};
use async_trait::async_trait;
use dnspect_application::ports::{RecordLookup, ResolverClient};
use dnspect_domain::{
    reverse_name, DnsConfig, DnsQuery, DomainError, RecordType, ServerResponse,
};
use hickory_resolver::ResolveError;
use hickory_resolver::TokioResolver;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use tracing::debug;

/// `ResolverClient` and `RecordLookup` backed by hickory.
///
/// Iterative queries go straight to the named server over UDP; everything
/// recursive goes through a `TokioResolver`.
pub struct HickoryResolverClient {
    resolver: TokioResolver,
    forwarder: DnsForwarder,
    port: u16,
}

impl HickoryResolverClient {
    pub fn new(resolver: TokioResolver) -> Self {
        Self {
            resolver,
            forwarder: DnsForwarder::new(),
            port: 53,
        }
    }

    pub fn from_config(config: &DnsConfig) -> Result<Self, DomainError> {
        Ok(Self::new(build_resolver(config)?).with_port(config.port))
    }

    /// Destination port for iterative queries.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    async fn lookup_rdata(
        &self,
        name: &str,
        record_type: RecordType,
    ) -> Result<Vec<String>, ResolveError> {
        let hickory_type = RecordTypeMapper::to_hickory(&record_type);
        let lookup = self.resolver.lookup(name, hickory_type).await?;

        // The answer may include the CNAME chain leading to the records
        Ok(lookup
            .record_iter()
            .filter(|record| record.record_type() == hickory_type)
            .map(|record| record.data().to_string())
            .collect())
    }
}

/// NODATA and NXDOMAIN both surface from hickory as "no records found".
fn is_no_records(error: &ResolveError) -> bool {
    let error_msg = error.to_string().to_lowercase();
    error_msg.contains("no record") || error_msg.contains("nxdomain")
}

fn map_resolve_error(error: ResolveError) -> DomainError {
    let error_msg = error.to_string();
    let lowered = error_msg.to_lowercase();

    if lowered.contains("timed out") || lowered.contains("timeout") {
        DomainError::QueryTimeout
    } else {
        DomainError::ResolutionFailed(error_msg)
    }
}

#[async_trait]
impl ResolverClient for HickoryResolverClient {
    async fn query_server(
        &self,
        query: &DnsQuery,
        server: IpAddr,
        timeout: Duration,
    ) -> Result<ServerResponse, DomainError> {
        self.forwarder
            .query(SocketAddr::new(server, self.port), query, timeout)
            .await
    }

    async fn resolve_address(&self, hostname: &str) -> Result<Vec<IpAddr>, DomainError> {
        let lookup = self.resolver.lookup_ip(hostname).await.map_err(|e| {
            debug!(hostname = %hostname, error = %e, "Nameserver resolution failed");
            if is_no_records(&e) {
                DomainError::ResolutionFailed(format!("No addresses found for {}", hostname))
            } else {
                map_resolve_error(e)
            }
        })?;

        let addresses: Vec<IpAddr> = lookup.iter().collect();
        debug!(hostname = %hostname, addresses = ?addresses, "Nameserver resolved");

        Ok(addresses)
    }
}

#[async_trait]
impl RecordLookup for HickoryResolverClient {
    async fn lookup(&self, query: &DnsQuery) -> Result<Vec<String>, DomainError> {
        match self.lookup_rdata(&query.domain, query.record_type).await {
            Ok(records) => Ok(records),
            Err(e) if is_no_records(&e) => {
                debug!(query = %query, "No records found (NODATA response)");
                Ok(vec![])
            }
            Err(e) => Err(map_resolve_error(e)),
        }
    }

    async fn reverse(&self, ip: IpAddr) -> Result<Vec<String>, DomainError> {
        let name = reverse_name(&ip);
        debug!(ip = %ip, reverse_domain = %name, "Performing PTR lookup");

        match self.lookup_rdata(&name, RecordType::PTR).await {
            Ok(records) if records.is_empty() => Err(DomainError::NxDomain),
            Ok(records) => Ok(records),
            Err(e) if is_no_records(&e) => Err(DomainError::NxDomain),
            Err(e) => Err(map_resolve_error(e)),
        }
    }
}

use async_trait::async_trait;
use dnspect_application::ports::{RecordLookup, ResolverClient};
use dnspect_domain::{DnsQuery, DomainError, RecordType, ResourceRecord, ServerResponse};
use std::net::IpAddr;
use std::process::ExitCode;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Resolver stand-in that counts every call it receives.
///
/// Trace queries get `server_reply` or time out; nameserver resolution
/// returns `nameserver_addresses`. Record lookups fail for `failing_type`
/// and every reverse lookup fails with NXDOMAIN.
#[derive(Clone, Default)]
pub struct ScriptedResolver {
    pub server_reply: Option<ServerResponse>,
    pub nameserver_addresses: Vec<IpAddr>,
    pub failing_type: Option<RecordType>,
    pub(crate) calls: Arc<AtomicUsize>,
}

impl ScriptedResolver {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record_call(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl ResolverClient for ScriptedResolver {
    async fn query_server(
        &self,
        _query: &DnsQuery,
        server: IpAddr,
        _timeout: Duration,
    ) -> Result<ServerResponse, DomainError> {
        self.record_call();
        self.server_reply
            .clone()
            .ok_or_else(|| DomainError::TransportTimeout {
                server: server.to_string(),
            })
    }

    async fn resolve_address(&self, hostname: &str) -> Result<Vec<IpAddr>, DomainError> {
        self.record_call();
        if self.nameserver_addresses.is_empty() {
            return Err(DomainError::ResolutionFailed(hostname.to_string()));
        }
        Ok(self.nameserver_addresses.clone())
    }
}

#[async_trait]
impl RecordLookup for ScriptedResolver {
    async fn lookup(&self, query: &DnsQuery) -> Result<Vec<String>, DomainError> {
        self.record_call();
        if self.failing_type == Some(query.record_type) {
            return Err(DomainError::QueryTimeout);
        }
        Ok(vec!["192.0.2.1".to_string()])
    }

    async fn reverse(&self, _ip: IpAddr) -> Result<Vec<String>, DomainError> {
        self.record_call();
        Err(DomainError::NxDomain)
    }
}

pub fn referral(zone: &str, nameserver: &str) -> ServerResponse {
    ServerResponse {
        authority: vec![ResourceRecord::new(zone, RecordType::NS, 172_800, nameserver)],
        response_code: "NOERROR",
        ..Default::default()
    }
}

/// `ExitCode` has no equality; its debug form tells the codes apart.
pub fn assert_exit(actual: ExitCode, expected: ExitCode) {
    assert_eq!(format!("{:?}", actual), format!("{:?}", expected));
}

#![allow(dead_code)]

use async_trait::async_trait;
use dnspect_application::ports::{RecordLookup, ResolverClient};
use dnspect_domain::{DnsQuery, DomainError, RecordType, ResourceRecord, ServerResponse};
use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::{Arc, Mutex, RwLock};
use std::time::Duration;

/// Scripted `ResolverClient`: replies per server address, falling back to a
/// default reply (or a timeout) for servers without a script.
#[derive(Clone)]
pub struct MockResolverClient {
    server_responses: Arc<RwLock<HashMap<IpAddr, Result<ServerResponse, DomainError>>>>,
    default_response: Arc<RwLock<Option<ServerResponse>>>,
    addresses: Arc<RwLock<HashMap<String, Vec<IpAddr>>>>,
    queried: Arc<Mutex<Vec<IpAddr>>>,
    resolved: Arc<Mutex<Vec<String>>>,
}

impl MockResolverClient {
    pub fn new() -> Self {
        Self {
            server_responses: Arc::new(RwLock::new(HashMap::new())),
            default_response: Arc::new(RwLock::new(None)),
            addresses: Arc::new(RwLock::new(HashMap::new())),
            queried: Arc::new(Mutex::new(Vec::new())),
            resolved: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn set_server_response(&self, server: &str, response: ServerResponse) {
        self.server_responses
            .write()
            .unwrap()
            .insert(ip(server), Ok(response));
    }

    pub fn set_server_error(&self, server: &str, error: DomainError) {
        self.server_responses
            .write()
            .unwrap()
            .insert(ip(server), Err(error));
    }

    /// Reply used for every server without its own script.
    pub fn set_default_response(&self, response: ServerResponse) {
        *self.default_response.write().unwrap() = Some(response);
    }

    pub fn set_addresses(&self, hostname: &str, addresses: &[&str]) {
        self.addresses.write().unwrap().insert(
            hostname.to_string(),
            addresses.iter().map(|a| ip(a)).collect(),
        );
    }

    pub fn queried_servers(&self) -> Vec<IpAddr> {
        self.queried.lock().unwrap().clone()
    }

    pub fn resolved_names(&self) -> Vec<String> {
        self.resolved.lock().unwrap().clone()
    }
}

impl Default for MockResolverClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ResolverClient for MockResolverClient {
    async fn query_server(
        &self,
        _query: &DnsQuery,
        server: IpAddr,
        _timeout: Duration,
    ) -> Result<ServerResponse, DomainError> {
        self.queried.lock().unwrap().push(server);

        if let Some(scripted) = self.server_responses.read().unwrap().get(&server) {
            return scripted.clone();
        }

        match self.default_response.read().unwrap().as_ref() {
            Some(response) => Ok(response.clone()),
            None => Err(DomainError::TransportTimeout {
                server: server.to_string(),
            }),
        }
    }

    async fn resolve_address(&self, hostname: &str) -> Result<Vec<IpAddr>, DomainError> {
        self.resolved.lock().unwrap().push(hostname.to_string());

        self.addresses
            .read()
            .unwrap()
            .get(hostname)
            .cloned()
            .ok_or_else(|| DomainError::ResolutionFailed(hostname.to_string()))
    }
}

/// Scripted `RecordLookup` keyed by (domain, type) and by IP for PTR.
#[derive(Clone)]
pub struct MockRecordLookup {
    records: Arc<RwLock<HashMap<(String, RecordType), Result<Vec<String>, DomainError>>>>,
    ptr_records: Arc<RwLock<HashMap<IpAddr, Result<Vec<String>, DomainError>>>>,
}

impl MockRecordLookup {
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(HashMap::new())),
            ptr_records: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub fn set_records(&self, domain: &str, record_type: RecordType, records: &[&str]) {
        self.records.write().unwrap().insert(
            (domain.to_string(), record_type),
            Ok(records.iter().map(|r| r.to_string()).collect()),
        );
    }

    pub fn set_error(&self, domain: &str, record_type: RecordType, error: DomainError) {
        self.records
            .write()
            .unwrap()
            .insert((domain.to_string(), record_type), Err(error));
    }

    pub fn set_ptr(&self, address: &str, names: &[&str]) {
        self.ptr_records.write().unwrap().insert(
            ip(address),
            Ok(names.iter().map(|n| n.to_string()).collect()),
        );
    }

    pub fn set_ptr_error(&self, address: &str, error: DomainError) {
        self.ptr_records
            .write()
            .unwrap()
            .insert(ip(address), Err(error));
    }
}

impl Default for MockRecordLookup {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecordLookup for MockRecordLookup {
    async fn lookup(&self, query: &DnsQuery) -> Result<Vec<String>, DomainError> {
        self.records
            .read()
            .unwrap()
            .get(&(query.domain.to_string(), query.record_type))
            .cloned()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn reverse(&self, address: IpAddr) -> Result<Vec<String>, DomainError> {
        self.ptr_records
            .read()
            .unwrap()
            .get(&address)
            .cloned()
            .unwrap_or(Err(DomainError::NxDomain))
    }
}

pub fn referral(zone: &str, nameservers: &[&str]) -> ServerResponse {
    ServerResponse {
        authority: nameservers
            .iter()
            .map(|ns| ResourceRecord::new(zone, RecordType::NS, 172_800, *ns))
            .collect(),
        response_code: "NOERROR",
        ..Default::default()
    }
}

pub fn answer(name: &str, record_type: RecordType, data: &[&str]) -> ServerResponse {
    ServerResponse {
        answers: data
            .iter()
            .map(|d| ResourceRecord::new(name, record_type, 300, *d))
            .collect(),
        response_code: "NOERROR",
        authoritative: true,
        ..Default::default()
    }
}

pub fn ip(s: &str) -> IpAddr {
    s.parse().unwrap()
}

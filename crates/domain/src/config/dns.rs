use std::net::IpAddr;
use std::time::Duration;

/// Per-query timeout used by the trace and by recursive lookups.
pub const DEFAULT_QUERY_TIMEOUT_SECS: u64 = 3;

/// Referral depth after which a trace gives up.
pub const DEFAULT_MAX_DEPTH: usize = 10;

pub const MAX_ALLOWED_DEPTH: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsConfig {
    pub query_timeout_secs: u64,

    pub max_depth: usize,

    /// Destination port for queries to root and referred servers.
    pub port: u16,

    /// Recursive resolvers used for `lookup`, `reverse` and nameserver address
    /// resolution. Empty means the system configuration.
    pub nameservers: Vec<IpAddr>,
}

impl DnsConfig {
    pub fn query_timeout(&self) -> Duration {
        Duration::from_secs(self.query_timeout_secs)
    }
}

impl Default for DnsConfig {
    fn default() -> Self {
        Self {
            query_timeout_secs: DEFAULT_QUERY_TIMEOUT_SECS,
            max_depth: DEFAULT_MAX_DEPTH,
            port: 53,
            nameservers: Vec::new(),
        }
    }
}

use dnspect_domain::{DnsConfig, DomainError};
use hickory_resolver::config::{
    LookupIpStrategy, NameServerConfigGroup, ResolverConfig, ResolverOpts,
};
use hickory_resolver::name_server::TokioConnectionProvider;
use hickory_resolver::TokioResolver;
use tracing::info;

/// Build the recursive resolver used by lookups and nameserver resolution.
///
/// Explicit nameservers replace the system configuration entirely.
pub fn build_resolver(config: &DnsConfig) -> Result<TokioResolver, DomainError> {
    let builder = if config.nameservers.is_empty() {
        info!("Using system resolver configuration");
        TokioResolver::builder_tokio().map_err(|e| {
            DomainError::ConfigError(format!("Failed to read system resolver config: {}", e))
        })?
    } else {
        info!(nameservers = ?config.nameservers, "Using configured nameservers");
        let group = NameServerConfigGroup::from_ips_clear(&config.nameservers, 53, true);
        TokioResolver::builder_with_config(
            ResolverConfig::from_parts(None, vec![], group),
            TokioConnectionProvider::default(),
        )
    };

    Ok(builder.with_options(resolver_options(config)).build())
}

fn resolver_options(config: &DnsConfig) -> ResolverOpts {
    let mut opts = ResolverOpts::default();
    opts.timeout = config.query_timeout();
    opts.attempts = 1;
    // The trace sends from IPv4 sockets
    opts.ip_strategy = LookupIpStrategy::Ipv4Only;
    opts
}

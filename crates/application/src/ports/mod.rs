mod record_lookup;
mod resolver_client;

pub use record_lookup::RecordLookup;
pub use resolver_client::ResolverClient;

// Re-export for convenience
pub use dnspect_domain::{DnsQuery, ServerResponse};

//! dnspect domain layer
pub mod config;
pub mod dns_query;
pub mod dns_record;
pub mod dns_response;
pub mod errors;
pub mod lookup;
pub mod root_servers;
pub mod trace;
pub mod validation;

pub use config::{CliOverrides, Config, ConfigError, DnsConfig, LoggingConfig};
pub use dns_query::DnsQuery;
pub use dns_record::{parse_record_types, RecordType, ResourceRecord};
pub use dns_response::ServerResponse;
pub use errors::DomainError;
pub use lookup::LookupAnswer;
pub use root_servers::{root_server_set, ROOT_SERVERS};
pub use trace::{AttemptOutcome, ServerAttempt, TraceOutcome, TraceResult, TraceStep};
pub use validation::{canonicalize_domain, reverse_name, validate_domain, validate_ip};

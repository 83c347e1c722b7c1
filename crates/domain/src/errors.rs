use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid IP address: {0}")]
    InvalidIpAddress(String),

    #[error("Unsupported record type: {0}")]
    InvalidRecordType(String),

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Domain not found (NXDOMAIN)")]
    NxDomain,

    #[error("Query timeout")]
    QueryTimeout,

    #[error("Transport timeout waiting for {server}")]
    TransportTimeout { server: String },

    #[error("Transport connection refused by {server}")]
    TransportConnectionRefused { server: String },

    #[error("Resolution failed: {0}")]
    ResolutionFailed(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl DomainError {
    /// Errors caused by user input rather than by the network.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            DomainError::InvalidDomainName(_)
                | DomainError::InvalidIpAddress(_)
                | DomainError::InvalidRecordType(_)
        )
    }
}

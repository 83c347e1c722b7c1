use super::message_builder::MessageBuilder;
use super::response_parser::ResponseParser;
use crate::dns::transport::udp::UdpTransport;
use crate::dns::transport::DnsTransport;
use dnspect_domain::{DnsQuery, DomainError, ServerResponse};
use std::net::SocketAddr;
use std::time::Duration;
use tracing::debug;

/// Sends single non-recursive queries to specific servers
#[derive(Debug, Default, Clone, Copy)]
pub struct DnsForwarder;

impl DnsForwarder {
    pub fn new() -> Self {
        Self
    }

    /// Query one server directly, with RD cleared
    pub async fn query(
        &self,
        server: SocketAddr,
        query: &DnsQuery,
        timeout: Duration,
    ) -> Result<ServerResponse, DomainError> {
        let (id, request_bytes) = MessageBuilder::build_query(query, false)?;

        debug!(server = %server, query = %query, id = id, "Sending iterative query");

        let transport = UdpTransport::new(server);
        let reply = transport.send(&request_bytes, timeout).await?;
        debug!(
            server = %server,
            protocol = transport.protocol_name(),
            bytes = reply.bytes.len(),
            "Reply received"
        );

        let parsed = ResponseParser::parse(&reply.bytes)?;
        if parsed.id != id {
            return Err(DomainError::InvalidDnsResponse(format!(
                "ID mismatch from {}: expected {}, got {}",
                server, id, parsed.id
            )));
        }

        Ok(parsed.response)
    }
}

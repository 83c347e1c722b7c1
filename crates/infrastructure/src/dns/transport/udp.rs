//! UDP Transport for DNS queries (RFC 1035 §4.2.1)
//!
//! Messages are sent as-is (no framing). Truncated replies are returned
//! unchanged; the TC bit is reported to the caller but not retried over TCP.

use super::{DnsTransport, TransportResponse};
use async_trait::async_trait;
use dnspect_domain::DomainError;
use std::io::ErrorKind;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::{debug, warn};

/// Maximum UDP DNS response size with EDNS(0)
const MAX_UDP_RESPONSE_SIZE: usize = 4096;

/// DNS over UDP transport
pub struct UdpTransport {
    server_addr: SocketAddr,
}

impl UdpTransport {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self { server_addr }
    }

    pub fn server_addr(&self) -> SocketAddr {
        self.server_addr
    }

    fn map_io_error(&self, action: &str, e: std::io::Error) -> DomainError {
        match e.kind() {
            ErrorKind::ConnectionRefused => DomainError::TransportConnectionRefused {
                server: self.server_addr.to_string(),
            },
            ErrorKind::TimedOut => DomainError::TransportTimeout {
                server: self.server_addr.to_string(),
            },
            _ => DomainError::IoError(format!(
                "Failed to {} {}: {}",
                action, self.server_addr, e
            )),
        }
    }

    async fn exchange(&self, message_bytes: &[u8]) -> Result<Vec<u8>, DomainError> {
        // Bind to ephemeral port (0 = OS assigns)
        let bind_addr = if self.server_addr.is_ipv4() {
            SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0))
        } else {
            SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0))
        };

        let socket = UdpSocket::bind(bind_addr)
            .await
            .map_err(|e| self.map_io_error("bind UDP socket for", e))?;

        // Connected socket: ICMP port-unreachable surfaces as ConnectionRefused
        socket
            .connect(self.server_addr)
            .await
            .map_err(|e| self.map_io_error("connect to", e))?;

        let bytes_sent = socket
            .send(message_bytes)
            .await
            .map_err(|e| self.map_io_error("send UDP query to", e))?;

        debug!(
            server = %self.server_addr,
            bytes_sent = bytes_sent,
            "UDP query sent"
        );

        let mut recv_buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];

        loop {
            let bytes_received = socket
                .recv(&mut recv_buf)
                .await
                .map_err(|e| self.map_io_error("receive UDP response from", e))?;

            match validate_response_id(message_bytes, &recv_buf[..bytes_received], self.server_addr)
            {
                Ok(()) => {
                    recv_buf.truncate(bytes_received);
                    debug!(
                        server = %self.server_addr,
                        bytes_received = bytes_received,
                        "UDP response received"
                    );
                    return Ok(recv_buf);
                }
                Err(e) => {
                    // Stray datagram: keep waiting for the real reply until the deadline
                    warn!(server = %self.server_addr, error = %e, "Discarding UDP response");
                }
            }
        }
    }
}

#[async_trait]
impl DnsTransport for UdpTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        // One deadline covers the whole exchange
        let bytes = tokio::time::timeout(timeout, self.exchange(message_bytes))
            .await
            .map_err(|_| DomainError::TransportTimeout {
                server: self.server_addr.to_string(),
            })??;

        Ok(TransportResponse { bytes })
    }

    fn protocol_name(&self) -> &'static str {
        "UDP"
    }
}

/// Check that a reply carries the ID of the query it answers.
pub(crate) fn validate_response_id(
    query: &[u8],
    response: &[u8],
    server: SocketAddr,
) -> Result<(), DomainError> {
    if query.len() < 2 || response.len() < 2 {
        return Err(DomainError::InvalidDnsResponse(format!(
            "Message from {} too short to carry an ID",
            server
        )));
    }

    let query_id = u16::from_be_bytes([query[0], query[1]]);
    let response_id = u16::from_be_bytes([response[0], response[1]]);

    if query_id != response_id {
        return Err(DomainError::InvalidDnsResponse(format!(
            "ID mismatch from {}: expected {:#06x}, got {:#06x}",
            server, query_id, response_id
        )));
    }

    Ok(())
}

#[cfg(test)]
#[path = "udp_test.rs"]
mod tests;

pub mod tcp;
pub mod udp;

use async_trait::async_trait;
use std::net::SocketAddr;
use std::time::Duration;
use zonecheck_domain::DomainError;

/// Result of a raw DNS transport operation
#[derive(Debug)]
pub struct TransportResponse {
    /// Raw DNS response bytes (wire format)
    pub bytes: Vec<u8>,
}

/// Trait for sending raw DNS messages over the wire
#[async_trait]
pub trait DnsTransport: Send + Sync {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError>;
}

/// Enum-dispatched transport.
pub enum Transport {
    Udp(udp::UdpTransport),
    Tcp(tcp::TcpTransport),
}

impl Transport {
    pub fn udp(server_addr: SocketAddr) -> Self {
        Self::Udp(udp::UdpTransport::new(server_addr))
    }

    pub fn tcp(server_addr: SocketAddr) -> Self {
        Self::Tcp(tcp::TcpTransport::new(server_addr))
    }

    /// Send a DNS query via the appropriate protocol (static dispatch).
    pub async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        match self {
            Self::Udp(t) => DnsTransport::send(t, message_bytes, timeout).await,
            Self::Tcp(t) => DnsTransport::send(t, message_bytes, timeout).await,
        }
    }

    /// Protocol name for logging.
    pub fn protocol_name(&self) -> &'static str {
        match self {
            Self::Udp(_) => "UDP",
            Self::Tcp(_) => "TCP",
        }
    }
}

fn timeout_error(server_addr: SocketAddr, timeout: Duration) -> DomainError {
    DomainError::QueryTimeout {
        server: server_addr.to_string(),
        timeout_ms: timeout.as_millis() as u64,
    }
}

use super::{timeout_error, DnsTransport, TransportResponse};
use async_trait::async_trait;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::debug;
use zonecheck_domain::DomainError;

/// DNS over TCP transport (RFC 1035 §4.2.2: two-byte length prefix).
///
/// Used when a UDP answer comes back with the TC bit set.
pub struct TcpTransport {
    server_addr: SocketAddr,
}

impl TcpTransport {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self { server_addr }
    }

    async fn exchange(&self, message_bytes: &[u8]) -> Result<Vec<u8>, DomainError> {
        let mut stream = TcpStream::connect(self.server_addr)
            .await
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::ConnectionRefused => DomainError::TransportConnectionRefused {
                    server: self.server_addr.to_string(),
                },
                _ => DomainError::from(e),
            })?;

        let length = u16::try_from(message_bytes.len()).map_err(|_| {
            DomainError::InvalidDnsResponse(format!(
                "Query of {} bytes does not fit a TCP frame",
                message_bytes.len()
            ))
        })?;

        let mut frame = Vec::with_capacity(message_bytes.len() + 2);
        frame.extend_from_slice(&length.to_be_bytes());
        frame.extend_from_slice(message_bytes);
        stream.write_all(&frame).await?;

        debug!(
            server = %self.server_addr,
            bytes_sent = message_bytes.len(),
            "TCP query sent"
        );

        let mut length_buf = [0u8; 2];
        stream.read_exact(&mut length_buf).await?;
        let response_length = u16::from_be_bytes(length_buf) as usize;

        let mut response = vec![0u8; response_length];
        stream.read_exact(&mut response).await?;

        debug!(
            server = %self.server_addr,
            bytes_received = response_length,
            "TCP response received"
        );

        Ok(response)
    }
}

#[async_trait]
impl DnsTransport for TcpTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        let bytes = tokio::time::timeout(timeout, self.exchange(message_bytes))
            .await
            .map_err(|_| timeout_error(self.server_addr, timeout))??;

        Ok(TransportResponse { bytes })
    }
}

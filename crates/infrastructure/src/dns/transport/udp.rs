use super::{timeout_error, DnsTransport, TransportResponse};
use async_trait::async_trait;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::{debug, warn};
use zonecheck_domain::DomainError;

/// Receive buffer size. Queries carry no OPT record, so a server caps its
/// UDP reply at 512 bytes and sets TC when the answer is larger.
const MAX_UDP_RESPONSE_SIZE: usize = 4096;

/// DNS over UDP transport, one socket per query.
pub struct UdpTransport {
    server_addr: SocketAddr,
}

impl UdpTransport {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self { server_addr }
    }
}

#[async_trait]
impl DnsTransport for UdpTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        // Bind to ephemeral port (0 = OS assigns)
        let bind_addr: SocketAddr = if self.server_addr.is_ipv4() {
            (Ipv4Addr::UNSPECIFIED, 0).into()
        } else {
            (Ipv6Addr::UNSPECIFIED, 0).into()
        };

        let socket = UdpSocket::bind(bind_addr).await?;

        let bytes_sent =
            tokio::time::timeout(timeout, socket.send_to(message_bytes, self.server_addr))
                .await
                .map_err(|_| timeout_error(self.server_addr, timeout))??;

        debug!(
            server = %self.server_addr,
            bytes_sent = bytes_sent,
            "UDP query sent"
        );

        let mut recv_buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];

        let (bytes_received, from_addr) =
            tokio::time::timeout(timeout, socket.recv_from(&mut recv_buf))
                .await
                .map_err(|_| timeout_error(self.server_addr, timeout))?
                .map_err(|e| match e.kind() {
                    std::io::ErrorKind::ConnectionRefused => {
                        DomainError::TransportConnectionRefused {
                            server: self.server_addr.to_string(),
                        }
                    }
                    _ => DomainError::from(e),
                })?;

        // Validate response came from expected server
        if from_addr.ip() != self.server_addr.ip() {
            warn!(
                expected = %self.server_addr,
                received_from = %from_addr,
                "UDP response from unexpected source"
            );
        }

        recv_buf.truncate(bytes_received);

        debug!(
            server = %self.server_addr,
            bytes_received = bytes_received,
            "UDP response received"
        );

        Ok(TransportResponse { bytes: recv_buf })
    }
}

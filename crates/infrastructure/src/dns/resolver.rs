use super::forwarding::{DnsResponse, MessageBuilder, ResponseParser};
use super::transport::Transport;
use async_trait::async_trait;
use hickory_proto::op::ResponseCode;
use std::net::SocketAddr;
use tracing::{debug, info, warn};
use zonecheck_application::ports::{DnsAnswer, DnsResolver};
use zonecheck_domain::{DnsQuery, DomainError, ResolverConfig};

/// Resolver adapter that asks the configured nameservers directly.
///
/// Each query goes out over UDP; an answer with the TC bit set is fetched
/// again over TCP. Nameservers are tried in order and the first usable
/// answer wins.
pub struct NameserverResolver {
    config: ResolverConfig,
}

impl NameserverResolver {
    pub fn new(config: ResolverConfig) -> Self {
        info!(
            nameservers = ?config.nameservers,
            timeout_ms = config.query_timeout_ms,
            "Nameserver resolver created"
        );
        Self { config }
    }

    async fn query_server(
        &self,
        server: SocketAddr,
        query: &DnsQuery,
    ) -> Result<DnsAnswer, DomainError> {
        let (id, message_bytes) =
            MessageBuilder::build_query_with_id(&query.domain, &query.record_type)?;
        let timeout = self.config.query_timeout();

        let mut response = self
            .exchange(Transport::udp(server), id, &message_bytes, timeout)
            .await?;

        if response.truncated {
            debug!(server = %server, query = %query, "Truncated UDP response, retrying over TCP");
            response = self
                .exchange(Transport::tcp(server), id, &message_bytes, timeout)
                .await?;
        }

        if response.rcode != ResponseCode::NoError {
            return Err(DomainError::ErrorResponse {
                server: server.to_string(),
                domain: query.domain.to_string(),
                rcode: ResponseParser::rcode_to_status(response.rcode),
            });
        }

        let records = response.records_of_type(query.record_type);
        if records.is_empty() {
            return Err(DomainError::NoAnswer {
                domain: query.domain.to_string(),
                record_type: query.record_type.as_str(),
            });
        }

        debug!(
            server = %server,
            query = %query,
            answers = records.len(),
            "Query answered"
        );

        Ok(DnsAnswer::from_server(records, server))
    }

    async fn exchange(
        &self,
        transport: Transport,
        id: u16,
        message_bytes: &[u8],
        timeout: std::time::Duration,
    ) -> Result<DnsResponse, DomainError> {
        let raw = transport.send(message_bytes, timeout).await?;
        let response = ResponseParser::parse(&raw.bytes)?;

        if response.id != id {
            warn!(
                protocol = transport.protocol_name(),
                expected = id,
                received = response.id,
                "Response ID mismatch"
            );
            return Err(DomainError::InvalidDnsResponse(format!(
                "response id {} does not match query id {}",
                response.id, id
            )));
        }

        Ok(response)
    }
}

#[async_trait]
impl DnsResolver for NameserverResolver {
    async fn resolve(&self, query: &DnsQuery) -> Result<DnsAnswer, DomainError> {
        let mut last_error = None;

        for server in &self.config.nameservers {
            match self.query_server(*server, query).await {
                Ok(answer) => return Ok(answer),
                Err(e) => {
                    debug!(server = %server, query = %query, error = %e, "Nameserver query failed");
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or(DomainError::TransportAllServersUnreachable))
    }
}

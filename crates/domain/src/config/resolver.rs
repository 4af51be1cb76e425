use std::net::SocketAddr;
use std::time::Duration;

pub const DEFAULT_DNS_PORT: u16 = 53;

/// Where and how the zone checks send their queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Nameservers tried in order; the first answer wins.
    pub nameservers: Vec<SocketAddr>,

    /// Per-query timeout in milliseconds (default: 5000)
    pub query_timeout_ms: u64,
}

impl ResolverConfig {
    pub fn query_timeout(&self) -> Duration {
        Duration::from_millis(self.query_timeout_ms)
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            nameservers: vec![],
            query_timeout_ms: default_query_timeout(),
        }
    }
}

fn default_query_timeout() -> u64 {
    5000
}

use async_trait::async_trait;
use std::net::SocketAddr;
use zonecheck_domain::{DnsQuery, DomainError};

/// Answer records of the queried type, in the order the server sent them.
///
/// Each record is already rendered as text:
/// - A: the address (`10.0.0.1`)
/// - CNAME / PTR: the fully qualified name in ASCII form (`host.example.com.`)
/// - MX: `<preference> <exchange>` (`10 mail.example.com.`)
/// - SOA: `<mname> <rname> <serial> <refresh> <retry> <expire> <minimum>`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DnsAnswer {
    pub records: Vec<String>,
    pub nameserver: Option<SocketAddr>,
}

impl DnsAnswer {
    pub fn new(records: Vec<String>) -> Self {
        Self {
            records,
            nameserver: None,
        }
    }

    pub fn from_server(records: Vec<String>, nameserver: SocketAddr) -> Self {
        Self {
            records,
            nameserver: Some(nameserver),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
pub trait DnsResolver: Send + Sync {
    /// Sends one query. An `Ok` answer is never empty.
    async fn resolve(&self, query: &DnsQuery) -> Result<DnsAnswer, DomainError>;
}

#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use zonecheck_application::ports::{DnsAnswer, DnsResolver};
use zonecheck_domain::{DnsQuery, DomainError, RecordType};

// ============================================================================
// Mock DnsResolver
// ============================================================================

/// Ways a scripted query can fail.
#[derive(Debug, Clone, Copy)]
pub enum MockFailure {
    Timeout,
    NxDomain,
    ServFail,
    Unreachable,
}

impl MockFailure {
    fn to_error(self, query: &DnsQuery) -> DomainError {
        match self {
            MockFailure::Timeout => DomainError::QueryTimeout {
                server: "192.0.2.53:53".to_string(),
                timeout_ms: 5000,
            },
            MockFailure::NxDomain => DomainError::ErrorResponse {
                server: "192.0.2.53:53".to_string(),
                domain: query.domain.to_string(),
                rcode: "NXDOMAIN",
            },
            MockFailure::ServFail => DomainError::ErrorResponse {
                server: "192.0.2.53:53".to_string(),
                domain: query.domain.to_string(),
                rcode: "SERVFAIL",
            },
            MockFailure::Unreachable => DomainError::TransportAllServersUnreachable,
        }
    }
}

type Key = (String, RecordType);

/// Answers queries from a table; anything not in the table is NXDOMAIN.
#[derive(Clone, Default)]
pub struct MockDnsResolver {
    answers: Arc<RwLock<HashMap<Key, Vec<String>>>>,
    failures: Arc<RwLock<HashMap<Key, MockFailure>>>,
    queries: Arc<RwLock<Vec<DnsQuery>>>,
}

impl MockDnsResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scripts the answer set for one (domain, type).
    pub async fn set_answer(&self, domain: &str, record_type: RecordType, records: &[&str]) {
        self.answers.write().await.insert(
            (domain.to_string(), record_type),
            records.iter().map(|r| r.to_string()).collect(),
        );
    }

    /// Scripts a failure for one (domain, type).
    pub async fn set_failure(&self, domain: &str, record_type: RecordType, failure: MockFailure) {
        self.failures
            .write()
            .await
            .insert((domain.to_string(), record_type), failure);
    }

    /// Every query received so far, in order.
    pub async fn queries(&self) -> Vec<DnsQuery> {
        self.queries.read().await.clone()
    }

    pub async fn query_count(&self) -> usize {
        self.queries.read().await.len()
    }
}

#[async_trait]
impl DnsResolver for MockDnsResolver {
    async fn resolve(&self, query: &DnsQuery) -> Result<DnsAnswer, DomainError> {
        self.queries.write().await.push(query.clone());

        let key = (query.domain.to_string(), query.record_type);
        if let Some(failure) = self.failures.read().await.get(&key) {
            return Err(failure.to_error(query));
        }

        match self.answers.read().await.get(&key) {
            Some(records) => Ok(DnsAnswer::new(records.clone())),
            None => Err(MockFailure::NxDomain.to_error(query)),
        }
    }
}

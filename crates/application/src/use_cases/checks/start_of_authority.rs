use super::lookup;
use crate::ports::DnsResolver;
use std::sync::Arc;
use tracing::instrument;
use zonecheck_domain::{CheckFinding, Observed, RecordType};

/// `Zdomain:nameserver:email`: the first SOA answer must start with
/// `"<nameserver> <email>"`.
///
/// Serial and timer fields are never compared.
pub struct CheckStartOfAuthorityUseCase {
    resolver: Arc<dyn DnsResolver>,
}

impl CheckStartOfAuthorityUseCase {
    pub fn new(resolver: Arc<dyn DnsResolver>) -> Self {
        Self { resolver }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, domain: &str, nameserver: &str, email: &str) -> Option<CheckFinding> {
        let first = lookup(self.resolver.as_ref(), domain, RecordType::SOA)
            .await
            .and_then(|answers| answers.into_iter().next());
        let Some(record) = first else {
            return Some(CheckFinding::query_failed(RecordType::SOA, domain));
        };

        let expected = format!("{} {}", nameserver, email);
        if record.starts_with(&expected) {
            return None;
        }

        Some(CheckFinding::mismatch(
            RecordType::SOA,
            domain,
            expected,
            Observed::Record(record),
        ))
    }
}

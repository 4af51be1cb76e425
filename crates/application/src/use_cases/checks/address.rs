use super::lookup;
use crate::ports::DnsResolver;
use std::sync::Arc;
use tracing::instrument;
use zonecheck_domain::{CheckFinding, Observed, RecordType};

/// `+name:ip`: the declared address must be one of the A answers.
pub struct CheckAddressUseCase {
    resolver: Arc<dyn DnsResolver>,
}

impl CheckAddressUseCase {
    pub fn new(resolver: Arc<dyn DnsResolver>) -> Self {
        Self { resolver }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, name: &str, ip: &str) -> Option<CheckFinding> {
        let Some(addresses) = lookup(self.resolver.as_ref(), name, RecordType::A).await else {
            return Some(CheckFinding::query_failed(RecordType::A, name));
        };

        if addresses.iter().any(|address| address == ip) {
            return None;
        }

        Some(CheckFinding::mismatch(
            RecordType::A,
            name,
            ip,
            Observed::Set(addresses),
        ))
    }
}

use super::lookup;
use super::CheckAddressUseCase;
use crate::ports::DnsResolver;
use std::sync::Arc;
use tracing::{debug, instrument};
use zonecheck_domain::{
    reverse_pointer_name, strip_trailing_dots, CheckFinding, Observed, RecordType,
};

/// `=name:ip`: forward A check, then the reverse PTR check.
///
/// Both checks always run; a finding from one never hides the other.
pub struct CheckPointerUseCase {
    resolver: Arc<dyn DnsResolver>,
    address: CheckAddressUseCase,
}

impl CheckPointerUseCase {
    pub fn new(resolver: Arc<dyn DnsResolver>) -> Self {
        Self {
            address: CheckAddressUseCase::new(Arc::clone(&resolver)),
            resolver,
        }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, name: &str, ip: &str) -> Vec<CheckFinding> {
        let mut findings = Vec::with_capacity(2);
        findings.extend(self.address.execute(name, ip).await);
        findings.extend(self.check_reverse(name, ip).await);
        findings
    }

    async fn check_reverse(&self, name: &str, ip: &str) -> Option<CheckFinding> {
        let reverse_name = match reverse_pointer_name(ip) {
            Ok(reverse_name) => reverse_name,
            Err(e) => {
                debug!(ip = %ip, error = %e, "No reverse name for declared address");
                return Some(CheckFinding::query_failed(RecordType::PTR, name));
            }
        };

        let Some(answers) = lookup(self.resolver.as_ref(), &reverse_name, RecordType::PTR).await
        else {
            return Some(CheckFinding::query_failed(RecordType::PTR, name));
        };

        let expected = strip_trailing_dots(name);
        let hostnames: Vec<String> = answers
            .iter()
            .map(|hostname| strip_trailing_dots(hostname).to_string())
            .collect();

        if hostnames.iter().any(|hostname| hostname == expected) {
            return None;
        }

        Some(CheckFinding::mismatch(
            RecordType::PTR,
            ip,
            name,
            Observed::Set(hostnames),
        ))
    }
}
